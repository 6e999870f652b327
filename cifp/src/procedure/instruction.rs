// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{AltitudeRestriction, Endpoint, SpeedRestriction};
use crate::error::{DomainError, Error, Result};
use crate::geom::{Course, MagneticVariation};
use crate::guidance::{self, LegGuidance, Racetrack, Radial};
use crate::nd::{Anchor, FixIndex};

/// How a leg is flown.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Path {
    Initial,
    Track,
    Course,
    Heading,
    Direct,
    Arc,
    ConstantRadius,
    FromFix,
    Hold,
    ProcedureTurn,
}

/// How a leg ends.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Termination {
    Fix,
    Altitude,
    Distance,
    DmeDistance,
    Intercept,
    Radial,
    Manual,
}

/// The path and termination of a leg.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PathTerminator {
    InitialFix,
    TrackToFix,
    CourseToFix,
    DirectToFix,
    FixToAltitude,
    FixToDistance,
    FixToDmeDistance,
    FixToManual,
    CourseToAltitude,
    CourseToDmeDistance,
    CourseToIntercept,
    CourseToRadial,
    ConstantRadiusArc,
    ArcToFix,
    HeadingToAltitude,
    HeadingToDmeDistance,
    HeadingToIntercept,
    HeadingToManual,
    HeadingToRadial,
    ProcedureTurn,
    HoldToAltitude,
    HoldToFix,
    HoldToManual,
}

impl PathTerminator {
    pub fn path(&self) -> Path {
        match self {
            Self::InitialFix => Path::Initial,
            Self::TrackToFix => Path::Track,
            Self::CourseToFix
            | Self::CourseToAltitude
            | Self::CourseToDmeDistance
            | Self::CourseToIntercept
            | Self::CourseToRadial => Path::Course,
            Self::DirectToFix => Path::Direct,
            Self::FixToAltitude
            | Self::FixToDistance
            | Self::FixToDmeDistance
            | Self::FixToManual => Path::FromFix,
            Self::ConstantRadiusArc => Path::ConstantRadius,
            Self::ArcToFix => Path::Arc,
            Self::HeadingToAltitude
            | Self::HeadingToDmeDistance
            | Self::HeadingToIntercept
            | Self::HeadingToManual
            | Self::HeadingToRadial => Path::Heading,
            Self::ProcedureTurn => Path::ProcedureTurn,
            Self::HoldToAltitude | Self::HoldToFix | Self::HoldToManual => Path::Hold,
        }
    }

    pub fn termination(&self) -> Termination {
        match self {
            Self::InitialFix
            | Self::TrackToFix
            | Self::CourseToFix
            | Self::DirectToFix
            | Self::ConstantRadiusArc
            | Self::ArcToFix
            | Self::HoldToFix => Termination::Fix,
            Self::FixToAltitude
            | Self::CourseToAltitude
            | Self::HeadingToAltitude
            | Self::HoldToAltitude => Termination::Altitude,
            Self::FixToDistance => Termination::Distance,
            Self::FixToDmeDistance | Self::CourseToDmeDistance | Self::HeadingToDmeDistance => {
                Termination::DmeDistance
            }
            Self::CourseToIntercept | Self::HeadingToIntercept | Self::ProcedureTurn => {
                Termination::Intercept
            }
            Self::CourseToRadial | Self::HeadingToRadial => Termination::Radial,
            Self::FixToManual | Self::HeadingToManual | Self::HoldToManual => Termination::Manual,
        }
    }

    /// Returns the two letter code, e.g. `TF`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InitialFix => "IF",
            Self::TrackToFix => "TF",
            Self::CourseToFix => "CF",
            Self::DirectToFix => "DF",
            Self::FixToAltitude => "FA",
            Self::FixToDistance => "FC",
            Self::FixToDmeDistance => "FD",
            Self::FixToManual => "FM",
            Self::CourseToAltitude => "CA",
            Self::CourseToDmeDistance => "CD",
            Self::CourseToIntercept => "CI",
            Self::CourseToRadial => "CR",
            Self::ConstantRadiusArc => "RF",
            Self::ArcToFix => "AF",
            Self::HeadingToAltitude => "VA",
            Self::HeadingToDmeDistance => "VD",
            Self::HeadingToIntercept => "VI",
            Self::HeadingToManual => "VM",
            Self::HeadingToRadial => "VR",
            Self::ProcedureTurn => "PI",
            Self::HoldToAltitude => "HA",
            Self::HoldToFix => "HF",
            Self::HoldToManual => "HM",
        }
    }
}

impl fmt::Display for PathTerminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TurnDirection {
    Left,
    Right,
    Either,
}

/// The length of a hold's outbound leg.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LegLength {
    /// Distance in NM.
    Distance(f64),
    /// Time in minutes.
    Time(f64),
}

/// The geometry along which a leg is flown.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Via {
    Course(Course),
    Arc {
        center: Endpoint,
        /// Radius in NM.
        radius: f64,
        direction: Option<TurnDirection>,
    },
    Racetrack {
        inbound: Course,
        direction: TurnDirection,
        length: LegLength,
    },
}

/// Flags of the fix a leg terminates at.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FixFlags {
    pub flyover: bool,
    pub initial_approach_fix: bool,
    pub intermediate_approach_fix: bool,
    pub final_approach_fix: bool,
    pub missed_approach_point: bool,
}

/// A leg of a procedure or airway.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Instruction {
    pub path_terminator: PathTerminator,
    pub endpoint: Option<Endpoint>,
    pub via: Option<Via>,
    /// The navaid the radial and distance refer to.
    pub recommended_navaid: Option<Endpoint>,
    /// Radial from the recommended navaid.
    pub theta: Option<Course>,
    /// Distance in NM from the recommended navaid.
    pub rho: Option<f64>,
    pub altitude: AltitudeRestriction,
    pub speed: SpeedRestriction,
    pub turn_direction: Option<TurnDirection>,
    pub flags: FixFlags,
}

impl Instruction {
    /// Creates a leg without geometry or restrictions.
    pub fn new(path_terminator: PathTerminator, endpoint: Option<Endpoint>) -> Self {
        Self {
            path_terminator,
            endpoint,
            via: None,
            recommended_navaid: None,
            theta: None,
            rho: None,
            altitude: AltitudeRestriction::UNRESTRICTED,
            speed: SpeedRestriction::UNRESTRICTED,
            turn_direction: None,
            flags: FixFlags::default(),
        }
    }

    /// Returns `true` if the endpoint, arc center and recommended navaid are
    /// resolved.
    pub fn is_resolved(&self) -> bool {
        let center = match &self.via {
            Some(Via::Arc { center, .. }) => Some(center),
            _ => None,
        };

        [self.endpoint.as_ref(), self.recommended_navaid.as_ref(), center]
            .into_iter()
            .flatten()
            .all(Endpoint::is_resolved)
    }

    /// Resolves all endpoints of the leg.
    ///
    /// Magnetic courses without variation take the variation of the
    /// recommended navaid or else of the navaid nearest to the leg.
    ///
    /// # Errors
    ///
    /// Fails if an endpoint can't be resolved.
    pub fn resolve(&self, index: &FixIndex, anchor: &Anchor) -> Result<Instruction> {
        let resolve = |endpoint: &Option<Endpoint>| {
            endpoint
                .as_ref()
                .map(|endpoint| endpoint.resolve(index, anchor))
                .transpose()
        };

        let endpoint = resolve(&self.endpoint)?;
        let recommended_navaid = resolve(&self.recommended_navaid)?;

        let reference = endpoint
            .as_ref()
            .and_then(Endpoint::coordinate)
            .or(match anchor {
                Anchor::Coordinate(coordinate) => Some(*coordinate),
                _ => None,
            });

        let variation: Option<MagneticVariation> = recommended_navaid
            .as_ref()
            .and_then(Endpoint::navaid)
            .and_then(|navaid| navaid.variation)
            .or_else(|| reference.and_then(|c| index.variation_at(&c)));

        let via = match &self.via {
            Some(Via::Course(course)) => Some(Via::Course(course.with_variation(variation))),
            Some(Via::Arc {
                center,
                radius,
                direction,
            }) => Some(Via::Arc {
                center: center.resolve(index, anchor)?,
                radius: *radius,
                direction: *direction,
            }),
            Some(Via::Racetrack {
                inbound,
                direction,
                length,
            }) => Some(Via::Racetrack {
                inbound: inbound.with_variation(variation),
                direction: *direction,
                length: *length,
            }),
            None => None,
        };

        Ok(Self {
            endpoint,
            via,
            recommended_navaid,
            theta: self.theta.map(|theta| theta.with_variation(variation)),
            ..self.clone()
        })
    }

    /// Returns the guidance to fly the leg, or `None` if the leg has no
    /// guidance primitive.
    ///
    /// Legs to a radial track the radial of the recommended navaid, arcs are
    /// flown around their center until the radial of the endpoint and holds
    /// are flown at the endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingGeometry`] if the leg is unresolved or
    /// lacks the geometry of its path.
    pub fn guidance(&self) -> Result<Option<LegGuidance>> {
        self.guidance_after(None)
    }

    /// Returns the guidance to fly the leg after the `previous` leg.
    ///
    /// A radial is crossed once the aircraft is on the other side of it than
    /// the endpoint of the previous leg.
    ///
    /// # Errors
    ///
    /// See [`guidance`](Self::guidance).
    pub fn guidance_after(&self, previous: Option<&Instruction>) -> Result<Option<LegGuidance>> {
        let missing = || Error::from(DomainError::MissingGeometry);

        let guidance = match (self.path_terminator, &self.via) {
            (PathTerminator::CourseToRadial | PathTerminator::HeadingToRadial, _) => {
                let navaid = self
                    .recommended_navaid
                    .as_ref()
                    .and_then(Endpoint::coordinate)
                    .ok_or_else(missing)?;
                let radial = self.theta.ok_or_else(missing)?;

                let radial = Radial::new(navaid, radial);

                match previous
                    .and_then(|leg| leg.endpoint.as_ref())
                    .and_then(Endpoint::coordinate)
                {
                    Some(reference) => LegGuidance::Radial(radial.with_reference(reference)),
                    None => LegGuidance::Radial(radial),
                }
            }

            (
                PathTerminator::ArcToFix | PathTerminator::ConstantRadiusArc,
                Some(Via::Arc {
                    center,
                    radius,
                    direction,
                }),
            ) => {
                let center = center.coordinate().ok_or_else(missing)?;
                let exit = self
                    .endpoint
                    .as_ref()
                    .and_then(Endpoint::coordinate)
                    .and_then(|fix| center.bearing(&fix))
                    .ok_or_else(missing)?;

                LegGuidance::Arc(guidance::Arc::new(
                    center,
                    *radius,
                    Course::True(exit),
                    *direction,
                ))
            }

            (
                PathTerminator::HoldToAltitude
                | PathTerminator::HoldToFix
                | PathTerminator::HoldToManual,
                Some(Via::Racetrack {
                    inbound,
                    direction,
                    length,
                }),
            ) => {
                let fix = self
                    .endpoint
                    .as_ref()
                    .and_then(Endpoint::coordinate)
                    .ok_or_else(missing)?;

                LegGuidance::Racetrack(Racetrack::new(fix, *inbound, *direction, *length))
            }

            (
                PathTerminator::ArcToFix
                | PathTerminator::ConstantRadiusArc
                | PathTerminator::HoldToAltitude
                | PathTerminator::HoldToFix
                | PathTerminator::HoldToManual,
                _,
            ) => return Err(missing()),

            _ => return Ok(None),
        };

        Ok(Some(guidance))
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path_terminator)?;

        if let Some(endpoint) = &self.endpoint {
            write!(f, " {endpoint}")?;
        }

        if !self.altitude.is_unrestricted() {
            write!(f, " {}", self.altitude)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::geom::Coordinate;
    use crate::nd::{Fix, Navaid, NavaidKind, Region, Waypoint, WaypointUsage};
    use crate::procedure::Unresolved;
    use crate::VerticalDistance;

    fn index() -> FixIndex {
        FixIndex::new([
            Fix::Navaid(Arc::new(Navaid {
                ident: "ABQ".to_string(),
                kind: NavaidKind::Vor,
                name: "ALBUQUERQUE".to_string(),
                icao_code: "K2".to_string(),
                airport: None,
                frequency: 113.2,
                coordinate: coord!(0.0, 0.0),
                variation: Some(MagneticVariation::East(10.0)),
                dme: None,
            })),
            Fix::Waypoint(Arc::new(Waypoint {
                ident: "ALISS".to_string(),
                name: String::new(),
                icao_code: "K2".to_string(),
                usage: WaypointUsage::Terminal,
                region: Region::TerminalArea("KABQ".to_string()),
                coordinate: Coordinate::new(0.0, 0.0).destination_true(90.0, 10.0),
                variation: None,
            })),
        ])
    }

    #[test]
    fn path_terminator_decomposes() {
        assert_eq!(PathTerminator::CourseToRadial.path(), Path::Course);
        assert_eq!(
            PathTerminator::CourseToRadial.termination(),
            Termination::Radial
        );
        assert_eq!(PathTerminator::HoldToFix.path(), Path::Hold);
        assert_eq!(PathTerminator::FixToManual.termination(), Termination::Manual);
        assert_eq!(PathTerminator::ConstantRadiusArc.to_string(), "RF");
    }

    #[test]
    fn resolve_adds_navaid_variation() {
        let mut leg = Instruction::new(PathTerminator::CourseToFix, Some(Endpoint::by_name("ALISS")));
        leg.via = Some(Via::Course(Course::magnetic(80.0)));
        leg.recommended_navaid = Some(Endpoint::by_name("ABQ"));
        leg.altitude = AltitudeRestriction::at_or_above(VerticalDistance::Msl(7000));

        assert!(!leg.is_resolved());

        let leg = leg
            .resolve(&index(), &Anchor::None)
            .expect("all fixes are known");

        assert!(leg.is_resolved());
        assert_eq!(
            leg.via,
            Some(Via::Course(Course::Magnetic {
                degrees: 80.0,
                variation: Some(MagneticVariation::East(10.0))
            }))
        );
        assert_eq!(leg.to_string(), "CF ALISS at or above 7000 MSL");
    }

    #[test]
    fn course_to_radial_tracks_navaid_radial() {
        let mut leg = Instruction::new(
            PathTerminator::CourseToRadial,
            Some(Endpoint::Unresolved(Unresolved::ByStationRadial {
                station: "ABQ".to_string(),
                radial: Course::magnetic(80.0),
            })),
        );
        leg.recommended_navaid = Some(Endpoint::by_name("ABQ"));
        leg.theta = Some(Course::magnetic(80.0));

        let leg = leg
            .resolve(&index(), &Anchor::None)
            .expect("all fixes are known");

        match leg.guidance().expect("leg is resolved") {
            Some(LegGuidance::Radial(radial)) => {
                assert_eq!(radial.bearing().to_true(), Ok(90.0));
            }
            guidance => panic!("expected a radial but got {guidance:?}"),
        }
    }

    #[test]
    fn radial_after_previous_leg_detects_crossing() {
        use crate::geom::NamedCoordinate;
        use crate::guidance::{Aircraft, Guidance};
        use crate::procedure::Resolved;

        let mut leg = Instruction::new(
            PathTerminator::HeadingToRadial,
            Some(Endpoint::by_name("ABQ")),
        );
        leg.recommended_navaid = Some(Endpoint::by_name("ABQ"));
        leg.theta = Some(Course::magnetic(80.0));
        let leg = leg
            .resolve(&index(), &Anchor::None)
            .expect("all fixes are known");

        let south = Coordinate::new(0.0, 0.0).destination_true(100.0, 10.0);
        let north = Coordinate::new(0.0, 0.0).destination_true(80.0, 10.0);
        let previous = Instruction::new(
            PathTerminator::TrackToFix,
            Some(Endpoint::Resolved(Resolved::Coordinate(NamedCoordinate {
                name: "START".to_string(),
                coordinate: south,
            }))),
        );

        let reached = |guidance: Option<LegGuidance>, position| match guidance {
            Some(LegGuidance::Radial(radial)) => radial
                .is_condition_reached(&(), &Aircraft::new(position, Course::True(0.0)))
                .expect("radial has variation"),
            guidance => panic!("expected a radial but got {guidance:?}"),
        };

        let after = || leg.guidance_after(Some(&previous)).expect("leg is resolved");
        assert!(!reached(after(), south));
        assert!(reached(after(), north));

        // without a previous leg only the tolerance band counts
        assert!(!reached(leg.guidance().expect("leg is resolved"), north));
    }

    #[test]
    fn arc_to_fix_exits_at_endpoint_radial() {
        let mut leg = Instruction::new(PathTerminator::ArcToFix, Some(Endpoint::by_name("ALISS")));
        leg.via = Some(Via::Arc {
            center: Endpoint::by_name("ABQ"),
            radius: 10.0,
            direction: Some(TurnDirection::Right),
        });

        let leg = leg
            .resolve(&index(), &Anchor::None)
            .expect("all fixes are known");

        match leg.guidance().expect("leg is resolved") {
            Some(LegGuidance::Arc(arc)) => assert_eq!(arc.radius(), 10.0),
            guidance => panic!("expected an arc but got {guidance:?}"),
        }
    }

    #[test]
    fn unresolved_hold_lacks_geometry() {
        let mut leg = Instruction::new(PathTerminator::HoldToFix, Some(Endpoint::by_name("ALISS")));
        leg.via = Some(Via::Racetrack {
            inbound: Course::True(90.0),
            direction: TurnDirection::Right,
            length: LegLength::Time(1.0),
        });

        assert_eq!(leg.guidance(), Err(DomainError::MissingGeometry.into()));

        let leg = leg
            .resolve(&index(), &Anchor::None)
            .expect("all fixes are known");
        assert!(matches!(
            leg.guidance(),
            Ok(Some(LegGuidance::Racetrack(_)))
        ));
    }

    #[test]
    fn track_to_fix_has_no_guidance() {
        let leg = Instruction::new(PathTerminator::TrackToFix, Some(Endpoint::by_name("ALISS")));
        assert_eq!(leg.guidance(), Ok(None));
    }
}
