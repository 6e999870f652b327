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

use super::{AltitudeRestriction, Endpoint, Instruction, PathTerminator};
use crate::error::{ResolutionError, Result};
use crate::geom::Course;
use crate::nd::{Anchor, FixIndex};

/// The direction in which an airway segment may be flown.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AirwayDirection {
    /// Only in the order of the airway's fixes.
    Forward,
    /// Only against the order of the airway's fixes.
    Backward,
}

/// A fix of an airway with the segment that follows it.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AirwayLeg {
    pub instruction: Instruction,
    pub sequence: u16,
    /// Altitudes of the segment when flown forward.
    pub forward: AltitudeRestriction,
    /// Altitudes of the segment when flown backward.
    pub backward: AltitudeRestriction,
    pub direction: Option<AirwayDirection>,
    pub outbound_course: Option<Course>,
    pub inbound_course: Option<Course>,
    /// Distance in NM to the fix from the previous fix.
    pub distance: Option<f64>,
}

impl AirwayLeg {
    fn ident(&self) -> Option<String> {
        self.instruction.endpoint.as_ref().map(Endpoint::ident)
    }

    fn allows(&self, direction: AirwayDirection) -> bool {
        self.direction.map_or(true, |d| d == direction)
    }
}

/// A leg of an airway as decoded from one record.
#[derive(Clone, PartialEq, Debug)]
pub(crate) struct AirwayRow {
    pub ident: String,
    pub route_type: char,
    pub leg: AirwayLeg,
}

/// An enroute airway.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Airway {
    pub ident: String,
    pub route_type: char,
    pub legs: Vec<AirwayLeg>,
}

impl Airway {
    /// Assembles airways from their fixes in file order.
    ///
    /// A sequence number that doesn't increase starts another airway with
    /// the same identifier. Each fix is resolved as the candidate nearest to
    /// its neighbour on the airway.
    pub(crate) fn assemble(
        rows: impl IntoIterator<Item = AirwayRow>,
        index: &FixIndex,
    ) -> Result<Vec<Airway>> {
        let mut airways: Vec<Airway> = Vec::new();

        for row in rows {
            match airways.last_mut() {
                Some(airway)
                    if airway.ident == row.ident
                        && airway
                            .legs
                            .last()
                            .is_some_and(|last| last.sequence < row.leg.sequence) =>
                {
                    airway.legs.push(row.leg)
                }
                _ => airways.push(Airway {
                    ident: row.ident,
                    route_type: row.route_type,
                    legs: vec![row.leg],
                }),
            }
        }

        for airway in &mut airways {
            airway.resolve(index)?;
        }

        Ok(airways)
    }

    fn resolve(&mut self, index: &FixIndex) -> Result<()> {
        let names: Vec<Option<String>> = self.legs.iter().map(AirwayLeg::ident).collect();

        for (i, leg) in self.legs.iter_mut().enumerate() {
            let neighbour = names
                .get(i + 1)
                .or_else(|| i.checked_sub(1).and_then(|j| names.get(j)))
                .and_then(Option::as_deref);
            let anchor = neighbour.map_or(Anchor::None, Anchor::Name);

            leg.instruction = leg.instruction.resolve(index, &anchor)?;
            leg.instruction.path_terminator = if i == 0 {
                PathTerminator::InitialFix
            } else {
                PathTerminator::TrackToFix
            };
        }

        Ok(())
    }

    /// Returns the identifiers of the airway's fixes in order.
    pub fn fixes(&self) -> impl Iterator<Item = String> + '_ {
        self.legs.iter().filter_map(AirwayLeg::ident)
    }

    fn position(&self, fix: &str) -> Result<usize> {
        self.legs
            .iter()
            .position(|leg| leg.ident().as_deref() == Some(fix))
            .ok_or_else(|| {
                ResolutionError::UnknownTransition {
                    procedure: self.ident.clone(),
                    transition: fix.to_string(),
                }
                .into()
            })
    }

    /// Returns the legs from the `entry` to the `exit` fix.
    ///
    /// The route starts with an initial fix at the entry. Flown against the
    /// order of the fixes, the legs are reversed and carry the altitudes of
    /// the backward direction.
    ///
    /// # Errors
    ///
    /// Fails if a fix is not on the airway or if a segment between both
    /// fixes may not be flown in that direction.
    pub fn select_route(&self, entry: &str, exit: &str) -> Result<Vec<Instruction>> {
        let (from, to) = (self.position(entry)?, self.position(exit)?);

        let wrong_direction = || {
            ResolutionError::WrongDirection {
                airway: self.ident.clone(),
                from: entry.to_string(),
                to: exit.to_string(),
            }
            .into()
        };

        // the segment following a fix carries its restrictions
        let (segments, direction) = if from <= to {
            (&self.legs[from..to], AirwayDirection::Forward)
        } else {
            (&self.legs[to..from], AirwayDirection::Backward)
        };

        if !segments.iter().all(|leg| leg.allows(direction)) {
            return Err(wrong_direction());
        }

        let mut route = vec![Instruction {
            path_terminator: PathTerminator::InitialFix,
            ..self.legs[from].instruction.clone()
        }];

        match direction {
            AirwayDirection::Forward => {
                route.extend(self.legs[from..to].iter().zip(&self.legs[from + 1..=to]).map(
                    |(segment, leg)| Instruction {
                        path_terminator: PathTerminator::TrackToFix,
                        altitude: segment.forward,
                        ..leg.instruction.clone()
                    },
                ))
            }
            AirwayDirection::Backward => route.extend(
                self.legs[to..from]
                    .iter()
                    .rev()
                    .map(|segment| Instruction {
                        path_terminator: PathTerminator::TrackToFix,
                        altitude: segment.backward,
                        ..segment.instruction.clone()
                    }),
            ),
        }

        Ok(route)
    }

    /// Returns the end to end routes in every permitted direction.
    pub fn enumerate_transitions(&self) -> Vec<(String, String)> {
        let (Some(first), Some(last)) = (
            self.legs.first().and_then(AirwayLeg::ident),
            self.legs.last().and_then(AirwayLeg::ident),
        ) else {
            return Vec::new();
        };

        let segments = &self.legs[..self.legs.len() - 1];
        let mut pairs = Vec::new();

        if segments.iter().all(|leg| leg.allows(AirwayDirection::Forward)) {
            pairs.push((first.clone(), last.clone()));
        }
        if segments.iter().all(|leg| leg.allows(AirwayDirection::Backward)) {
            pairs.push((last, first));
        }

        pairs
    }

    /// Returns the routes of all permitted directions.
    pub fn select_all_routes(&self) -> Result<Vec<Vec<Instruction>>> {
        self.enumerate_transitions()
            .iter()
            .map(|(entry, exit)| self.select_route(entry, exit))
            .collect()
    }
}

impl fmt::Display for Airway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ident)?;
        for fix in self.fixes() {
            write!(f, " {fix}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::error::Error;
    use crate::geom::Coordinate;
    use crate::nd::{Fix, Region, Waypoint, WaypointUsage};
    use crate::VerticalDistance;

    fn waypoint(ident: &str, lat: f64, lon: f64) -> Fix {
        Fix::Waypoint(Arc::new(Waypoint {
            ident: ident.to_string(),
            name: String::new(),
            icao_code: "K2".to_string(),
            usage: WaypointUsage::HighAndLow,
            region: Region::Enroute,
            coordinate: coord!(lat, lon),
            variation: None,
        }))
    }

    fn row(ident: &str, sequence: u16, fix: &str, direction: Option<AirwayDirection>) -> AirwayRow {
        AirwayRow {
            ident: ident.to_string(),
            route_type: 'O',
            leg: AirwayLeg {
                instruction: Instruction::new(PathTerminator::TrackToFix, Some(Endpoint::by_name(fix))),
                sequence,
                forward: AltitudeRestriction::at_or_above(VerticalDistance::Msl(sequence as u32 * 100)),
                backward: AltitudeRestriction::at_or_above(VerticalDistance::Msl(sequence as u32 * 10)),
                direction,
                outbound_course: None,
                inbound_course: None,
                distance: None,
            },
        }
    }

    fn index() -> FixIndex {
        FixIndex::new([
            waypoint("AAA", 10.0, 10.0),
            waypoint("BBB", 10.0, 11.0),
            waypoint("CCC", 10.0, 12.0),
            // same name on the other side of the world
            waypoint("CCC", -40.0, 170.0),
            waypoint("DDD", 10.0, 13.0),
        ])
    }

    fn v1() -> Airway {
        let rows = [
            row("V1", 10, "AAA", None),
            row("V1", 20, "BBB", None),
            row("V1", 30, "CCC", Some(AirwayDirection::Forward)),
            row("V1", 40, "DDD", None),
        ];

        let mut airways = Airway::assemble(rows, &index()).expect("fixes should resolve");
        assert_eq!(airways.len(), 1);
        airways.remove(0)
    }

    fn idents(route: &[Instruction]) -> Vec<String> {
        route
            .iter()
            .filter_map(|leg| leg.endpoint.as_ref().map(Endpoint::ident))
            .collect()
    }

    #[test]
    fn resolves_fixes_next_to_neighbour() {
        let airway = v1();
        let ccc = airway.legs[2]
            .instruction
            .endpoint
            .as_ref()
            .and_then(Endpoint::coordinate);

        assert_eq!(ccc, Some(Coordinate::new(10.0, 12.0)));
        assert_eq!(airway.legs[0].instruction.path_terminator, PathTerminator::InitialFix);
        assert_eq!(airway.to_string(), "V1 AAA BBB CCC DDD");
    }

    #[test]
    fn sequence_regression_starts_another_airway() {
        let rows = [
            row("V1", 10, "AAA", None),
            row("V1", 20, "BBB", None),
            row("V1", 10, "CCC", None),
            row("V1", 20, "DDD", None),
        ];

        let airways = Airway::assemble(rows, &index()).expect("fixes should resolve");
        assert_eq!(airways.len(), 2);
    }

    #[test]
    fn selects_forward_route() {
        let route = v1().select_route("AAA", "CCC").expect("route is flown forward");

        assert_eq!(idents(&route), ["AAA", "BBB", "CCC"]);
        assert_eq!(route[0].path_terminator, PathTerminator::InitialFix);
        assert_eq!(
            route[2].altitude,
            AltitudeRestriction::at_or_above(VerticalDistance::Msl(2000))
        );
    }

    #[test]
    fn selects_backward_route() {
        let route = v1().select_route("CCC", "AAA").expect("no restriction on AAA-CCC");

        assert_eq!(idents(&route), ["CCC", "BBB", "AAA"]);
        assert_eq!(
            route[1].altitude,
            AltitudeRestriction::at_or_above(VerticalDistance::Msl(200))
        );
    }

    #[test]
    fn one_way_segment_rejects_backward_route() {
        assert!(matches!(
            v1().select_route("DDD", "BBB"),
            Err(Error::Resolution(ResolutionError::WrongDirection { .. }))
        ));
    }

    #[test]
    fn enumerates_permitted_directions() {
        assert_eq!(
            v1().enumerate_transitions(),
            [("AAA".to_string(), "DDD".to_string())]
        );
        assert_eq!(v1().select_all_routes().map(|routes| routes.len()), Ok(1));
    }
}
