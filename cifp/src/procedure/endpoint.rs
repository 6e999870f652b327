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
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geom::{Coordinate, Course, NamedCoordinate};
use crate::nd::{Anchor, Fix, FixIndex, Navaid};

/// A reference to a point that is resolved against the fixes once all of
/// them are known.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Unresolved {
    /// A fix or navaid by identifier.
    ByName { name: String },
    /// A radial of a station. Resolves to the station.
    ByStationRadial { station: String, radial: Course },
    /// The point at a distance in NM along a course from a fix.
    ByPointDistance {
        name: String,
        course: Course,
        distance: f64,
    },
    /// The point at a radial and DME distance in NM of a reference navaid.
    ByReferenceFixRadialDistance {
        reference: String,
        radial: Course,
        distance: f64,
    },
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Resolved {
    Coordinate(NamedCoordinate),
    Navaid(Arc<Navaid>),
}

/// The point a leg starts from, ends at or is centered on.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Endpoint {
    Unresolved(Unresolved),
    Resolved(Resolved),
}

impl Endpoint {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self::Unresolved(Unresolved::ByName { name: name.into() })
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Returns the identifier or label of the endpoint.
    pub fn ident(&self) -> String {
        match self {
            Self::Unresolved(Unresolved::ByName { name }) => name.clone(),
            Self::Unresolved(Unresolved::ByStationRadial { station, radial }) => {
                format!("{station}/{:03.0}", radial.degrees())
            }
            Self::Unresolved(Unresolved::ByPointDistance {
                name,
                course,
                distance,
            }) => label(name, course, *distance),
            Self::Unresolved(Unresolved::ByReferenceFixRadialDistance {
                reference,
                radial,
                distance,
            }) => label(reference, radial, *distance),
            Self::Resolved(Resolved::Coordinate(named)) => named.name.clone(),
            Self::Resolved(Resolved::Navaid(navaid)) => navaid.ident.clone(),
        }
    }

    /// Returns the coordinate of a resolved endpoint.
    pub fn coordinate(&self) -> Option<Coordinate> {
        match self {
            Self::Resolved(Resolved::Coordinate(named)) => Some(named.coordinate),
            Self::Resolved(Resolved::Navaid(navaid)) => Some(navaid.coordinate),
            Self::Unresolved(_) => None,
        }
    }

    /// Returns the navaid of an endpoint resolved to a navaid.
    pub fn navaid(&self) -> Option<&Arc<Navaid>> {
        match self {
            Self::Resolved(Resolved::Navaid(navaid)) => Some(navaid),
            _ => None,
        }
    }

    /// Resolves the endpoint against the fixes.
    ///
    /// Identifiers used by more than one fix are disambiguated by the
    /// `anchor`. Magnetic courses without variation take the variation of
    /// the fix they start from, or of the nearest navaid that has one.
    /// Resolving a resolved endpoint returns it unchanged.
    ///
    /// # Errors
    ///
    /// Fails if an identifier is unknown or ambiguous, or if no variation
    /// is found for a magnetic course.
    pub fn resolve(&self, index: &FixIndex, anchor: &Anchor) -> Result<Endpoint> {
        let resolved = match self {
            Self::Resolved(_) => return Ok(self.clone()),
            Self::Unresolved(Unresolved::ByName { name })
            | Self::Unresolved(Unresolved::ByStationRadial { station: name, .. }) => {
                from_fix(index.resolve(name, anchor)?)
            }
            Self::Unresolved(Unresolved::ByPointDistance {
                name,
                course,
                distance,
            }) => offset(index, index.resolve(name, anchor)?, name, course, *distance)?,
            Self::Unresolved(Unresolved::ByReferenceFixRadialDistance {
                reference,
                radial,
                distance,
            }) => offset(
                index,
                index.resolve(reference, anchor)?,
                reference,
                radial,
                *distance,
            )?,
        };

        Ok(Self::Resolved(resolved))
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ident())
    }
}

fn label(name: &str, course: &Course, distance: f64) -> String {
    format!("{name}/{:03.0}/{distance:.1}", course.degrees())
}

fn from_fix(fix: &Fix) -> Resolved {
    match fix {
        Fix::Navaid(navaid) => Resolved::Navaid(Arc::clone(navaid)),
        fix => Resolved::Coordinate(NamedCoordinate {
            name: fix.ident(),
            coordinate: fix.coordinate(),
        }),
    }
}

fn offset(
    index: &FixIndex,
    fix: &Fix,
    name: &str,
    course: &Course,
    distance: f64,
) -> Result<Resolved> {
    let origin = fix.coordinate();
    let course = course.with_variation(fix.variation().or_else(|| index.variation_at(&origin)));

    Ok(Resolved::Coordinate(NamedCoordinate {
        name: label(name, &course, distance),
        coordinate: origin.destination(&course, distance)?,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ResolutionError};
    use crate::geom::MagneticVariation;
    use crate::nd::NavaidKind;

    fn vor(ident: &str, coordinate: Coordinate) -> Fix {
        Fix::Navaid(Arc::new(Navaid {
            ident: ident.to_string(),
            kind: NavaidKind::Vor,
            name: String::new(),
            icao_code: "K2".to_string(),
            airport: None,
            frequency: 113.2,
            coordinate,
            variation: Some(MagneticVariation::East(10.0)),
            dme: None,
        }))
    }

    #[test]
    fn resolves_name_to_navaid() {
        let index = FixIndex::new([vor("ABQ", coord!(35.0, -106.8))]);
        let endpoint = Endpoint::by_name("ABQ")
            .resolve(&index, &Anchor::None)
            .expect("ABQ should be unique");

        assert!(endpoint.is_resolved());
        assert_eq!(endpoint.navaid().map(|n| n.ident.as_str()), Some("ABQ"));
        assert_eq!(endpoint.coordinate(), Some(coord!(35.0, -106.8)));
    }

    #[test]
    fn resolves_radial_distance_with_station_variation() {
        let index = FixIndex::new([vor("ABQ", coord!(0.0, 0.0))]);
        let endpoint = Endpoint::Unresolved(Unresolved::ByReferenceFixRadialDistance {
            reference: "ABQ".to_string(),
            radial: Course::magnetic(80.0),
            distance: 60.0,
        })
        .resolve(&index, &Anchor::None)
        .expect("ABQ has variation");

        // 080 magnetic with 10 east is 090 true
        let coordinate = endpoint.coordinate().expect("endpoint should be resolved");
        assert!(coordinate.latitude.abs() < 0.001);
        assert!((coordinate.longitude - 1.0).abs() < 0.01);
        assert_eq!(endpoint.ident(), "ABQ/080/60.0");
    }

    #[test]
    fn unknown_name_fails() {
        let index = FixIndex::new([vor("ABQ", coord!(0.0, 0.0))]);

        assert_eq!(
            Endpoint::by_name("SAF").resolve(&index, &Anchor::None),
            Err(Error::Resolution(ResolutionError::UnknownIdent(
                "SAF".to_string()
            )))
        );
    }

    #[test]
    fn resolved_endpoint_is_unchanged() {
        let index = FixIndex::default();
        let endpoint = Endpoint::Resolved(Resolved::Coordinate(NamedCoordinate {
            name: "X".to_string(),
            coordinate: coord!(1.0, 2.0),
        }));

        assert_eq!(
            endpoint.resolve(&index, &Anchor::None),
            Ok(endpoint.clone())
        );
    }
}
