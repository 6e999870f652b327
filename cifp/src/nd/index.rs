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

use std::collections::HashMap;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use geo::Point;
use rstar::primitives::GeomWithData;
use rstar::{RTree, AABB};

use super::{Fix, Navaid};
use crate::error::{ResolutionError, Result};
use crate::geom::{Coordinate, MagneticVariation};

const NM_TO_DEG: f64 = 1.0 / 60.0;

/// Search radii in NM of the nearest navaid query before falling back to a
/// full scan.
const SEARCH_RADII: [f64; 3] = [50.0, 200.0, 1000.0];

/// The reference used to pick one of several fixes with the same identifier.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Anchor<'a> {
    /// No reference, only unique identifiers resolve.
    None,
    /// Picks the fix nearest to the coordinate.
    Coordinate(Coordinate),
    /// Picks the fix nearest to any fix with this identifier.
    Name(&'a str),
}

/// Spatial index of navaids.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavaidIndex {
    tree: RTree<GeomWithData<Point<f64>, Arc<Navaid>>>,
}

impl NavaidIndex {
    /// Creates an index from an iterator of navaids.
    pub fn new<'a>(navaids: impl Iterator<Item = &'a Arc<Navaid>>) -> Self {
        let entries = navaids
            .map(|navaid| GeomWithData::new(navaid.coordinate.into(), Arc::clone(navaid)))
            .collect();

        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Returns navaids within the given radius in NM of a coordinate.
    ///
    /// The radius is converted to an approximate degree-based bounding box
    /// for the R-tree query. Results are then filtered by actual great circle
    /// distance.
    pub fn within_radius(
        &self,
        coordinate: &Coordinate,
        radius: f64,
    ) -> impl Iterator<Item = &Arc<Navaid>> {
        let radius_deg = radius * NM_TO_DEG;

        // Adjust longitude expansion for latitude (degrees are smaller near poles)
        let lat_rad = coordinate.latitude.to_radians();
        let lon_expansion = if lat_rad.cos().abs() > 0.01 {
            radius_deg / lat_rad.cos()
        } else {
            radius_deg * 100.0
        };

        let envelope = AABB::from_corners(
            Point::new(
                coordinate.longitude - lon_expansion,
                coordinate.latitude - radius_deg,
            ),
            Point::new(
                coordinate.longitude + lon_expansion,
                coordinate.latitude + radius_deg,
            ),
        );

        let center = *coordinate;
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .filter(move |entry| center.distance(&(*entry.geom()).into()) <= radius)
            .map(|entry| &entry.data)
    }

    /// Returns the navaid nearest to the coordinate that matches the filter.
    pub fn nearest<F>(&self, coordinate: &Coordinate, filter: F) -> Option<&Arc<Navaid>>
    where
        F: Fn(&Navaid) -> bool,
    {
        let by_distance = |a: &&Arc<Navaid>, b: &&Arc<Navaid>| {
            coordinate
                .distance(&a.coordinate)
                .total_cmp(&coordinate.distance(&b.coordinate))
        };

        for radius in SEARCH_RADII {
            let found = self
                .within_radius(coordinate, radius)
                .filter(|navaid| filter(navaid.as_ref()))
                .min_by(by_distance);

            if found.is_some() {
                return found;
            }
        }

        self.tree
            .iter()
            .map(|entry| &entry.data)
            .filter(|navaid| filter(navaid.as_ref()))
            .min_by(by_distance)
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

/// The fixes and navaids by identifier.
///
/// An identifier is not unique, the same name may be used for fixes across
/// the world or for a terminal fix at several airports.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FixIndex {
    fixes: HashMap<String, Vec<Fix>>,
    navaids: NavaidIndex,
}

impl FixIndex {
    /// Creates the index of the fixes and a spatial index of the navaids.
    pub fn new(fixes: impl IntoIterator<Item = Fix>) -> Self {
        let mut map: HashMap<String, Vec<Fix>> = HashMap::new();

        for fix in fixes {
            map.entry(fix.ident()).or_default().push(fix);
        }

        let navaids = NavaidIndex::new(map.values().flatten().filter_map(|fix| match fix {
            Fix::Navaid(navaid) => Some(navaid),
            _ => None,
        }));

        Self {
            fixes: map,
            navaids,
        }
    }

    /// Returns all fixes with the identifier.
    pub fn get(&self, ident: &str) -> &[Fix] {
        self.fixes.get(ident).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn navaids(&self) -> &NavaidIndex {
        &self.navaids
    }

    /// Returns the number of distinct identifiers.
    pub fn len(&self) -> usize {
        self.fixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixes.is_empty()
    }

    /// Returns the variation of the nearest navaid that has one.
    pub fn variation_at(&self, coordinate: &Coordinate) -> Option<MagneticVariation> {
        self.navaids
            .nearest(coordinate, |navaid| navaid.variation.is_some())
            .and_then(|navaid| navaid.variation)
    }

    /// Resolves an identifier to a single fix.
    ///
    /// A unique identifier resolves to its fix. Otherwise the fix nearest to
    /// the anchor is chosen. With a name as anchor, the pair of fix and anchor
    /// candidate with the least distance wins.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::UnknownIdent`] if no fix has the identifier
    /// and [`ResolutionError::Ambiguous`] if several have it but the anchor
    /// can't decide.
    pub fn resolve(&self, ident: &str, anchor: &Anchor) -> Result<&Fix> {
        let candidates = self.get(ident);

        let ambiguous = || ResolutionError::Ambiguous {
            ident: ident.to_string(),
            candidates: candidates.len(),
        };

        match candidates {
            [] => Err(ResolutionError::UnknownIdent(ident.to_string()).into()),
            [fix] => Ok(fix),
            _ => match anchor {
                Anchor::Coordinate(reference) => candidates
                    .iter()
                    .min_by(|a, b| {
                        reference
                            .distance(&a.coordinate())
                            .total_cmp(&reference.distance(&b.coordinate()))
                    })
                    .ok_or_else(|| ambiguous().into()),
                Anchor::Name(reference) => {
                    let references = self.get(reference);

                    candidates
                        .iter()
                        .flat_map(|fix| {
                            references
                                .iter()
                                .map(move |r| (fix, fix.coordinate().distance(&r.coordinate())))
                        })
                        .min_by(|(_, a), (_, b)| a.total_cmp(b))
                        .map(|(fix, _)| fix)
                        .ok_or_else(|| ambiguous().into())
                }
                Anchor::None => Err(ambiguous().into()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nd::{NavaidKind, Region, Waypoint, WaypointUsage};

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

    fn navaid(ident: &str, lat: f64, lon: f64, variation: Option<MagneticVariation>) -> Fix {
        Fix::Navaid(Arc::new(Navaid {
            ident: ident.to_string(),
            kind: NavaidKind::Vor,
            name: String::new(),
            icao_code: "K2".to_string(),
            airport: None,
            frequency: 113.2,
            coordinate: coord!(lat, lon),
            variation,
            dme: None,
        }))
    }

    fn index() -> FixIndex {
        FixIndex::new([
            waypoint("ABCDE", 10.0, 10.0),
            waypoint("ABCDE", 10.0, 10.5),
            waypoint("ABCDE", 11.0, 10.0),
            waypoint("UNIQE", 20.0, 20.0),
            waypoint("REFFX", 11.0, 10.2),
        ])
    }

    #[test]
    fn unique_ident_resolves_without_anchor() {
        let fix = index()
            .resolve("UNIQE", &Anchor::None)
            .expect("unique fix should resolve")
            .coordinate();
        assert_eq!(fix, coord!(20.0, 20.0));
    }

    #[test]
    fn nearest_candidate_to_coordinate() {
        let index = index();

        let fix = index
            .resolve("ABCDE", &Anchor::Coordinate(coord!(10.0, 10.4)))
            .expect("anchor should disambiguate");
        assert_eq!(fix.coordinate(), coord!(10.0, 10.5));
    }

    /// Three fixes named ABCDE at (10, 10), (10, 10.5) and (11, 10) resolved
    /// from (10, 10.1).
    ///
    /// The reference is 0.1° of longitude from (10, 10) but 0.4° from
    /// (10, 10.5), so the nearest candidate is (10, 10). Returning (10, 10.5)
    /// would break the rule that no other candidate is closer to the
    /// reference.
    #[test]
    fn abcde_from_10_10_1_resolves_to_nearest_candidate() {
        let index = index();
        let reference = coord!(10.0, 10.1);

        let fix = index
            .resolve("ABCDE", &Anchor::Coordinate(reference))
            .expect("anchor should disambiguate");

        assert_eq!(fix.coordinate(), coord!(10.0, 10.0));
        assert!(reference.distance(&fix.coordinate()) < reference.distance(&coord!(10.0, 10.5)));
    }

    #[test]
    fn resolved_candidate_is_never_farther_than_others() {
        let index = index();
        let references = [
            coord!(0.0, 0.0),
            coord!(10.2, 10.3),
            coord!(10.6, 10.0),
            coord!(12.0, 9.0),
        ];

        for reference in references {
            let fix = index
                .resolve("ABCDE", &Anchor::Coordinate(reference))
                .expect("anchor should disambiguate");
            let resolved = reference.distance(&fix.coordinate());

            for other in index.get("ABCDE") {
                assert!(resolved <= reference.distance(&other.coordinate()));
            }
        }
    }

    #[test]
    fn nearest_candidate_to_name() {
        let index = index();
        let fix = index
            .resolve("ABCDE", &Anchor::Name("REFFX"))
            .expect("reference name should disambiguate");
        assert_eq!(fix.coordinate(), coord!(11.0, 10.0));
    }

    #[test]
    fn ambiguous_without_anchor() {
        assert_eq!(
            index().resolve("ABCDE", &Anchor::None),
            Err(ResolutionError::Ambiguous {
                ident: "ABCDE".to_string(),
                candidates: 3
            }
            .into())
        );
        assert!(index().resolve("ABCDE", &Anchor::Name("NOPE")).is_err());
    }

    #[test]
    fn unknown_ident() {
        assert_eq!(
            index().resolve("XXXXX", &Anchor::None),
            Err(ResolutionError::UnknownIdent("XXXXX".to_string()).into())
        );
    }

    #[test]
    fn variation_of_nearest_navaid() {
        let index = FixIndex::new([
            navaid("ABQ", 35.0, -106.8, Some(MagneticVariation::East(13.0))),
            navaid("DME", 35.1, -106.7, None),
            navaid("SAF", 35.5, -106.0, Some(MagneticVariation::East(12.0))),
        ]);

        assert_eq!(index.navaids().len(), 3);
        assert_eq!(
            index.variation_at(&coord!(35.1, -106.7)),
            Some(MagneticVariation::East(13.0))
        );
        assert_eq!(
            index.variation_at(&coord!(35.6, -105.9)),
            Some(MagneticVariation::East(12.0))
        );
        // beyond every search radius
        assert!(index.variation_at(&coord!(-40.0, 170.0)).is_some());
    }
}
