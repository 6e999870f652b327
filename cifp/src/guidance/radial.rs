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

use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{in_reference_of, Aircraft, Guidance};
use crate::constants::*;
use crate::error::{DomainError, Result};
use crate::geom::{signed_difference, Coordinate, Course};
use crate::nd::Navaid;

/// Tracking a radial from a station.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Radial {
    station: Coordinate,
    bearing: Course,
    reference: Option<Coordinate>,
}

impl Radial {
    /// Creates a radial with the `bearing` from the `station`.
    pub fn new(station: Coordinate, bearing: Course) -> Self {
        Self {
            station,
            bearing,
            reference: None,
        }
    }

    /// Creates the radial with the magnetic `bearing` of the navaid.
    ///
    /// Flying the radial fails if the navaid has no variation.
    pub fn from_navaid(navaid: &Navaid, bearing: f64) -> Self {
        Self::new(
            navaid.coordinate,
            Course::Magnetic {
                degrees: bearing,
                variation: navaid.variation,
            },
        )
    }

    /// Sets the point from which the radial is approached.
    ///
    /// With a reference point the radial counts as crossed once the aircraft
    /// is on the other side of the radial than the reference.
    pub fn with_reference(mut self, reference: Coordinate) -> Self {
        self.reference = Some(reference);
        self
    }

    pub fn station(&self) -> Coordinate {
        self.station
    }

    pub fn bearing(&self) -> Course {
        self.bearing
    }

    /// Returns the angle from the published radial to the radial of the
    /// position, or `None` at the station.
    fn error(&self, published: f64, position: &Coordinate) -> Option<f64> {
        self.station
            .bearing(position)
            .map(|radial| signed_difference(published, radial))
    }

    /// Returns the point where the `course` from the `origin` intersects the
    /// radial.
    ///
    /// Starting at the origin the point is moved along the course by a tenth
    /// of the radial error in NM towards the side that reduces the error.
    /// The step is halved if neither side improves.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NoIntersection`] if the search doesn't converge.
    pub fn get_intersection_point(&self, origin: &Coordinate, course: &Course) -> Result<Coordinate> {
        let published = self.bearing.to_true()?;
        let course = course.to_true()?;

        let error_at = |distance: f64| {
            let point = origin.destination_true(course, distance);
            let error = self.error(published, &point).map_or(f64::MAX, f64::abs);
            (point, error)
        };

        let mut distance = 0.0;
        let mut scale = 1.0;
        let (mut point, mut error) = error_at(distance);

        for _ in 0..MAX_INTERSECTION_ITERATIONS {
            if error < RADIAL_TOLERANCE_DEG {
                return Ok(point);
            }

            let step = scale * error.min(180.0) / 10.0;
            let ahead = error_at(distance + step);
            let behind = error_at(distance - step);

            if ahead.1 < error && ahead.1 <= behind.1 {
                distance += step;
                (point, error) = ahead;
            } else if behind.1 < error {
                distance -= step;
                (point, error) = behind;
            } else {
                scale /= 2.0;
            }
        }

        Err(DomainError::NoIntersection.into())
    }
}

impl Guidance for Radial {
    type State = ();

    fn get_course(&self, state: (), aircraft: &Aircraft, _dt: f64) -> Result<(Course, ())> {
        let published = self.bearing.to_true()?;

        if aircraft.on_ground {
            return Ok((aircraft.course, state));
        }

        let (radial, distance) = self.station.bearing_distance(&aircraft.position);

        let course = match radial {
            Some(radial) if distance >= STATION_PASSAGE_NM => {
                let error = signed_difference(published, radial.degrees());

                if error.abs() > RADIAL_TOLERANCE_DEG {
                    trace!("intercepting radial {published:.1} with error {error:.1}");
                    published - INTERCEPT_ANGLE_DEG * error.signum()
                } else {
                    published - error
                }
            }
            // station passage
            _ => published,
        };

        Ok((in_reference_of(&self.bearing, course), state))
    }

    fn is_condition_reached(&self, _state: &(), aircraft: &Aircraft) -> Result<bool> {
        let published = self.bearing.to_true()?;

        let Some(current) = self.error(published, &aircraft.position) else {
            return Ok(false);
        };

        match self
            .reference
            .and_then(|reference| self.error(published, &reference))
        {
            Some(reference) => Ok(reference.signum() != current.signum()),
            None => Ok(current.abs() <= RADIAL_TOLERANCE_DEG),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::MagneticVariation;

    const STATION: Coordinate = coord!(0.0, 0.0);

    fn aircraft(lat: f64, lon: f64) -> Aircraft {
        Aircraft::new(coord!(lat, lon), Course::True(90.0))
    }

    #[test]
    fn intercepts_radial_from_the_right() {
        let radial = Radial::new(
            STATION,
            Course::Magnetic {
                degrees: 90.0,
                variation: Some(MagneticVariation::OrientedToTrueNorth),
            },
        );

        // 1.2 NM south of the radial
        let position = STATION.destination_true(90.0, 12.0).destination_true(180.0, 1.2);
        let (course, _) = radial
            .get_course((), &Aircraft::new(position, Course::True(90.0)), 1.0)
            .expect("radial has variation");

        assert_eq!(course.degrees(), 45.0);
    }

    #[test]
    fn intercepts_radial_from_the_left() {
        let radial = Radial::new(STATION, Course::True(90.0));
        let (course, _) = radial
            .get_course((), &aircraft(0.02, 0.2), 1.0)
            .expect("true radial");

        assert_eq!(course, Course::True(135.0));
    }

    #[test]
    fn corrects_within_tolerance() {
        let radial = Radial::new(STATION, Course::True(90.0));
        let position = STATION.destination_true(90.3, 30.0);
        let (course, _) = radial
            .get_course((), &Aircraft::new(position, Course::True(90.0)), 1.0)
            .expect("true radial");

        assert!(course.degrees() < 90.0 && course.degrees() > 89.5);
    }

    #[test]
    fn station_passage_commands_published_bearing() {
        let radial = Radial::new(STATION, Course::True(270.0));
        let (course, _) = radial
            .get_course((), &aircraft(0.0, 0.001), 1.0)
            .expect("true radial");

        assert_eq!(course, Course::True(270.0));
    }

    #[test]
    fn ground_keeps_course() {
        let radial = Radial::new(STATION, Course::True(90.0));
        let mut aircraft = aircraft(1.0, 1.0);
        aircraft.on_ground = true;
        aircraft.course = Course::True(123.0);

        let (course, _) = radial.get_course((), &aircraft, 1.0).expect("true radial");
        assert_eq!(course, Course::True(123.0));
    }

    #[test]
    fn radial_without_variation_is_a_domain_error() {
        let radial = Radial::new(STATION, Course::magnetic(90.0));
        assert_eq!(
            radial.get_course((), &aircraft(1.0, 1.0), 1.0),
            Err(DomainError::MissingVariation.into())
        );
    }

    #[test]
    fn crossing_relative_to_reference() {
        let radial = Radial::new(STATION, Course::True(90.0)).with_reference(coord!(1.0, 1.0));

        assert!(!radial
            .is_condition_reached(&(), &aircraft(0.5, 1.0))
            .expect("true radial"));
        assert!(radial
            .is_condition_reached(&(), &aircraft(-0.1, 1.0))
            .expect("true radial"));
    }

    #[test]
    fn crossing_without_reference_uses_tolerance() {
        let radial = Radial::new(STATION, Course::True(90.0));

        assert!(radial
            .is_condition_reached(&(), &aircraft(0.001, 1.0))
            .expect("true radial"));
        assert!(!radial
            .is_condition_reached(&(), &aircraft(0.5, 1.0))
            .expect("true radial"));
    }

    #[test]
    fn intersection_point() {
        let radial = Radial::new(STATION, Course::True(90.0));
        let point = radial
            .get_intersection_point(&coord!(1.0, 1.0), &Course::True(180.0))
            .expect("course should cross the radial");

        assert!(point.latitude.abs() < 0.01, "latitude was {}", point.latitude);
        assert!((point.longitude - 1.0).abs() < 0.01);
    }
}
