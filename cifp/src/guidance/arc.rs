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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{in_reference_of, Aircraft, Guidance};
use crate::constants::*;
use crate::error::Result;
use crate::geom::{normalize, signed_difference, Coordinate, Course};
use crate::procedure::TurnDirection;

/// Flying a constant radius around a center point until the exit radial.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Arc {
    center: Coordinate,
    /// Radius in NM.
    radius: f64,
    /// The radial from the center that terminates the arc.
    exit: Course,
    direction: Option<TurnDirection>,
}

impl Arc {
    pub fn new(
        center: Coordinate,
        radius: f64,
        exit: Course,
        direction: Option<TurnDirection>,
    ) -> Self {
        Self {
            center,
            radius,
            exit,
            direction,
        }
    }

    pub fn center(&self) -> Coordinate {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the offset to the radial when on the arc.
    ///
    /// A right turn flies clockwise around the center. Without a turn
    /// direction the arc is flown in the sense that reaches the exit radial
    /// first.
    fn tangent(&self, radial: f64, exit: f64) -> f64 {
        match self.direction {
            Some(TurnDirection::Right) => 90.0,
            Some(TurnDirection::Left) => -90.0,
            _ if signed_difference(radial, exit) < 0.0 => -90.0,
            _ => 90.0,
        }
    }
}

impl Guidance for Arc {
    type State = ();

    fn get_course(&self, state: (), aircraft: &Aircraft, _dt: f64) -> Result<(Course, ())> {
        let exit = self.exit.to_true()?;

        if aircraft.on_ground {
            return Ok((aircraft.course, state));
        }

        let (radial, distance) = self.center.bearing_distance(&aircraft.position);

        let course = match radial {
            // too close, turn outwards
            Some(radial) if distance < self.radius - ARC_BAND_NM => radial.degrees(),
            // too far, turn inwards
            Some(radial) if distance > self.radius + ARC_BAND_NM => radial.degrees() + 180.0,
            Some(radial) => {
                let radial = radial.degrees();
                radial + self.tangent(radial, exit)
            }
            None => exit,
        };

        Ok((in_reference_of(&self.exit, normalize(course)), state))
    }

    fn is_condition_reached(&self, _state: &(), aircraft: &Aircraft) -> Result<bool> {
        let exit = self.exit.to_true()?;

        Ok(self
            .center
            .bearing(&aircraft.position)
            .is_some_and(|radial| signed_difference(radial, exit).abs() <= RADIAL_TOLERANCE_DEG))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Coordinate = coord!(0.0, 0.0);

    fn on_radial(radial: f64, distance: f64) -> Aircraft {
        Aircraft::new(CENTER.destination_true(radial, distance), Course::True(0.0))
    }

    fn assert_course(arc: &Arc, aircraft: &Aircraft, expected: f64) {
        let (course, _) = arc
            .get_course((), aircraft, 1.0)
            .expect("exit should be a true course");

        assert!(
            signed_difference(course.degrees(), expected).abs() < 0.01,
            "commanded {course} instead of {expected}"
        );
    }

    #[test]
    fn on_arc_flies_tangent_in_turn_direction() {
        let right = Arc::new(CENTER, 10.0, Course::True(180.0), Some(TurnDirection::Right));
        let left = Arc::new(CENTER, 10.0, Course::True(180.0), Some(TurnDirection::Left));
        let aircraft = on_radial(90.0, 10.05);

        assert_course(&right, &aircraft, 180.0);
        assert_course(&left, &aircraft, 0.0);
    }

    #[test]
    fn on_arc_without_direction_turns_towards_exit() {
        let arc = Arc::new(CENTER, 10.0, Course::True(60.0), None);
        let aircraft = on_radial(90.0, 10.0);

        // the exit radial is counterclockwise
        assert_course(&arc, &aircraft, 0.0);
    }

    #[test]
    fn inside_arc_turns_outwards() {
        let arc = Arc::new(CENTER, 10.0, Course::True(180.0), Some(TurnDirection::Right));
        assert_course(&arc, &on_radial(90.0, 5.0), 90.0);
    }

    #[test]
    fn outside_arc_turns_inwards() {
        let arc = Arc::new(CENTER, 10.0, Course::True(180.0), Some(TurnDirection::Right));
        assert_course(&arc, &on_radial(90.0, 15.0), 270.0);
    }

    #[test]
    fn exit_radial_terminates() {
        let arc = Arc::new(CENTER, 10.0, Course::True(180.0), Some(TurnDirection::Right));

        assert!(arc
            .is_condition_reached(&(), &on_radial(180.2, 10.0))
            .expect("exit should be a true course"));
        assert!(!arc
            .is_condition_reached(&(), &on_radial(170.0, 10.0))
            .expect("exit should be a true course"));
    }
}
