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

//! Guidance primitives that turn a leg into a course to fly.
//!
//! Each primitive is a small state machine. The state is an explicit value
//! that is passed into every [`get_course`] call and returned with the
//! commanded course, so one primitive can guide any number of aircraft as
//! long as every caller keeps its own state. All geometry is computed with
//! true courses; magnetic courses are converted when entering and leaving.
//!
//! ```
//! use cifp::geom::{Coordinate, Course};
//! use cifp::guidance::{Aircraft, Guidance, Radial};
//!
//! let radial = Radial::new(Coordinate::new(0.0, 0.0), Course::True(90.0));
//! let aircraft = Aircraft::new(Coordinate::new(-0.02, 0.2), Course::True(90.0));
//!
//! let (course, _) = radial.get_course((), &aircraft, 1.0)?;
//! assert_eq!(course, Course::True(45.0));
//! # Ok::<(), cifp::Error>(())
//! ```
//!
//! [`get_course`]: Guidance::get_course

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geom::{normalize, Coordinate, Course};

mod arc;
mod racetrack;
mod radial;

pub use arc::Arc;
pub use racetrack::{EntryType, Phase, Racetrack, RacetrackState};
pub use radial::Radial;

/// The aircraft as seen by a guidance primitive.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aircraft {
    pub position: Coordinate,
    /// The current course over ground.
    pub course: Course,
    pub on_ground: bool,
}

impl Aircraft {
    /// Creates an airborne aircraft.
    pub fn new(position: Coordinate, course: Course) -> Self {
        Self {
            position,
            course,
            on_ground: false,
        }
    }
}

/// A course computation evaluated at a caller chosen interval.
pub trait Guidance {
    /// The per aircraft state threaded through the calls.
    type State: Clone + Default + fmt::Debug;

    /// Returns the course to fly and the next state.
    ///
    /// The `dt` is the time in seconds since the previous call. An aircraft
    /// on the ground keeps its course.
    ///
    /// # Errors
    ///
    /// Fails if a magnetic course of the primitive or aircraft has no
    /// variation.
    fn get_course(
        &self,
        state: Self::State,
        aircraft: &Aircraft,
        dt: f64,
    ) -> Result<(Course, Self::State)>;

    /// Returns `true` if the termination condition of the leg is met.
    fn is_condition_reached(&self, state: &Self::State, aircraft: &Aircraft) -> Result<bool>;
}

/// The guidance of a leg.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LegGuidance {
    Radial(Radial),
    Arc(Arc),
    Racetrack(Racetrack),
}

/// Returns a true course in the north reference of the `reference` course.
///
/// Magnetic references with variation yield a magnetic course, all other
/// references a true course.
fn in_reference_of(reference: &Course, true_course: f64) -> Course {
    match reference {
        Course::Magnetic {
            variation: Some(var),
            ..
        } => Course::Magnetic {
            degrees: normalize(true_course - var.degrees()),
            variation: Some(*var),
        },
        _ => Course::True(normalize(true_course)),
    }
}
