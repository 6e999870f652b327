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

use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use geo::{Bearing, Destination, Distance, Haversine};

use super::course::{normalize, Course};
use crate::constants::NAUTICAL_MILE_IN_METER;
use crate::error::Result;

/// Coordinate value.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    /// Latitude in the range from -90° (south) to 90° (north).
    pub latitude: f64,

    /// Longitude in the range from -180° (west) to 180° (east).
    pub longitude: f64,
}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.latitude.to_bits().hash(state);
        self.longitude.to_bits().hash(state);
    }
}

impl From<Coordinate> for geo::Coord<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Coord {
            x: c.longitude,
            y: c.latitude,
        }
    }
}

impl From<geo::Coord<f64>> for Coordinate {
    fn from(c: geo::Coord<f64>) -> Self {
        Self {
            latitude: c.y,
            longitude: c.x,
        }
    }
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(c: Coordinate) -> Self {
        geo::Point::new(c.longitude, c.latitude)
    }
}

impl From<geo::Point<f64>> for Coordinate {
    fn from(p: geo::Point<f64>) -> Self {
        Self {
            latitude: p.y(),
            longitude: p.x(),
        }
    }
}

impl Coordinate {
    /// Creates a new coordinate.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns the true bearing and the distance in nautical miles to the
    /// `other` coordinate.
    ///
    /// The bearing is `None` if both coordinates are the same. Uses the
    /// great circle on a spherical earth.
    pub fn bearing_distance(&self, other: &Coordinate) -> (Option<Course>, f64) {
        if self == other {
            return (None, 0.0);
        }

        let (a, b): (geo::Point<f64>, geo::Point<f64>) = ((*self).into(), (*other).into());
        let bearing = normalize(Haversine.bearing(a, b));
        let distance = Haversine.distance(a, b) / NAUTICAL_MILE_IN_METER;

        (Some(Course::True(bearing)), distance)
    }

    /// Returns the great circle distance in nautical miles to the `other`.
    pub fn distance(&self, other: &Coordinate) -> f64 {
        Haversine.distance((*self).into(), (*other).into()) / NAUTICAL_MILE_IN_METER
    }

    /// Returns the true bearing to the `other` coordinate, or `None` if both
    /// are the same.
    pub fn bearing(&self, other: &Coordinate) -> Option<f64> {
        self.bearing_distance(other)
            .0
            .map(|course| course.degrees())
    }

    /// Returns the coordinate reached by following the `course` for the
    /// `distance` in nautical miles.
    ///
    /// # Errors
    ///
    /// Fails if the course is magnetic without variation.
    pub fn destination(&self, course: &Course, distance: f64) -> Result<Coordinate> {
        Ok(self.destination_true(course.to_true()?, distance))
    }

    /// Same as [`destination`](Self::destination) with a true course in
    /// degrees. A negative distance follows the reciprocal.
    pub fn destination_true(&self, bearing: f64, distance: f64) -> Coordinate {
        let (bearing, distance) = if distance < 0.0 {
            (normalize(bearing + 180.0), -distance)
        } else {
            (bearing, distance)
        };

        Haversine
            .destination((*self).into(), bearing, distance * NAUTICAL_MILE_IN_METER)
            .into()
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({0}, {1})", self.latitude, self.longitude)
    }
}

/// A coordinate with a label, e.g. a fix defined by a radial and distance
/// from a navaid.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NamedCoordinate {
    pub name: String,
    pub coordinate: Coordinate,
}
