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

use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A vertical distance as published in the navigation database.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum VerticalDistance {
    /// True altitude as distance above mean sea level in feet.
    Msl(u32),

    /// Flight level in hundreds of feet as altitude at standard air pressure.
    Fl(u16),

    /// Absolute altitude as distance above ground level in feet.
    Agl(u32),

    /// Ground level.
    Gnd,

    /// An unlimited vertical distance.
    Unlimited,

    /// The vertical distance is unknown or not specified.
    NotSpecified,
}

impl VerticalDistance {
    /// Returns the altitude in feet referenced to mean sea level, treating
    /// flight levels at standard pressure.
    ///
    /// Returns `None` for values without a common datum.
    pub fn msl_feet(&self) -> Option<u32> {
        match self {
            Self::Msl(ft) => Some(*ft),
            Self::Fl(fl) => Some(*fl as u32 * 100),
            _ => None,
        }
    }
}

impl fmt::Display for VerticalDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gnd => write!(f, "GND"),
            Self::Fl(value) => write!(f, "FL{value:03}"),
            Self::Agl(value) => write!(f, "{value} AGL"),
            Self::Msl(value) => write!(f, "{value} MSL"),
            Self::Unlimited => write!(f, "unlimited"),
            Self::NotSpecified => write!(f, "not specified"),
        }
    }
}

/// Vertical distances are only partially ordered. Ground is below and
/// unlimited above everything, MSL altitudes and flight levels compare in
/// feet and AGL values only among themselves.
impl PartialOrd for VerticalDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::NotSpecified, Self::NotSpecified) => Some(Ordering::Equal),
            (Self::NotSpecified, _) | (_, Self::NotSpecified) => None,

            // ground is always less
            (Self::Gnd, Self::Gnd) => Some(Ordering::Equal),
            (Self::Gnd, _) => Some(Ordering::Less),
            (_, Self::Gnd) => Some(Ordering::Greater),

            // and unlimited is always greater
            (Self::Unlimited, Self::Unlimited) => Some(Ordering::Equal),
            (Self::Unlimited, _) => Some(Ordering::Greater),
            (_, Self::Unlimited) => Some(Ordering::Less),

            (Self::Agl(v), Self::Agl(o)) => Some(v.cmp(o)),
            (Self::Agl(_), _) | (_, Self::Agl(_)) => None,

            _ if self == other => Some(Ordering::Equal),
            _ => match self.msl_feet()?.cmp(&other.msl_feet()?) {
                // same height in different units is no equality
                Ordering::Equal => None,
                ordering => Some(ordering),
            },
        }
    }
}
