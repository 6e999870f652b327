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

use super::{Navaid, Runway, Waypoint};
use crate::geom::{Coordinate, Course, MagneticVariation};

/// A named navigational point.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Fix {
    Waypoint(Arc<Waypoint>),
    Navaid(Arc<Navaid>),
    /// A runway threshold, identified as e.g. `RW04L`.
    Runway(Arc<Runway>),
}

impl Fix {
    pub fn ident(&self) -> String {
        match self {
            Self::Waypoint(wp) => wp.ident.clone(),
            Self::Navaid(navaid) => navaid.ident.clone(),
            Self::Runway(rwy) => rwy.ident(),
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        match self {
            Self::Waypoint(wp) => wp.coordinate,
            Self::Navaid(navaid) => navaid.coordinate,
            Self::Runway(rwy) => rwy.threshold,
        }
    }

    /// Returns the magnetic variation published with the fix.
    pub fn variation(&self) -> Option<MagneticVariation> {
        match self {
            Self::Waypoint(wp) => wp.variation,
            Self::Navaid(navaid) => navaid.variation,
            Self::Runway(rwy) => match rwy.bearing {
                Course::Magnetic { variation, .. } => variation,
                Course::True(_) => Some(MagneticVariation::OrientedToTrueNorth),
            },
        }
    }
}

impl fmt::Display for Fix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ident(), self.coordinate())
    }
}
