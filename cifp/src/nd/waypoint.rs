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

use crate::geom::{Coordinate, MagneticVariation};

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum WaypointUsage {
    HighAndLow,
    High,
    Low,
    Terminal,
}

/// The region where the waypoint is located. This can be either a terminal area
/// or enroute.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Region {
    /// An enroute fix.
    Enroute,
    /// The terminal area to which the fix belongs with the airport ident as
    /// value.
    TerminalArea(String),
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Waypoint {
    pub ident: String,
    pub name: String,
    pub icao_code: String,
    pub usage: WaypointUsage,
    pub region: Region,
    pub coordinate: Coordinate,
    pub variation: Option<MagneticVariation>,
}

impl Waypoint {
    /// The terminal area of the waypoint.
    ///
    /// Returns `None` if the waypoint is not within a terminal area.
    pub fn terminal_area(&self) -> Option<&str> {
        match &self.region {
            Region::TerminalArea(ident) => Some(ident),
            Region::Enroute => None,
        }
    }
}
