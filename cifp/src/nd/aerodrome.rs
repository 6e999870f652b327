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

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AerodromeKind {
    Airport,
    Heliport,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Usage {
    Civil,
    Military,
    Joint,
    Private,
}

/// An airport or heliport.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aerodrome {
    pub ident: String,
    pub icao_code: String,
    pub iata: Option<String>,
    pub kind: AerodromeKind,
    pub name: String,
    pub coordinate: Coordinate,
    /// Elevation in feet.
    pub elevation: i32,
    /// The variation of the nearest navaid, or the published variation if no
    /// navaid is known.
    pub variation: Option<MagneticVariation>,
    /// Transition altitude in feet.
    pub transition_altitude: Option<u32>,
    /// Transition level in feet.
    pub transition_level: Option<u32>,
    pub usage: Usage,
    pub ifr: bool,
    /// Length of the longest runway in feet.
    pub longest_runway: Option<u32>,
}
