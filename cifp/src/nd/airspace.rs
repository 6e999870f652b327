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

use std::fmt::{Display, Formatter, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::VerticalDistance;

/// Controlled airspace type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AirspaceType {
    ClassB,
    ClassC,
    /// Control Area (CTA)
    ControlArea,
    /// Terminal Control Area (TCA/TMA)
    TerminalControlArea,
    RadarZone,
    /// Radio Mandatory Zone (RMZ)
    RadioMandatoryZone,
    /// Transponder Mandatory Zone (TMZ)
    TransponderMandatoryZone,
    /// Control Zone (CTR)
    ControlZone,
}

/// Controlled airspace.
///
/// The airspace is enclosed by the `polygon` and ranges from the `floor` to
/// `ceiling` vertically.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Airspace {
    pub name: String,
    /// The identifier of the airspace center, usually the primary airport.
    pub center: String,
    /// Distinguishes airspaces of the same center.
    pub multiple_code: char,
    pub icao_code: String,
    pub airspace_type: AirspaceType,
    pub classification: Option<char>,
    pub ceiling: VerticalDistance,
    pub floor: VerticalDistance,
    pub polygon: geo::Polygon<f64>,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FirIndicator {
    Fir,
    Uir,
    Both,
}

/// A flight or upper information region.
///
/// The boundary is stored as runs of coordinates, since a region may be
/// published in several separate sequences.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fir {
    pub ident: String,
    pub address: String,
    pub indicator: FirIndicator,
    pub name: String,
    pub fir_upper_limit: Option<VerticalDistance>,
    pub uir_lower_limit: Option<VerticalDistance>,
    pub uir_upper_limit: Option<VerticalDistance>,
    pub boundaries: Vec<geo::LineString<f64>>,
    /// Identifiers of the adjacent regions.
    pub neighbours: Vec<String>,
}

impl Display for AirspaceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            AirspaceType::ClassB => write!(f, "Class B"),
            AirspaceType::ClassC => write!(f, "Class C"),
            AirspaceType::ControlArea => write!(f, "CTA"),
            AirspaceType::TerminalControlArea => write!(f, "TMA"),
            AirspaceType::RadarZone => write!(f, "Radar Zone"),
            AirspaceType::RadioMandatoryZone => write!(f, "RMZ"),
            AirspaceType::TransponderMandatoryZone => write!(f, "TMZ"),
            AirspaceType::ControlZone => write!(f, "CTR"),
        }
    }
}

impl Display for Airspace {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{}: {} | {}/{}",
            self.name, self.airspace_type, self.ceiling, self.floor
        )
    }
}
