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

use crate::geom::{Coordinate, Course, MagneticVariation};

/// A DME, either standalone or collocated with another navaid.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dme {
    pub ident: String,
    pub coordinate: Coordinate,
    /// Elevation in feet.
    pub elevation: Option<i32>,
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GlideSlope {
    pub coordinate: Coordinate,
    /// Glide path angle in degrees.
    pub angle: f64,
}

/// The kind of a navaid with the data only this kind has.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NavaidKind {
    Ndb,
    Vor,
    Dme,
    Ils {
        runway: String,
        bearing: Course,
        category: Option<char>,
        glide_slope: Option<GlideSlope>,
    },
}

/// A radio navigation aid.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Navaid {
    pub ident: String,
    pub kind: NavaidKind,
    pub name: String,
    pub icao_code: String,
    /// The airport a terminal navaid belongs to.
    pub airport: Option<String>,
    /// Frequency in MHz, or kHz for NDB.
    pub frequency: f32,
    pub coordinate: Coordinate,
    pub variation: Option<MagneticVariation>,
    pub dme: Option<Dme>,
}

impl Navaid {
    pub fn is_vor(&self) -> bool {
        matches!(self.kind, NavaidKind::Vor)
    }

    pub fn is_ils(&self) -> bool {
        matches!(self.kind, NavaidKind::Ils { .. })
    }

    /// Returns `true` if the navaid is or has a DME.
    pub fn has_dme(&self) -> bool {
        matches!(self.kind, NavaidKind::Dme) || self.dme.is_some()
    }
}
