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

use crate::{Error, FixedField};

/// 5.58 Runway Bearing, 5.26 Outbound/Inbound Magnetic Course and 5.48
/// Localizer Bearing.
///
/// Magnetic bearings are in tenth of degree. True bearings are marked by a
/// trailing `T` and given in whole degree.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub enum Bearing {
    Magnetic(f32),
    True(f32),
}

impl Bearing {
    /// The numeric value of the bearing in degree.
    pub fn degrees(&self) -> f32 {
        match self {
            Self::Magnetic(deg) | Self::True(deg) => *deg,
        }
    }
}

pub type RwyBrg = Bearing;
pub type Course = Bearing;
pub type LocBrg = Bearing;

impl FixedField<'_> for Bearing {
    const LENGTH: usize = 4;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        match bytes[3] {
            b'T' => {
                let deg = parse_numeric!(3, u32, bytes[0..3])?;
                Ok(Self::True(deg as f32))
            }
            _ => {
                let deg = parse_numeric!(4, u32, bytes[0..4])? as f32 / 10.0;
                Ok(Self::Magnetic(deg))
            }
        }
    }
}
