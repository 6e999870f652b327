// SPDX-License-Identifier: Apache-2.0
// Copyright 2024, 2026 Joe Pearson
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

/// 5.39 Magnetic Variation (MAG VAR) and 5.66 Station Declination
///
/// The direction followed by the variation in tenth of degree, e.g. `E0130`.
/// Navaids oriented to true north, mostly at high latitudes, have a `T`.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub enum MagVar {
    East(f32),
    West(f32),
    OrientedToTrueNorth,
}

impl MagVar {
    /// Returns the variation in degree, positive if east.
    pub fn degrees(&self) -> f32 {
        match self {
            Self::East(deg) => *deg,
            Self::West(deg) => -deg,
            Self::OrientedToTrueNorth => 0.0,
        }
    }
}

impl FixedField<'_> for MagVar {
    const LENGTH: usize = 5;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        if bytes[0] == b'T' {
            return Ok(Self::OrientedToTrueNorth);
        }

        let tenths = parse_numeric!(4, u32, &bytes[1..5])?;
        let deg = tenths as f32 / 10.0;

        match bytes[0] {
            b'E' => Ok(Self::East(deg)),
            b'W' => Ok(Self::West(deg)),
            byte => Err(Error::InvalidCharacter {
                field: "Magnetic Variation",
                byte,
                expected: "E, W or T",
            }),
        }
    }
}
