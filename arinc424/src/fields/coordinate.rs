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

use crate::{Alphanumeric, Error};

/// 5.36 Latitude (LAT), e.g. `N40394857` with degree, minutes, seconds and
/// centiseconds.
pub type Latitude<'a> = Alphanumeric<'a, 9>;

impl<'a> Latitude<'a> {
    /// Returns the latitude in decimal degree, negative for south.
    ///
    /// # Errors
    ///
    /// Returns an error if the hemisphere is neither `N` nor `S` or the
    /// digits are no number.
    pub fn as_decimal(&self) -> Result<f64, Error> {
        let sign = match self.first() {
            b'N' => 1.0,
            b'S' => -1.0,
            byte => {
                return Err(Error::InvalidCharacter {
                    field: "Latitude",
                    byte,
                    expected: "N or S",
                })
            }
        };

        let deg = parse_numeric!(2, u8, &self.0[1..3])?;
        dms(deg, &self.0[3..9]).map(|decimal| sign * decimal)
    }
}

/// 5.37 Longitude (LONG), e.g. `W074144423`.
pub type Longitude<'a> = Alphanumeric<'a, 10>;

impl<'a> Longitude<'a> {
    /// Returns the longitude in decimal degree, negative for west.
    ///
    /// # Errors
    ///
    /// Returns an error if the hemisphere is neither `E` nor `W` or the
    /// digits are no number.
    pub fn as_decimal(&self) -> Result<f64, Error> {
        let sign = match self.first() {
            b'E' => 1.0,
            b'W' => -1.0,
            byte => {
                return Err(Error::InvalidCharacter {
                    field: "Longitude",
                    byte,
                    expected: "E or W",
                })
            }
        };

        let deg = parse_numeric!(3, u8, &self.0[1..4])?;
        dms(deg, &self.0[4..10]).map(|decimal| sign * decimal)
    }
}

/// Adds minutes and seconds with centiseconds, `MMSSss`, to the degree.
fn dms(deg: u8, bytes: &[u8]) -> Result<f64, Error> {
    let min = parse_numeric!(2, u8, &bytes[0..2])? as f64;
    let sec = parse_numeric!(4, u32, &bytes[2..6])? as f64 / 100.0;

    Ok(deg as f64 + min / 60.0 + sec / 3600.0)
}
