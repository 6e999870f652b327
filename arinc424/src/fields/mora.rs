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

use crate::{Alphanumeric, Error};

/// 5.141 Starting Latitude of a grid MORA row, e.g. `N45`.
pub type StartLatitude<'a> = Alphanumeric<'a, 3>;

impl<'a> StartLatitude<'a> {
    /// Returns the latitude in whole degree, negative for south.
    ///
    /// # Errors
    ///
    /// Returns an error if the hemisphere or degree is invalid.
    pub fn as_degrees(&self) -> Result<i16, Error> {
        let deg = parse_numeric!(2, i16, &self.0[1..3])?;
        match self.first() {
            b'N' => Ok(deg),
            b'S' => Ok(-deg),
            byte => Err(Error::InvalidCharacter {
                field: "Starting Latitude",
                byte,
                expected: "N or S",
            }),
        }
    }
}

/// 5.142 Starting Longitude of a grid MORA row, e.g. `W120`.
pub type StartLongitude<'a> = Alphanumeric<'a, 4>;

impl<'a> StartLongitude<'a> {
    /// Returns the longitude in whole degree, negative for west.
    ///
    /// # Errors
    ///
    /// Returns an error if the hemisphere or degree is invalid.
    pub fn as_degrees(&self) -> Result<i16, Error> {
        let deg = parse_numeric!(3, i16, &self.0[1..4])?;
        match self.first() {
            b'E' => Ok(deg),
            b'W' => Ok(-deg),
            byte => Err(Error::InvalidCharacter {
                field: "Starting Longitude",
                byte,
                expected: "E or W",
            }),
        }
    }
}

/// 5.143 MORA values of thirty one degree cells.
pub type MoraValues<'a> = Alphanumeric<'a, 90>;

impl<'a> MoraValues<'a> {
    /// The number of cells in one row.
    pub const CELLS: usize = 30;

    /// Returns the MORA of the cell `index` degree east of the row's start
    /// in feet, or `None` if the value is unknown.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is neither a number nor `UNK`.
    pub fn get(&self, index: usize) -> Result<Option<u32>, Error> {
        let Some(value) = self.0.get(index * 3..index * 3 + 3) else {
            return Ok(None);
        };

        match value {
            b"UNK" | b"   " => Ok(None),
            digits => parse_numeric!(3, u32, digits).map(|hundreds| Some(hundreds * 100)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::FixedField;

    use super::*;

    #[test]
    fn parses_start_corner() {
        let lat = StartLatitude::from_bytes(b"S12").expect("latitude should parse");
        let lon = StartLongitude::from_bytes(b"W120").expect("longitude should parse");
        assert_eq!(lat.as_degrees(), Ok(-12));
        assert_eq!(lon.as_degrees(), Ok(-120));
    }

    #[test]
    fn reads_cells() {
        let row = format!("045UNK{}", "010".repeat(28));
        let values = MoraValues::from_bytes(row.as_bytes()).expect("values should parse");
        assert_eq!(values.get(0), Ok(Some(4500)));
        assert_eq!(values.get(1), Ok(None));
        assert_eq!(values.get(29), Ok(Some(1000)));
        assert_eq!(values.get(30), Ok(None));
    }
}
