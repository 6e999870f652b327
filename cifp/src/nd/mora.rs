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

use crate::geom::Coordinate;

/// A row of the minimum off-route altitude grid.
///
/// The row covers 30 one degree cells eastwards of its south west corner.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridMora {
    /// Latitude of the south edge in degrees.
    pub latitude: i16,
    /// Longitude of the west edge of the first cell in degrees.
    pub longitude: i16,
    /// Altitude per cell in feet, `None` if unknown.
    pub values: Vec<Option<u32>>,
}

impl GridMora {
    pub const CELLS: usize = 30;

    /// Returns the MORA of the cell containing the coordinate.
    ///
    /// Returns `None` if the coordinate is outside of this row or the value is
    /// unknown.
    pub fn at(&self, coordinate: &Coordinate) -> Option<u32> {
        if coordinate.latitude.floor() as i16 != self.latitude {
            return None;
        }

        let offset = coordinate.longitude.floor() as i32 - self.longitude as i32;
        usize::try_from(offset)
            .ok()
            .and_then(|i| self.values.get(i).copied().flatten())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_lookup() {
        let mut values = vec![Some(12000); GridMora::CELLS];
        values[1] = None;
        let mora = GridMora {
            latitude: 35,
            longitude: -107,
            values,
        };

        assert_eq!(mora.at(&coord!(35.5, -105.5)), None);
        assert_eq!(mora.at(&coord!(35.5, -106.9)), Some(12000));
        assert_eq!(mora.at(&coord!(35.5, -77.5)), Some(12000));
        assert_eq!(mora.at(&coord!(35.5, -76.5)), None);
        assert_eq!(mora.at(&coord!(36.5, -106.9)), None);
        assert_eq!(mora.at(&coord!(35.5, -107.5)), None);
    }
}
