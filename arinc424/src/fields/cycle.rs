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

/// 5.31 Cycle Date (CYCLE)
///
/// The AIRAC cycle a record was last changed in, e.g. `2313` for the
/// thirteenth cycle of 2023.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Cycle {
    year: u8,
    cycle: u8,
}

impl Cycle {
    /// The last two digits of the year.
    pub fn year(&self) -> u8 {
        self.year
    }

    /// The number of the 28-day cycle within the year, starting at 1.
    pub fn cycle(&self) -> u8 {
        self.cycle
    }
}

impl FixedField<'_> for Cycle {
    const LENGTH: usize = 4;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        let year = parse_numeric!(2, u8, &bytes[0..2])?;
        let cycle = parse_numeric!(2, u8, &bytes[2..4])?;

        // a year has 13 cycles, rarely 14
        if !(1..=14).contains(&cycle) {
            return Err(Error::InvalidVariant {
                field: "Cycle Date",
                bytes: Vec::from(&bytes[..Self::LENGTH]),
                expected: "a cycle from 01 to 14",
            });
        }

        Ok(Self { year, cycle })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cycle() {
        let cycle = Cycle::from_bytes(b"2313").expect("cycle should parse");
        assert_eq!(cycle.year(), 23);
        assert_eq!(cycle.cycle(), 13);
    }

    #[test]
    fn orders_by_year_first() {
        let older = Cycle::from_bytes(b"2213").expect("cycle should parse");
        let newer = Cycle::from_bytes(b"2301").expect("cycle should parse");
        assert!(older < newer);
    }

    #[test]
    fn rejects_cycle_out_of_range() {
        assert!(matches!(
            Cycle::from_bytes(b"2300"),
            Err(Error::InvalidVariant { .. })
        ));
        assert!(Cycle::from_bytes(b"2315").is_err());
        assert!(Cycle::from_bytes(b"23 1").is_err());
    }
}
