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

/// 5.46 Runway Identifier (RUNWAY ID), e.g. `RW04L`.
pub type RunwayId<'a> = Alphanumeric<'a, 5>;

impl<'a> RunwayId<'a> {
    /// Returns the designator without the `RW` prefix, e.g. `04L`.
    ///
    /// Identifiers without the prefix, like the `N` of a heliport pad, are
    /// returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if a prefixed runway number is not within 01 to 36 or
    /// the suffix is no position.
    pub fn designator(&self) -> Result<&'a str, Error> {
        let Some(designator) = self.as_str().strip_prefix("RW") else {
            return Ok(self.as_str());
        };

        let number = designator.get(..2).unwrap_or(designator);
        let position = designator.get(2..).unwrap_or_default();
        let valid_number = number
            .parse::<u8>()
            .is_ok_and(|n| (1..=36).contains(&n) && number.len() == 2);
        let valid_position = matches!(position, "" | "L" | "C" | "R" | "B" | "T");

        if valid_number && valid_position {
            Ok(designator)
        } else {
            Err(Error::InvalidVariant {
                field: "Runway Identifier",
                bytes: Vec::from(&self.0[2..]),
                expected: "a runway number from 01 to 36 with an optional L, C, R, B or T",
            })
        }
    }
}
