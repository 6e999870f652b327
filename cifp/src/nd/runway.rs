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

use crate::error::Result;
use crate::geom::{Coordinate, Course};

/// A runway end of an airport.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Runway {
    pub airport: String,
    /// The designator without prefix e.g. `04L`.
    pub designator: String,
    /// Length in feet.
    pub length: u32,
    /// Width in feet.
    pub width: Option<u32>,
    pub bearing: Course,
    pub threshold: Coordinate,
    /// Threshold elevation in feet.
    pub threshold_elevation: Option<i32>,
    /// Displaced threshold distance in feet.
    pub displaced_threshold: u32,
    /// Identifier of the localizer serving this runway.
    pub ils: Option<String>,
    pub ils_category: Option<char>,
}

impl Runway {
    /// Returns the identifier under which the runway threshold is used as fix,
    /// e.g. `RW04L`.
    pub fn ident(&self) -> String {
        format!("RW{}", self.designator)
    }

    /// Returns the true bearing of the runway.
    ///
    /// # Errors
    ///
    /// Fails if the bearing is magnetic and the airport variation is unknown.
    pub fn true_bearing(&self) -> Result<f64> {
        self.bearing.to_true()
    }

    /// Returns the designator of the opposite runway end.
    ///
    /// The number is offset by 18 and left and right are swapped. Returns
    /// `None` if the designator has no runway number.
    pub fn opposite_designator(&self) -> Option<String> {
        opposite_designator(&self.designator)
    }
}

pub(crate) fn opposite_designator(designator: &str) -> Option<String> {
    let digits = designator
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    let number: u8 = designator.get(..digits)?.parse().ok()?;

    let opposite = match number {
        1..=18 => number + 18,
        19..=36 => number - 18,
        _ => return None,
    };

    let suffix = match designator.get(digits..)? {
        "L" => "R",
        "R" => "L",
        "C" => "C",
        "" => "",
        _ => return None,
    };

    Some(format!("{opposite:02}{suffix}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_runway_designators() {
        assert_eq!(opposite_designator("04L").as_deref(), Some("22R"));
        assert_eq!(opposite_designator("22R").as_deref(), Some("04L"));
        assert_eq!(opposite_designator("36").as_deref(), Some("18"));
        assert_eq!(opposite_designator("18").as_deref(), Some("36"));
        assert_eq!(opposite_designator("17C").as_deref(), Some("35C"));
        assert_eq!(opposite_designator("N"), None);
    }
}
