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

use std::fmt;

use chrono::{Days, NaiveDate};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Days between two AIRAC effective dates.
const CYCLE_DAYS: u64 = 28;

/// Effective date of a known cycle (2001) all other cycles are derived from.
fn reference_date() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2020, 1, 2)
}

/// An AIRAC cycle as year and cycle number within the year.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AiracCycle {
    year: u8,
    cycle: u8,
}

impl AiracCycle {
    /// Creates a cycle from the two digit year and the cycle number.
    pub fn new(year: u8, cycle: u8) -> Self {
        Self { year, cycle }
    }

    pub fn year(&self) -> u8 {
        self.year
    }

    pub fn cycle(&self) -> u8 {
        self.cycle
    }

    /// Returns the date from which the cycle is effective.
    ///
    /// Returns `None` if the cycle number is zero.
    pub fn effective(&self) -> Option<NaiveDate> {
        let reference = reference_date()?;
        let jan_1st = NaiveDate::from_ymd_opt(2000 + self.year as i32, 1, 1)?;

        let since_reference = (jan_1st - reference).num_days().rem_euclid(CYCLE_DAYS as i64);
        let first = jan_1st + Days::new((CYCLE_DAYS - since_reference as u64) % CYCLE_DAYS);

        first.checked_add_days(Days::new(CYCLE_DAYS * (self.cycle.checked_sub(1)? as u64)))
    }

    /// Returns the first date at which the cycle is no longer effective.
    pub fn expires(&self) -> Option<NaiveDate> {
        self.effective()?.checked_add_days(Days::new(CYCLE_DAYS))
    }

    /// Returns `true` if the cycle is effective at the date.
    pub fn is_valid_at(&self, date: NaiveDate) -> bool {
        match (self.effective(), self.expires()) {
            (Some(effective), Some(expires)) => effective <= date && date < expires,
            _ => false,
        }
    }
}

impl fmt::Display for AiracCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.year, self.cycle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn effective_dates() {
        assert_eq!(
            AiracCycle::new(20, 1).effective(),
            NaiveDate::from_ymd_opt(2020, 1, 2)
        );
        assert_eq!(
            AiracCycle::new(23, 1).effective(),
            NaiveDate::from_ymd_opt(2023, 1, 26)
        );
        assert_eq!(
            AiracCycle::new(23, 13).effective(),
            NaiveDate::from_ymd_opt(2023, 12, 28)
        );
        assert_eq!(
            AiracCycle::new(23, 13).expires(),
            NaiveDate::from_ymd_opt(2024, 1, 25)
        );
    }

    #[test]
    fn validity() {
        let cycle = AiracCycle::new(23, 13);
        let date = |d| NaiveDate::from_ymd_opt(2024, 1, d).expect("date should be valid");

        assert!(cycle.is_valid_at(date(1)));
        assert!(!cycle.is_valid_at(date(25)));
    }

    #[test]
    fn display() {
        assert_eq!(AiracCycle::new(23, 1).to_string(), "2301");
    }
}
