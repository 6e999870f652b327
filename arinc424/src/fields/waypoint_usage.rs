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

/// 5.82 Waypoint Usage
///
/// The airway structure an enroute waypoint is published for. Blank marks a
/// waypoint that is only used in terminal procedures.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum WaypointUsage {
    HighAndLow,
    High,
    Low,
    Terminal,
}

impl WaypointUsage {
    /// Returns `true` if the waypoint is part of the airway structure.
    pub fn is_enroute(&self) -> bool {
        *self != Self::Terminal
    }
}

impl FixedField<'_> for WaypointUsage {
    const LENGTH: usize = 1;

    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let usage = match bytes[0] {
            b'B' => Self::HighAndLow,
            b'H' => Self::High,
            b'L' => Self::Low,
            b' ' => Self::Terminal,
            byte => {
                return Err(Error::InvalidCharacter {
                    field: "Waypoint Usage",
                    byte,
                    expected: "B, H, L or blank",
                })
            }
        };

        Ok(usage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_usage() {
        assert_eq!(WaypointUsage::from_bytes(b"B"), Ok(WaypointUsage::HighAndLow));
        assert_eq!(WaypointUsage::from_bytes(b" "), Ok(WaypointUsage::Terminal));
        assert!(WaypointUsage::from_bytes(b"X").is_err());
    }

    #[test]
    fn terminal_waypoints_are_not_enroute() {
        assert!(WaypointUsage::Low.is_enroute());
        assert!(!WaypointUsage::Terminal.is_enroute());
    }
}
