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

use crate::Alphanumeric;

/// 5.17 Waypoint Description Code (DESC CODE)
pub type WaypointDesc<'a> = Alphanumeric<'a, 4>;

impl<'a> WaypointDesc<'a> {
    /// Returns `true` if the fix must be overflown before turning.
    pub fn is_flyover(&self) -> bool {
        matches!(self.0[1], b'Y' | b'B')
    }

    /// Returns `true` if the fix ends a continuous airway or a procedure
    /// route.
    pub fn is_end_of_route(&self) -> bool {
        matches!(self.0[1], b'E' | b'B')
    }

    /// Returns `true` if the fix is an initial approach fix.
    pub fn is_initial_approach_fix(&self) -> bool {
        matches!(self.0[3], b'A' | b'C' | b'D')
    }

    /// Returns `true` if the fix is an intermediate approach fix.
    pub fn is_intermediate_approach_fix(&self) -> bool {
        self.0[3] == b'B'
    }

    /// Returns `true` if the fix is the final approach fix.
    pub fn is_final_approach_fix(&self) -> bool {
        self.0[3] == b'F'
    }

    /// Returns `true` if the fix is the missed approach point.
    pub fn is_missed_approach_point(&self) -> bool {
        self.0[3] == b'M'
    }
}

#[cfg(test)]
mod tests {
    use crate::FixedField;

    use super::*;

    #[test]
    fn reads_flags() {
        let desc = WaypointDesc::from_bytes(b"EY F").expect("description should parse");
        assert!(desc.is_flyover());
        assert!(desc.is_final_approach_fix());
        assert!(!desc.is_initial_approach_fix());

        let desc = WaypointDesc::from_bytes(b"E  A").expect("description should parse");
        assert!(!desc.is_flyover());
        assert!(desc.is_initial_approach_fix());
    }
}
