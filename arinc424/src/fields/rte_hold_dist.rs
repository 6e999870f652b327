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

use crate::{Error, FixedField};

/// 5.27 Route Distance From, Holding Distance/Time (RTE DIST FROM, HOLD
/// DIST/TIME)
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug)]
pub enum RteHoldDist {
    /// Distance in NM.
    Distance(f32),
    /// Time in minutes.
    Time(f32),
}

impl FixedField<'_> for RteHoldDist {
    const LENGTH: usize = 4;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        match bytes[0] {
            b'T' => {
                let min = parse_numeric!(3, u32, bytes[1..4])? as f32 / 10.0;
                Ok(Self::Time(min))
            }
            _ => {
                let nm = parse_numeric!(4, u32, bytes[0..4])? as f32 / 10.0;
                Ok(Self::Distance(nm))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_distance() {
        assert_eq!(
            RteHoldDist::from_bytes(b"0040"),
            Ok(RteHoldDist::Distance(4.0))
        );
    }

    #[test]
    fn parses_time() {
        assert_eq!(RteHoldDist::from_bytes(b"T010"), Ok(RteHoldDist::Time(1.0)));
    }
}
