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

/// 5.29 Altitude Description (ALT DESC)
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum AltDesc {
    /// Blank or `@`: at altitude 1.
    At,
    /// `+`: at or above altitude 1.
    AtOrAbove,
    /// `-`: at or below altitude 1.
    AtOrBelow,
    /// `B`: between altitude 1 (upper) and altitude 2 (lower).
    Between,
    /// `C`: at or above altitude 2.
    AtOrAboveSecond,
    /// `G`: glide slope altitude in 2, at altitude 1.
    GlideSlopeAt,
    /// `H`: glide slope altitude in 2, at or above altitude 1.
    GlideSlopeAtOrAbove,
    /// `I`: glide slope intercept altitude in 2, at altitude 1.
    GlideSlopeInterceptAt,
    /// `J`: glide slope intercept altitude in 2, at or above altitude 1.
    GlideSlopeInterceptAtOrAbove,
    /// `V`: step-down at or above altitude 1, at altitude 2.
    StepDownAtOrAbove,
    /// `X`: step-down at altitude 1.
    StepDownAt,
    /// `Y`: step-down at or below altitude 1.
    StepDownAtOrBelow,
}

impl FixedField<'_> for AltDesc {
    const LENGTH: usize = 1;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        match bytes[0] {
            b' ' | b'@' => Ok(Self::At),
            b'+' => Ok(Self::AtOrAbove),
            b'-' => Ok(Self::AtOrBelow),
            b'B' => Ok(Self::Between),
            b'C' => Ok(Self::AtOrAboveSecond),
            b'G' => Ok(Self::GlideSlopeAt),
            b'H' => Ok(Self::GlideSlopeAtOrAbove),
            b'I' => Ok(Self::GlideSlopeInterceptAt),
            b'J' => Ok(Self::GlideSlopeInterceptAtOrAbove),
            b'V' => Ok(Self::StepDownAtOrAbove),
            b'X' => Ok(Self::StepDownAt),
            b'Y' => Ok(Self::StepDownAtOrBelow),
            byte => Err(Error::InvalidCharacter {
                field: "Altitude Description",
                byte,
                expected: "ALT DESC according to ARINC 424-17 5.29",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_at() {
        assert_eq!(AltDesc::from_bytes(b" "), Ok(AltDesc::At));
        assert_eq!(AltDesc::from_bytes(b"@"), Ok(AltDesc::At));
    }

    #[test]
    fn rejects_unknown_code() {
        assert!(AltDesc::from_bytes(b"Z").is_err());
    }
}
