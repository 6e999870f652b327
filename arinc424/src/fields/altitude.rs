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

/// 5.30 Altitude / Minimum Altitude
///
/// Either five digits of feet or `FL` followed by three digits.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Altitude {
    Feet(u32),
    FlightLevel(u16),
    Unknown,
    NotSpecified,
    Unlimited,
}

impl FixedField<'_> for Altitude {
    const LENGTH: usize = 5;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        match &bytes[..Self::LENGTH] {
            [b'F', b'L', d @ ..] => Ok(Self::FlightLevel(parse_numeric!(3, u16, d)?)),
            b"UNKNN" => Ok(Self::Unknown),
            b"NESTB" | b"NOTSP" => Ok(Self::NotSpecified),
            b"UNLTD" => Ok(Self::Unlimited),
            digits => Ok(Self::Feet(parse_numeric!(5, u32, digits)?)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_feet() {
        assert_eq!(Altitude::from_bytes(b"05000"), Ok(Altitude::Feet(5000)));
    }

    #[test]
    fn parses_flight_level() {
        assert_eq!(
            Altitude::from_bytes(b"FL180"),
            Ok(Altitude::FlightLevel(180))
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(Altitude::from_bytes(b"5O00 ").is_err());
    }
}
