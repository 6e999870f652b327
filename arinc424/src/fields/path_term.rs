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

/// 5.21 Path and Termination (PATH TERM)
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum PathTerm {
    /// Initial fix
    IF,
    /// Track to a fix
    TF,
    /// Course to a fix
    CF,
    /// Direct to a fix
    DF,
    /// Fix to an altitude
    FA,
    /// Track from a fix for a distance
    FC,
    /// Track from a fix to a DME distance
    FD,
    /// From a fix to a manual termination
    FM,
    /// Course to an altitude
    CA,
    /// Course to a DME distance
    CD,
    /// Course to an intercept
    CI,
    /// Course to a radial termination
    CR,
    /// Constant radius arc
    RF,
    /// Arc to a fix
    AF,
    /// Heading to an altitude termination
    VA,
    /// Heading to a DME distance termination
    VD,
    /// Heading to an intercept
    VI,
    /// Heading to a manual termination
    VM,
    /// Heading to a radial termination
    VR,
    /// Procedure turn
    PI,
    /// Holding with altitude termination
    HA,
    /// Holding with single circuit termination
    HF,
    /// Holding with manual termination
    HM,
}

impl FixedField<'_> for PathTerm {
    const LENGTH: usize = 2;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        match &bytes[..Self::LENGTH] {
            b"IF" => Ok(Self::IF),
            b"TF" => Ok(Self::TF),
            b"CF" => Ok(Self::CF),
            b"DF" => Ok(Self::DF),
            b"FA" => Ok(Self::FA),
            b"FC" => Ok(Self::FC),
            b"FD" => Ok(Self::FD),
            b"FM" => Ok(Self::FM),
            b"CA" => Ok(Self::CA),
            b"CD" => Ok(Self::CD),
            b"CI" => Ok(Self::CI),
            b"CR" => Ok(Self::CR),
            b"RF" => Ok(Self::RF),
            b"AF" => Ok(Self::AF),
            b"VA" => Ok(Self::VA),
            b"VD" => Ok(Self::VD),
            b"VI" => Ok(Self::VI),
            b"VM" => Ok(Self::VM),
            b"VR" => Ok(Self::VR),
            b"PI" => Ok(Self::PI),
            b"HA" => Ok(Self::HA),
            b"HF" => Ok(Self::HF),
            b"HM" => Ok(Self::HM),
            bytes => Err(Error::InvalidVariant {
                field: "Path and Termination",
                bytes: bytes.to_vec(),
                expected: "PATH TERM according to ARINC 424-17 5.21",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_path_terms() {
        assert_eq!(PathTerm::from_bytes(b"TF"), Ok(PathTerm::TF));
        assert_eq!(PathTerm::from_bytes(b"HM"), Ok(PathTerm::HM));
    }

    #[test]
    fn rejects_unknown_path_term() {
        assert!(PathTerm::from_bytes(b"XX").is_err());
    }
}
