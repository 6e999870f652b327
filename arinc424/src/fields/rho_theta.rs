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

use crate::{Error, FixedField, Numeric};

/// 5.25 Rho, the distance from the recommended navaid in tenth of NM.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Rho<'a>(Numeric<'a, 4>);

impl<'a> Rho<'a> {
    pub fn nm(&self) -> Result<f32, Error> {
        self.0.as_u32().map(|rho| rho as f32 / 10.0)
    }
}

impl<'a> FixedField<'a> for Rho<'a> {
    const LENGTH: usize = 4;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        Ok(Self(Numeric::from_bytes(bytes)?))
    }
}

/// 5.24 Theta, the magnetic bearing from the recommended navaid in tenth of
/// degree.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Theta<'a>(Numeric<'a, 4>);

impl<'a> Theta<'a> {
    pub fn deg(&self) -> Result<f32, Error> {
        self.0.as_u32().map(|theta| theta as f32 / 10.0)
    }
}

impl<'a> FixedField<'a> for Theta<'a> {
    const LENGTH: usize = 4;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        Ok(Self(Numeric::from_bytes(bytes)?))
    }
}

/// 5.204 Arc Radius in thousandth of NM.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct ArcRadius<'a>(Numeric<'a, 6>);

impl<'a> ArcRadius<'a> {
    pub fn nm(&self) -> Result<f32, Error> {
        self.0.as_u32().map(|radius| radius as f32 / 1000.0)
    }
}

impl<'a> FixedField<'a> for ArcRadius<'a> {
    const LENGTH: usize = 6;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        Ok(Self(Numeric::from_bytes(bytes)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scales_values() {
        assert_eq!(Rho::from_bytes(b"0123").and_then(|r| r.nm()), Ok(12.3));
        assert_eq!(Theta::from_bytes(b"2705").and_then(|t| t.deg()), Ok(270.5));
        assert_eq!(
            ArcRadius::from_bytes(b"004500").and_then(|r| r.nm()),
            Ok(4.5)
        );
    }
}
