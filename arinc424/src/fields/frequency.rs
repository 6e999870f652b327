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

/// 5.34 VOR/NDB Frequency
///
/// VHF frequencies are stored in 10 kHz, NDB frequencies in 100 Hz.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Frequency<'a>(Numeric<'a, 5>);

impl<'a> Frequency<'a> {
    /// Returns the frequency of a VHF navaid in MHz.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is not a number.
    pub fn as_mhz(&self) -> Result<f32, Error> {
        self.0.as_u32().map(|f| f as f32 / 100.0)
    }

    /// Returns the frequency of a NDB in kHz.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is not a number.
    pub fn as_khz(&self) -> Result<f32, Error> {
        self.0.as_u32().map(|f| f as f32 / 10.0)
    }
}

impl<'a> FixedField<'a> for Frequency<'a> {
    const LENGTH: usize = 5;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        Ok(Self(Numeric::from_bytes(bytes)?))
    }
}
