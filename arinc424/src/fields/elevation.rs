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

use crate::{Alphanumeric, Error};

/// 5.55 Airport/Heliport Elevation, 5.67 Landing Threshold Elevation and
/// 5.90 DME Elevation in feet.
///
/// A leading `-` marks an elevation below mean sea level.
pub type Elevation<'a> = Alphanumeric<'a, 5>;

impl<'a> Elevation<'a> {
    /// Returns the elevation in feet.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is not a signed number.
    pub fn as_feet(&self) -> Result<i32, Error> {
        match self.first() {
            b'-' => parse_numeric!(4, i32, &self.0[1..5]).map(|ft| -ft),
            _ => {
                // values are right-justified and may be space-padded
                let start = self.0.iter().take_while(|&&b| b == b' ').count();
                let digits = &self.0[start..];
                if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
                    return Err(Error::NotANumber {
                        bytes: self.0.to_vec(),
                    });
                }
                Ok(digits
                    .iter()
                    .fold(0i32, |acc, b| acc * 10 + (b & 0x0F) as i32))
            }
        }
    }
}
