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

/// 5.35 NAVAID Class (CLASS)
///
/// The first column describes the VOR or NDB facility, the second the DME or
/// TACAN. The remaining columns describe coverage and voice.
pub type NavaidClass<'a> = Alphanumeric<'a, 5>;

impl<'a> NavaidClass<'a> {
    /// Returns `true` if the facility is a VOR.
    pub fn is_vor(&self) -> bool {
        self.0[0] == b'V'
    }

    /// Returns `true` if the facility is a NDB or locator.
    pub fn is_ndb(&self) -> bool {
        matches!(self.0[0], b'H' | b'M')
    }

    /// Returns `true` if the facility provides a distance, either as DME,
    /// TACAN or as DME collocated with an ILS or MLS.
    pub fn has_dme(&self) -> bool {
        matches!(self.0[1], b'D' | b'T' | b'M' | b'I' | b'N')
    }

    /// Returns `true` if the DME is associated to an ILS.
    pub fn is_ils_dme(&self) -> bool {
        self.0[1] == b'I'
    }
}
