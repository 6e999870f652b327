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

/// Parses the first `n` bytes of a field as unsigned decimal of type `t`.
///
/// Fails with [`Error::NotANumber`](crate::Error::NotANumber) unless all of
/// them are ASCII digits. Leading zeros and blanks are not skipped.
macro_rules! parse_numeric {
    ($n:tt, $t:ty, $b:expr) => {{
        let digits: &[u8] = &$b[..$n];
        if digits.iter().all(u8::is_ascii_digit) {
            Ok(digits
                .iter()
                .fold(0 as $t, |number, &digit| number * 10 + (digit - b'0') as $t))
        } else {
            Err($crate::Error::NotANumber {
                bytes: digits.to_vec(),
            })
        }
    }};
}
