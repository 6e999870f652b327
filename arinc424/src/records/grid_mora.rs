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

use crate::fields::*;
use crate::Record;

/// 4.1.19 Grid MORA (AS) record.
#[derive(Record)]
#[arinc424(
    literal(column = 6, value = "S"),
    literal(column = 7, value = "       "),
    literal(column = 21, value = "          ")
)]
pub struct GridMora<'a> {
    #[arinc424(field = 5)]
    pub sec_code: SecCode,
    pub sub_code: SubCode<'a>,
    #[arinc424(field = 14)]
    pub start_latitude: StartLatitude<'a>,
    pub start_longitude: StartLongitude<'a>,
    #[arinc424(field = 31)]
    pub mora: MoraValues<'a>,
    #[arinc424(field = 124)]
    pub frn: FileRecordNumber<'a>,
    pub cycle: Cycle,
}
