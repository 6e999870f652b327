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

/// 4.1.2 VHF Navaid (D) primary record.
///
/// Describes VOR, VOR/DME, VORTAC, DME and TACAN stations and the DME part of
/// an ILS/DME.
#[derive(Record)]
#[arinc424(
    literal(column = 6, value = " "),
    literal(column = 13, value = " "),
    literal(column = 18, value = "  ")
)]
pub struct VhfNavaid<'a> {
    #[arinc424(field = 5)]
    pub sec_code: SecCode,
    #[arinc424(skip(1))]
    pub arpt_ident: Option<ArptHeliIdent<'a>>,
    pub arpt_icao_code: Option<IcaoCode<'a>>,
    #[arinc424(skip(1))]
    pub vor_ident: NavaidIdent<'a>,
    #[arinc424(skip(2))]
    pub icao_code: IcaoCode<'a>,
    pub cont_nr: ContNr<'a>,
    pub frequency: Frequency<'a>,
    pub class: NavaidClass<'a>,
    pub latitude: Option<Latitude<'a>>,
    pub longitude: Option<Longitude<'a>>,
    pub dme_ident: Option<DmeIdent<'a>>,
    pub dme_latitude: Option<Latitude<'a>>,
    pub dme_longitude: Option<Longitude<'a>>,
    pub station_declination: Option<MagVar>,
    pub dme_elevation: Option<Elevation<'a>>,
    #[arinc424(field = 94)]
    pub vor_name: NameField<'a>,
    pub frn: FileRecordNumber<'a>,
    pub cycle: Cycle,
}
