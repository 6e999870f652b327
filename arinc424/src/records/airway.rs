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

/// 4.1.6 Enroute Airways (ER) primary record.
///
/// Each record is one fix of the airway, ordered by the sequence number.
#[derive(Record)]
#[arinc424(literal(column = 6, value = "R"), literal(column = 7, value = "       "))]
pub struct Airway<'a> {
    #[arinc424(field = 5)]
    pub sec_code: SecCode,
    pub sub_code: SubCode<'a>,
    #[arinc424(skip(7))]
    pub route_ident: RouteIdent<'a>,
    #[arinc424(field = 26)]
    pub seq_nr: SequenceNumber<'a, 4>,
    pub fix_ident: FixIdent<'a>,
    pub fix_icao_code: IcaoCode<'a>,
    pub fix_sec_code: SecCode,
    pub fix_sub_code: SubCode<'a>,
    pub cont_nr: ContNr<'a>,
    pub desc_code: WaypointDesc<'a>,
    #[arinc424(skip(1))]
    pub route_type: RouteType<'a>,
    #[arinc424(skip(1))]
    pub direction_restriction: Option<DirectionRestriction>,
    #[arinc424(field = 51)]
    pub recommended_navaid: Option<NavaidIdent<'a>>,
    pub recommended_navaid_icao_code: Option<IcaoCode<'a>>,
    pub rnp: Option<RequiredNavigationPerformance<'a>>,
    #[arinc424(field = 63)]
    pub theta: Option<Theta<'a>>,
    pub rho: Option<Rho<'a>>,
    pub outbound_course: Option<Course>,
    pub route_distance_from: Option<RteHoldDist>,
    pub inbound_course: Option<Course>,
    #[arinc424(field = 84)]
    pub min_altitude_1: Option<Altitude>,
    pub min_altitude_2: Option<Altitude>,
    pub max_altitude: Option<Altitude>,
    #[arinc424(field = 124)]
    pub frn: FileRecordNumber<'a>,
    pub cycle: Cycle,
}
