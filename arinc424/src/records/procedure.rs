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
use crate::{Alphanumeric, Numeric, Record};

/// 4.1.9 Airport SID (PD), STAR (PE) and Approach Procedure (PF) primary
/// record and its heliport counterparts (HD, HE, HF).
///
/// Each record is one leg of the procedure, ordered by the sequence number
/// within a transition.
#[derive(Record)]
#[arinc424(literal(column = 6, value = " "), literal(column = 26, value = " "))]
pub struct Procedure<'a> {
    #[arinc424(field = 5)]
    pub sec_code: SecCode,
    #[arinc424(skip(1))]
    pub arpt_ident: ArptHeliIdent<'a>,
    pub icao_code: IcaoCode<'a>,
    pub sub_code: SubCode<'a>,
    pub procedure_ident: ProcedureIdent<'a>,
    pub route_type: RouteType<'a>,
    pub transition_ident: Option<TransitionIdent<'a>>,
    #[arinc424(skip(1))]
    pub seq_nr: SequenceNumber<'a, 3>,
    pub fix_ident: Option<FixIdent<'a>>,
    pub fix_icao_code: Option<IcaoCode<'a>>,
    pub fix_sec_code: Option<SecCode>,
    pub fix_sub_code: Option<SubCode<'a>>,
    pub cont_nr: ContNr<'a>,
    pub desc_code: WaypointDesc<'a>,
    pub turn_dir: Option<TurnDir>,
    pub rnp: Option<RequiredNavigationPerformance<'a>>,
    pub path_term: PathTerm,
    pub turn_dir_valid: Option<Alphanumeric<'a, 1>>,
    pub recommended_navaid: Option<NavaidIdent<'a>>,
    pub recommended_navaid_icao_code: Option<IcaoCode<'a>>,
    pub arc_radius: Option<ArcRadius<'a>>,
    pub theta: Option<Theta<'a>>,
    pub rho: Option<Rho<'a>>,
    pub course: Option<Course>,
    pub rte_hold_dist: Option<RteHoldDist>,
    pub recommended_navaid_sec_code: Option<SecCode>,
    pub recommended_navaid_sub_code: Option<SubCode<'a>>,
    #[arinc424(field = 83)]
    pub alt_desc: AltDesc,
    pub atc_ind: Option<Alphanumeric<'a, 1>>,
    pub altitude_1: Option<Altitude>,
    pub altitude_2: Option<Altitude>,
    pub transition_altitude: Option<Numeric<'a, 5>>,
    pub speed_limit: Option<SpeedLimit<'a>>,
    pub vertical_angle: Option<Alphanumeric<'a, 4>>,
    pub center_fix: Option<FixIdent<'a>>,
    pub multiple_code: Option<MultiCd<'a>>,
    pub center_fix_icao_code: Option<IcaoCode<'a>>,
    pub center_fix_sec_code: Option<SecCode>,
    pub center_fix_sub_code: Option<SubCode<'a>>,
    #[arinc424(field = 118)]
    pub speed_limit_desc: SpeedLimitDesc,
    #[arinc424(field = 124)]
    pub frn: FileRecordNumber<'a>,
    pub cycle: Cycle,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SID: &'static [u8] = b"SUSAP KABQK2DABQ1  5RW08  010ALISSK2PC1E  FR   CF ABQ K2      0800012007940050D   + 07000          210               -     123492313";

    #[test]
    fn procedure_record() {
        let leg = Procedure::try_from(SID).expect("procedure should parse");

        assert_eq!(leg.arpt_ident.as_str(), "KABQ");
        assert_eq!(leg.sub_code.kind(&leg.sec_code), Ok(SubCodeKind::SID));
        assert_eq!(leg.procedure_ident.as_str(), "ABQ1");
        assert_eq!(leg.route_type.as_str(), "5");
        assert_eq!(leg.transition_ident.map(|t| t.as_str()), Some("RW08"));
        assert_eq!(leg.seq_nr.as_u16(), Ok(10));
        assert_eq!(leg.fix_ident.map(|f| f.as_str()), Some("ALISS"));
        assert_eq!(leg.fix_sec_code, Some(SecCode::Airport));
        assert_eq!(leg.cont_nr.as_str(), "1");
        assert!(leg.desc_code.is_final_approach_fix());
        assert_eq!(leg.turn_dir, Some(TurnDir::Right));
        assert_eq!(leg.path_term, PathTerm::CF);
        assert_eq!(leg.recommended_navaid.map(|n| n.as_str()), Some("ABQ"));
        assert!(leg.arc_radius.is_none());
        assert_eq!(leg.theta.map(|t| t.deg()), Some(Ok(80.0)));
        assert_eq!(leg.rho.map(|r| r.nm()), Some(Ok(12.0)));
        assert_eq!(leg.course, Some(Course::Magnetic(79.4)));
        assert_eq!(leg.rte_hold_dist, Some(RteHoldDist::Distance(5.0)));
        assert_eq!(leg.recommended_navaid_sec_code, Some(SecCode::Navaid));
        assert_eq!(leg.alt_desc, AltDesc::AtOrAbove);
        assert_eq!(leg.altitude_1, Some(Altitude::Feet(7000)));
        assert_eq!(leg.altitude_2, None);
        assert_eq!(leg.speed_limit.map(|s| s.as_u16()), Some(Ok(210)));
        assert_eq!(leg.speed_limit_desc, SpeedLimitDesc::AtOrBelow);
        assert_eq!(leg.center_fix, None);
    }
}
