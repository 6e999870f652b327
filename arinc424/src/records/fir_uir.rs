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
use crate::{Alphanumeric, Record};

/// 4.1.17 FIR/UIR (UF) primary record.
///
/// Each record is one point of the region's boundary.
#[derive(Record)]
#[arinc424(literal(column = 6, value = "F"))]
pub struct FirUir<'a> {
    #[arinc424(field = 5)]
    pub sec_code: SecCode,
    pub sub_code: SubCode<'a>,
    pub fir_uir_ident: FirUirIdent<'a>,
    pub fir_uir_address: Alphanumeric<'a, 4>,
    pub fir_uir_ind: FirUirInd,
    pub seq_nr: SequenceNumber<'a, 4>,
    pub cont_nr: ContNr<'a>,
    pub adjacent_fir: Option<FirUirIdent<'a>>,
    pub adjacent_uir: Option<FirUirIdent<'a>>,
    #[arinc424(field = 33)]
    pub bdry_via: BoundaryVia,
    pub latitude: Option<Latitude<'a>>,
    pub longitude: Option<Longitude<'a>>,
    pub arc_origin_latitude: Option<Latitude<'a>>,
    pub arc_origin_longitude: Option<Longitude<'a>>,
    pub arc_dist: Option<ArcDistance<'a>>,
    pub arc_brg: Option<ArcBearing<'a>>,
    pub fir_upper_limit: Option<LowerUpperLimit>,
    pub uir_lower_limit: Option<LowerUpperLimit>,
    pub uir_upper_limit: Option<LowerUpperLimit>,
    #[arinc424(field = 99)]
    pub fir_uir_name: Option<NameDesc<'a>>,
    pub frn: FileRecordNumber<'a>,
    pub cycle: Cycle,
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIR: &'static [u8] = b"SUSAUFKZABKZABF00101KZLA        G N35023760W106480980                           FL180             ALBUQUERQUE              123502313";

    #[test]
    fn fir_record() {
        let fir = FirUir::try_from(FIR).expect("fir should parse");

        assert_eq!(fir.sub_code.kind(&fir.sec_code), Ok(SubCodeKind::FirUir));
        assert_eq!(fir.fir_uir_ident.as_str(), "KZAB");
        assert_eq!(fir.fir_uir_ind, FirUirInd::Fir);
        assert_eq!(fir.seq_nr.as_u16(), Ok(10));
        assert_eq!(fir.cont_nr.as_str(), "1");
        assert_eq!(fir.adjacent_fir.map(|f| f.as_str()), Some("KZLA"));
        assert_eq!(fir.adjacent_uir, None);
        assert_eq!(fir.bdry_via.path, BoundaryPath::GreatCircle);
        assert!(!fir.bdry_via.return_to_origin);
        assert!(fir.arc_origin_latitude.is_none());
        assert_eq!(fir.fir_upper_limit, Some(LowerUpperLimit::FlightLevel(180)));
        assert_eq!(
            fir.fir_uir_name.map(|name| name.as_str()),
            Some("ALBUQUERQUE")
        );
    }
}
