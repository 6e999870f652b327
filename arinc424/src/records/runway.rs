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

/// 4.1.10 Runway (PG) primary record.
#[derive(Record)]
#[arinc424(literal(column = 6, value = " "), literal(column = 13, value = "G"))]
pub struct Runway<'a> {
    #[arinc424(field = 5)]
    pub sec_code: SecCode,
    #[arinc424(skip(1))]
    pub arpt_ident: ArptHeliIdent<'a>,
    pub icao_code: IcaoCode<'a>,
    pub sub_code: SubCode<'a>,
    pub runway_id: RunwayId<'a>,
    #[arinc424(skip(3))]
    pub cont_nr: ContNr<'a>,
    /// Runway length in feet.
    pub runway_length: Numeric<'a, 5>,
    pub rwy_brg: RwyBrg,
    #[arinc424(skip(1))]
    pub threshold_latitude: Latitude<'a>,
    pub threshold_longitude: Longitude<'a>,
    #[arinc424(field = 67)]
    pub threshold_elevation: Option<Elevation<'a>>,
    /// Displaced threshold distance in feet.
    pub displaced_threshold: Option<Numeric<'a, 4>>,
    /// Threshold crossing height in feet.
    pub tch: Option<Numeric<'a, 2>>,
    /// Runway width in feet.
    pub width: Option<Numeric<'a, 3>>,
    pub tch_value_ind: Option<Alphanumeric<'a, 1>>,
    pub loc_ident: Option<LocIdent<'a>>,
    pub ils_category: Option<IlsCategory<'a>>,
    #[arinc424(field = 124)]
    pub frn: FileRecordNumber<'a>,
    pub cycle: Cycle,
}

#[cfg(test)]
mod tests {
    use super::*;

    const KJFK_RW04L: &[u8] = b"SUSAP KJFKK6GRW04L   0120790440 N40372318W073470505         -0028300012046057200IIHIQ1                                     305541709";

    #[test]
    fn reads_runway_geometry() {
        let rwy = Runway::try_from(KJFK_RW04L).expect("runway should parse");

        assert_eq!(rwy.sub_code.kind(&rwy.sec_code), Ok(SubCodeKind::Runway));
        assert_eq!(
            (rwy.arpt_ident.as_str(), rwy.runway_id.designator()),
            ("KJFK", Ok("04L"))
        );
        assert_eq!(rwy.rwy_brg, RwyBrg::Magnetic(44.0));
        assert_eq!(rwy.runway_length.as_u32(), Ok(12079));
        assert_eq!(rwy.width.map(|w| w.as_u16()), Some(Ok(200)));
        assert_eq!(rwy.threshold_latitude.as_decimal(), Ok(40.623105555555554));
        assert_eq!(rwy.threshold_elevation.map(|e| e.as_feet()), Some(Ok(12)));
        assert_eq!(rwy.displaced_threshold.map(|d| d.as_u16()), Some(Ok(460)));
        assert_eq!(rwy.tch.map(|tch| tch.as_u8()), Some(Ok(57)));
    }

    #[test]
    fn reads_landing_system() {
        let rwy = Runway::try_from(KJFK_RW04L).expect("runway should parse");

        assert_eq!(rwy.loc_ident.map(|l| l.as_str()), Some("IHIQ"));
        assert_eq!(rwy.ils_category.map(|c| c.as_str()), Some("1"));
        assert_eq!(rwy.frn.as_u32(), Ok(30554));
    }
}
