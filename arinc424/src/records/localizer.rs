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
use crate::{Numeric, Record};

/// 4.1.11 Airport and Heliport Localizer and Glide Slope (PI) primary record.
#[derive(Record)]
#[arinc424(literal(column = 6, value = " "), literal(column = 13, value = "I"))]
pub struct Localizer<'a> {
    #[arinc424(field = 5)]
    pub sec_code: SecCode,
    #[arinc424(skip(1))]
    pub arpt_ident: ArptHeliIdent<'a>,
    pub icao_code: IcaoCode<'a>,
    pub sub_code: SubCode<'a>,
    pub loc_ident: LocIdent<'a>,
    pub ils_category: Option<IlsCategory<'a>>,
    #[arinc424(skip(3))]
    pub cont_nr: ContNr<'a>,
    pub frequency: Frequency<'a>,
    pub runway_id: RunwayId<'a>,
    pub loc_latitude: Latitude<'a>,
    pub loc_longitude: Longitude<'a>,
    pub loc_brg: LocBrg,
    pub gs_latitude: Option<Latitude<'a>>,
    pub gs_longitude: Option<Longitude<'a>>,
    /// Localizer width in hundredth of degree.
    #[arinc424(field = 84)]
    pub loc_width: Option<Numeric<'a, 4>>,
    /// Glide slope angle in hundredth of degree.
    pub gs_angle: Option<Numeric<'a, 3>>,
    pub station_declination: Option<MagVar>,
    #[arinc424(field = 124)]
    pub frn: FileRecordNumber<'a>,
    pub cycle: Cycle,
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCALIZER: &'static [u8] = b"SUSAP KABQK2IIABQ1   011090RW08 N35022000W1063500000794N35023000W106370000         0500300E0130                            123472313";

    #[test]
    fn localizer_record() {
        let loc = Localizer::try_from(LOCALIZER).expect("localizer should parse");

        assert_eq!(loc.arpt_ident.as_str(), "KABQ");
        assert_eq!(loc.sub_code.kind(&loc.sec_code), Ok(SubCodeKind::Localizer));
        assert_eq!(loc.loc_ident.as_str(), "IABQ");
        assert_eq!(loc.ils_category.map(|cat| cat.as_str()), Some("1"));
        assert_eq!(loc.frequency.as_mhz(), Ok(110.9));
        assert_eq!(loc.runway_id.designator(), Ok("08"));
        assert_eq!(loc.loc_brg, LocBrg::Magnetic(79.4));
        assert!(loc.gs_latitude.is_some());
        assert_eq!(loc.loc_width.map(|w| w.as_u16()), Some(Ok(500)));
        assert_eq!(loc.gs_angle.map(|a| a.as_u16()), Some(Ok(300)));
        assert_eq!(loc.station_declination, Some(MagVar::East(13.0)));
    }
}
