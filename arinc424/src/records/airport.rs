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

/// 4.1.7 Airport Reference Point (PA) and 4.2.1 Heliport (HA) primary record.
#[derive(Record)]
#[arinc424(literal(column = 6, value = " "), literal(column = 13, value = "A"))]
pub struct Airport<'a> {
    #[arinc424(field = 5)]
    pub sec_code: SecCode,
    #[arinc424(skip(1))]
    pub arpt_ident: ArptHeliIdent<'a>,
    pub icao_code: IcaoCode<'a>,
    pub sub_code: SubCode<'a>,
    pub iata: Iata<'a>,
    #[arinc424(skip(5))]
    pub cont_nr: ContNr<'a>,
    pub speed_limit_altitude: Option<Altitude>,
    /// Longest runway in hundreds of feet.
    pub longest_rwy: Option<Numeric<'a, 3>>,
    pub ifr: Alphanumeric<'a, 1>,
    pub longest_rwy_surface: Alphanumeric<'a, 1>,
    pub latitude: Latitude<'a>,
    pub longitude: Longitude<'a>,
    pub mag_var: Option<MagVar>,
    pub elevation: Elevation<'a>,
    pub speed_limit: Option<SpeedLimit<'a>>,
    pub recommended_navaid: Option<NavaidIdent<'a>>,
    pub recommended_navaid_icao_code: Option<IcaoCode<'a>>,
    pub transition_altitude: Option<Numeric<'a, 5>>,
    pub transition_level: Option<Numeric<'a, 5>>,
    pub public_military: Alphanumeric<'a, 1>,
    #[arinc424(field = 94)]
    pub airport_name: NameField<'a>,
    pub frn: FileRecordNumber<'a>,
    pub cycle: Cycle,
}

impl<'a> Airport<'a> {
    /// Returns `true` if this is a heliport record.
    pub fn is_heliport(&self) -> bool {
        self.sec_code == SecCode::Heliport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AIRPORT: &'static [u8] = b"SUSAP KJFKK6AJFK     0     145YHN40382374W073464329W013000013         1800018000C    MNAR    JOHN F KENNEDY INTL           300671912";

    #[test]
    fn airport_record() {
        let arpt = Airport::try_from(AIRPORT).expect("airport should parse");

        assert_eq!(arpt.sec_code, SecCode::Airport);
        assert_eq!(arpt.arpt_ident.as_str(), "KJFK");
        assert_eq!(arpt.icao_code.as_str(), "K6");
        assert_eq!(
            arpt.sub_code.kind(&arpt.sec_code),
            Ok(SubCodeKind::ReferencePoint)
        );
        assert_eq!(arpt.iata.as_str(), "JFK");
        assert_eq!(arpt.cont_nr.as_str(), "0");
        assert_eq!(arpt.speed_limit_altitude, None);
        assert_eq!(arpt.longest_rwy.map(|l| l.as_u16()), Some(Ok(145)));
        assert_eq!(arpt.ifr.as_str(), "Y");
        assert_eq!(arpt.latitude.as_decimal(), Ok(40.63992777777778));
        assert_eq!(arpt.longitude.as_decimal(), Ok(-73.77869166666666));
        assert_eq!(arpt.mag_var, Some(MagVar::West(13.0)));
        assert_eq!(arpt.elevation.as_feet(), Ok(13));
        assert_eq!(arpt.recommended_navaid, None);
        assert_eq!(arpt.transition_altitude.map(|ta| ta.as_u32()), Some(Ok(18000)));
        assert_eq!(arpt.transition_level.map(|tl| tl.as_u32()), Some(Ok(18000)));
        assert_eq!(arpt.public_military.as_str(), "C");
        assert_eq!(arpt.airport_name.as_str(), "JOHN F KENNEDY INTL");
        assert_eq!(arpt.frn.as_u32(), Ok(30067));
        assert_eq!(arpt.cycle.year(), 19);
        assert_eq!(arpt.cycle.cycle(), 12);
        assert!(!arpt.is_heliport());
    }

    #[test]
    fn rejects_non_airport_subsection() {
        let mut bytes = AIRPORT.to_vec();
        bytes[12] = b'G';
        assert!(matches!(
            Airport::try_from(bytes.as_slice()),
            Err(crate::Error::InvalidLiteral { column: 13, .. })
        ));
    }
}
