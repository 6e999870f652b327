// SPDX-License-Identifier: Apache-2.0
// Copyright 2024, 2026 Joe Pearson
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
use crate::{Error, Record};

#[derive(Record)]
pub struct Waypoint<'a> {
    #[arinc424(field = 5)]
    pub sec_code: SecCode,
    sub_code_6: Option<SubCode<'a>>,
    pub regn_code: RegnCode<'a>,
    /// The ICAO code can either be in column 11 or 20.
    icao_code_11: Option<IcaoCode<'a>>,
    sub_code_13: Option<SubCode<'a>>,
    pub fix_ident: FixIdent<'a>,
    /// The ICAO code can either be in column 11 or 20.
    #[arinc424(field = 20)]
    icao_code_20: Option<IcaoCode<'a>>,
    #[arinc424(field = 22)]
    pub cont_nr: ContNr<'a>,
    #[arinc424(skip(4))]
    pub waypoint_type: WaypointType<'a>,
    #[arinc424(skip(1))]
    pub waypoint_usage: WaypointUsage,
    #[arinc424(skip(1))]
    pub latitude: Latitude<'a>,
    pub longitude: Longitude<'a>,
    #[arinc424(skip(23))]
    pub mag_var: Option<MagVar>,
    #[arinc424(field = 99)]
    pub name_desc: NameDesc<'a>,
    pub frn: FileRecordNumber<'a>,
    pub cycle: Cycle,
}

impl<'a> Waypoint<'a> {
    /// Returns the subsection code of the waypoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is neither in column 6 nor column 13.
    pub fn sub_code(&self) -> Result<SubCode<'a>, Error> {
        self.sub_code_6
            .or(self.sub_code_13)
            .ok_or(Error::InvalidVariant {
                field: "Subsection Code",
                bytes: Vec::new(),
                expected: "SUB CODE in column 6 or 13",
            })
    }

    /// Returns the ICAO code of the waypoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is neither in column 11 nor column 20.
    pub fn icao_code(&self) -> Result<IcaoCode<'a>, Error> {
        self.icao_code_11
            .or(self.icao_code_20)
            .ok_or(Error::InvalidVariant {
                field: "ICAO Code",
                bytes: Vec::new(),
                expected: "ICAO code in column 11 or 20",
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EDDH_W1: &[u8] = b"SEURPCEDDHED W1    ED0    V     N53341894E009404512                                 WGE           WHISKEY1                 122922407";
    const AAARG: &[u8] = b"SUSAEAENRT   AAARG K 0    W   B N32413827W078030466                       W0093     NAR           AAARG                    270862407";

    fn kind(wp: &Waypoint) -> Result<SubCodeKind, Error> {
        wp.sub_code().and_then(|sub_code| sub_code.kind(&wp.sec_code))
    }

    #[test]
    fn terminal_waypoint_takes_codes_from_columns_13_and_20() {
        let wp = Waypoint::try_from(EDDH_W1).expect("terminal waypoint should parse");

        assert_eq!(kind(&wp), Ok(SubCodeKind::TerminalWaypoint));
        assert_eq!(wp.regn_code.as_str(), "EDDH");
        assert_eq!(wp.icao_code().map(|icao| icao.as_str()), Ok("ED"));
        assert_eq!(wp.fix_ident.as_str(), "W1");
        assert_eq!(wp.waypoint_usage, WaypointUsage::Terminal);
        assert!(!wp.waypoint_usage.is_enroute());
        assert_eq!(wp.latitude.as_decimal(), Ok(53.57192777777778));
        assert_eq!(wp.longitude.as_decimal(), Ok(9.6792));
        assert_eq!(wp.mag_var, None);
        assert_eq!(wp.name_desc.as_str(), "WHISKEY1");
    }

    #[test]
    fn enroute_waypoint_takes_codes_from_columns_6_and_11() {
        let wp = Waypoint::try_from(AAARG).expect("enroute waypoint should parse");

        assert_eq!(kind(&wp), Ok(SubCodeKind::Waypoint));
        assert_eq!(wp.regn_code.as_str(), "ENRT");
        assert_eq!(wp.icao_code().map(|icao| icao.as_str()), Ok("K"));
        assert_eq!(wp.waypoint_type.as_str(), "W");
        assert!(wp.waypoint_usage.is_enroute());
        assert_eq!(wp.latitude.as_decimal(), Ok(32.69396388888889));
        assert_eq!(wp.longitude.as_decimal(), Ok(-78.05129444444444));
        assert_eq!(wp.mag_var, Some(MagVar::West(9.3)));
        assert_eq!((wp.cycle.year(), wp.cycle.cycle()), (24, 7));
    }
}
