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

/// 4.1.3 NDB Navaid (DB) and 4.1.12 Airport and Heliport Terminal NDB (PN)
/// primary record.
#[derive(Record)]
#[arinc424(literal(column = 13, value = " "), literal(column = 18, value = "  "))]
pub struct NdbNavaid<'a> {
    #[arinc424(field = 5)]
    pub sec_code: SecCode,
    pub sub_code: SubCode<'a>,
    pub arpt_ident: Option<ArptHeliIdent<'a>>,
    pub arpt_icao_code: Option<IcaoCode<'a>>,
    #[arinc424(skip(1))]
    pub ndb_ident: NavaidIdent<'a>,
    #[arinc424(skip(2))]
    pub icao_code: IcaoCode<'a>,
    pub cont_nr: ContNr<'a>,
    pub frequency: Frequency<'a>,
    pub class: NavaidClass<'a>,
    pub latitude: Latitude<'a>,
    pub longitude: Longitude<'a>,
    #[arinc424(field = 75)]
    pub mag_var: Option<MagVar>,
    #[arinc424(field = 94)]
    pub ndb_name: NameField<'a>,
    pub frn: FileRecordNumber<'a>,
    pub cycle: Cycle,
}

#[cfg(test)]
mod tests {
    use super::*;

    const NDB: &'static [u8] = b"SUSADB       GO    K2003650H  W N35023760W106480980                       E0100           NARGOLDEN                        123462313";

    #[test]
    fn ndb_record() {
        let ndb = NdbNavaid::try_from(NDB).expect("ndb should parse");

        assert_eq!(ndb.sec_code, SecCode::Navaid);
        assert_eq!(ndb.sub_code.kind(&ndb.sec_code), Ok(SubCodeKind::NDBNavaid));
        assert_eq!(ndb.arpt_ident, None);
        assert_eq!(ndb.ndb_ident.as_str(), "GO");
        assert_eq!(ndb.cont_nr.as_str(), "0");
        assert_eq!(ndb.frequency.as_khz(), Ok(365.0));
        assert!(ndb.class.is_ndb());
        assert_eq!(ndb.mag_var, Some(MagVar::East(10.0)));
        assert_eq!(ndb.ndb_name.as_str(), "GOLDEN");
    }
}
