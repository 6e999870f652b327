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

use crate::{Alphanumeric, Error, FixedField};

#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum SecCode {
    MORA,
    Navaid,
    Enroute,
    Heliport,
    Airport,
    CompanyRoute,
    Table,
    Airspace,
}

impl FixedField<'_> for SecCode {
    const LENGTH: usize = 1;

    fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        match bytes[0] {
            b'A' => Ok(Self::MORA),
            b'D' => Ok(Self::Navaid),
            b'E' => Ok(Self::Enroute),
            b'H' => Ok(Self::Heliport),
            b'P' => Ok(Self::Airport),
            b'R' => Ok(Self::CompanyRoute),
            b'T' => Ok(Self::Table),
            b'U' => Ok(Self::Airspace),
            byte => Err(Error::InvalidCharacter {
                field: "Section Code",
                byte,
                expected: "SEC CODE according to ARINC 424-23 5.4",
            }),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum SubCodeKind {
    // MORA
    GridMORA,
    // Navaid
    VHFNavaid,
    NDBNavaid,
    // Enroute
    Waypoint,
    Airway,
    // Heliport,
    Pad,
    // Airport
    ReferencePoint,
    Gate,
    Runway,
    Localizer,
    TerminalNDB,
    // Heliport, Airport
    TerminalWaypoint,
    SID,
    STAR,
    Approach,
    MSA,
    // CompanyRoute
    CompanyRoute,
    AlternateRecord,
    // Tables
    CruisingTable,
    // Airspace
    ControlledAirspace,
    FirUir,
}

pub type SubCode<'a> = Alphanumeric<'a, 1>;

impl<'a> SubCode<'a> {
    /// Subsection code kind for the section.
    ///
    /// # Errors
    ///
    /// Will return an error if the subsection code is invalid for the section.
    pub fn kind(&self, sec_code: &SecCode) -> Result<SubCodeKind, Error> {
        use SecCode::*;

        let kind = match (self.first(), sec_code) {
            (b' ', Navaid) => SubCodeKind::VHFNavaid,
            (b' ', CompanyRoute) => SubCodeKind::CompanyRoute,
            (b'A', Enroute) => SubCodeKind::Waypoint,
            (b'A', Heliport) => SubCodeKind::Pad,
            (b'A', Airport) => SubCodeKind::ReferencePoint,
            (b'A', CompanyRoute) => SubCodeKind::AlternateRecord,
            (b'B', Navaid) => SubCodeKind::NDBNavaid,
            (b'B', Airport) => SubCodeKind::Gate,
            (b'C', Heliport | Airport) => SubCodeKind::TerminalWaypoint,
            (b'C', Table) => SubCodeKind::CruisingTable,
            (b'C', Airspace) => SubCodeKind::ControlledAirspace,
            (b'D', Heliport | Airport) => SubCodeKind::SID,
            (b'E', Heliport | Airport) => SubCodeKind::STAR,
            (b'F', Heliport | Airport) => SubCodeKind::Approach,
            (b'F', Airspace) => SubCodeKind::FirUir,
            (b'G', Airport) => SubCodeKind::Runway,
            (b'I', Airport) => SubCodeKind::Localizer,
            (b'N', Airport) => SubCodeKind::TerminalNDB,
            (b'R', Enroute) => SubCodeKind::Airway,
            (b'S', MORA) => SubCodeKind::GridMORA,
            (b'S', Heliport | Airport) => SubCodeKind::MSA,
            (byte, _) => {
                return Err(Error::InvalidCharacter {
                    field: "Subsection Code",
                    byte,
                    expected: "SUB CODE according to ARINC 424-23 5.5",
                })
            }
        };

        Ok(kind)
    }
}
