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

mod airport;
mod airway;
mod controlled_airspace;
mod fir_uir;
mod grid_mora;
mod localizer;
mod ndb_navaid;
mod procedure;
mod runway;
mod vhf_navaid;
mod waypoint;

pub use airport::Airport;
pub use airway::Airway;
pub use controlled_airspace::ControlledAirspace;
pub use fir_uir::FirUir;
pub use grid_mora::GridMora;
pub use localizer::Localizer;
pub use ndb_navaid::NdbNavaid;
pub use procedure::Procedure;
pub use runway::Runway;
pub use vhf_navaid::VhfNavaid;
pub use waypoint::Waypoint;

use log::trace;

use crate::record::RECORD_LENGTH;

#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum RecordKind {
    Airport,
    Airway,
    Approach,
    ControlledAirspace,
    FirUir,
    GridMora,
    Localizer,
    NdbNavaid,
    Runway,
    SID,
    STAR,
    VhfNavaid,
    Waypoint,
}

/// Returns `true` if the continuation number marks a primary record.
#[inline]
fn is_primary(cont_nr: u8) -> bool {
    matches!(cont_nr, b'0' | b'1')
}

pub struct Records<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Records<'a> {
    /// Creates a new record iterator from a byte slice.
    ///
    /// The iterator yields primary records only. Continuation records and
    /// record types without a parser are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use crate::arinc424::records::{Airport, RecordKind, Records};
    /// # use crate::arinc424::Error;
    /// #
    /// # fn parse_records(data: &[u8]) -> Result<(), Error> {
    /// for (kind, bytes) in Records::new(data) {
    ///     match kind {
    ///         RecordKind::Airport => {
    ///             let arpt = Airport::try_from(bytes)?;
    ///             // now you can read the airport's fields or convert it
    ///             // to some other type
    ///         },
    ///         _ => {},
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Classifies a single 132 byte record.
    pub fn kind_of(record: &[u8]) -> Option<RecordKind> {
        if record.len() < RECORD_LENGTH {
            return None;
        }

        let sec_code = record[4];
        let sub_code = record[5];

        let kind = match (sec_code, sub_code) {
            (b'D', b' ') => RecordKind::VhfNavaid,
            (b'D', b'B') | (b'P', b'N') => RecordKind::NdbNavaid,
            (b'E', b'A') | (b'P', b'C') => RecordKind::Waypoint,
            (b'E', b'R') => RecordKind::Airway,
            (b'A', b'S') => return Some(RecordKind::GridMora),
            (b'U', b'F') => RecordKind::FirUir,
            (b'U', b'C') => RecordKind::ControlledAirspace,
            (b'P' | b'H', b' ') => match record[12] {
                b'A' => RecordKind::Airport,
                b'C' => RecordKind::Waypoint,
                b'D' => RecordKind::SID,
                b'E' => RecordKind::STAR,
                b'F' => RecordKind::Approach,
                b'G' if sec_code == b'P' => RecordKind::Runway,
                b'I' if sec_code == b'P' => RecordKind::Localizer,
                _ => return None,
            },
            _ => return None,
        };

        let cont_nr = match kind {
            RecordKind::Airway | RecordKind::SID | RecordKind::STAR | RecordKind::Approach => {
                record[38]
            }
            RecordKind::FirUir => record[19],
            RecordKind::ControlledAirspace => record[24],
            _ => record[21],
        };

        is_primary(cont_nr).then_some(kind)
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = (RecordKind, &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        while self.pos + RECORD_LENGTH <= self.data.len() {
            // Standard or tailored record type
            match self.data[self.pos] {
                b'S' | b'T' => {
                    let record = &self.data[self.pos..self.pos + RECORD_LENGTH];
                    self.pos += RECORD_LENGTH;

                    match Self::kind_of(record) {
                        Some(kind) => return Some((kind, record)),
                        None => trace!(
                            "skipping record {}",
                            String::from_utf8_lossy(&record[..13])
                        ),
                    }
                }
                _ => {
                    // Skip byte (likely newline or invalid data)
                    self.pos += 1;
                }
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AIRPORT: &str = "SUSAP KJFKK6AJFK     0     145YHN40382374W073464329W013000013         1800018000C    MNAR    JOHN F KENNEDY INTL           300671912";
    const RUNWAY: &str = "SUSAP KJFKK6GRW04L   0120790440 N40372318W073470505         -0028300012046057200IIHIQ1                                     305541709";

    #[test]
    fn iterates_over_lines() {
        let data = format!("{AIRPORT}\n{RUNWAY}\r\n");
        let kinds: Vec<RecordKind> = Records::new(data.as_bytes()).map(|(k, _)| k).collect();
        assert_eq!(kinds, vec![RecordKind::Airport, RecordKind::Runway]);
    }

    #[test]
    fn skips_continuation_records() {
        let mut continuation = RUNWAY.to_owned();
        continuation.replace_range(21..22, "2");
        let data = format!("{continuation}\n{AIRPORT}\n");
        let kinds: Vec<RecordKind> = Records::new(data.as_bytes()).map(|(k, _)| k).collect();
        assert_eq!(kinds, vec![RecordKind::Airport]);
    }

    #[test]
    fn classifies_procedures() {
        let mut sid = AIRPORT.to_owned();
        sid.replace_range(12..13, "D");
        sid.replace_range(38..39, "1");
        assert_eq!(Records::kind_of(sid.as_bytes()), Some(RecordKind::SID));
    }
}
