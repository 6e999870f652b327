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

//! Decoding of ARINC 424 records into the navigation model.

use arinc424::records::RecordKind;
use log::trace;

use crate::error::{Error, Result};
use crate::nd::builder::CifpBuilder;
use crate::procedure::ProcedureKind;

mod airspace;
mod fields;
mod legs;
mod records;

use airspace::{AirspaceBuilder, FirBuilder};

/// Parses the record and converts it into the builder's entity.
macro_rules! decode {
    ($self:ident, $bytes:ident, $record:ident, $add:ident) => {{
        let record = arinc424::records::$record::try_from($bytes)?;
        $self.add_cycle(record.cycle.into());
        $self.$add(record.try_into()?);
    }};
}

impl CifpBuilder {
    /// Decodes the records of one kind in file order.
    ///
    /// # Errors
    ///
    /// Fails on the first record that can't be decoded, carrying the record.
    pub(crate) fn add_arinc424(&mut self, kind: RecordKind, rows: &[&[u8]]) -> Result<()> {
        match kind {
            RecordKind::ControlledAirspace => self.add_controlled_airspaces(rows),
            RecordKind::FirUir => self.add_firs(rows),
            _ => rows.iter().try_for_each(|bytes| {
                self.add_record(kind, bytes)
                    .map_err(|e| e.in_record(bytes))
            }),
        }
    }

    fn add_record(&mut self, kind: RecordKind, bytes: &[u8]) -> Result<()> {
        trace!(
            "decoding {kind:?} record {}",
            String::from_utf8_lossy(&bytes[..bytes.len().min(20)])
        );

        match kind {
            RecordKind::Airport => decode!(self, bytes, Airport, add_aerodrome),
            RecordKind::GridMora => decode!(self, bytes, GridMora, add_mora),
            RecordKind::Localizer => decode!(self, bytes, Localizer, add_navaid),
            RecordKind::NdbNavaid => decode!(self, bytes, NdbNavaid, add_navaid),
            RecordKind::Runway => decode!(self, bytes, Runway, add_runway),
            RecordKind::VhfNavaid => decode!(self, bytes, VhfNavaid, add_navaid),
            RecordKind::Waypoint => decode!(self, bytes, Waypoint, add_waypoint),
            RecordKind::Airway => {
                let record = arinc424::records::Airway::try_from(bytes)?;
                self.add_cycle(record.cycle.into());
                self.add_airway_row(legs::airway_row(record)?);
            }
            RecordKind::SID | RecordKind::STAR | RecordKind::Approach => {
                let record = arinc424::records::Procedure::try_from(bytes)?;
                self.add_cycle(record.cycle.into());
                let kind = match kind {
                    RecordKind::SID => ProcedureKind::Sid,
                    RecordKind::STAR => ProcedureKind::Star,
                    _ => ProcedureKind::Approach,
                };
                self.add_procedure_leg(legs::procedure_leg(record, kind)?);
            }
            // boundaries span several records
            RecordKind::ControlledAirspace | RecordKind::FirUir => {}
        }

        Ok(())
    }

    /// Merges contiguous records of the same center and multiple code into
    /// one airspace each.
    fn add_controlled_airspaces(&mut self, rows: &[&[u8]]) -> Result<()> {
        let mut current: Option<AirspaceBuilder> = None;

        for bytes in rows {
            let mut add = || -> Result<()> {
                let record = arinc424::records::ControlledAirspace::try_from(*bytes)?;
                self.add_cycle(record.cycle.into());

                let mut airspace = match current.take() {
                    Some(airspace) if airspace.continues(&record) => airspace,
                    Some(airspace) => {
                        self.add_airspace(airspace.build()?);
                        AirspaceBuilder::new(&record)
                    }
                    None => AirspaceBuilder::new(&record),
                };

                airspace.add_record(record)?;
                current = Some(airspace);
                Ok(())
            };

            add().map_err(|e: Error| e.in_record(bytes))?;
        }

        if let Some(airspace) = current {
            self.add_airspace(airspace.build()?);
        }

        Ok(())
    }

    /// Collects the boundary runs of each region.
    fn add_firs(&mut self, rows: &[&[u8]]) -> Result<()> {
        let mut current: Option<FirBuilder> = None;

        for bytes in rows {
            let mut add = || -> Result<()> {
                let record = arinc424::records::FirUir::try_from(*bytes)?;
                self.add_cycle(record.cycle.into());

                let mut fir = match current.take() {
                    Some(fir) if fir.ident() == record.fir_uir_ident.as_str() => fir,
                    Some(fir) => {
                        self.add_fir(fir.build()?);
                        FirBuilder::new(&record)
                    }
                    None => FirBuilder::new(&record),
                };

                fir.add_record(record)?;
                current = Some(fir);
                Ok(())
            };

            add().map_err(|e: Error| e.in_record(bytes))?;
        }

        if let Some(fir) = current {
            self.add_fir(fir.build()?);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AIRSPACE: &[u8] = b"SUSAUCK6TKJFK PAB  A00100     R N40394857W074144423N40413000W07409590000402450   GND  A07000MNEW YORK AREA A               676061703";

    #[test]
    fn attaches_record_to_errors() {
        let mut bytes = AIRSPACE.to_vec();
        bytes[32] = b'X';

        let mut builder = CifpBuilder::default();
        let error = builder
            .add_arinc424(RecordKind::ControlledAirspace, &[bytes.as_slice()])
            .expect_err("latitude should be invalid");

        assert!(matches!(error, Error::Format { record, .. } if record.starts_with("SUSAUCK6TKJFK")));
    }
}
