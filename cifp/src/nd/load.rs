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

//! Two phase load of the navigation database.
//!
//! The first phase decodes the records of each kind in an independent task.
//! The results are merged serially, the aerodromes decoded and the fix index
//! built. The second phase assembles airways and procedures against the
//! completed index.

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use arinc424::records::{RecordKind, Records};
use dashmap::DashMap;
use log::{debug, info};
use rayon::prelude::*;

use super::builder::{CifpBuilder, PendingLegs};
use super::Cifp;
use crate::error::Result;
use crate::geom::Coordinate;
use crate::procedure::{Airway, AirwayRow, Procedure, ProcedureLeg};

/// Record kinds decoded by one task of the first phase.
const PHASE_ONE: [&[RecordKind]; 10] = [
    &[RecordKind::FirUir],
    &[RecordKind::GridMora],
    &[RecordKind::ControlledAirspace],
    &[RecordKind::Runway],
    &[
        RecordKind::VhfNavaid,
        RecordKind::NdbNavaid,
        RecordKind::Localizer,
    ],
    &[RecordKind::SID],
    &[RecordKind::STAR],
    &[RecordKind::Approach],
    &[RecordKind::Airway],
    &[RecordKind::Waypoint],
];

/// Options of the navigation database load.
///
/// ```
/// use cifp::LoadOptions;
///
/// let options = LoadOptions::default()
///     .parallel(false)
///     .airports(["KABQ", "KSAF"]);
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LoadOptions {
    parallel: bool,
    airports: Option<HashSet<String>>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            airports: None,
        }
    }
}

impl LoadOptions {
    /// Runs the tasks of each phase on the rayon thread pool or serially on
    /// the calling thread.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Restricts runways, localizers and procedures to the airports.
    pub fn airports<I, S>(mut self, airports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.airports = Some(airports.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Returns `true` if the record of the kind is decoded.
    fn includes(&self, kind: RecordKind, bytes: &[u8]) -> bool {
        let Some(airports) = &self.airports else {
            return true;
        };

        match kind {
            RecordKind::Runway
            | RecordKind::Localizer
            | RecordKind::SID
            | RecordKind::STAR
            | RecordKind::Approach => bytes
                .get(6..10)
                .and_then(|ident| std::str::from_utf8(ident).ok())
                .is_some_and(|ident| airports.contains(ident.trim_end())),
            _ => true,
        }
    }
}

/// Runs the tasks serially or in parallel and collects their results in
/// task order.
fn run<T, R, F>(parallel: bool, tasks: Vec<T>, task: F) -> Result<Vec<R>>
where
    T: Send,
    R: Send,
    F: Fn(T) -> Result<R> + Sync + Send,
{
    if parallel {
        tasks.into_par_iter().map(task).collect()
    } else {
        tasks.into_iter().map(task).collect()
    }
}

enum Assembly {
    Airways(Vec<AirwayRow>),
    Procedures(Vec<ProcedureLeg>),
}

impl Cifp {
    /// Loads the navigation database from ARINC 424 records.
    ///
    /// # Errors
    ///
    /// Fails on the first record that can't be decoded or on the first leg
    /// whose fixes can't be resolved.
    pub fn load(data: &[u8]) -> Result<Self> {
        Self::load_with(data, &LoadOptions::default())
    }

    /// Same as [`load`](Self::load) with options.
    pub fn load_with(data: &[u8], options: &LoadOptions) -> Result<Self> {
        let start = Instant::now();

        let mut buckets: HashMap<RecordKind, Vec<&[u8]>> = HashMap::new();
        for (kind, bytes) in Records::new(data) {
            if options.includes(kind, bytes) {
                buckets.entry(kind).or_default().push(bytes);
            }
        }

        let rows = |kind: &RecordKind| buckets.get(kind).map(Vec::as_slice).unwrap_or_default();

        // phase 1
        let phase = Instant::now();
        let builders = run(options.parallel, PHASE_ONE.to_vec(), |kinds| {
            let started = Instant::now();
            let mut builder = CifpBuilder::default();

            for kind in kinds {
                builder.add_arinc424(*kind, rows(kind))?;
            }

            debug!("decoded {kinds:?} in {:?}", started.elapsed());
            Ok(builder)
        })?;
        debug!("phase 1 finished in {:?}", phase.elapsed());

        let mut builder = CifpBuilder::default();
        for other in builders {
            builder.merge(other);
        }
        builder.add_arinc424(RecordKind::Airport, rows(&RecordKind::Airport))?;

        let (mut cifp, pending) = builder.build();
        debug!("indexed {} fix identifiers", cifp.index.len());

        // phase 2
        let phase = Instant::now();
        let PendingLegs {
            sids,
            stars,
            approaches,
            airways: airway_rows,
        } = pending;

        let airports: HashMap<String, Coordinate> = cifp
            .aerodromes
            .iter()
            .map(|(ident, arpt)| (ident.clone(), arpt.coordinate))
            .collect();

        let procedures: DashMap<String, Vec<Procedure>> = DashMap::new();
        let airways: DashMap<String, Vec<Airway>> = DashMap::new();

        let tasks = vec![
            Assembly::Airways(airway_rows),
            Assembly::Procedures(sids),
            Assembly::Procedures(stars),
            Assembly::Procedures(approaches),
        ];

        run(options.parallel, tasks, |task| {
            let started = Instant::now();

            match task {
                Assembly::Airways(rows) => {
                    for airway in Airway::assemble(rows, &cifp.index)? {
                        airways.entry(airway.ident.clone()).or_default().push(airway);
                    }
                    debug!("assembled airways in {:?}", started.elapsed());
                }
                Assembly::Procedures(legs) => {
                    for procedure in Procedure::assemble(legs, &cifp.index, &airports)? {
                        procedures
                            .entry(procedure.airport.clone())
                            .or_default()
                            .push(procedure);
                    }
                    debug!("assembled procedures in {:?}", started.elapsed());
                }
            }

            Ok(())
        })?;
        debug!("phase 2 finished in {:?}", phase.elapsed());

        cifp.procedures = procedures
            .into_iter()
            .map(|(airport, mut procedures)| {
                procedures.sort_by(|a, b| (a.kind, &a.ident).cmp(&(b.kind, &b.ident)));
                (airport, procedures)
            })
            .collect();
        cifp.airways = airways.into_iter().collect();

        info!(
            "loaded {} aerodromes, {} navaids, {} waypoints, {} procedures, {} airways, \
             {} airspaces and {} FIRs of cycle {} in {:?}",
            cifp.aerodromes.len(),
            cifp.navaids.values().map(Vec::len).sum::<usize>(),
            cifp.waypoints.len(),
            cifp.procedures.values().map(Vec::len).sum::<usize>(),
            cifp.airways.values().map(Vec::len).sum::<usize>(),
            cifp.airspaces.len(),
            cifp.firs.values().map(Vec::len).sum::<usize>(),
            cifp.cycle
                .map(|cycle| cycle.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
            start.elapsed()
        );

        Ok(cifp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RUNWAY: &[u8] = b"SUSAP KJFKK6GRW04L   0120790440 N40372318W073470505         -0028300012046057200IIHIQ1                                     305541709";

    #[test]
    fn filters_airport_records() {
        let options = LoadOptions::default().airports(["KABQ"]);
        assert!(!options.includes(RecordKind::Runway, RUNWAY));
        assert!(options.includes(RecordKind::Waypoint, RUNWAY));

        let options = LoadOptions::default().airports(["KJFK"]);
        assert!(options.includes(RecordKind::Runway, RUNWAY));
        assert!(LoadOptions::default().includes(RecordKind::Runway, RUNWAY));
    }

    #[test]
    fn runs_tasks_in_order() {
        for parallel in [true, false] {
            let results = run(parallel, vec![1, 2, 3], |n| Ok(n * 2)).expect("tasks should succeed");
            assert_eq!(results, vec![2, 4, 6]);
        }
    }
}
