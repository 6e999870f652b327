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

use std::collections::HashMap;
use std::sync::Arc;

use log::trace;

use super::*;
use crate::procedure::{AirwayRow, ProcedureKind, ProcedureLeg};

/// Collects decoded entities of the first load phase.
///
/// Each task of the phase fills its own builder. The builders are merged
/// into one before the fix index is built.
#[derive(Debug, Default)]
pub(crate) struct CifpBuilder {
    waypoints: Vec<Waypoint>,
    navaids: Vec<Navaid>,
    runways: Vec<Runway>,
    aerodromes: Vec<Aerodrome>,
    airspaces: Vec<Airspace>,
    firs: Vec<Fir>,
    moras: Vec<GridMora>,
    legs: Vec<ProcedureLeg>,
    airway_rows: Vec<AirwayRow>,
    cycle: Option<AiracCycle>,
}

/// Legs that are assembled in the second load phase.
#[derive(Debug, Default)]
pub(crate) struct PendingLegs {
    pub sids: Vec<ProcedureLeg>,
    pub stars: Vec<ProcedureLeg>,
    pub approaches: Vec<ProcedureLeg>,
    pub airways: Vec<AirwayRow>,
}

impl CifpBuilder {
    pub(crate) fn add_cycle(&mut self, cycle: AiracCycle) {
        self.cycle = Some(self.cycle.map_or(cycle, |c| c.min(cycle)));
    }

    pub(crate) fn add_waypoint(&mut self, wp: Waypoint) {
        self.waypoints.push(wp);
    }

    pub(crate) fn add_navaid(&mut self, navaid: Navaid) {
        self.navaids.push(navaid);
    }

    pub(crate) fn add_runway(&mut self, rwy: Runway) {
        self.runways.push(rwy);
    }

    pub(crate) fn add_aerodrome(&mut self, arpt: Aerodrome) {
        self.aerodromes.push(arpt);
    }

    pub(crate) fn add_airspace(&mut self, airspace: Airspace) {
        self.airspaces.push(airspace);
    }

    pub(crate) fn add_fir(&mut self, fir: Fir) {
        self.firs.push(fir);
    }

    pub(crate) fn add_mora(&mut self, mora: GridMora) {
        self.moras.push(mora);
    }

    pub(crate) fn add_procedure_leg(&mut self, leg: ProcedureLeg) {
        self.legs.push(leg);
    }

    pub(crate) fn add_airway_row(&mut self, row: AirwayRow) {
        self.airway_rows.push(row);
    }

    /// Appends everything the other builder collected.
    pub(crate) fn merge(&mut self, other: CifpBuilder) {
        self.waypoints.extend(other.waypoints);
        self.navaids.extend(other.navaids);
        self.runways.extend(other.runways);
        self.aerodromes.extend(other.aerodromes);
        self.airspaces.extend(other.airspaces);
        self.firs.extend(other.firs);
        self.moras.extend(other.moras);
        self.legs.extend(other.legs);
        self.airway_rows.extend(other.airway_rows);

        if let Some(cycle) = other.cycle {
            self.add_cycle(cycle);
        }
    }

    /// Builds the navigation data without procedures and airways.
    ///
    /// Collocated ILS DMEs are attached to their localizer, aerodromes take
    /// the variation of the nearest navaid and runway bearings the variation
    /// of their aerodrome. The legs are returned to be assembled against the
    /// fix index.
    pub(crate) fn build(self) -> (Cifp, PendingLegs) {
        let navaids: Vec<Arc<Navaid>> = link_ils_dme(self.navaids)
            .into_iter()
            .map(Arc::new)
            .collect();
        let navaid_index = NavaidIndex::new(navaids.iter());

        let aerodromes: HashMap<String, Arc<Aerodrome>> = self
            .aerodromes
            .into_iter()
            .map(|mut arpt| {
                if let Some(variation) = navaid_index
                    .nearest(&arpt.coordinate, |navaid| navaid.variation.is_some())
                    .and_then(|navaid| navaid.variation)
                {
                    arpt.variation = Some(variation);
                }
                (arpt.ident.clone(), Arc::new(arpt))
            })
            .collect();

        let mut runways: HashMap<String, Vec<Arc<Runway>>> = HashMap::new();
        for mut rwy in self.runways {
            let variation = aerodromes.get(&rwy.airport).and_then(|arpt| arpt.variation);
            rwy.bearing = rwy.bearing.with_variation(variation);
            runways
                .entry(rwy.airport.clone())
                .or_default()
                .push(Arc::new(rwy));
        }

        let waypoints: Vec<Arc<Waypoint>> = self.waypoints.into_iter().map(Arc::new).collect();

        let index = FixIndex::new(
            waypoints
                .iter()
                .cloned()
                .map(Fix::Waypoint)
                .chain(navaids.iter().cloned().map(Fix::Navaid))
                .chain(runways.values().flatten().cloned().map(Fix::Runway)),
        );

        let mut by_ident: HashMap<String, Vec<Arc<Navaid>>> = HashMap::new();
        for navaid in navaids {
            by_ident.entry(navaid.ident.clone()).or_default().push(navaid);
        }

        let mut firs: HashMap<String, Vec<Fir>> = HashMap::new();
        for fir in self.firs {
            firs.entry(fir.ident.clone()).or_default().push(fir);
        }

        let mut pending = PendingLegs {
            airways: self.airway_rows,
            ..Default::default()
        };
        for leg in self.legs {
            match leg.kind {
                ProcedureKind::Sid => pending.sids.push(leg),
                ProcedureKind::Star => pending.stars.push(leg),
                ProcedureKind::Approach => pending.approaches.push(leg),
            }
        }

        let cifp = Cifp {
            index,
            navaids: by_ident,
            waypoints,
            runways,
            aerodromes,
            procedures: HashMap::new(),
            airways: HashMap::new(),
            airspaces: self.airspaces,
            firs,
            moras: self.moras,
            cycle: self.cycle,
        };

        (cifp, pending)
    }
}

/// Moves the DME of an ILS/DME into the localizer with the same identifier
/// at the same airport.
fn link_ils_dme(navaids: Vec<Navaid>) -> Vec<Navaid> {
    let (dmes, mut navaids): (Vec<Navaid>, Vec<Navaid>) = navaids.into_iter().partition(|n| {
        n.kind == NavaidKind::Dme && n.airport.is_some()
    });

    let mut unlinked = Vec::new();

    for dme in dmes {
        let localizer = navaids.iter_mut().find(|n| {
            n.is_ils() && n.dme.is_none() && n.ident == dme.ident && n.airport == dme.airport
        });

        match localizer {
            Some(localizer) => {
                trace!("linking DME {} to localizer", dme.ident);
                localizer.dme = dme.dme;
            }
            None => unlinked.push(dme),
        }
    }

    navaids.extend(unlinked);
    navaids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Course;

    fn navaid(ident: &str, kind: NavaidKind, airport: Option<&str>) -> Navaid {
        Navaid {
            ident: ident.to_string(),
            kind,
            name: String::new(),
            icao_code: "K2".to_string(),
            airport: airport.map(str::to_string),
            frequency: 110.1,
            coordinate: coord!(35.0, -106.6),
            variation: None,
            dme: None,
        }
    }

    fn ils() -> NavaidKind {
        NavaidKind::Ils {
            runway: "08".to_string(),
            bearing: Course::magnetic(80.0),
            category: Some('1'),
            glide_slope: None,
        }
    }

    #[test]
    fn links_ils_dme_at_same_airport() {
        let mut dme = navaid("IABQ", NavaidKind::Dme, Some("KABQ"));
        dme.dme = Some(Dme {
            ident: "IABQ".to_string(),
            coordinate: coord!(35.01, -106.6),
            elevation: Some(5300),
        });

        let navaids = link_ils_dme(vec![
            navaid("IABQ", ils(), Some("KABQ")),
            navaid("IABQ", ils(), Some("KSAF")),
            dme,
        ]);

        assert_eq!(navaids.len(), 2);
        assert!(navaids[0].has_dme());
        assert!(!navaids[1].has_dme());
    }

    #[test]
    fn keeps_cycle_minimum() {
        let mut builder = CifpBuilder::default();
        builder.add_cycle(AiracCycle::new(23, 13));

        let mut other = CifpBuilder::default();
        other.add_cycle(AiracCycle::new(23, 12));
        builder.merge(other);

        assert_eq!(builder.cycle, Some(AiracCycle::new(23, 12)));
    }
}
