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

//! Navigation data decoded from a CIFP snapshot.
//!
//! [`Cifp`] is built once by [`Cifp::load`] and immutable afterwards. All
//! fixes, navaids and runway thresholds are resolvable by identifier through
//! the [`FixIndex`].

use std::collections::HashMap;
use std::sync::Arc;

use geo::Contains;

use crate::error::Result;
use crate::geom::Coordinate;
use crate::procedure::{Airway, Procedure};

mod aerodrome;
mod airac_cycle;
mod airspace;
mod builder;
mod convert;
mod fix;
mod index;
mod load;
mod mora;
mod navaid;
mod runway;
mod waypoint;

pub use aerodrome::{Aerodrome, AerodromeKind, Usage};
pub use airac_cycle::AiracCycle;
pub use airspace::{Airspace, AirspaceType, Fir, FirIndicator};
pub use fix::Fix;
pub use index::{Anchor, FixIndex, NavaidIndex};
pub use load::LoadOptions;
pub use mora::GridMora;
pub use navaid::{Dme, GlideSlope, Navaid, NavaidKind};
pub use runway::Runway;
pub use waypoint::{Region, Waypoint, WaypointUsage};

/// The navigation database.
#[derive(Clone, Debug, Default)]
pub struct Cifp {
    index: FixIndex,
    navaids: HashMap<String, Vec<Arc<Navaid>>>,
    waypoints: Vec<Arc<Waypoint>>,
    runways: HashMap<String, Vec<Arc<Runway>>>,
    aerodromes: HashMap<String, Arc<Aerodrome>>,
    procedures: HashMap<String, Vec<Procedure>>,
    airways: HashMap<String, Vec<Airway>>,
    airspaces: Vec<Airspace>,
    firs: HashMap<String, Vec<Fir>>,
    moras: Vec<GridMora>,
    cycle: Option<AiracCycle>,
}

impl Cifp {
    /// Returns the index of all fixes.
    pub fn index(&self) -> &FixIndex {
        &self.index
    }

    /// Returns all waypoints, navaids and runway thresholds with the
    /// identifier.
    pub fn fixes(&self, ident: &str) -> &[Fix] {
        self.index.get(ident)
    }

    /// Resolves the identifier to one fix.
    ///
    /// # Errors
    ///
    /// Fails if no fix has the identifier or the anchor can't choose among
    /// several.
    pub fn resolve(&self, ident: &str, anchor: &Anchor) -> Result<&Fix> {
        self.index.resolve(ident, anchor)
    }

    pub fn navaids(&self, ident: &str) -> &[Arc<Navaid>] {
        self.navaids.get(ident).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn waypoints(&self) -> &[Arc<Waypoint>] {
        &self.waypoints
    }

    /// Returns the SIDs, STARs and approaches of the airport.
    pub fn procedures(&self, airport: &str) -> &[Procedure] {
        self.procedures
            .get(airport)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the procedure of the airport by identifier.
    pub fn procedure(&self, airport: &str, ident: &str) -> Option<&Procedure> {
        self.procedures(airport).iter().find(|p| p.ident == ident)
    }

    /// Returns all airways with the identifier.
    ///
    /// Airways of different regions may share an identifier.
    pub fn airways(&self, ident: &str) -> &[Airway] {
        self.airways.get(ident).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn runways(&self, airport: &str) -> &[Arc<Runway>] {
        self.runways.get(airport).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the runway of the airport, e.g. `04L`.
    pub fn runway(&self, airport: &str, designator: &str) -> Option<&Arc<Runway>> {
        self.runways(airport)
            .iter()
            .find(|rwy| rwy.designator == designator)
    }

    /// Returns the other end of the runway.
    pub fn opposite_runway(&self, runway: &Runway) -> Option<&Arc<Runway>> {
        let designator = runway.opposite_designator()?;
        self.runway(&runway.airport, &designator)
    }

    pub fn aerodrome(&self, ident: &str) -> Option<&Arc<Aerodrome>> {
        self.aerodromes.get(ident)
    }

    pub fn aerodromes(&self) -> impl Iterator<Item = &Arc<Aerodrome>> {
        self.aerodromes.values()
    }

    pub fn airspaces(&self) -> &[Airspace] {
        &self.airspaces
    }

    /// Returns all airspaces whose polygon contains the coordinate.
    ///
    /// Only the lateral boundary is checked.
    pub fn airspaces_at(&self, coordinate: &Coordinate) -> Vec<&Airspace> {
        let point: geo::Point<f64> = (*coordinate).into();

        self.airspaces
            .iter()
            .filter(|airspace| airspace.polygon.contains(&point))
            .collect()
    }

    /// Returns the FIR and UIR records of the region.
    pub fn fir(&self, ident: &str) -> &[Fir] {
        self.firs.get(ident).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the identifiers of the regions adjacent to the region.
    pub fn neighbours(&self, ident: &str) -> Vec<&str> {
        let mut neighbours: Vec<&str> = self
            .fir(ident)
            .iter()
            .flat_map(|fir| fir.neighbours.iter().map(String::as_str))
            .collect();

        neighbours.sort_unstable();
        neighbours.dedup();
        neighbours
    }

    /// Returns the minimum off-route altitude in feet at the coordinate.
    pub fn mora_at(&self, coordinate: &Coordinate) -> Option<u32> {
        self.moras.iter().find_map(|mora| mora.at(coordinate))
    }

    /// Returns the oldest AIRAC cycle of all records.
    pub fn cycle(&self) -> Option<AiracCycle> {
        self.cycle
    }
}
