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

//! Procedures and airways assembled from their legs.
//!
//! The legs of a procedure are stored in file order. A leg whose sequence
//! number doesn't increase starts the next transition of the procedure.

use std::collections::HashMap;
use std::fmt;

use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ResolutionError, Result};
use crate::geom::{Coordinate, NamedCoordinate};
use crate::guidance::Radial;
use crate::nd::{Anchor, FixIndex};

mod airway;
mod endpoint;
mod instruction;
mod restriction;

pub use airway::{Airway, AirwayDirection, AirwayLeg};
pub(crate) use airway::AirwayRow;
pub use endpoint::{Endpoint, Resolved, Unresolved};
pub use instruction::*;
pub use restriction::*;

/// The transition name that applies to all runways or entries.
const ALL: &str = "ALL";

/// The name of a computed intercept point.
const INTERCEPT: &str = "(INTC)";

/// Sets the endpoint of intercept legs to where their course meets the
/// inbound course of the following leg.
///
/// The intercept starts at the endpoint of the previous leg. Legs without a
/// previous endpoint or a following leg with a course to a fix are left
/// without endpoint.
///
/// # Errors
///
/// Fails if a course lacks its variation or the courses don't intersect.
fn resolve_intercepts(legs: &mut [Instruction]) -> Result<()> {
    for i in 1..legs.len().saturating_sub(1) {
        let leg = &legs[i];

        if leg.endpoint.is_some() || leg.path_terminator.termination() != Termination::Intercept {
            continue;
        }

        let (Some(origin), Some(Via::Course(course))) = (
            legs[i - 1].endpoint.as_ref().and_then(Endpoint::coordinate),
            leg.via.as_ref(),
        ) else {
            continue;
        };

        let next = &legs[i + 1];
        let (Some(fix), Some(Via::Course(inbound))) = (
            next.endpoint.as_ref().and_then(Endpoint::coordinate),
            next.via.as_ref(),
        ) else {
            continue;
        };

        let point = Radial::new(fix, inbound.reciprocal()).get_intersection_point(&origin, course)?;
        trace!("{} intercepts at {point:?}", leg.path_terminator);

        legs[i].endpoint = Some(Endpoint::Resolved(Resolved::Coordinate(NamedCoordinate {
            name: INTERCEPT.to_string(),
            coordinate: point,
        })));
    }

    Ok(())
}

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ProcedureKind {
    Sid,
    Star,
    Approach,
}

impl fmt::Display for ProcedureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sid => write!(f, "SID"),
            Self::Star => write!(f, "STAR"),
            Self::Approach => write!(f, "approach"),
        }
    }
}

/// The position of a transition within a procedure.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TransitionRole {
    /// Flown first, e.g. the runway transition of a SID.
    Inbound,
    /// The route shared by all transitions.
    Common,
    /// Flown last, e.g. the enroute transition of a SID.
    Outbound,
}

impl TransitionRole {
    /// Returns the role of a route type within a procedure kind.
    pub fn of(kind: ProcedureKind, route_type: char) -> Self {
        match (kind, route_type) {
            (ProcedureKind::Sid, '0' | '1' | '4' | 'F' | 'T') => Self::Inbound,
            (ProcedureKind::Sid, '3' | '6' | 'S' | 'V') => Self::Outbound,
            (ProcedureKind::Star, '1' | '4' | '7' | 'F') => Self::Inbound,
            (ProcedureKind::Star, '3' | '6' | '9' | 'S') => Self::Outbound,
            (ProcedureKind::Approach, 'A') => Self::Inbound,
            _ => Self::Common,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transition {
    /// The runway or fix that names the transition.
    pub name: Option<String>,
    pub route_type: char,
    pub role: TransitionRole,
    pub legs: Vec<Instruction>,
}

impl Transition {
    /// Returns `true` if the transition is the requested one.
    ///
    /// A transition for both runways of a parallel runway pair, e.g. `RW26B`,
    /// matches `RW26L`, `RW26C` and `RW26R`.
    fn is(&self, requested: &str) -> bool {
        let Some(name) = self.name.as_deref() else {
            return false;
        };

        if name == requested {
            return true;
        }

        match (name.strip_suffix('B'), requested.strip_prefix("RW")) {
            (Some(runway), Some(_)) if name.starts_with("RW") => requested
                .strip_suffix(['L', 'C', 'R'])
                .is_some_and(|requested| requested == runway),
            _ => false,
        }
    }
}

/// A leg of a procedure as decoded from one record.
#[derive(Clone, PartialEq, Debug)]
pub struct ProcedureLeg {
    pub airport: String,
    pub kind: ProcedureKind,
    pub ident: String,
    pub route_type: char,
    pub transition: Option<String>,
    pub sequence: u16,
    pub instruction: Instruction,
}

/// A SID, STAR or approach of an airport.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Procedure {
    pub airport: String,
    pub ident: String,
    pub kind: ProcedureKind,
    pub transitions: Vec<Transition>,
}

impl Procedure {
    /// Assembles the procedures from their legs in file order.
    ///
    /// Legs are grouped by airport and procedure identifier and resolved
    /// against the fixes nearest to the airport. A sequence number that
    /// doesn't increase starts a new transition. Intercept legs end where
    /// they meet the course of the following leg.
    ///
    /// # Errors
    ///
    /// Fails if a leg can't be resolved.
    pub fn assemble(
        legs: impl IntoIterator<Item = ProcedureLeg>,
        index: &FixIndex,
        airports: &HashMap<String, Coordinate>,
    ) -> Result<Vec<Procedure>> {
        let mut procedures: Vec<Procedure> = Vec::new();
        let mut positions: HashMap<(String, String), usize> = HashMap::new();
        let mut last_sequence: HashMap<usize, u16> = HashMap::new();

        for leg in legs {
            let anchor = airports
                .get(&leg.airport)
                .map_or(Anchor::None, |coordinate| Anchor::Coordinate(*coordinate));
            let instruction = leg.instruction.resolve(index, &anchor)?;

            let position = *positions
                .entry((leg.airport.clone(), leg.ident.clone()))
                .or_insert_with(|| {
                    procedures.push(Procedure {
                        airport: leg.airport.clone(),
                        ident: leg.ident.clone(),
                        kind: leg.kind,
                        transitions: Vec::new(),
                    });
                    procedures.len() - 1
                });

            let procedure = &mut procedures[position];
            let regression = last_sequence
                .insert(position, leg.sequence)
                .map_or(true, |previous| leg.sequence <= previous);

            match procedure.transitions.last_mut() {
                Some(transition) if !regression => transition.legs.push(instruction),
                _ => procedure.transitions.push(Transition {
                    name: leg.transition,
                    route_type: leg.route_type,
                    role: TransitionRole::of(leg.kind, leg.route_type),
                    legs: vec![instruction],
                }),
            }
        }

        for transition in procedures.iter_mut().flat_map(|p| p.transitions.iter_mut()) {
            resolve_intercepts(&mut transition.legs)?;
        }

        Ok(procedures)
    }

    fn transitions(&self, role: TransitionRole) -> impl Iterator<Item = &Transition> + Clone {
        self.transitions.iter().filter(move |t| t.role == role)
    }

    /// Returns the names of the transitions with the role.
    pub fn transition_names(&self, role: TransitionRole) -> Vec<&str> {
        self.transitions(role)
            .filter_map(|t| t.name.as_deref())
            .collect()
    }

    /// Returns every pair of inbound and outbound transition.
    ///
    /// A procedure without inbound or outbound transitions pairs `None` on
    /// that side.
    pub fn enumerate_transitions(
        &self,
    ) -> impl Iterator<Item = (Option<&str>, Option<&str>)> + '_ {
        let names = |role| {
            let names: Vec<Option<&str>> = self
                .transitions(role)
                .map(|t| t.name.as_deref())
                .collect();
            if names.is_empty() {
                vec![None]
            } else {
                names
            }
        };

        let inbound = names(TransitionRole::Inbound);
        let outbound = names(TransitionRole::Outbound);

        inbound
            .into_iter()
            .flat_map(move |i| outbound.clone().into_iter().map(move |o| (i, o)))
    }

    fn select(&self, role: TransitionRole, requested: &str) -> Result<&Transition> {
        let mut transitions = self.transitions(role);

        transitions
            .clone()
            .find(|t| t.is(requested))
            .or_else(|| transitions.find(|t| t.name.as_deref() == Some(ALL)))
            .ok_or_else(|| {
                ResolutionError::UnknownTransition {
                    procedure: self.ident.clone(),
                    transition: requested.to_string(),
                }
                .into()
            })
    }

    /// Returns the legs from the inbound over the common to the outbound
    /// transition.
    ///
    /// A named transition that doesn't exist falls back to the `ALL`
    /// transition. The initial fix of a transition that starts where the
    /// previous one ended is skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::UnknownTransition`] if neither the
    /// transition nor an `ALL` transition exists.
    pub fn select_route(
        &self,
        inbound: Option<&str>,
        outbound: Option<&str>,
    ) -> Result<Vec<Instruction>> {
        let mut parts: Vec<&Transition> = Vec::new();

        if let Some(inbound) = inbound {
            parts.push(self.select(TransitionRole::Inbound, inbound)?);
        }

        parts.extend(self.transitions(TransitionRole::Common));

        if let Some(outbound) = outbound {
            parts.push(self.select(TransitionRole::Outbound, outbound)?);
        }

        let mut route: Vec<Instruction> = Vec::new();
        for part in parts {
            let mut legs = part.legs.iter().peekable();

            if let (Some(last), Some(first)) = (route.last(), legs.peek()) {
                if first.path_terminator == PathTerminator::InitialFix
                    && first.endpoint.as_ref().map(Endpoint::ident)
                        == last.endpoint.as_ref().map(Endpoint::ident)
                {
                    legs.next();
                }
            }

            route.extend(legs.cloned());
        }

        Ok(route)
    }

    /// Returns the routes of all transition pairs.
    pub fn select_all_routes(&self) -> Result<Vec<Vec<Instruction>>> {
        self.enumerate_transitions()
            .map(|(inbound, outbound)| self.select_route(inbound, outbound))
            .collect()
    }
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.airport, self.kind, self.ident)
    }
}
