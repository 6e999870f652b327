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

use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{in_reference_of, Aircraft, Guidance};
use crate::constants::*;
use crate::error::Result;
use crate::geom::{normalize, signed_difference, Coordinate, Course};
use crate::procedure::{LegLength, TurnDirection};

/// The segment of the holding pattern that is flown.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Phase {
    /// Flying to the holding fix for the first time.
    #[default]
    Entry,
    Outbound,
    Inbound,
}

/// The holding pattern entry procedure.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EntryType {
    Direct,
    Parallel,
    Teardrop,
}

/// The state of an aircraft flying a [`Racetrack`].
#[derive(Clone, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RacetrackState {
    phase: Phase,
    entry: Option<EntryType>,
    classified: bool,
    abeam: Option<Coordinate>,
    /// Seconds flown in the current timed segment.
    elapsed: f64,
    stable: bool,
}

impl RacetrackState {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the entry until it is consumed by the first outbound leg.
    pub fn entry(&self) -> Option<EntryType> {
        self.entry
    }

    /// Returns the point where the outbound leg started to be measured.
    pub fn abeam(&self) -> Option<Coordinate> {
        self.abeam
    }

    fn turn_outbound(&mut self) {
        self.phase = Phase::Outbound;
        self.stable = false;
        self.abeam = None;
        self.elapsed = 0.0;
    }

    fn turn_inbound(&mut self) {
        self.phase = Phase::Inbound;
        self.entry = None;
        self.stable = false;
        self.abeam = None;
        self.elapsed = 0.0;
    }
}

/// A holding pattern at a fix.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Racetrack {
    fix: Coordinate,
    inbound: Course,
    direction: TurnDirection,
    length: LegLength,
}

impl Racetrack {
    /// Creates a holding pattern. Holds without a defined turn direction are
    /// flown with right turns.
    pub fn new(fix: Coordinate, inbound: Course, direction: TurnDirection, length: LegLength) -> Self {
        let direction = match direction {
            TurnDirection::Either => TurnDirection::Right,
            direction => direction,
        };

        Self {
            fix,
            inbound,
            direction,
            length,
        }
    }

    pub fn fix(&self) -> Coordinate {
        self.fix
    }

    pub fn inbound(&self) -> Course {
        self.inbound
    }

    pub fn direction(&self) -> TurnDirection {
        self.direction
    }

    pub fn length(&self) -> LegLength {
        self.length
    }

    /// Classifies the entry by the turn-in angle from the `current` course to
    /// the inbound course.
    pub fn classify_entry(&self, current: f64, inbound: f64) -> EntryType {
        let mut angle = signed_difference(current, inbound);
        if self.direction == TurnDirection::Left {
            angle = -angle;
        }

        match angle {
            a if a < -70.0 => EntryType::Parallel,
            a if a > 110.0 => EntryType::Teardrop,
            _ => EntryType::Direct,
        }
    }

    fn is_leg_complete(&self, state: &RacetrackState, position: &Coordinate) -> bool {
        match self.length {
            LegLength::Distance(nm) => state
                .abeam
                .is_some_and(|abeam| abeam.distance(position) >= nm),
            LegLength::Time(minutes) => state.elapsed >= minutes * 60.0,
        }
    }
}

impl Guidance for Racetrack {
    type State = RacetrackState;

    fn get_course(
        &self,
        mut state: RacetrackState,
        aircraft: &Aircraft,
        dt: f64,
    ) -> Result<(Course, RacetrackState)> {
        let inbound = self.inbound.to_true()?;
        let outbound = normalize(inbound + 180.0);

        if aircraft.on_ground {
            return Ok((aircraft.course, state));
        }

        let current = aircraft.course.to_true()?;

        if !state.classified {
            state.entry = Some(self.classify_entry(current, inbound));
            state.classified = true;
            trace!("holding entry {:?} at {}", state.entry, self.fix);
        }

        let (to_fix, distance) = aircraft.position.bearing_distance(&self.fix);

        let course = match (state.phase, state.entry) {
            (Phase::Entry | Phase::Inbound, _) => {
                if distance < STATION_PASSAGE_NM {
                    trace!("passed holding fix {}", self.fix);
                    state.turn_outbound();
                    outbound
                } else {
                    to_fix.map_or(inbound, |course| course.degrees())
                }
            }

            (Phase::Outbound, Some(entry @ (EntryType::Parallel | EntryType::Teardrop))) => {
                state.elapsed += dt;
                if state.elapsed >= ENTRY_LEG_SECONDS {
                    trace!("{entry:?} entry complete, turning inbound");
                    state.turn_inbound();
                }

                match (entry, self.direction) {
                    (EntryType::Teardrop, TurnDirection::Left) => outbound + TEARDROP_OFFSET_DEG,
                    (EntryType::Teardrop, _) => outbound - TEARDROP_OFFSET_DEG,
                    _ => outbound,
                }
            }

            (Phase::Outbound, _) => {
                state.entry = None;

                if !state.stable && signed_difference(current, outbound).abs() <= STABLE_HEADING_DEG {
                    state.stable = true;
                    state.abeam = Some(aircraft.position);
                    state.elapsed = 0.0;
                } else if state.stable {
                    state.elapsed += dt;
                }

                if state.stable && self.is_leg_complete(&state, &aircraft.position) {
                    trace!("outbound leg complete, turning inbound");
                    state.turn_inbound();
                }

                outbound
            }
        };

        Ok((in_reference_of(&self.inbound, course), state))
    }

    /// Holds are flown until the caller stops flying them.
    fn is_condition_reached(&self, _state: &RacetrackState, _aircraft: &Aircraft) -> Result<bool> {
        Ok(false)
    }
}
