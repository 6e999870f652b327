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

//! Tolerances and steps of the guidance engine and boundary reconstruction.

pub const NAUTICAL_MILE_IN_METER: f64 = 1852.0;

/// Distance to a station or fix below which it counts as crossed.
pub const STATION_PASSAGE_NM: f64 = 0.1;

/// Radial deviation within which a radial counts as established.
pub const RADIAL_TOLERANCE_DEG: f64 = 0.5;

/// Intercept angle flown towards a radial outside the tolerance.
pub const INTERCEPT_ANGLE_DEG: f64 = 45.0;

/// Half width of the band around an arc radius in which the arc is flown.
pub const ARC_BAND_NM: f64 = 0.1;

/// Duration of the outbound leg of a parallel or teardrop hold entry.
pub const ENTRY_LEG_SECONDS: f64 = 60.0;

/// Heading deviation below which the outbound leg of a hold is stable.
pub const STABLE_HEADING_DEG: f64 = 1.0;

/// Teardrop offset from the outbound course.
pub const TEARDROP_OFFSET_DEG: f64 = 30.0;

/// Angular step of interpolated arcs and circles.
pub const ARC_STEP_DEG: f64 = 5.0;

/// Distance between interpolated points of rhumb line boundaries.
pub const RHUMB_STEP_NM: f64 = 5.0;

/// Iterations after which an intersection search gives up.
pub const MAX_INTERSECTION_ITERATIONS: usize = 1000;
