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

//! ARINC 424 fields.
//!
//! The fields are named and numbered after section 5 of the ARINC 424
//! specification. Simple fields are type aliases of alphanumeric or numeric
//! fields, others are parsed into enums on creation.

use crate::{Alphanumeric, Numeric};

mod airspace;
mod alt_desc;
mod altitude;
mod bearing;
mod coordinate;
mod cycle;
mod direction_restriction;
mod elevation;
mod fir_uir_ind;
mod frequency;
mod mag_var;
mod mora;
mod navaid_class;
mod path_term;
mod rho_theta;
mod rte_hold_dist;
mod runway_id;
mod sec_sub_code;
mod speed_limit_desc;
mod turn_dir;
mod unit_ind;
mod waypoint_desc;
mod waypoint_usage;

pub use airspace::{ArcBearing, ArcDistance, ArspType, BoundaryPath, BoundaryVia, LowerUpperLimit};
pub use alt_desc::AltDesc;
pub use altitude::Altitude;
pub use bearing::{Bearing, Course, LocBrg, RwyBrg};
pub use coordinate::{Latitude, Longitude};
pub use cycle::Cycle;
pub use direction_restriction::DirectionRestriction;
pub use elevation::Elevation;
pub use fir_uir_ind::FirUirInd;
pub use frequency::Frequency;
pub use mag_var::MagVar;
pub use mora::{MoraValues, StartLatitude, StartLongitude};
pub use navaid_class::NavaidClass;
pub use path_term::PathTerm;
pub use rho_theta::{ArcRadius, Rho, Theta};
pub use rte_hold_dist::RteHoldDist;
pub use runway_id::RunwayId;
pub use sec_sub_code::{SecCode, SubCode, SubCodeKind};
pub use speed_limit_desc::SpeedLimitDesc;
pub use turn_dir::TurnDir;
pub use unit_ind::UnitIndicator;
pub use waypoint_desc::WaypointDesc;
pub use waypoint_usage::WaypointUsage;

pub type ArptHeliIdent<'a> = Alphanumeric<'a, 4>;
pub type ContNr<'a> = Alphanumeric<'a, 1>;
pub type DmeIdent<'a> = Alphanumeric<'a, 4>;
pub type FileRecordNumber<'a> = Numeric<'a, 5>;
pub type FirUirIdent<'a> = Alphanumeric<'a, 4>;
pub type FixIdent<'a> = Alphanumeric<'a, 5>;
pub type Iata<'a> = Alphanumeric<'a, 3>;
pub type IcaoCode<'a> = Alphanumeric<'a, 2>;
pub type IlsCategory<'a> = Alphanumeric<'a, 1>;
pub type LocIdent<'a> = Alphanumeric<'a, 4>;
pub type MultiCd<'a> = Alphanumeric<'a, 1>;
pub type NameDesc<'a> = Alphanumeric<'a, 25>;
pub type NameField<'a> = Alphanumeric<'a, 30>;
pub type NavaidIdent<'a> = Alphanumeric<'a, 4>;
pub type ProcedureIdent<'a> = Alphanumeric<'a, 6>;
pub type RegnCode<'a> = Alphanumeric<'a, 4>;
pub type RequiredNavigationPerformance<'a> = Alphanumeric<'a, 3>;
pub type RouteIdent<'a> = Alphanumeric<'a, 5>;
pub type RouteType<'a> = Alphanumeric<'a, 1>;
pub type SequenceNumber<'a, const N: usize> = Numeric<'a, N>;
pub type SpeedLimit<'a> = Numeric<'a, 3>;
pub type TransitionIdent<'a> = Alphanumeric<'a, 5>;
pub type WaypointType<'a> = Alphanumeric<'a, 3>;
