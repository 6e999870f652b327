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

use arinc424::fields;

use crate::geom::{Coordinate, Course, MagneticVariation};
use crate::nd::{AiracCycle, AirspaceType, FirIndicator, Region, WaypointUsage};
use crate::procedure::{
    AirwayDirection, AltitudeCode, FixFlags, LegLength, PathTerminator, SpeedCode, TurnDirection,
};
use crate::VerticalDistance;

pub(super) fn coordinate(
    latitude: fields::Latitude,
    longitude: fields::Longitude,
) -> Result<Coordinate, arinc424::Error> {
    Ok(Coordinate {
        latitude: latitude.as_decimal()?,
        longitude: longitude.as_decimal()?,
    })
}

/// Returns the coordinate if both latitude and longitude are present.
pub(super) fn optional_coordinate(
    latitude: Option<fields::Latitude>,
    longitude: Option<fields::Longitude>,
) -> Result<Option<Coordinate>, arinc424::Error> {
    match (latitude, longitude) {
        (Some(lat), Some(lon)) => coordinate(lat, lon).map(Some),
        _ => Ok(None),
    }
}

/// Returns the trimmed field or `None` if it's blank.
pub(super) fn text<const N: usize>(field: arinc424::Alphanumeric<N>) -> Option<String> {
    match field.as_str().trim() {
        "" => None,
        s => Some(s.to_string()),
    }
}

pub(super) fn character<const N: usize>(field: arinc424::Alphanumeric<N>) -> Option<char> {
    match field.first() {
        b' ' => None,
        b => Some(b as char),
    }
}

/// Returns the vertical limit of an airspace in the unit of the indicator.
pub(super) fn limit(
    limit: fields::LowerUpperLimit,
    unit: Option<fields::UnitIndicator>,
) -> VerticalDistance {
    match (limit, unit) {
        (fields::LowerUpperLimit::Altitude(ft), Some(fields::UnitIndicator::AboveGroundLevel)) => {
            VerticalDistance::Agl(ft)
        }
        (fields::LowerUpperLimit::Altitude(ft), _) => VerticalDistance::Msl(ft),
        (fields::LowerUpperLimit::FlightLevel(fl), _) => VerticalDistance::Fl(fl),
        (fields::LowerUpperLimit::Unlimited, _) => VerticalDistance::Unlimited,
        (fields::LowerUpperLimit::Ground, _) => VerticalDistance::Gnd,
        (fields::LowerUpperLimit::MeanSeaLevel, _) => VerticalDistance::Msl(0),
        (fields::LowerUpperLimit::NotSpecified | fields::LowerUpperLimit::NOTAM, _) => {
            VerticalDistance::NotSpecified
        }
    }
}

pub(super) fn fix_flags(desc: fields::WaypointDesc) -> FixFlags {
    FixFlags {
        flyover: desc.is_flyover(),
        initial_approach_fix: desc.is_initial_approach_fix(),
        intermediate_approach_fix: desc.is_intermediate_approach_fix(),
        final_approach_fix: desc.is_final_approach_fix(),
        missed_approach_point: desc.is_missed_approach_point(),
    }
}

impl From<fields::Cycle> for AiracCycle {
    fn from(value: fields::Cycle) -> Self {
        AiracCycle::new(value.year(), value.cycle())
    }
}

impl From<fields::MagVar> for MagneticVariation {
    fn from(value: fields::MagVar) -> Self {
        match value {
            fields::MagVar::East(d) => Self::East(d as f64),
            fields::MagVar::West(d) => Self::West(d as f64),
            fields::MagVar::OrientedToTrueNorth => Self::OrientedToTrueNorth,
        }
    }
}

impl<'a> From<fields::RegnCode<'a>> for Region {
    fn from(value: fields::RegnCode) -> Self {
        match value.as_str() {
            "ENRT" => Self::Enroute,
            ident => Self::TerminalArea(ident.to_string()),
        }
    }
}

impl From<fields::Bearing> for Course {
    fn from(value: fields::Bearing) -> Self {
        match value {
            fields::Bearing::Magnetic(degrees) => Course::magnetic(degrees as f64),
            fields::Bearing::True(degrees) => Course::True(degrees as f64),
        }
    }
}

impl From<fields::Altitude> for VerticalDistance {
    fn from(value: fields::Altitude) -> Self {
        match value {
            fields::Altitude::Feet(ft) => Self::Msl(ft),
            fields::Altitude::FlightLevel(fl) => Self::Fl(fl),
            fields::Altitude::Unlimited => Self::Unlimited,
            fields::Altitude::Unknown | fields::Altitude::NotSpecified => Self::NotSpecified,
        }
    }
}

impl From<fields::AltDesc> for AltitudeCode {
    fn from(value: fields::AltDesc) -> Self {
        match value {
            fields::AltDesc::At => Self::At,
            fields::AltDesc::AtOrAbove => Self::AtOrAbove,
            fields::AltDesc::AtOrBelow => Self::AtOrBelow,
            fields::AltDesc::Between => Self::Between,
            fields::AltDesc::AtOrAboveSecond => Self::AtOrAboveSecond,
            fields::AltDesc::GlideSlopeAt => Self::GlideSlopeAt,
            fields::AltDesc::GlideSlopeAtOrAbove => Self::GlideSlopeAtOrAbove,
            fields::AltDesc::GlideSlopeInterceptAt => Self::InterceptAt,
            fields::AltDesc::GlideSlopeInterceptAtOrAbove => Self::InterceptAtOrAbove,
            fields::AltDesc::StepDownAtOrAbove => Self::StepDownAtOrAbove,
            fields::AltDesc::StepDownAt => Self::StepDownAt,
            fields::AltDesc::StepDownAtOrBelow => Self::StepDownAtOrBelow,
        }
    }
}

impl From<fields::SpeedLimitDesc> for SpeedCode {
    fn from(value: fields::SpeedLimitDesc) -> Self {
        match value {
            fields::SpeedLimitDesc::At => Self::At,
            fields::SpeedLimitDesc::AtOrAbove => Self::AtOrAbove,
            fields::SpeedLimitDesc::AtOrBelow => Self::AtOrBelow,
        }
    }
}

impl From<fields::TurnDir> for TurnDirection {
    fn from(value: fields::TurnDir) -> Self {
        match value {
            fields::TurnDir::Left => Self::Left,
            fields::TurnDir::Right => Self::Right,
            fields::TurnDir::Either => Self::Either,
        }
    }
}

impl From<fields::RteHoldDist> for LegLength {
    fn from(value: fields::RteHoldDist) -> Self {
        match value {
            fields::RteHoldDist::Distance(nm) => Self::Distance(nm as f64),
            fields::RteHoldDist::Time(min) => Self::Time(min as f64),
        }
    }
}

impl From<fields::DirectionRestriction> for AirwayDirection {
    fn from(value: fields::DirectionRestriction) -> Self {
        match value {
            fields::DirectionRestriction::Forward => Self::Forward,
            fields::DirectionRestriction::Backward => Self::Backward,
        }
    }
}

impl From<fields::WaypointUsage> for WaypointUsage {
    fn from(value: fields::WaypointUsage) -> Self {
        match value {
            fields::WaypointUsage::HighAndLow => Self::HighAndLow,
            fields::WaypointUsage::High => Self::High,
            fields::WaypointUsage::Low => Self::Low,
            fields::WaypointUsage::Terminal => Self::Terminal,
        }
    }
}

impl From<fields::FirUirInd> for FirIndicator {
    fn from(value: fields::FirUirInd) -> Self {
        match value {
            fields::FirUirInd::Fir => Self::Fir,
            fields::FirUirInd::Uir => Self::Uir,
            fields::FirUirInd::Both => Self::Both,
        }
    }
}

impl From<fields::ArspType> for AirspaceType {
    fn from(value: fields::ArspType) -> Self {
        match value {
            fields::ArspType::ClassC => Self::ClassC,
            fields::ArspType::ControlArea => Self::ControlArea,
            fields::ArspType::TerminalControlArea => Self::TerminalControlArea,
            fields::ArspType::RadarZone => Self::RadarZone,
            fields::ArspType::ClassB => Self::ClassB,
            fields::ArspType::RadioMandatoryZone => Self::RadioMandatoryZone,
            fields::ArspType::TransponderMandatoryZone => Self::TransponderMandatoryZone,
            fields::ArspType::ControlZone => Self::ControlZone,
        }
    }
}

impl From<fields::PathTerm> for PathTerminator {
    fn from(value: fields::PathTerm) -> Self {
        use fields::PathTerm;

        match value {
            PathTerm::IF => Self::InitialFix,
            PathTerm::TF => Self::TrackToFix,
            PathTerm::CF => Self::CourseToFix,
            PathTerm::DF => Self::DirectToFix,
            PathTerm::FA => Self::FixToAltitude,
            PathTerm::FC => Self::FixToDistance,
            PathTerm::FD => Self::FixToDmeDistance,
            PathTerm::FM => Self::FixToManual,
            PathTerm::CA => Self::CourseToAltitude,
            PathTerm::CD => Self::CourseToDmeDistance,
            PathTerm::CI => Self::CourseToIntercept,
            PathTerm::CR => Self::CourseToRadial,
            PathTerm::RF => Self::ConstantRadiusArc,
            PathTerm::AF => Self::ArcToFix,
            PathTerm::VA => Self::HeadingToAltitude,
            PathTerm::VD => Self::HeadingToDmeDistance,
            PathTerm::VI => Self::HeadingToIntercept,
            PathTerm::VM => Self::HeadingToManual,
            PathTerm::VR => Self::HeadingToRadial,
            PathTerm::PI => Self::ProcedureTurn,
            PathTerm::HA => Self::HoldToAltitude,
            PathTerm::HF => Self::HoldToFix,
            PathTerm::HM => Self::HoldToManual,
        }
    }
}
