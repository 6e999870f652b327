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

//! Decoding of procedure and airway records into unresolved legs.

use arinc424::records;

use super::fields::{character, fix_flags, text};
use crate::geom::Course;
use crate::procedure::*;

/// Returns the endpoint of a procedure leg.
///
/// Legs terminating at a radial end at their station, fix to distance legs
/// at the distance along the course and DME legs at the radial and distance
/// of the recommended navaid. Intercept legs get their endpoint once the
/// procedure is assembled.
fn endpoint(
    path_terminator: PathTerminator,
    fix: Option<String>,
    navaid: Option<String>,
    course: Option<Course>,
    theta: Option<Course>,
    distance: Option<f64>,
) -> Option<Endpoint> {
    let unresolved = match (path_terminator.termination(), fix, navaid) {
        (Termination::Radial, _, Some(station)) => Unresolved::ByStationRadial {
            station,
            radial: theta?,
        },
        (Termination::Distance, Some(name), _) => match (course, distance) {
            (Some(course), Some(distance)) => Unresolved::ByPointDistance {
                name,
                course,
                distance,
            },
            _ => Unresolved::ByName { name },
        },
        (Termination::DmeDistance, fix, Some(reference)) => match (theta.or(course), distance) {
            (Some(radial), Some(distance)) => Unresolved::ByReferenceFixRadialDistance {
                reference,
                radial,
                distance,
            },
            _ => Unresolved::ByName { name: fix? },
        },
        (_, Some(name), _) => Unresolved::ByName { name },
        _ => return None,
    };

    Some(Endpoint::Unresolved(unresolved))
}

/// Decodes a SID, STAR or approach record.
pub(crate) fn procedure_leg(
    record: records::Procedure,
    kind: ProcedureKind,
) -> Result<ProcedureLeg, arinc424::Error> {
    let path_terminator: PathTerminator = record.path_term.into();
    let fix = record.fix_ident.and_then(text);
    let navaid = record.recommended_navaid.and_then(text);
    let course: Option<Course> = record.course.map(Into::into);
    let theta = record
        .theta
        .map(|theta| theta.deg())
        .transpose()?
        .map(|deg| Course::magnetic(deg as f64));
    let rho = record.rho.map(|rho| rho.nm()).transpose()?.map(f64::from);
    let hold: Option<LegLength> = record.rte_hold_dist.map(Into::into);
    let distance = match hold {
        Some(LegLength::Distance(nm)) => Some(nm),
        _ => rho,
    };
    let turn_direction = record.turn_dir.map(Into::into);

    let via = match path_terminator {
        PathTerminator::ArcToFix => match (&navaid, rho) {
            (Some(center), Some(radius)) => Some(Via::Arc {
                center: Endpoint::by_name(center.as_str()),
                radius,
                direction: turn_direction,
            }),
            _ => None,
        },
        PathTerminator::ConstantRadiusArc => {
            let radius = record.arc_radius.map(|r| r.nm()).transpose()?;
            match (record.center_fix.and_then(text), radius) {
                (Some(center), Some(radius)) => Some(Via::Arc {
                    center: Endpoint::by_name(center),
                    radius: radius as f64,
                    direction: turn_direction,
                }),
                _ => None,
            }
        }
        PathTerminator::HoldToAltitude
        | PathTerminator::HoldToFix
        | PathTerminator::HoldToManual => course.map(|inbound| Via::Racetrack {
            inbound,
            direction: turn_direction.unwrap_or(TurnDirection::Right),
            length: hold.unwrap_or(LegLength::Time(1.0)),
        }),
        _ => course.map(Via::Course),
    };

    let mut instruction = Instruction::new(
        path_terminator,
        endpoint(
            path_terminator,
            fix,
            navaid.clone(),
            course,
            theta,
            distance,
        ),
    );
    instruction.via = via;
    instruction.recommended_navaid = navaid.map(Endpoint::by_name);
    instruction.theta = theta;
    instruction.rho = rho;
    instruction.altitude = AltitudeRestriction::decode(
        record.alt_desc.into(),
        record.altitude_1.map(Into::into),
        record.altitude_2.map(Into::into),
    );
    instruction.speed = SpeedRestriction::decode(
        record.speed_limit_desc.into(),
        record.speed_limit.map(|s| s.as_u16()).transpose()?,
    );
    instruction.turn_direction = turn_direction;
    instruction.flags = fix_flags(record.desc_code);

    Ok(ProcedureLeg {
        airport: record.arpt_ident.to_string(),
        kind,
        ident: record.procedure_ident.to_string(),
        route_type: character(record.route_type).unwrap_or(' '),
        transition: record.transition_ident.and_then(text),
        sequence: record.seq_nr.as_u16()?,
        instruction,
    })
}

/// Decodes an enroute airway record.
///
/// The altitudes and direction restriction apply to the segment after the
/// fix. The second minimum altitude applies when the segment is flown
/// backward.
pub(crate) fn airway_row(record: records::Airway) -> Result<AirwayRow, arinc424::Error> {
    let min_forward = record.min_altitude_1.map(Into::into);
    let min_backward = record.min_altitude_2.map(Into::into).or(min_forward);
    let max = record.max_altitude.map(Into::into);

    let mut instruction = Instruction::new(
        PathTerminator::TrackToFix,
        Some(Endpoint::by_name(record.fix_ident.as_str())),
    );
    instruction.recommended_navaid = record
        .recommended_navaid
        .and_then(text)
        .map(Endpoint::by_name);
    instruction.theta = record
        .theta
        .map(|theta| theta.deg())
        .transpose()?
        .map(|deg| Course::magnetic(deg as f64));
    instruction.rho = record.rho.map(|rho| rho.nm()).transpose()?.map(f64::from);
    instruction.flags = fix_flags(record.desc_code);

    Ok(AirwayRow {
        ident: record.route_ident.to_string(),
        route_type: character(record.route_type).unwrap_or(' '),
        leg: AirwayLeg {
            instruction,
            sequence: record.seq_nr.as_u16()?,
            forward: AltitudeRestriction::new(min_forward, max),
            backward: AltitudeRestriction::new(min_backward, max),
            direction: record.direction_restriction.map(Into::into),
            outbound_course: record.outbound_course.map(Into::into),
            inbound_course: record.inbound_course.map(Into::into),
            distance: match record.route_distance_from {
                Some(arinc424::fields::RteHoldDist::Distance(nm)) => Some(nm as f64),
                _ => None,
            },
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VerticalDistance;

    const SID: &[u8] = b"SUSAP KABQK2DABQ1  5RW08  010ALISSK2PC1E  FR   CF ABQ K2      0800012007940050D   + 07000          210               -     123492313";
    const AIRWAY: &[u8] = b"SUSAER       V12         0010ABQ  K2D 0V  B OL    ABQ K2              091001202710 070000800017999                         123482313";

    #[test]
    fn decodes_course_to_fix() {
        let record = records::Procedure::try_from(SID).expect("SID should parse");
        let leg = procedure_leg(record, ProcedureKind::Sid).expect("SID should decode");

        assert_eq!(leg.airport, "KABQ");
        assert_eq!(leg.ident, "ABQ1");
        assert_eq!(leg.route_type, '5');
        assert_eq!(leg.transition.as_deref(), Some("RW08"));
        assert_eq!(leg.sequence, 10);

        let instruction = leg.instruction;
        assert_eq!(instruction.path_terminator, PathTerminator::CourseToFix);
        assert_eq!(instruction.endpoint, Some(Endpoint::by_name("ALISS")));
        assert_eq!(instruction.via, Some(Via::Course(Course::magnetic(79.4f32 as f64))));
        assert_eq!(instruction.recommended_navaid, Some(Endpoint::by_name("ABQ")));
        assert_eq!(instruction.theta, Some(Course::magnetic(80.0)));
        assert_eq!(instruction.rho, Some(12.0));
        assert_eq!(
            instruction.altitude,
            AltitudeRestriction::at_or_above(VerticalDistance::Msl(7000))
        );
        assert_eq!(instruction.speed, SpeedRestriction::at_or_below(210));
        assert_eq!(instruction.turn_direction, Some(TurnDirection::Right));
        assert!(instruction.flags.final_approach_fix);
    }

    #[test]
    fn radial_legs_end_at_station() {
        let endpoint = endpoint(
            PathTerminator::CourseToRadial,
            None,
            Some("ABQ".to_string()),
            Some(Course::magnetic(90.0)),
            Some(Course::magnetic(120.0)),
            None,
        );

        assert_eq!(
            endpoint,
            Some(Endpoint::Unresolved(Unresolved::ByStationRadial {
                station: "ABQ".to_string(),
                radial: Course::magnetic(120.0),
            }))
        );
    }

    #[test]
    fn dme_legs_without_fix_use_reference_navaid() {
        let endpoint = endpoint(
            PathTerminator::CourseToDmeDistance,
            None,
            Some("ABQ".to_string()),
            Some(Course::magnetic(90.0)),
            Some(Course::magnetic(85.0)),
            Some(12.0),
        );

        assert_eq!(
            endpoint,
            Some(Endpoint::Unresolved(
                Unresolved::ByReferenceFixRadialDistance {
                    reference: "ABQ".to_string(),
                    radial: Course::magnetic(85.0),
                    distance: 12.0,
                }
            ))
        );
    }

    #[test]
    fn fix_to_dme_distance_uses_reference_navaid() {
        let endpoint = endpoint(
            PathTerminator::FixToDmeDistance,
            Some("ALISS".to_string()),
            Some("ABQ".to_string()),
            Some(Course::magnetic(90.0)),
            Some(Course::magnetic(85.0)),
            Some(12.0),
        );

        assert_eq!(
            endpoint,
            Some(Endpoint::Unresolved(
                Unresolved::ByReferenceFixRadialDistance {
                    reference: "ABQ".to_string(),
                    radial: Course::magnetic(85.0),
                    distance: 12.0,
                }
            ))
        );
    }

    #[test]
    fn dme_leg_without_distance_ends_at_fix() {
        let endpoint = endpoint(
            PathTerminator::FixToDmeDistance,
            Some("ALISS".to_string()),
            Some("ABQ".to_string()),
            Some(Course::magnetic(90.0)),
            None,
            None,
        );

        assert_eq!(endpoint, Some(Endpoint::by_name("ALISS")));
    }

    #[test]
    fn fix_to_distance_offsets_along_course() {
        let endpoint = endpoint(
            PathTerminator::FixToDistance,
            Some("ALISS".to_string()),
            None,
            Some(Course::magnetic(90.0)),
            None,
            Some(5.0),
        );

        assert_eq!(
            endpoint,
            Some(Endpoint::Unresolved(Unresolved::ByPointDistance {
                name: "ALISS".to_string(),
                course: Course::magnetic(90.0),
                distance: 5.0,
            }))
        );
    }

    #[test]
    fn manual_legs_have_no_endpoint() {
        assert_eq!(
            endpoint(
                PathTerminator::HeadingToManual,
                None,
                None,
                Some(Course::magnetic(90.0)),
                None,
                None
            ),
            None
        );
    }

    #[test]
    fn decodes_airway_segment() {
        let record = records::Airway::try_from(AIRWAY).expect("airway should parse");
        let row = airway_row(record).expect("airway should decode");

        assert_eq!(row.ident, "V12");
        assert_eq!(row.route_type, 'O');
        assert_eq!(row.leg.sequence, 10);
        assert_eq!(row.leg.instruction.endpoint, Some(Endpoint::by_name("ABQ")));
        assert_eq!(row.leg.direction, None);
        assert_eq!(row.leg.outbound_course, Some(Course::magnetic(91.0)));
        assert_eq!(row.leg.inbound_course, Some(Course::magnetic(271.0)));
        assert_eq!(row.leg.distance, Some(12.0));
        assert_eq!(
            row.leg.forward,
            AltitudeRestriction::between(VerticalDistance::Msl(7000), VerticalDistance::Msl(17999))
        );
        assert_eq!(
            row.leg.backward,
            AltitudeRestriction::between(VerticalDistance::Msl(8000), VerticalDistance::Msl(17999))
        );
    }
}
