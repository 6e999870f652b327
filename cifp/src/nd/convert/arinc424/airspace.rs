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

//! Builders reconstructing airspace polygons and FIR boundaries from ARINC
//! 424 boundary records.

use arinc424::fields::{BoundaryPath, BoundaryVia, Latitude, Longitude};
use arinc424::records::{ControlledAirspace, FirUir};
use geo::{Bearing, Destination, Distance, Rhumb};

use super::fields::{character, limit, optional_coordinate, text};
use crate::constants::{ARC_STEP_DEG, NAUTICAL_MILE_IN_METER, RHUMB_STEP_NM};
use crate::geom::Coordinate;
use crate::nd::{Airspace, Fir};
use crate::VerticalDistance;

/// One row of a boundary describing the path to the next row's point.
#[derive(Debug)]
struct BoundaryRow {
    via: BoundaryVia,
    point: Option<Coordinate>,
    arc_center: Option<Coordinate>,
    arc_radius: Option<f64>,
}

/// A sequence of boundary rows forming a closed ring.
#[derive(Debug, Default)]
struct Boundary {
    rows: Vec<BoundaryRow>,
}

impl Boundary {
    fn push(
        &mut self,
        via: BoundaryVia,
        point: (Option<Latitude>, Option<Longitude>),
        arc_center: (Option<Latitude>, Option<Longitude>),
        arc_radius: Option<f32>,
    ) -> Result<(), arinc424::Error> {
        self.rows.push(BoundaryRow {
            via,
            point: optional_coordinate(point.0, point.1)?,
            arc_center: optional_coordinate(arc_center.0, arc_center.1)?,
            arc_radius: arc_radius.map(f64::from),
        });

        Ok(())
    }

    fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Walks the rows and returns the closed ring of vertices.
    fn vertices(&self) -> Result<Vec<Coordinate>, arinc424::Error> {
        let mut vertices = Vec::new();

        for (i, row) in self.rows.iter().enumerate() {
            if row.via.path == BoundaryPath::Circle {
                let center = row.arc_center.or(row.point).ok_or_else(missing_point)?;
                let radius = row.arc_radius.ok_or_else(missing_radius)?;
                vertices.extend(circle(center, radius));
                continue;
            }

            let start = row.point.ok_or_else(missing_point)?;
            vertices.push(start);

            // the last row always returns to the first point
            let next = match self.rows.get(i + 1) {
                Some(next) if !row.via.return_to_origin => next.point,
                _ => self.rows.first().and_then(|first| first.point),
            };

            let Some(next) = next else {
                continue;
            };

            match row.via.path {
                BoundaryPath::GreatCircle | BoundaryPath::Circle => {}
                BoundaryPath::RhumbLine => vertices.extend(rhumb_line(start, next)),
                BoundaryPath::ClockwiseArc | BoundaryPath::CounterClockwiseArc => {
                    let Some(center) = row.arc_center else {
                        continue;
                    };
                    let radius = row.arc_radius.unwrap_or_else(|| center.distance(&start));
                    let clockwise = row.via.path == BoundaryPath::ClockwiseArc;
                    vertices.extend(arc(center, radius, &start, &next, clockwise));
                }
            }
        }

        if let (Some(first), Some(last)) = (vertices.first(), vertices.last()) {
            if first != last {
                vertices.push(*first);
            }
        }

        Ok(vertices)
    }

    fn line_string(&self) -> Result<geo::LineString<f64>, arinc424::Error> {
        Ok(self
            .vertices()?
            .into_iter()
            .map(geo::Coord::from)
            .collect())
    }
}

fn missing_point() -> arinc424::Error {
    arinc424::Error::InvalidVariant {
        field: "Latitude",
        bytes: Vec::new(),
        expected: "a boundary point",
    }
}

fn missing_radius() -> arinc424::Error {
    arinc424::Error::InvalidVariant {
        field: "Arc Distance",
        bytes: Vec::new(),
        expected: "the radius of a circle",
    }
}

/// Returns the angular sweep from `start` to `end` in degrees, positive if
/// `clockwise`.
fn calculate_arc_sweep(start: f64, end: f64, clockwise: bool) -> f64 {
    let mut diff = end - start;

    if clockwise {
        if diff <= 0.0 {
            diff += 360.0;
        }
    } else if diff >= 0.0 {
        diff -= 360.0;
    }

    diff
}

/// Intermediate points of an arc around `center`, excluding both ends.
fn arc(
    center: Coordinate,
    radius: f64,
    start: &Coordinate,
    end: &Coordinate,
    clockwise: bool,
) -> Vec<Coordinate> {
    let (Some(from), Some(to)) = (center.bearing(start), center.bearing(end)) else {
        return Vec::new();
    };

    let sweep = calculate_arc_sweep(from, to, clockwise);
    let steps = (sweep.abs() / ARC_STEP_DEG).ceil() as usize;

    (1..steps)
        .map(|i| center.destination_true(from + sweep.signum() * ARC_STEP_DEG * i as f64, radius))
        .collect()
}

fn circle(center: Coordinate, radius: f64) -> Vec<Coordinate> {
    let steps = (360.0 / ARC_STEP_DEG) as usize;

    (0..steps)
        .map(|i| center.destination_true(i as f64 * ARC_STEP_DEG, radius))
        .collect()
}

/// Intermediate points of a rhumb line, excluding both ends.
fn rhumb_line(start: Coordinate, end: Coordinate) -> Vec<Coordinate> {
    let (a, b): (geo::Point<f64>, geo::Point<f64>) = (start.into(), end.into());
    let distance = Rhumb.distance(a, b);
    let bearing = Rhumb.bearing(a, b);
    let steps = (distance / (RHUMB_STEP_NM * NAUTICAL_MILE_IN_METER)).ceil() as usize;

    (1..steps)
        .map(|i| Rhumb.destination(a, bearing, distance * i as f64 / steps as f64).into())
        .collect()
}

/// Builds an [`Airspace`] from contiguous controlled airspace records
/// sharing the same center and multiple code.
#[derive(Debug)]
pub(crate) struct AirspaceBuilder {
    last_sequence: u32,
    name: Option<String>,
    airspace: Airspace,
    boundary: Boundary,
}

impl AirspaceBuilder {
    pub(crate) fn new(record: &ControlledAirspace) -> Self {
        Self {
            last_sequence: 0,
            name: None,
            airspace: Airspace {
                name: String::new(),
                center: record.arsp_cntr.to_string(),
                multiple_code: character(record.multi_cd).unwrap_or(' '),
                icao_code: record.icao_code.to_string(),
                airspace_type: record.arsp_type.into(),
                classification: record.arsp_class.and_then(character),
                ceiling: VerticalDistance::Unlimited,
                floor: VerticalDistance::Gnd,
                polygon: geo::Polygon::new(geo::LineString::new(Vec::new()), Vec::new()),
            },
            boundary: Boundary::default(),
        }
    }

    /// Returns `true` if the record continues this airspace's boundary.
    pub(crate) fn continues(&self, record: &ControlledAirspace) -> bool {
        record.arsp_cntr.as_str() == self.airspace.center
            && character(record.multi_cd).unwrap_or(' ') == self.airspace.multiple_code
            && record.icao_code.as_str() == self.airspace.icao_code
            && record
                .seq_nr
                .as_u32()
                .is_ok_and(|seq| seq > self.last_sequence)
    }

    pub(crate) fn add_record(&mut self, record: ControlledAirspace) -> Result<(), arinc424::Error> {
        self.last_sequence = record.seq_nr.as_u32()?;

        if self.name.is_none() {
            self.name = record.arsp_name.and_then(text);
        }

        if self.boundary.is_empty() {
            if let Some(upper) = record.upper_limit {
                self.airspace.ceiling = limit(upper, record.upper_unit_indicator);
            }
            if let Some(lower) = record.lower_limit {
                self.airspace.floor = limit(lower, record.lower_unit_indicator);
            }
        }

        let radius = record.arc_dist.map(|d| d.nm()).transpose()?;
        self.boundary.push(
            record.bdry_via,
            (record.latitude, record.longitude),
            (record.arc_origin_latitude, record.arc_origin_longitude),
            radius,
        )
    }

    pub(crate) fn build(self) -> Result<Airspace, arinc424::Error> {
        let ring = self.boundary.line_string()?;

        Ok(Airspace {
            name: self.name.unwrap_or_else(|| self.airspace.center.clone()),
            polygon: geo::Polygon::new(ring, Vec::new()),
            ..self.airspace
        })
    }
}

/// Builds a [`Fir`] from the records of one region.
///
/// A regressing sequence number starts a new boundary run of the same
/// region.
#[derive(Debug)]
pub(crate) struct FirBuilder {
    fir: Fir,
    last_sequence: u32,
    boundary: Boundary,
}

impl FirBuilder {
    pub(crate) fn new(record: &FirUir) -> Self {
        Self {
            fir: Fir {
                ident: record.fir_uir_ident.to_string(),
                address: record.fir_uir_address.to_string(),
                indicator: record.fir_uir_ind.into(),
                name: String::new(),
                fir_upper_limit: None,
                uir_lower_limit: None,
                uir_upper_limit: None,
                boundaries: Vec::new(),
                neighbours: Vec::new(),
            },
            last_sequence: 0,
            boundary: Boundary::default(),
        }
    }

    pub(crate) fn ident(&self) -> &str {
        &self.fir.ident
    }

    pub(crate) fn add_record(&mut self, record: FirUir) -> Result<(), arinc424::Error> {
        let sequence = record.seq_nr.as_u32()?;

        if sequence <= self.last_sequence && !self.boundary.is_empty() {
            let run = std::mem::take(&mut self.boundary);
            self.fir.boundaries.push(run.line_string()?);
        }
        self.last_sequence = sequence;

        if self.fir.name.is_empty() {
            self.fir.name = record.fir_uir_name.and_then(text).unwrap_or_default();
        }

        let limits = [
            (&mut self.fir.fir_upper_limit, record.fir_upper_limit),
            (&mut self.fir.uir_lower_limit, record.uir_lower_limit),
            (&mut self.fir.uir_upper_limit, record.uir_upper_limit),
        ];
        for (target, value) in limits {
            if target.is_none() {
                *target = value.map(|value| limit(value, None));
            }
        }

        for neighbour in [record.adjacent_fir, record.adjacent_uir]
            .into_iter()
            .flatten()
            .filter_map(text)
        {
            if !self.fir.neighbours.contains(&neighbour) {
                self.fir.neighbours.push(neighbour);
            }
        }

        let radius = record.arc_dist.map(|d| d.nm()).transpose()?;
        self.boundary.push(
            record.bdry_via,
            (record.latitude, record.longitude),
            (record.arc_origin_latitude, record.arc_origin_longitude),
            radius,
        )
    }

    pub(crate) fn build(mut self) -> Result<Fir, arinc424::Error> {
        if !self.boundary.is_empty() {
            self.fir.boundaries.push(self.boundary.line_string()?);
        }

        Ok(self.fir)
    }
}
