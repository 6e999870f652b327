// SPDX-License-Identifier: Apache-2.0
// Copyright 2024, 2026 Joe Pearson
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

//! Fields of the controlled airspace and FIR/UIR boundary records.

use crate::{Error, FixedField, Numeric};

/// 5.213 Controlled Airspace Type (ARSP TYPE)
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ArspType {
    ClassC,
    ControlArea,
    TerminalControlArea,
    RadarZone,
    ClassB,
    RadioMandatoryZone,
    TransponderMandatoryZone,
    ControlZone,
}

impl FixedField<'_> for ArspType {
    const LENGTH: usize = 1;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        let kind = match bytes[0] {
            b'A' => Self::ClassC,
            b'C' => Self::ControlArea,
            b'M' => Self::TerminalControlArea,
            b'R' => Self::RadarZone,
            b'T' => Self::ClassB,
            b'U' => Self::RadioMandatoryZone,
            b'V' => Self::TransponderMandatoryZone,
            b'Z' => Self::ControlZone,
            byte => {
                return Err(Error::InvalidCharacter {
                    field: "Controlled Airspace Type",
                    byte,
                    expected: "A, C, M, R, T, U, V or Z",
                })
            }
        };

        Ok(kind)
    }
}

/// The path from one boundary point to the next.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum BoundaryPath {
    /// A full circle around the arc origin, the only row of its boundary.
    Circle,
    GreatCircle,
    /// Constant true course.
    RhumbLine,
    CounterClockwiseArc,
    ClockwiseArc,
}

/// 5.118 Boundary Via (BDRY VIA)
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct BoundaryVia {
    pub path: BoundaryPath,
    /// The path of this row leads back to the first point of the boundary.
    pub return_to_origin: bool,
}

impl FixedField<'_> for BoundaryVia {
    const LENGTH: usize = 2;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        let path = match bytes[0] {
            b'C' => BoundaryPath::Circle,
            b'G' => BoundaryPath::GreatCircle,
            b'H' => BoundaryPath::RhumbLine,
            b'L' => BoundaryPath::CounterClockwiseArc,
            b'R' => BoundaryPath::ClockwiseArc,
            byte => {
                return Err(Error::InvalidCharacter {
                    field: "Boundary Via",
                    byte,
                    expected: "C, G, H, L or R",
                })
            }
        };

        let return_to_origin = match bytes[1] {
            b'E' => true,
            b' ' => false,
            byte => {
                return Err(Error::InvalidCharacter {
                    field: "Boundary Via",
                    byte,
                    expected: "E or blank",
                })
            }
        };

        Ok(Self {
            path,
            return_to_origin,
        })
    }
}

/// 5.119 Arc Distance (ARC DIST) in tenth of NM.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct ArcDistance<'a>(Numeric<'a, 4>);

impl<'a> ArcDistance<'a> {
    pub fn nm(&self) -> Result<f32, Error> {
        self.0.as_u32().map(|dist| dist as f32 / 10.0)
    }
}

impl<'a> FixedField<'a> for ArcDistance<'a> {
    const LENGTH: usize = 4;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        Ok(Self(Numeric::from_bytes(bytes)?))
    }
}

/// 5.120 Arc Bearing (ARC BRG) in tenth of degree true.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct ArcBearing<'a>(Numeric<'a, 4>);

impl<'a> ArcBearing<'a> {
    pub fn deg(&self) -> Result<f32, Error> {
        self.0.as_u32().map(|brg| brg as f32 / 10.0)
    }
}

impl<'a> FixedField<'a> for ArcBearing<'a> {
    const LENGTH: usize = 4;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        Ok(Self(Numeric::from_bytes(bytes)?))
    }
}

/// 5.121 Lower/Upper Limit
///
/// Numeric altitudes are in feet, their reference is given by the unit
/// indicator that follows the limit.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum LowerUpperLimit {
    Altitude(u32),
    FlightLevel(u16),
    NotSpecified,
    Unlimited,
    Ground,
    MeanSeaLevel,
    NOTAM,
}

impl FixedField<'_> for LowerUpperLimit {
    const LENGTH: usize = 5;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        let limit = match &bytes[..Self::LENGTH] {
            b"NOTSP" => Self::NotSpecified,
            b"UNLTD" => Self::Unlimited,
            b"GND  " => Self::Ground,
            b"MSL  " => Self::MeanSeaLevel,
            b"NOTAM" => Self::NOTAM,
            [b'F', b'L', level @ ..] => Self::FlightLevel(parse_numeric!(3, u16, level)?),
            altitude => Self::Altitude(parse_numeric!(5, u32, altitude)?),
        };

        Ok(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_boundary_via() {
        let via = BoundaryVia::from_bytes(b"R ").expect("via should parse");
        assert_eq!(via.path, BoundaryPath::ClockwiseArc);
        assert!(!via.return_to_origin);

        let via = BoundaryVia::from_bytes(b"HE").expect("via should parse");
        assert_eq!(via.path, BoundaryPath::RhumbLine);
        assert!(via.return_to_origin);

        assert!(BoundaryVia::from_bytes(b"X ").is_err());
        assert!(BoundaryVia::from_bytes(b"GX").is_err());
    }

    #[test]
    fn parses_limits() {
        assert_eq!(
            LowerUpperLimit::from_bytes(b"FL180"),
            Ok(LowerUpperLimit::FlightLevel(180))
        );
        assert_eq!(
            LowerUpperLimit::from_bytes(b"07000"),
            Ok(LowerUpperLimit::Altitude(7000))
        );
        assert_eq!(
            LowerUpperLimit::from_bytes(b"GND  "),
            Ok(LowerUpperLimit::Ground)
        );
        assert_eq!(
            LowerUpperLimit::from_bytes(b"UNLTD"),
            Ok(LowerUpperLimit::Unlimited)
        );
        assert!(LowerUpperLimit::from_bytes(b"FLXXX").is_err());
        assert!(LowerUpperLimit::from_bytes(b"ABCDE").is_err());
    }

    #[test]
    fn scales_arc_fields() {
        let dist = ArcDistance::from_bytes(b"0040").expect("distance should parse");
        let brg = ArcBearing::from_bytes(b"2450").expect("bearing should parse");
        assert_eq!(dist.nm(), Ok(4.0));
        assert_eq!(brg.deg(), Ok(245.0));
    }
}
