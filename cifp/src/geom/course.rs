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

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, Result};

/// Normalizes an angle into the range from 0° to 360°.
pub fn normalize(degrees: f64) -> f64 {
    let deg = degrees.rem_euclid(360.0);
    // rem_euclid may round up to 360 for tiny negative inputs
    if deg >= 360.0 {
        0.0
    } else {
        deg
    }
}

/// Returns the signed angle from `from` to `to` in the range (-180°, 180°].
///
/// A positive angle is a clockwise turn.
pub fn signed_difference(from: f64, to: f64) -> f64 {
    let diff = normalize(to - from);
    if diff > 180.0 {
        diff - 360.0
    } else {
        diff
    }
}

/// The magnetic variation (declination) at a location.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MagneticVariation {
    East(f64),
    West(f64),
    OrientedToTrueNorth,
}

impl MagneticVariation {
    /// Returns the variation in degrees with east being positive.
    pub fn degrees(&self) -> f64 {
        match self {
            Self::East(deg) => *deg,
            Self::West(deg) => -deg,
            Self::OrientedToTrueNorth => 0.0,
        }
    }
}

impl fmt::Display for MagneticVariation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::East(deg) => write!(f, "{deg:.1}°E"),
            Self::West(deg) => write!(f, "{deg:.1}°W"),
            Self::OrientedToTrueNorth => write!(f, "T"),
        }
    }
}

/// A course relative to true or magnetic north.
///
/// Magnetic courses carry the variation they refer to, if it is known. The
/// conversion to a true course fails without it.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Course {
    True(f64),
    Magnetic {
        degrees: f64,
        variation: Option<MagneticVariation>,
    },
}

impl Course {
    /// Creates a magnetic course without a variation.
    pub fn magnetic(degrees: f64) -> Self {
        Self::Magnetic {
            degrees: normalize(degrees),
            variation: None,
        }
    }

    /// Returns the course in degrees relative to its own north reference.
    pub fn degrees(&self) -> f64 {
        match self {
            Self::True(deg) => *deg,
            Self::Magnetic { degrees, .. } => *degrees,
        }
    }

    /// Returns `true` if the course is magnetic but has no variation.
    pub fn lacks_variation(&self) -> bool {
        matches!(
            self,
            Self::Magnetic {
                variation: None,
                ..
            }
        )
    }

    /// Returns the true course in degrees.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingVariation`] if the course is magnetic
    /// without variation.
    pub fn to_true(&self) -> Result<f64> {
        match self {
            Self::True(deg) => Ok(*deg),
            Self::Magnetic {
                degrees,
                variation: Some(var),
            } => Ok(normalize(degrees + var.degrees())),
            Self::Magnetic {
                variation: None, ..
            } => Err(DomainError::MissingVariation.into()),
        }
    }

    /// Converts the course into a magnetic course with the variation.
    ///
    /// # Errors
    ///
    /// Fails if the course is magnetic without variation, since it can't be
    /// related to the new variation.
    pub fn to_magnetic(&self, variation: MagneticVariation) -> Result<Self> {
        let true_course = match self {
            Self::Magnetic {
                degrees,
                variation: None,
            } => {
                return Ok(Self::Magnetic {
                    degrees: *degrees,
                    variation: Some(variation),
                })
            }
            _ => self.to_true()?,
        };

        Ok(Self::Magnetic {
            degrees: normalize(true_course - variation.degrees()),
            variation: Some(variation),
        })
    }

    /// Attaches the variation to a magnetic course that has none.
    ///
    /// True courses and magnetic courses with variation are returned as is.
    pub fn with_variation(self, variation: Option<MagneticVariation>) -> Self {
        match (self, variation) {
            (Self::Magnetic { degrees, variation: None }, Some(var)) => Self::Magnetic {
                degrees,
                variation: Some(var),
            },
            _ => self,
        }
    }

    /// Returns the course turned by `degrees`, clockwise if positive.
    pub fn offset(&self, degrees: f64) -> Self {
        match *self {
            Self::True(deg) => Self::True(normalize(deg + degrees)),
            Self::Magnetic {
                degrees: deg,
                variation,
            } => Self::Magnetic {
                degrees: normalize(deg + degrees),
                variation,
            },
        }
    }

    /// Returns the opposite course.
    pub fn reciprocal(&self) -> Self {
        self.offset(180.0)
    }

    /// Returns the signed angle from this course to the `other` in the range
    /// (-180°, 180°].
    ///
    /// Courses of the same north reference are compared directly, otherwise
    /// both are converted to true courses first.
    ///
    /// # Errors
    ///
    /// Fails if a conversion to true is needed but a variation is missing.
    pub fn difference(&self, other: &Course) -> Result<f64> {
        match (self, other) {
            (Self::True(a), Self::True(b)) => Ok(signed_difference(*a, *b)),
            (
                Self::Magnetic {
                    degrees: a,
                    variation: va,
                },
                Self::Magnetic {
                    degrees: b,
                    variation: vb,
                },
            ) if va == vb => Ok(signed_difference(*a, *b)),
            _ => Ok(signed_difference(self.to_true()?, other.to_true()?)),
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::True(deg) => write!(f, "{deg:03.0}°T"),
            Self::Magnetic { degrees, .. } => write!(f, "{degrees:03.0}°M"),
        }
    }
}
