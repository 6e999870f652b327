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

//! Altitude and speed restrictions of procedure legs.
//!
//! A restriction is a pair of an optional minimum and maximum. The source
//! data codes restrictions as a description character with up to two values
//! and contains a number of known irregularities. Those are normalized here
//! silently:
//!
//! - glide slope and intercept altitudes drop the second value
//! - "between" without a second value becomes "at or above"
//! - "at" with two equal values collapses to a single value
//! - "at or above" with an increasing pair becomes "between"
//! - "at or below" with an inverted pair becomes "between"
//!
//! These corrections apply to every airport.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::VerticalDistance;

/// A vertical or speed restriction.
///
/// If both limits are present the minimum is never above the maximum.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Restriction<T> {
    minimum: Option<T>,
    maximum: Option<T>,
}

pub type AltitudeRestriction = Restriction<VerticalDistance>;

/// Speed restriction in knots.
pub type SpeedRestriction = Restriction<u16>;

impl<T> Default for Restriction<T> {
    fn default() -> Self {
        Self {
            minimum: None,
            maximum: None,
        }
    }
}

impl<T: PartialOrd + Copy> Restriction<T> {
    /// A restriction without limits.
    pub const UNRESTRICTED: Self = Self {
        minimum: None,
        maximum: None,
    };

    /// Creates a restriction from both limits, swapping them if the minimum
    /// is above the maximum.
    ///
    /// Creating a restriction from the limits of another one returns an equal
    /// restriction.
    pub fn new(minimum: Option<T>, maximum: Option<T>) -> Self {
        match (minimum, maximum) {
            (Some(min), Some(max)) if min > max => Self {
                minimum: Some(max),
                maximum: Some(min),
            },
            _ => Self { minimum, maximum },
        }
    }

    pub fn at(value: T) -> Self {
        Self::new(Some(value), Some(value))
    }

    pub fn at_or_above(value: T) -> Self {
        Self::new(Some(value), None)
    }

    pub fn at_or_below(value: T) -> Self {
        Self::new(None, Some(value))
    }

    pub fn between(a: T, b: T) -> Self {
        Self::new(Some(a), Some(b))
    }

    pub fn minimum(&self) -> Option<T> {
        self.minimum
    }

    pub fn maximum(&self) -> Option<T> {
        self.maximum
    }

    pub fn is_unrestricted(&self) -> bool {
        self.minimum.is_none() && self.maximum.is_none()
    }

    /// Returns `true` if the restriction requires exactly one value.
    pub fn is_at(&self) -> bool {
        self.minimum.is_some() && self.minimum == self.maximum
    }

    /// Returns `true` if the value satisfies the restriction.
    ///
    /// Values that can't be compared to a limit don't satisfy it.
    pub fn contains(&self, value: &T) -> bool {
        let above = self.minimum.map_or(true, |min| min <= *value);
        let below = self.maximum.map_or(true, |max| *value <= max);
        above && below
    }
}

impl<T: fmt::Display + PartialEq> fmt::Display for Restriction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.minimum, &self.maximum) {
            (None, None) => write!(f, "unrestricted"),
            (Some(min), Some(max)) if min == max => write!(f, "at {min}"),
            (Some(min), Some(max)) => write!(f, "between {min} and {max}"),
            (Some(min), None) => write!(f, "at or above {min}"),
            (None, Some(max)) => write!(f, "at or below {max}"),
        }
    }
}

/// The coding of an altitude restriction.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AltitudeCode {
    /// At the first altitude.
    At,
    /// At or above the first altitude.
    AtOrAbove,
    /// At or below the first altitude.
    AtOrBelow,
    /// Between the two altitudes.
    Between,
    /// At or above the second altitude.
    AtOrAboveSecond,
    /// Glide slope altitude in the first and at altitude in the second.
    GlideSlopeAt,
    /// Glide slope altitude in the first and at or above in the second.
    GlideSlopeAtOrAbove,
    /// Glide slope intercept altitude in the second and at in the first.
    InterceptAt,
    /// Glide slope intercept altitude in the second and at or above in the first.
    InterceptAtOrAbove,
    /// Step down fix at or above the first altitude.
    StepDownAtOrAbove,
    /// Step down fix at the first altitude.
    StepDownAt,
    /// Step down fix at or below the first altitude.
    StepDownAtOrBelow,
}

/// Speed restriction coding.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpeedCode {
    At,
    AtOrAbove,
    AtOrBelow,
}

impl AltitudeRestriction {
    /// Decodes an altitude restriction from its coding and altitudes.
    pub fn decode(
        code: AltitudeCode,
        first: Option<VerticalDistance>,
        second: Option<VerticalDistance>,
    ) -> Self {
        let Some(alt1) = first else {
            return match (code, second) {
                (AltitudeCode::AtOrAboveSecond, Some(alt2)) => Self::at_or_above(alt2),
                _ => Self::UNRESTRICTED,
            };
        };

        match code {
            AltitudeCode::At | AltitudeCode::StepDownAt => Self::at(alt1),
            AltitudeCode::GlideSlopeAt | AltitudeCode::InterceptAt => Self::at(alt1),
            AltitudeCode::GlideSlopeAtOrAbove | AltitudeCode::InterceptAtOrAbove => {
                Self::at_or_above(alt1)
            }
            AltitudeCode::Between => match second {
                Some(alt2) => Self::between(alt1, alt2),
                None => Self::at_or_above(alt1),
            },
            AltitudeCode::StepDownAtOrAbove => Self::at_or_above(alt1),
            AltitudeCode::AtOrAboveSecond => Self::at_or_above(second.unwrap_or(alt1)),
            AltitudeCode::AtOrAbove => match second {
                Some(alt2) if alt1 < alt2 => Self::between(alt1, alt2),
                _ => Self::at_or_above(alt1),
            },
            AltitudeCode::AtOrBelow => match second {
                Some(alt2) if alt1 > alt2 => Self::between(alt2, alt1),
                _ => Self::at_or_below(alt1),
            },
            AltitudeCode::StepDownAtOrBelow => Self::at_or_below(alt1),
        }
    }
}

impl SpeedRestriction {
    /// Decodes a speed restriction in knots.
    pub fn decode(code: SpeedCode, speed: Option<u16>) -> Self {
        match (code, speed) {
            (_, None) => Self::UNRESTRICTED,
            (SpeedCode::At, Some(kt)) => Self::at(kt),
            (SpeedCode::AtOrAbove, Some(kt)) => Self::at_or_above(kt),
            (SpeedCode::AtOrBelow, Some(kt)) => Self::at_or_below(kt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use VerticalDistance::*;

    #[test]
    fn at_or_above_with_single_altitude() {
        let r = AltitudeRestriction::decode(AltitudeCode::AtOrAbove, Some(Msl(5000)), None);
        assert_eq!(r.minimum(), Some(Msl(5000)));
        assert_eq!(r.maximum(), None);
    }

    #[test]
    fn at_or_above_with_increasing_pair_is_between() {
        let r = AltitudeRestriction::decode(
            AltitudeCode::AtOrAbove,
            Some(Msl(5000)),
            Some(Msl(7000)),
        );
        assert_eq!(r, AltitudeRestriction::between(Msl(5000), Msl(7000)));

        let r = AltitudeRestriction::decode(
            AltitudeCode::AtOrAbove,
            Some(Msl(7000)),
            Some(Msl(5000)),
        );
        assert_eq!(r, AltitudeRestriction::at_or_above(Msl(7000)));
    }

    #[test]
    fn at_or_below_with_inverted_pair_is_between() {
        let r = AltitudeRestriction::decode(
            AltitudeCode::AtOrBelow,
            Some(Fl(190)),
            Some(Msl(12000)),
        );
        assert_eq!(r.minimum(), Some(Msl(12000)));
        assert_eq!(r.maximum(), Some(Fl(190)));
    }

    #[test]
    fn between_without_second_value_is_at_or_above() {
        let r = AltitudeRestriction::decode(AltitudeCode::Between, Some(Msl(3000)), None);
        assert_eq!(r, AltitudeRestriction::at_or_above(Msl(3000)));
    }

    #[test]
    fn between_is_ordered() {
        let r = AltitudeRestriction::decode(
            AltitudeCode::Between,
            Some(Msl(9000)),
            Some(Msl(6000)),
        );
        assert_eq!(r.minimum(), Some(Msl(6000)));
        assert_eq!(r.maximum(), Some(Msl(9000)));
    }

    #[test]
    fn glide_slope_drops_second_value() {
        let r = AltitudeRestriction::decode(
            AltitudeCode::GlideSlopeAt,
            Some(Msl(2500)),
            Some(Msl(2380)),
        );
        assert_eq!(r, AltitudeRestriction::at(Msl(2500)));

        let r = AltitudeRestriction::decode(
            AltitudeCode::InterceptAtOrAbove,
            Some(Msl(2500)),
            Some(Msl(2380)),
        );
        assert_eq!(r, AltitudeRestriction::at_or_above(Msl(2500)));
    }

    #[test]
    fn at_collapses_equal_values() {
        let r = AltitudeRestriction::decode(AltitudeCode::At, Some(Msl(4000)), Some(Msl(4000)));
        assert!(r.is_at());
        assert_eq!(r.minimum(), Some(Msl(4000)));
    }

    #[test]
    fn at_or_above_second_value() {
        let r = AltitudeRestriction::decode(
            AltitudeCode::AtOrAboveSecond,
            Some(Msl(3000)),
            Some(Msl(4000)),
        );
        assert_eq!(r, AltitudeRestriction::at_or_above(Msl(4000)));
    }

    #[test]
    fn missing_altitude_is_unrestricted() {
        let r = AltitudeRestriction::decode(AltitudeCode::At, None, None);
        assert!(r.is_unrestricted());
        assert_eq!(r, AltitudeRestriction::UNRESTRICTED);
    }

    #[test]
    fn reconstruction_is_idempotent() {
        let restrictions = [
            AltitudeRestriction::decode(AltitudeCode::AtOrAbove, Some(Msl(5000)), Some(Msl(7000))),
            AltitudeRestriction::decode(AltitudeCode::AtOrBelow, Some(Msl(8000)), Some(Msl(6000))),
            AltitudeRestriction::decode(AltitudeCode::Between, Some(Fl(200)), Some(Msl(11000))),
            AltitudeRestriction::decode(AltitudeCode::At, Some(Msl(4000)), None),
            AltitudeRestriction::decode(AltitudeCode::AtOrBelow, Some(Msl(4000)), None),
        ];

        for r in restrictions {
            let rebuilt = AltitudeRestriction::new(r.minimum(), r.maximum());
            assert_eq!(rebuilt, r);
            assert_eq!(AltitudeRestriction::new(rebuilt.minimum(), rebuilt.maximum()), r);

            if let (Some(min), Some(max)) = (r.minimum(), r.maximum()) {
                assert!(min <= max);
            }
        }
    }

    #[test]
    fn contains_values() {
        let r = AltitudeRestriction::between(Msl(5000), Msl(7000));
        assert!(r.contains(&Msl(6000)));
        assert!(!r.contains(&Msl(8000)));
        assert!(!r.contains(&Agl(6000)));
        assert!(AltitudeRestriction::UNRESTRICTED.contains(&Agl(6000)));
    }

    #[test]
    fn speed_restrictions() {
        assert_eq!(
            SpeedRestriction::decode(SpeedCode::AtOrBelow, Some(210)),
            SpeedRestriction::at_or_below(210)
        );
        assert!(SpeedRestriction::decode(SpeedCode::At, None).is_unrestricted());
        assert_eq!(SpeedRestriction::at(250).to_string(), "at 250");
    }

    #[test]
    fn display() {
        assert_eq!(
            AltitudeRestriction::between(Msl(5000), Fl(100)).to_string(),
            "between 5000 MSL and FL100"
        );
        assert_eq!(AltitudeRestriction::UNRESTRICTED.to_string(), "unrestricted");
    }
}
