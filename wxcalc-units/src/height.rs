use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ParseUnitError;

/// Feet per meter used throughout the calculators.
const FEET_PER_METER: f64 = 3.28084;

/// Converts meters to feet.
#[inline]
#[must_use]
pub fn to_feet(meters: f64) -> f64 {
    meters * FEET_PER_METER
}

/// Converts feet to meters.
#[inline]
#[must_use]
pub fn to_meters(feet: f64) -> f64 {
    feet / FEET_PER_METER
}

/// The unit used for elevations and reported heights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    #[default]
    #[serde(alias = "meter", alias = "m")]
    Meters,
    #[serde(alias = "foot", alias = "ft")]
    Feet,
}

impl HeightUnit {
    /// Normalizes a value in this unit to meters.
    #[must_use]
    pub fn to_meters(self, value: f64) -> f64 {
        match self {
            Self::Meters => value,
            Self::Feet => to_meters(value),
        }
    }

    /// Expresses a value in meters in this unit.
    #[must_use]
    pub fn express_meters(self, meters: f64) -> f64 {
        match self {
            Self::Meters => meters,
            Self::Feet => to_feet(meters),
        }
    }

    /// Plural unit name as displayed next to results.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Meters => "meters",
            Self::Feet => "feet",
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HeightUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "meters" | "meter" | "m" => Ok(Self::Meters),
            "feet" | "foot" | "ft" => Ok(Self::Feet),
            _ => Err(ParseUnitError::new("height", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use uom::si::{
        f64::Length,
        length::{foot, meter},
    };

    #[test]
    fn round_trip_is_stable() {
        for m in [-430.0, 0.0, 1.0, 1220.0, 8848.86, 1.0e5] {
            assert_abs_diff_eq!(to_meters(to_feet(m)), m, epsilon = 1e-6);
        }
    }

    #[test]
    fn factor_is_close_to_the_international_foot() {
        let exact = Length::new::<meter>(1000.0).get::<foot>();
        assert_relative_eq!(to_feet(1000.0), exact, max_relative = 1e-6);
    }

    #[test]
    fn unit_conversions_are_inverse() {
        assert_abs_diff_eq!(HeightUnit::Meters.express_meters(250.0), 250.0);
        assert_abs_diff_eq!(HeightUnit::Feet.express_meters(1000.0), 3280.84, epsilon = 1e-9);
        assert_abs_diff_eq!(HeightUnit::Feet.to_meters(3280.84), 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn parses_form_values() {
        assert_eq!("feet".parse(), Ok(HeightUnit::Feet));
        assert_eq!("m".parse(), Ok(HeightUnit::Meters));
        assert_eq!(
            "yards".parse::<HeightUnit>(),
            Err(ParseUnitError::new("height", "yards"))
        );
    }
}
