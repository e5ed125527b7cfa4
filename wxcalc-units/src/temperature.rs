use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ParseUnitError;

/// Converts degrees Fahrenheit to degrees Celsius.
#[inline]
#[must_use]
pub fn to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * (5.0 / 9.0)
}

/// Converts degrees Celsius to degrees Fahrenheit.
#[inline]
#[must_use]
pub fn to_fahrenheit(celsius: f64) -> f64 {
    celsius * (9.0 / 5.0) + 32.0
}

/// The unit a temperature (or dew point) field is entered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl TemperatureUnit {
    /// Normalizes a value in this unit to degrees Celsius.
    #[must_use]
    pub fn to_celsius(self, value: f64) -> f64 {
        match self {
            Self::Celsius => value,
            Self::Fahrenheit => to_celsius(value),
        }
    }

    /// Short symbol shown next to temperature fields.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for TemperatureUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "celsius" | "C" | "°C" => Ok(Self::Celsius),
            "fahrenheit" | "F" | "°F" => Ok(Self::Fahrenheit),
            _ => Err(ParseUnitError::new("temperature", s)),
        }
    }
}
