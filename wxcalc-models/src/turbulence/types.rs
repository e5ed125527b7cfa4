use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{field::parse_number, turbulence::TurbulenceError};

/// Error returned when a selection string is not one of the offered options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {field} `{value}`")]
pub struct ParseSelectionError {
    pub field: &'static str,
    pub value: String,
}

fn unrecognized(field: &'static str, value: &str) -> ParseSelectionError {
    ParseSelectionError {
        field,
        value: value.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    #[default]
    Day,
    Night,
}

impl FromStr for TimeOfDay {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Self::Day),
            "night" => Ok(Self::Night),
            _ => Err(unrecognized("time of day", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    #[default]
    Summer,
    Fall,
    Winter,
}

impl FromStr for Season {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spring" => Ok(Self::Spring),
            "summer" => Ok(Self::Summer),
            "fall" => Ok(Self::Fall),
            "winter" => Ok(Self::Winter),
            _ => Err(unrecognized("season", s)),
        }
    }
}

/// The surface below the flight path.
///
/// Collected with the other conditions but not weighted by the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentType {
    #[default]
    Lake,
    City,
}

impl FromStr for EnvironmentType {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lake" => Ok(Self::Lake),
            "city" => Ok(Self::City),
            _ => Err(unrecognized("environment type", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FromStr for EnvironmentSize {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            _ => Err(unrecognized("environment size", s)),
        }
    }
}

/// Raw turbulence form values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TurbulenceRequest {
    /// Temperature in °C.
    pub temperature: String,
    /// Wind speed in knots.
    pub wind_speed: String,
    pub time_of_day: TimeOfDay,
    pub season: Season,
    pub environment_type: EnvironmentType,
    pub environment_size: EnvironmentSize,
}

impl TurbulenceRequest {
    /// Parses the numeric fields into a [`TurbulenceInput`].
    ///
    /// # Errors
    ///
    /// Returns [`TurbulenceError::InvalidInput`] if temperature or wind speed
    /// is empty or not a finite number.
    pub fn parse(&self) -> Result<TurbulenceInput, TurbulenceError> {
        let field = |raw: &str| parse_number(raw).ok_or(TurbulenceError::InvalidInput);

        Ok(TurbulenceInput {
            temperature: field(&self.temperature)?,
            wind_speed: field(&self.wind_speed)?,
            time_of_day: self.time_of_day,
            season: self.season,
            environment_type: self.environment_type,
            environment_size: self.environment_size,
        })
    }
}

/// Numeric turbulence inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurbulenceInput {
    /// Temperature in °C.
    pub temperature: f64,
    /// Wind speed in knots.
    pub wind_speed: f64,
    pub time_of_day: TimeOfDay,
    pub season: Season,
    pub environment_type: EnvironmentType,
    pub environment_size: EnvironmentSize,
}

/// Three-tier turbulence potential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Low,
    Moderate,
    High,
}

impl Category {
    /// Buckets a score: up to 3 is low, up to 6 moderate, above that high.
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=3 => Self::Low,
            4..=6 => Self::Moderate,
            _ => Self::High,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a turbulence potential calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurbulenceResult {
    /// Whole-number score from 0 to 10.
    pub score: u8,
    pub category: Category,
}
