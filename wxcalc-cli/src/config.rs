//! Form defaults loaded from a TOML file.
//!
//! ```toml
//! [cloud_base]
//! pressure = "1013.25"
//! pressure_unit = "hPa"
//! temperature_unit = "celsius"
//! height_unit = "meters"
//!
//! [turbulence]
//! time_of_day = "day"
//! season = "summer"
//! environment_type = "lake"
//! environment_size = "medium"
//! ```
//!
//! Every key is optional.

use std::{fs, path::Path};

use serde::Deserialize;
use tracing::info;
use wxcalc_models::{
    cloud_base::DEFAULT_PRESSURE,
    turbulence::{EnvironmentSize, EnvironmentType, Season, TimeOfDay},
};
use wxcalc_units::{HeightUnit, PressureUnit, TemperatureUnit};

use crate::error::CliError;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub cloud_base: CloudBaseDefaults,
    pub turbulence: TurbulenceDefaults,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CloudBaseDefaults {
    /// Pre-filled station pressure, as typed into the form.
    pub pressure: String,
    pub pressure_unit: PressureUnit,
    pub temperature_unit: TemperatureUnit,
    /// Unit for elevation input and for reported heights.
    pub height_unit: HeightUnit,
}

impl Default for CloudBaseDefaults {
    fn default() -> Self {
        Self {
            pressure: DEFAULT_PRESSURE.to_string(),
            pressure_unit: PressureUnit::Hectopascal,
            temperature_unit: TemperatureUnit::Celsius,
            height_unit: HeightUnit::Meters,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TurbulenceDefaults {
    pub time_of_day: TimeOfDay,
    pub season: Season,
    pub environment_type: EnvironmentType,
    pub environment_size: EnvironmentSize,
}

impl Config {
    /// Loads the config at `path`, or the built-in defaults when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns a [`CliError`] if the file cannot be read or is not valid TOML
    /// for this schema.
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::from_toml(&text).map_err(|source| CliError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })?;

        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
