use std::fmt;

use serde::{Deserialize, Serialize};
use wxcalc_units::{HeightUnit, PressureUnit, TemperatureUnit};

use crate::{cloud_base::CloudBaseError, field::parse_number};

/// Station pressure pre-filled in the form, in hPa (standard atmosphere).
pub const DEFAULT_PRESSURE: &str = "1013.25";

/// Raw cloud base form values, as entered by the user.
///
/// Temperature and dew point share `temperature_unit`. Heights in the result
/// are expressed in `output_unit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudBaseRequest {
    pub temperature: String,
    pub dew_point: String,
    pub pressure: String,
    pub elevation: String,
    pub temperature_unit: TemperatureUnit,
    pub pressure_unit: PressureUnit,
    pub elevation_unit: HeightUnit,
    pub output_unit: HeightUnit,
}

impl Default for CloudBaseRequest {
    fn default() -> Self {
        Self {
            temperature: String::new(),
            dew_point: String::new(),
            pressure: DEFAULT_PRESSURE.to_string(),
            elevation: String::new(),
            temperature_unit: TemperatureUnit::default(),
            pressure_unit: PressureUnit::default(),
            elevation_unit: HeightUnit::default(),
            output_unit: HeightUnit::default(),
        }
    }
}

impl CloudBaseRequest {
    /// Parses the raw fields into a [`CloudBaseInput`].
    ///
    /// # Errors
    ///
    /// Returns [`CloudBaseError::InvalidInput`] if any field is empty or is
    /// not a finite number.
    pub fn parse(&self) -> Result<CloudBaseInput, CloudBaseError> {
        let field = |raw: &str| parse_number(raw).ok_or(CloudBaseError::InvalidInput);

        Ok(CloudBaseInput {
            temperature: field(&self.temperature)?,
            dew_point: field(&self.dew_point)?,
            pressure: field(&self.pressure)?,
            elevation: field(&self.elevation)?,
            temperature_unit: self.temperature_unit,
            pressure_unit: self.pressure_unit,
            elevation_unit: self.elevation_unit,
            output_unit: self.output_unit,
        })
    }
}

/// Numeric cloud base inputs, each in its tagged unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CloudBaseInput {
    pub temperature: f64,
    pub dew_point: f64,
    pub pressure: f64,
    pub elevation: f64,
    pub temperature_unit: TemperatureUnit,
    pub pressure_unit: PressureUnit,
    pub elevation_unit: HeightUnit,
    pub output_unit: HeightUnit,
}

/// A single cloud base estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Height above mean sea level, rounded to two decimals.
    pub msl: f64,

    /// Height above ground level, rounded to two decimals.
    pub agl: f64,
}

/// The estimation methods, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    DewpointSpread,
    Espy,
    AccurateLcl,
    Stuve,
}

impl Method {
    pub const ALL: [Method; 4] = [
        Method::DewpointSpread,
        Method::Espy,
        Method::AccurateLcl,
        Method::Stuve,
    ];

    /// Human-readable name of the method.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::DewpointSpread => "Dewpoint Spread Method",
            Self::Espy => "Espy's Method",
            Self::AccurateLcl => "Accurate LCL Calculation",
            Self::Stuve => "Stüve's Diagram Method",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of a cloud base calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CloudBaseResult {
    pub dewpoint_spread: Estimate,
    pub espy: Estimate,
    pub accurate_lcl: Estimate,
    pub stuve: Estimate,

    /// Relative humidity in percent, rounded to one decimal.
    pub relative_humidity: f64,

    /// Unit of every height in this result.
    pub unit: HeightUnit,
}

impl CloudBaseResult {
    /// Returns the estimate produced by `method`.
    #[must_use]
    pub fn estimate(&self, method: Method) -> Estimate {
        match method {
            Method::DewpointSpread => self.dewpoint_spread,
            Method::Espy => self.espy,
            Method::AccurateLcl => self.accurate_lcl,
            Method::Stuve => self.stuve,
        }
    }

    /// Iterates over every estimate in display order.
    pub fn estimates(&self) -> impl Iterator<Item = (Method, Estimate)> + '_ {
        Method::ALL
            .into_iter()
            .map(move |method| (method, self.estimate(method)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(temperature: &str, dew_point: &str, elevation: &str) -> CloudBaseRequest {
        CloudBaseRequest {
            temperature: temperature.into(),
            dew_point: dew_point.into(),
            elevation: elevation.into(),
            ..CloudBaseRequest::default()
        }
    }

    #[test]
    fn default_request_uses_standard_pressure() {
        let request = CloudBaseRequest::default();
        assert_eq!(request.pressure, "1013.25");
        assert_eq!(request.pressure_unit, PressureUnit::Hectopascal);
        assert_eq!(request.temperature_unit, TemperatureUnit::Celsius);
        assert_eq!(request.output_unit, HeightUnit::Meters);
        assert!(request.temperature.is_empty());
    }

    #[test]
    fn parse_keeps_unit_tags() {
        let mut raw = request("68", "50", "1000");
        raw.temperature_unit = TemperatureUnit::Fahrenheit;
        raw.elevation_unit = HeightUnit::Feet;

        let input = raw.parse().unwrap();
        assert_eq!(input.temperature, 68.0);
        assert_eq!(input.dew_point, 50.0);
        assert_eq!(input.pressure, 1013.25);
        assert_eq!(input.elevation, 1000.0);
        assert_eq!(input.temperature_unit, TemperatureUnit::Fahrenheit);
        assert_eq!(input.elevation_unit, HeightUnit::Feet);
    }

    #[test]
    fn parse_rejects_any_missing_field() {
        assert_eq!(request("", "10", "0").parse(), Err(CloudBaseError::InvalidInput));
        assert_eq!(request("20", "x", "0").parse(), Err(CloudBaseError::InvalidInput));
        assert_eq!(request("20", "10", "").parse(), Err(CloudBaseError::InvalidInput));

        let mut raw = request("20", "10", "0");
        raw.pressure = String::new();
        assert_eq!(raw.parse(), Err(CloudBaseError::InvalidInput));
    }

    #[test]
    fn estimates_follow_display_order() {
        let estimate = |x: f64| Estimate { msl: x, agl: x };
        let result = CloudBaseResult {
            dewpoint_spread: estimate(1.0),
            espy: estimate(2.0),
            accurate_lcl: estimate(3.0),
            stuve: estimate(4.0),
            relative_humidity: 50.0,
            unit: HeightUnit::Meters,
        };

        let order: Vec<_> = result.estimates().map(|(m, e)| (m, e.agl)).collect();
        assert_eq!(
            order,
            vec![
                (Method::DewpointSpread, 1.0),
                (Method::Espy, 2.0),
                (Method::AccurateLcl, 3.0),
                (Method::Stuve, 4.0),
            ]
        );
        assert_eq!(Method::Stuve.to_string(), "Stüve's Diagram Method");
    }
}
