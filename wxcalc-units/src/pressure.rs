use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::ParseUnitError;

const HPA_PER_INHG: f64 = 33.86389;
const HPA_PER_MMHG: f64 = 1.33322;

/// Barometer units accepted for station pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PressureUnit {
    #[default]
    #[serde(rename = "hPa")]
    Hectopascal,
    #[serde(rename = "inHg")]
    InchOfMercury,
    #[serde(rename = "mmHg")]
    MillimeterOfMercury,
}

/// Converts a pressure reading in `unit` to hectopascals.
#[inline]
#[must_use]
pub fn to_hpa(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Hectopascal => value,
        PressureUnit::InchOfMercury => value * HPA_PER_INHG,
        PressureUnit::MillimeterOfMercury => value * HPA_PER_MMHG,
    }
}

impl PressureUnit {
    /// Normalizes a value in this unit to hectopascals.
    #[must_use]
    pub fn to_hpa(self, value: f64) -> f64 {
        to_hpa(value, self)
    }

    /// The barometer symbol as shown in the unit selector.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Hectopascal => "hPa",
            Self::InchOfMercury => "inHg",
            Self::MillimeterOfMercury => "mmHg",
        }
    }
}

impl fmt::Display for PressureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for PressureUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hPa" => Ok(Self::Hectopascal),
            "inHg" => Ok(Self::InchOfMercury),
            "mmHg" => Ok(Self::MillimeterOfMercury),
            _ => Err(ParseUnitError::new("pressure", s)),
        }
    }
}
