//! Unit tags and conversions for the `wxcalc` calculators.
//!
//! Form fields arrive tagged with the unit the user selected. Each tag is a
//! closed enum ([`TemperatureUnit`], [`PressureUnit`], [`HeightUnit`]) so that
//! every conversion branch is matched exhaustively.
//!
//! The conversion factors are the fixed aviation approximations used by the
//! calculators (for example `1 m = 3.28084 ft`), not the exact SI
//! definitions. Results computed with them are reproducible to the last
//! displayed decimal.

mod error;
mod height;
mod pressure;
mod temperature;

pub mod quantities;

pub use error::ParseUnitError;
pub use height::{HeightUnit, to_feet, to_meters};
pub use pressure::{PressureUnit, to_hpa};
pub use temperature::{TemperatureUnit, to_celsius, to_fahrenheit};
