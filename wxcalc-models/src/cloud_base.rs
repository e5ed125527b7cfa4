//! Cloud base height estimation.
//!
//! The cloud base is approximated by the lifted condensation level (LCL): the
//! height at which a surface parcel, lifted dry-adiabatically, reaches
//! saturation. Four estimates are produced from the same surface observation:
//!
//! - the dewpoint spread rule (`122 m` per degree of spread),
//! - Espy's method (`125 m` per degree of spread),
//! - a thermodynamic LCL using dry and saturated adiabatic lapse rates,
//! - an approximation read from a Stüve diagram, which scales the spread rule
//!   by `(1000 hPa / p)^0.286`.
//!
//! Every estimate is reported above ground level (AGL) and above mean sea
//! level (MSL) in the caller's height unit, alongside relative humidity.

mod engine;
mod error;
mod lcl;
mod types;

pub use engine::{CloudBaseEngine, compute_cloud_base, estimate_cloud_base};
pub use error::CloudBaseError;
pub use types::{
    CloudBaseInput, CloudBaseRequest, CloudBaseResult, DEFAULT_PRESSURE, Estimate, Method,
};
