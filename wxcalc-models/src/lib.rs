//! Aviation weather estimate models.
//!
//! Two independent calculators live here:
//!
//! - [`cloud_base`] estimates the height of the cloud base from surface
//!   temperature, dew point, pressure, and station elevation.
//! - [`turbulence`] scores the potential for low-level turbulence from
//!   temperature, wind, and a few categorical conditions.
//!
//! Both are stateless. Each is available as a plain function and as a
//! [`Component`](wxcalc_core::Component) that accepts raw form values.

pub mod cloud_base;
pub mod turbulence;

mod field;
mod rounding;
