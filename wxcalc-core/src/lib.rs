//! Core traits shared by the `wxcalc` calculators.
//!
//! Each calculator is a [`Component`]: a stateless, deterministic function
//! from a typed input to a typed result or a domain error.

mod component;

pub use component::Component;
