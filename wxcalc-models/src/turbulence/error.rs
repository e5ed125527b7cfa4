use thiserror::Error;

/// Errors that may occur when scoring turbulence potential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TurbulenceError {
    /// Temperature or wind speed is missing, not a finite number, or the wind
    /// speed is negative.
    #[error("Please enter valid numbers for temperature and wind speed.")]
    InvalidInput,
}
