use thiserror::Error;

/// Errors that may occur when estimating the cloud base.
///
/// The display text is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CloudBaseError {
    /// A required field is empty, not a number, or out of range.
    #[error("Please enter valid numbers for all fields.")]
    InvalidInput,

    /// The dew point is above the air temperature.
    #[error("Dew point cannot be higher than temperature.")]
    InvalidPhysicalState,
}
