use thiserror::Error;

/// Error returned when a unit tag string is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {kind} unit `{value}`")]
pub struct ParseUnitError {
    /// The kind of unit being parsed, such as `"pressure"`.
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

impl ParseUnitError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
