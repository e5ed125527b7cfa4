//! Heuristic turbulence potential.
//!
//! Points accumulate from five independent factors:
//!
//! | factor            | points                                  |
//! |-------------------|-----------------------------------------|
//! | temperature       | `min(abs(t − 15 °C) / 5, 3)`           |
//! | wind speed        | `min(wind_kt / 10, 3)`                  |
//! | time of day       | `1` by day                              |
//! | season            | `1` in summer or winter                 |
//! | environment size  | `0` small, `1` medium, `2` large        |
//!
//! The sum is rounded to a whole score, capped at 10, and bucketed into a
//! [`Category`].

mod error;
mod score;
mod types;

pub use error::TurbulenceError;
pub use score::{TurbulenceEngine, compute_turbulence_score};
pub use types::{
    Category, EnvironmentSize, EnvironmentType, ParseSelectionError, Season, TimeOfDay,
    TurbulenceInput, TurbulenceRequest, TurbulenceResult,
};
