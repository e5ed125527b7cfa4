use std::path::PathBuf;

use thiserror::Error;
use wxcalc_models::{cloud_base::CloudBaseError, turbulence::TurbulenceError};

/// Errors surfaced by the `wxcalc` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read config {}: {source}", path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    CloudBase(#[from] CloudBaseError),

    #[error(transparent)]
    Turbulence(#[from] TurbulenceError),
}
