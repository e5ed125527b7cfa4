//! Fixture loading for the cross-crate scenario tests.

use std::{fs, path::PathBuf};

use serde::{Deserialize, de::DeserializeOwned};
use wxcalc_models::{
    cloud_base::CloudBaseRequest,
    turbulence::{Category, TurbulenceRequest},
};

/// Absolute path of a file in `fixtures/`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

fn read_fixture(name: &str) -> String {
    let path = fixture_path(name);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("reading {}: {err}", path.display()))
}

/// Loads a JSON fixture.
pub fn load_json<T: DeserializeOwned>(name: &str) -> T {
    serde_json::from_str(&read_fixture(name)).unwrap_or_else(|err| panic!("parsing {name}: {err}"))
}

/// Loads a TOML fixture.
pub fn load_toml<T: DeserializeOwned>(name: &str) -> T {
    toml::from_str(&read_fixture(name)).unwrap_or_else(|err| panic!("parsing {name}: {err}"))
}

/// A cloud base scenario.
#[derive(Debug, Deserialize)]
pub struct CloudBaseCase {
    pub name: String,
    pub request: CloudBaseRequest,
    pub expected: CloudBaseExpectation,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloudBaseExpectation {
    /// Spot values; omitted methods are not checked.
    Estimates {
        dewpoint_spread_msl: Option<f64>,
        espy_msl: Option<f64>,
        accurate_lcl_msl: Option<f64>,
        stuve_msl: Option<f64>,
        relative_humidity: Option<f64>,
    },
    /// The user-facing error message.
    Error { message: String },
}

/// Collection of turbulence scenarios, as stored in TOML.
#[derive(Debug, Deserialize)]
pub struct TurbulenceCases {
    #[serde(rename = "case")]
    pub cases: Vec<TurbulenceCase>,
}

/// A turbulence scenario.
#[derive(Debug, Deserialize)]
pub struct TurbulenceCase {
    pub name: String,
    pub request: TurbulenceRequest,
    pub score: u8,
    pub category: Category,
}
