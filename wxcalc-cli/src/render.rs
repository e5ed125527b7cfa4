//! Text rendering of calculator results.

use wxcalc_models::{cloud_base::CloudBaseResult, turbulence::TurbulenceResult};

const CLOUD_BASE_NOTE: &str = "Note: MSL = Mean Sea Level, AGL = Above Ground Level. \
These calculations are based on simplified models and may not account for all \
atmospheric conditions. Always consult official weather reports for flight planning.";

pub fn cloud_base(result: &CloudBaseResult) -> String {
    let unit = result.unit;
    let mut out = String::from("Estimated Cloud Base Height:\n");

    for (method, estimate) in result.estimates() {
        out.push_str(&format!(
            "- {method}: {msl} {unit} MSL ({agl} {unit} AGL)\n",
            msl = estimate.msl,
            agl = estimate.agl,
        ));
    }
    out.push_str(&format!("- Relative Humidity: {:.1}%\n", result.relative_humidity));
    out.push_str(&format!("\n{CLOUD_BASE_NOTE}\n"));

    out
}

pub fn turbulence(result: &TurbulenceResult) -> String {
    format!(
        "Turbulence Potential:\nScore: {}/10\nCategory: {}\n",
        result.score, result.category
    )
}
