use tracing::debug;
use wxcalc_core::Component;

use crate::turbulence::{
    Category, EnvironmentSize, Season, TimeOfDay, TurbulenceError, TurbulenceInput,
    TurbulenceRequest, TurbulenceResult,
};

/// Reference temperature for the temperature factor, in °C.
const REFERENCE_TEMPERATURE: f64 = 15.0;

/// Most points any single continuous factor can contribute.
const FACTOR_CAP: f64 = 3.0;

const MAX_SCORE: f64 = 10.0;

/// Turbulence calculator operating on raw form values.
#[derive(Debug, Clone, Copy, Default)]
pub struct TurbulenceEngine;

impl Component for TurbulenceEngine {
    type Input = TurbulenceRequest;
    type Output = TurbulenceResult;
    type Error = TurbulenceError;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        compute_turbulence_score(&input.parse()?)
    }
}

/// Scores the turbulence potential of the given conditions.
///
/// The environment type is accepted but does not affect the score.
///
/// # Errors
///
/// Returns [`TurbulenceError::InvalidInput`] if temperature or wind speed is
/// not finite, or the wind speed is negative.
pub fn compute_turbulence_score(
    input: &TurbulenceInput,
) -> Result<TurbulenceResult, TurbulenceError> {
    if !input.temperature.is_finite() || !input.wind_speed.is_finite() || input.wind_speed < 0.0 {
        return Err(TurbulenceError::InvalidInput);
    }

    let mut points = 0.0;
    points += temperature_points(input.temperature);
    points += wind_points(input.wind_speed);
    points += time_of_day_points(input.time_of_day);
    points += season_points(input.season);
    points += size_points(input.environment_size);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let score = points.round().min(MAX_SCORE) as u8;
    let category = Category::from_score(score);

    debug!(points, score, %category, "turbulence scored");
    Ok(TurbulenceResult { score, category })
}

fn temperature_points(temperature: f64) -> f64 {
    ((temperature - REFERENCE_TEMPERATURE).abs() / 5.0).min(FACTOR_CAP)
}

fn wind_points(wind_speed: f64) -> f64 {
    (wind_speed / 10.0).min(FACTOR_CAP)
}

fn time_of_day_points(time_of_day: TimeOfDay) -> f64 {
    match time_of_day {
        TimeOfDay::Day => 1.0,
        TimeOfDay::Night => 0.0,
    }
}

fn season_points(season: Season) -> f64 {
    match season {
        Season::Summer | Season::Winter => 1.0,
        Season::Spring | Season::Fall => 0.0,
    }
}

fn size_points(size: EnvironmentSize) -> f64 {
    match size {
        EnvironmentSize::Small => 0.0,
        EnvironmentSize::Medium => 1.0,
        EnvironmentSize::Large => 2.0,
    }
}
