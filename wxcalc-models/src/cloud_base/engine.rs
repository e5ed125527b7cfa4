use tracing::debug;
use wxcalc_core::Component;
use wxcalc_units::HeightUnit;

use crate::{
    cloud_base::{CloudBaseError, CloudBaseInput, CloudBaseRequest, CloudBaseResult, Estimate, lcl},
    rounding::round_to,
};

/// Cloud base calculator operating on raw form values.
#[derive(Debug, Clone, Copy, Default)]
pub struct CloudBaseEngine;

impl Component for CloudBaseEngine {
    type Input = CloudBaseRequest;
    type Output = CloudBaseResult;
    type Error = CloudBaseError;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        compute_cloud_base(&input)
    }
}

/// Parses raw form values and estimates the cloud base.
///
/// # Errors
///
/// Returns [`CloudBaseError::InvalidInput`] if a field is not a number, and
/// [`CloudBaseError::InvalidPhysicalState`] if the dew point is above the
/// temperature.
pub fn compute_cloud_base(request: &CloudBaseRequest) -> Result<CloudBaseResult, CloudBaseError> {
    estimate_cloud_base(&request.parse()?)
}

/// Estimates the cloud base from numeric inputs.
///
/// Inputs are normalized to Celsius, hectopascals, and meters. Each method's
/// height above the station is converted to `input.output_unit` and rounded
/// to two decimals for AGL. MSL adds the station elevation, in the output
/// unit, before rounding.
///
/// # Errors
///
/// Returns [`CloudBaseError::InvalidInput`] if any value is not finite or the
/// pressure is not positive, and [`CloudBaseError::InvalidPhysicalState`] if
/// the dew point is above the temperature.
pub fn estimate_cloud_base(input: &CloudBaseInput) -> Result<CloudBaseResult, CloudBaseError> {
    let temperature_c = input.temperature_unit.to_celsius(input.temperature);
    let dew_point_c = input.temperature_unit.to_celsius(input.dew_point);
    let pressure_hpa = input.pressure_unit.to_hpa(input.pressure);
    let elevation_m = input.elevation_unit.to_meters(input.elevation);

    let all_finite = [temperature_c, dew_point_c, pressure_hpa, elevation_m]
        .iter()
        .all(|value| value.is_finite());
    if !all_finite || pressure_hpa <= 0.0 {
        return Err(CloudBaseError::InvalidInput);
    }

    debug!(
        temperature_c,
        dew_point_c,
        pressure_hpa,
        elevation_m,
        "normalized cloud base input"
    );

    let spread = temperature_c - dew_point_c;
    if spread < 0.0 {
        return Err(CloudBaseError::InvalidPhysicalState);
    }

    let unit = input.output_unit;
    let elevation = unit.express_meters(elevation_m);
    let estimate = |meters: f64| to_estimate(meters, elevation, unit);

    let result = CloudBaseResult {
        dewpoint_spread: estimate(lcl::dewpoint_spread(spread)),
        espy: estimate(lcl::espy(spread)),
        accurate_lcl: estimate(lcl::accurate(temperature_c, dew_point_c, pressure_hpa)),
        stuve: estimate(lcl::stuve(spread, pressure_hpa)),
        relative_humidity: round_to(lcl::relative_humidity(temperature_c, dew_point_c), 1),
        unit,
    };

    debug!(?result, "cloud base estimated");
    Ok(result)
}

/// Expresses a height above the station in `unit`, with and without the
/// station elevation (already in `unit`).
fn to_estimate(meters: f64, elevation: f64, unit: HeightUnit) -> Estimate {
    let agl = unit.express_meters(meters);
    Estimate {
        msl: round_to(agl + elevation, 2),
        agl: round_to(agl, 2),
    }
}
