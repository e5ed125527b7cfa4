//! Lifted condensation level estimates and humidity.
//!
//! Heights are meters above the station. Temperatures are degrees Celsius and
//! pressures are hectopascals.

use tracing::trace;
use uom::si::{
    acceleration::meter_per_second_squared,
    available_energy::joule_per_kilogram,
    f64::{Acceleration, Length, SpecificHeatCapacity, TemperatureInterval},
    length::meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    temperature_interval::kelvin as delta_kelvin,
};
use wxcalc_units::quantities::{LapseRate, SpecificGasConstant, SpecificLatentHeat, lapse_rate};

/// Offset between the Celsius and Kelvin scales.
const ZERO_CELSIUS_IN_KELVIN: f64 = 273.15;

/// Meters of cloud base per degree of dewpoint spread.
const SPREAD_RULE_FACTOR: f64 = 122.0;

/// Meters of cloud base per degree of dewpoint spread, after Espy.
const ESPY_FACTOR: f64 = 125.0;

/// Exponent `R/cp` applied to the pressure ratio in the Stüve approximation.
const STUVE_EXPONENT: f64 = 0.286;

/// Physical constants used by the thermodynamic LCL.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MoistAir {
    pub latent_heat: SpecificLatentHeat,
    pub vapor_gas_constant: SpecificGasConstant,
    pub gravity: Acceleration,
    pub dry_heat_capacity: SpecificHeatCapacity,
    pub dry_lapse_rate: LapseRate,
}

impl MoistAir {
    pub(crate) fn standard() -> Self {
        Self {
            latent_heat: SpecificLatentHeat::new::<joule_per_kilogram>(2_500_000.0),
            vapor_gas_constant: SpecificGasConstant::new::<joule_per_kilogram_kelvin>(461.5),
            gravity: Acceleration::new::<meter_per_second_squared>(9.8),
            dry_heat_capacity: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(1004.0),
            dry_lapse_rate: lapse_rate(
                TemperatureInterval::new::<delta_kelvin>(0.00976),
                Length::new::<meter>(1.0),
            ),
        }
    }
}

pub(crate) fn dewpoint_spread(spread: f64) -> f64 {
    spread * SPREAD_RULE_FACTOR
}

pub(crate) fn espy(spread: f64) -> f64 {
    ESPY_FACTOR * spread
}

pub(crate) fn stuve(spread: f64, pressure_hpa: f64) -> f64 {
    SPREAD_RULE_FACTOR * spread * (1000.0 / pressure_hpa).powf(STUVE_EXPONENT)
}

/// Thermodynamic LCL from the difference between the dry and saturated
/// adiabatic lapse rates.
pub(crate) fn accurate(temperature_c: f64, dew_point_c: f64, pressure_hpa: f64) -> f64 {
    let air = MoistAir::standard();
    let l = air.latent_heat.value;
    let rv = air.vapor_gas_constant.value;
    let g = air.gravity.value;
    let cp = air.dry_heat_capacity.value;
    let gamma_d = air.dry_lapse_rate.value;

    let e = 6.11 * ((17.27 * dew_point_c) / (dew_point_c + 237.3)).exp();
    let r = 0.622 * e / (pressure_hpa - e);

    let t = temperature_c + ZERO_CELSIUS_IN_KELVIN;
    let gamma_s = (g * (1.0 + (l * r) / (rv * t))) / (cp + (l * l * r) / (rv * t * t));

    trace!(vapor_pressure = e, mixing_ratio = r, gamma_s, "saturated lapse rate");

    (temperature_c - dew_point_c) / (gamma_d - gamma_s)
}

/// Saturation vapor pressure in hPa (Bolton).
fn saturation_vapor_pressure(temperature_c: f64) -> f64 {
    6.112 * ((17.67 * temperature_c) / (temperature_c + 243.5)).exp()
}

/// Relative humidity in percent, unrounded.
pub(crate) fn relative_humidity(temperature_c: f64, dew_point_c: f64) -> f64 {
    let saturated = saturation_vapor_pressure(temperature_c);
    let actual = saturation_vapor_pressure(dew_point_c);
    (actual / saturated) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn spread_rules_scale_linearly() {
        assert_relative_eq!(dewpoint_spread(10.0), 1220.0);
        assert_relative_eq!(espy(10.0), 1250.0);
        assert_relative_eq!(dewpoint_spread(0.0), 0.0);
    }

    #[test]
    fn stuve_matches_spread_rule_at_1000_hpa() {
        assert_relative_eq!(stuve(10.0, 1000.0), 1220.0);
        // Lower pressure raises the estimate.
        assert!(stuve(10.0, 850.0) > stuve(10.0, 1000.0));
        assert_relative_eq!(
            stuve(10.0, 1013.25),
            1220.0 * (1000.0_f64 / 1013.25).powf(0.286),
        );
    }

    #[test]
    fn constants_are_read_in_si() {
        let air = MoistAir::standard();
        assert_relative_eq!(air.latent_heat.value, 2.5e6);
        assert_relative_eq!(air.vapor_gas_constant.value, 461.5);
        assert_relative_eq!(air.gravity.value, 9.8);
        assert_relative_eq!(air.dry_heat_capacity.value, 1004.0);
        assert_relative_eq!(air.dry_lapse_rate.value, 0.00976);
    }

    #[test]
    fn accurate_lcl_is_zero_when_saturated() {
        assert_abs_diff_eq!(accurate(15.0, 15.0, 1013.25), 0.0);
    }

    #[test]
    fn accurate_lcl_reference_value() {
        // e = 6.11·exp(17.27·10/247.3) ≈ 12.28 hPa, r ≈ 0.00763,
        // Γs ≈ 0.00507 K/m, so 10 K / (0.00976 − 0.00507) ≈ 2131 m.
        let lcl = accurate(20.0, 10.0, 1013.25);
        assert_abs_diff_eq!(lcl, 2130.83, epsilon = 0.01);
        assert!(lcl > dewpoint_spread(10.0));
    }

    #[test]
    fn relative_humidity_bounds() {
        assert_relative_eq!(relative_humidity(20.0, 20.0), 100.0);
        assert_abs_diff_eq!(relative_humidity(20.0, 10.0), 52.5, epsilon = 0.05);
        assert!(relative_humidity(30.0, -10.0) < 10.0);
    }
}
