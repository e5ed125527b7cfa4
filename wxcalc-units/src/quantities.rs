//! Quantity types for atmospheric constants.

use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{AvailableEnergy, Length, TemperatureInterval},
    },
    typenum::{N1, N2, P1, P2, Z0},
};

/// Specific gas constant, J/kg·K in SI.
pub type SpecificGasConstant = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Specific latent heat, J/kg in SI.
pub type SpecificLatentHeat = AvailableEnergy;

/// Temperature lapse rate (temperature change per unit height), K/m in SI.
pub type LapseRate = Quantity<ISQ<N1, Z0, Z0, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Builds a [`LapseRate`] from a temperature change over a height change.
#[inline]
#[must_use]
pub fn lapse_rate(change: TemperatureInterval, over: Length) -> LapseRate {
    change / over
}
