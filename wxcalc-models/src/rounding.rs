use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds `value` to `decimals` places, halves away from zero.
///
/// The decision is made on the exact stored value, so `4511.155` (stored as
/// `4511.15499...`) rounds down. A rounded zero is always positive.
pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let Some(exact) = Decimal::from_f64_retain(value) else {
        return value;
    };

    let mut rounded =
        exact.round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(decimals);

    #[allow(clippy::cast_precision_loss)]
    let mantissa = rounded.mantissa() as f64;
    mantissa / f64::from(10_u32.pow(decimals))
}
