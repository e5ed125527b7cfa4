/// Parses a numeric form field.
///
/// Surrounding whitespace is ignored. Returns `None` for empty text, text
/// that is not a number, and values that are not finite.
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}
