//! Numeric helpers shared by the text writers.

/// Rounds `x` to `decimals` decimal digits, ties to even.
///
/// The result is normalised so that a value rounding to zero is always
/// written as `+0`, never `-0`.
pub(crate) fn round_decimals(x: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (x * scale).round_ties_even() / scale + 0.0
}

/// Formats `x` in scientific notation with 12 fractional digits and a
/// signed, at least two-digit exponent (`1.500000000000e+00`).
pub(crate) fn sci12(x: f64) -> String {
    let raw = format!("{x:.12e}");
    let Some((mantissa, exp)) = raw.split_once('e') else {
        // NaN and infinities carry no exponent.
        return raw;
    };
    let (sign, digits) = match exp.strip_prefix('-') {
        Some(d) => ('-', d),
        None => ('+', exp),
    };
    if digits.len() < 2 {
        format!("{mantissa}e{sign}0{digits}")
    } else {
        format!("{mantissa}e{sign}{digits}")
    }
}
