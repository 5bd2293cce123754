//! Display formatting for expected answers.
//!
//! Avoids scientific notation except for extreme magnitudes and trims
//! trailing zeros so "5000.000000" renders as "5000". Purely presentational;
//! the answer stored on a problem is never touched.

/// Formats a numeric answer for display.
///
/// - `0` renders as `"0"`.
/// - Magnitudes below `1e-8` or at/above `1e12` use exponential notation
///   with up to six fractional digits, zeros trimmed before the exponent.
/// - Otherwise fixed-point with 10, 6, or 2 decimal places depending on the
///   magnitude band, trailing zeros trimmed.
#[must_use]
pub fn format_answer(num: f64) -> String {
    if num == 0.0 {
        return "0".to_owned();
    }
    let abs = num.abs();
    if abs < 1e-8 || abs >= 1e12 {
        return trim_mantissa(&format!("{num:.6e}"));
    }
    let fixed = if abs < 1.0 {
        format!("{num:.10}")
    } else if abs < 1000.0 {
        format!("{num:.6}")
    } else {
        format!("{num:.2}")
    };
    trim_fraction(&fixed)
}

/// Strips trailing fractional zeros and a dangling decimal point.
fn trim_fraction(fixed: &str) -> String {
    if !fixed.contains('.') {
        return fixed.to_owned();
    }
    fixed.trim_end_matches('0').trim_end_matches('.').to_owned()
}

/// Trims the mantissa of an exponential rendering, keeping the exponent.
fn trim_mantissa(exp: &str) -> String {
    match exp.split_once('e') {
        Some((mantissa, exponent)) => format!("{}e{exponent}", trim_fraction(mantissa)),
        None => exp.to_owned(),
    }
}
