//! Pure unit conversion over the static category tables.

use thiserror::Error;

use crate::model::{CategoryId, UnitCategory};

/// Significant digits kept when rounding a conversion result.
///
/// Factors differ by up to ten orders of magnitude, so the raw
/// multiply/divide picks up representation noise (`0.1 * 10.0` style
/// artifacts). Rounding here makes the returned value the canonical answer;
/// nothing downstream re-rounds it.
pub const SIGNIFICANT_DIGITS: i32 = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConvertError {
    #[error("unit '{unit}' is not part of the {category} category")]
    InvalidUnit { unit: String, category: CategoryId },
}

/// Converts `value` from one unit to another within `category`.
///
/// # Errors
///
/// Returns `ConvertError::InvalidUnit` if either unit symbol is not listed
/// in the category's table.
pub fn convert(
    value: f64,
    from: &str,
    to: &str,
    category: CategoryId,
) -> Result<f64, ConvertError> {
    let cat = UnitCategory::get(category);
    let from_base = cat.to_base(from).ok_or_else(|| ConvertError::InvalidUnit {
        unit: from.to_owned(),
        category,
    })?;
    let to_base = cat.to_base(to).ok_or_else(|| ConvertError::InvalidUnit {
        unit: to.to_owned(),
        category,
    })?;

    Ok(round_significant(
        value * from_base / to_base,
        SIGNIFICANT_DIGITS,
    ))
}

/// Rounds `value` to `digits` significant digits.
fn round_significant(value: f64, digits: i32) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let magnitude = value.abs().log10().floor() as i32;
    let factor = 10f64.powi(digits - 1 - magnitude);
    (value * factor).round() / factor
}
