use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::convert::{ConvertError, convert};
use crate::model::CategoryId;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors that can occur when building a problem from caller input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProblemError {
    #[error("value must be a non-negative finite number")]
    InvalidInput,
    #[error("from and to units must differ")]
    SameUnit,
    #[error(transparent)]
    InvalidUnit(#[from] ConvertError),
}

//
// ─── PROBLEM ──────────────────────────────────────────────────────────────────
//

/// One conversion question: convert `value` from `from_unit` to `to_unit`.
///
/// The expected `answer` is computed once at construction and never
/// recomputed. A problem is immutable; the next question replaces it
/// wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    value: f64,
    from_unit: String,
    to_unit: String,
    category: CategoryId,
    answer: f64,
}

impl Problem {
    /// Builds a problem from user-supplied inputs, fully validated.
    ///
    /// # Errors
    ///
    /// Returns `ProblemError::InvalidInput` if `value` is negative or not
    /// finite, `ProblemError::SameUnit` if the units are equal, and
    /// `ProblemError::InvalidUnit` if either unit is not in `category`.
    pub fn new(
        value: f64,
        from_unit: &str,
        to_unit: &str,
        category: CategoryId,
    ) -> Result<Self, ProblemError> {
        if !value.is_finite() || value < 0.0 {
            return Err(ProblemError::InvalidInput);
        }
        if from_unit == to_unit {
            return Err(ProblemError::SameUnit);
        }
        Ok(Self::from_sampled(value, from_unit, to_unit, category)?)
    }

    /// Builds a problem from a sampled unit pair without the same-unit check.
    ///
    /// The random sampler caps its retries and may settle on a degenerate
    /// pair, which is accepted here rather than treated as an error.
    ///
    /// # Errors
    ///
    /// Returns `ConvertError::InvalidUnit` if either unit is not in
    /// `category`.
    pub fn from_sampled(
        value: f64,
        from_unit: &str,
        to_unit: &str,
        category: CategoryId,
    ) -> Result<Self, ConvertError> {
        let answer = convert(value, from_unit, to_unit, category)?;
        Ok(Self {
            value,
            from_unit: from_unit.to_owned(),
            to_unit: to_unit.to_owned(),
            category,
            answer,
        })
    }

    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[must_use]
    pub fn from_unit(&self) -> &str {
        &self.from_unit
    }

    #[must_use]
    pub fn to_unit(&self) -> &str {
        &self.to_unit
    }

    #[must_use]
    pub fn category(&self) -> CategoryId {
        self.category
    }

    /// The expected answer, rounded at construction.
    #[must_use]
    pub fn answer(&self) -> f64 {
        self.answer
    }

    /// Assembled question sentence. Presentation may build its own from the
    /// prompt fields instead.
    #[must_use]
    pub fn prompt(&self) -> String {
        format!(
            "{} {} は何 {} ですか？",
            self.value, self.from_unit, self.to_unit
        )
    }
}
