//! Answer checking with a relative tolerance and an absolute floor.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Problem;

/// Relative tolerance applied to the expected answer.
pub const RELATIVE_TOLERANCE: f64 = 1e-4;

/// Absolute floor so answers near zero still require a near-exact match.
pub const TOLERANCE_FLOOR: f64 = 1e-4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvaluateError {
    #[error("submitted answer must be a finite number")]
    InvalidInput,
}

/// Outcome of evaluating one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub correct: bool,
    pub new_streak: u32,
}

/// Allowed absolute difference for a given expected answer.
#[must_use]
pub fn tolerance_for(answer: f64) -> f64 {
    (answer.abs() * RELATIVE_TOLERANCE).max(TOLERANCE_FLOOR)
}

/// Checks `submitted` against the problem's expected answer and computes the
/// next streak value.
///
/// Stateless and one-shot by convention: the caller tracks the per-problem
/// `answered` flag and must not evaluate the same problem twice.
///
/// # Errors
///
/// Returns `EvaluateError::InvalidInput` if `submitted` is not finite.
pub fn evaluate(submitted: f64, problem: &Problem, streak: u32) -> Result<Verdict, EvaluateError> {
    if !submitted.is_finite() {
        return Err(EvaluateError::InvalidInput);
    }
    let correct = (submitted - problem.answer()).abs() < tolerance_for(problem.answer());
    Ok(Verdict {
        correct,
        new_streak: if correct { streak + 1 } else { 0 },
    })
}
