//! Shared error types for the services crate.

use thiserror::Error;

use drill_core::evaluate::EvaluateError;
use drill_core::model::ProblemError;

use crate::generator::GenerateError;

/// Errors emitted by `QuizSession`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no active problem; generate or pose one before submitting")]
    NoProblem,
    #[error("the active problem was already answered")]
    AlreadyAnswered,
    #[error(transparent)]
    Problem(#[from] ProblemError),
    #[error(transparent)]
    Evaluate(#[from] EvaluateError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
}
