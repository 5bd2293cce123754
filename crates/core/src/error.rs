use thiserror::Error;

use crate::convert::ConvertError;
use crate::evaluate::EvaluateError;
use crate::model::{CategoryParseError, ProblemError};

/// Umbrella error for callers that work across the whole core.
///
/// All variants are local, recoverable conditions; the expected reaction is
/// to re-prompt, never to abort the session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error(transparent)]
    Problem(#[from] ProblemError),
    #[error(transparent)]
    Evaluate(#[from] EvaluateError),
    #[error(transparent)]
    CategoryParse(#[from] CategoryParseError),
}
