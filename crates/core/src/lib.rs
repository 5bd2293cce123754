#![forbid(unsafe_code)]

pub mod convert;
pub mod error;
pub mod evaluate;
pub mod format;
pub mod model;

pub use convert::{ConvertError, convert};
pub use error::Error;
pub use evaluate::{EvaluateError, Verdict, evaluate};
pub use format::format_answer;
pub use model::{CategoryId, CategoryParseError, Problem, ProblemError, SessionState, UnitCategory};
