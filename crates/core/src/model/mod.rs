mod catalog;
mod problem;
mod session;

pub use catalog::{CategoryId, CategoryParseError, UnitCategory};
pub use problem::{Problem, ProblemError};
pub use session::SessionState;
