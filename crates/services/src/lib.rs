#![forbid(unsafe_code)]

pub mod error;
pub mod generator;
pub mod quiz;

pub use error::QuizError;
pub use generator::{CategorySelector, GenerateError, generate, generate_explicit};
pub use quiz::{QuizSession, SubmitOutcome};
