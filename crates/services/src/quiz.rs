//! The quiz session loop.
//!
//! Replaces the ambient globals a widget would keep (current problem,
//! streak, answered flag) with an explicit session object the caller owns.
//! The flow is strictly sequential: install a problem, collect one
//! submission, evaluate, repeat.

use rand::Rng;
use serde::{Deserialize, Serialize};

use drill_core::evaluate::evaluate;
use drill_core::format::format_answer;
use drill_core::model::{CategoryId, Problem, SessionState};

use crate::error::QuizError;
use crate::generator::{self, CategorySelector};

/// Result of submitting an answer for the active problem.
///
/// `expected` carries the formatted expected answer only on an incorrect
/// verdict; a correct answer has no need to show it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitOutcome {
    pub correct: bool,
    pub streak: u32,
    pub expected: Option<String>,
}

/// One user's quiz run: the active problem plus streak and submission state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuizSession {
    state: SessionState,
    problem: Option<Problem>,
}

impl QuizSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Generates and installs the next random problem, re-arming the
    /// submission guard. The streak carries over.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Generate` if generation fails.
    pub fn next_problem<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        selector: CategorySelector,
    ) -> Result<&Problem, QuizError> {
        let problem = generator::generate(rng, selector)?;
        self.state.begin_problem();
        Ok(self.problem.insert(problem))
    }

    /// Installs a caller-specified custom problem.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Problem` if the inputs fail validation.
    pub fn pose(
        &mut self,
        value: f64,
        from: &str,
        to: &str,
        category: CategoryId,
    ) -> Result<&Problem, QuizError> {
        let problem = generator::generate_explicit(value, from, to, category)?;
        self.state.begin_problem();
        Ok(self.problem.insert(problem))
    }

    /// Evaluates a submission against the active problem.
    ///
    /// One-shot per problem: a second submission for the same problem is
    /// rejected rather than re-scored.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoProblem` if no problem is active,
    /// `QuizError::AlreadyAnswered` on a repeat submission, and
    /// `QuizError::Evaluate` if `submitted` is not a finite number.
    pub fn submit(&mut self, submitted: f64) -> Result<SubmitOutcome, QuizError> {
        let problem = self.problem.as_ref().ok_or(QuizError::NoProblem)?;
        if self.state.answered() {
            return Err(QuizError::AlreadyAnswered);
        }

        let verdict = evaluate(submitted, problem, self.state.streak())?;
        let expected = (!verdict.correct).then(|| format_answer(problem.answer()));
        self.state.record(&verdict);

        Ok(SubmitOutcome {
            correct: verdict.correct,
            streak: self.state.streak(),
            expected,
        })
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.state.streak()
    }

    /// True once the active problem has received its submission.
    #[must_use]
    pub fn answered(&self) -> bool {
        self.state.answered()
    }

    #[must_use]
    pub fn problem(&self) -> Option<&Problem> {
        self.problem.as_ref()
    }
}
