use serde::{Deserialize, Serialize};

use crate::evaluate::Verdict;

/// Per-session quiz state: the consecutive-correct streak and the one-shot
/// submission flag for the active problem.
///
/// Owned by the session loop; the pure evaluator never touches it directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    streak: u32,
    answered: bool,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Consecutive correct answers since the last miss.
    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    /// True once the active problem has been evaluated.
    #[must_use]
    pub fn answered(&self) -> bool {
        self.answered
    }

    /// Marks the start of a new problem, re-arming the submission guard.
    pub fn begin_problem(&mut self) {
        self.answered = false;
    }

    /// Applies an evaluation verdict: adopts the new streak and marks the
    /// active problem as answered.
    pub fn record(&mut self, verdict: &Verdict) {
        self.streak = verdict.new_streak;
        self.answered = true;
    }
}
