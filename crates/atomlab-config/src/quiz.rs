//! Quiz settings.

use atomlab_core::catalog::MAX_ATOMIC_NUMBER;
use atomlab_core::quiz::{DEFAULT_FEEDBACK_DELAY_MS, DEFAULT_QUESTION_COUNT};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ConfigError;

const fn default_feedback_delay_ms() -> u64 {
    DEFAULT_FEEDBACK_DELAY_MS
}

const fn default_question_count() -> usize {
    DEFAULT_QUESTION_COUNT
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QuizConfig {
    /// How long answer feedback stays up before the next question.
    #[serde(default = "default_feedback_delay_ms")]
    pub feedback_delay_ms: u64,

    /// Number of questions, taken from the start of the catalog.
    #[serde(default = "default_question_count")]
    pub question_count: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            feedback_delay_ms: default_feedback_delay_ms(),
            question_count: default_question_count(),
        }
    }
}

impl QuizConfig {
    #[must_use]
    pub const fn feedback_delay(&self) -> Duration {
        Duration::from_millis(self.feedback_delay_ms)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.question_count == 0 || self.question_count > MAX_ATOMIC_NUMBER as usize {
            return Err(ConfigError::InvalidValue {
                field: "quiz.question_count".to_string(),
                reason: format!("{} is outside 1..={MAX_ATOMIC_NUMBER}", self.question_count),
            });
        }
        Ok(())
    }
}
