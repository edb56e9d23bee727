//! Electron placement quiz.
//!
//! One question per element, in catalog order. For each question the player
//! drops the element's electrons into shells and asks for the answer to be
//! checked. A checked answer arms a pending advance; the host fires it after
//! the feedback delay. Resetting or restarting before that disarms it.
//!
//! ```text
//! in_progress → awaiting_advance → in_progress (next question, or reset)
//!                                → complete    (last question)
//! complete → in_progress (restart)
//! ```

use schemars::JsonSchema;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use crate::catalog::{self, Element, MAX_ATOMIC_NUMBER};
use crate::errors::EngineError;
use crate::shells::{shell_capacity, ShellConfiguration, MAX_SHELLS};
use crate::snapshots::{Placement, QuizOutcome, QuizSnapshot, ShellSlot};

/// Questions in a default quiz (hydrogen through neon).
pub const DEFAULT_QUESTION_COUNT: usize = 10;

/// How long answer feedback shows before auto-advancing, in milliseconds.
pub const DEFAULT_FEEDBACK_DELAY_MS: u64 = 2000;

const CORRECT_MESSAGE: &str = "Excellent! Your electron configuration is correct!";

// ---------------------------------------------------------------------------
// ElectronId
// ---------------------------------------------------------------------------

/// A draggable electron of the current question, numbered from zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct ElectronId(pub u32);

impl fmt::Display for ElectronId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "electron-{}", self.0)
    }
}

/// Accepts `electron-3` or a bare `3`.
impl FromStr for ElectronId {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix("electron-").unwrap_or(trimmed);
        digits
            .parse::<u32>()
            .map(Self)
            .map_err(|_| EngineError::UnknownElectron(trimmed.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Feedback
// ---------------------------------------------------------------------------

/// Result of the last answer check for the current question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Feedback {
    #[default]
    None,
    Correct {
        message: String,
    },
    /// Carries the right answer so the player can learn from it.
    Incorrect {
        message: String,
        expected: ShellConfiguration,
    },
}

impl Feedback {
    fn incorrect(expected: ShellConfiguration) -> Self {
        Self::Incorrect {
            message: format!("Not quite right. The correct configuration is: {expected}"),
            expected,
        }
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Correct { message } | Self::Incorrect { message, .. } => Some(message),
        }
    }

    #[must_use]
    pub const fn is_correct(&self) -> bool {
        matches!(self, Self::Correct { .. })
    }
}

// ---------------------------------------------------------------------------
// QuizStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QuizStatus {
    /// Accepting placements for the current question.
    InProgress,
    /// Answer checked, feedback showing, advance pending.
    AwaitingAdvance,
    /// Every question answered.
    Complete,
}

impl QuizStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::InProgress => &[Self::AwaitingAdvance],
            Self::AwaitingAdvance => &[Self::InProgress, Self::Complete],
            Self::Complete => &[Self::InProgress],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::AwaitingAdvance => "awaiting_advance",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for QuizStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Grade
// ---------------------------------------------------------------------------

/// Result tier shown on the completion screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    Outstanding,
    Great,
    Good,
    KeepStudying,
}

impl Grade {
    #[must_use]
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 90.0 {
            Self::Outstanding
        } else if percentage >= 70.0 {
            Self::Great
        } else if percentage >= 50.0 {
            Self::Good
        } else {
            Self::KeepStudying
        }
    }

    /// 70% and up counts as a pass.
    #[must_use]
    pub const fn passed(self) -> bool {
        matches!(self, Self::Outstanding | Self::Great)
    }

    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Outstanding => "Outstanding! You have mastered atomic structure!",
            Self::Great => "Great job! You have a solid understanding!",
            Self::Good => "Good effort! Keep practicing to improve!",
            Self::KeepStudying => "Keep studying! Review the simulation for better understanding!",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Outstanding => "outstanding",
            Self::Great => "great",
            Self::Good => "good",
            Self::KeepStudying => "keep_studying",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Advance tickets
// ---------------------------------------------------------------------------

/// Handle for one armed auto-advance. Only the most recent ticket is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct AdvanceTicket(u64);

impl AdvanceTicket {
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for AdvanceTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What `check_answer` produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckResult {
    pub correct: bool,
    /// Fire this after the feedback delay.
    pub ticket: AdvanceTicket,
}

// ---------------------------------------------------------------------------
// QuizSession
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: &'static [Element],
    current_index: usize,
    score: u32,
    /// Whether the current question already added to `score`.
    scored_current: bool,
    placements: BTreeMap<ElectronId, usize>,
    available: BTreeSet<ElectronId>,
    feedback: Feedback,
    status: QuizStatus,
    pending: Option<AdvanceTicket>,
    next_ticket: u64,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    /// Quiz over hydrogen through neon.
    #[must_use]
    pub fn new() -> Self {
        Self::over(&catalog::ELEMENTS[..DEFAULT_QUESTION_COUNT])
    }

    /// Quiz over the first `count` catalog elements.
    pub fn with_question_count(count: usize) -> Result<Self, EngineError> {
        if count == 0 || count > MAX_ATOMIC_NUMBER as usize {
            return Err(EngineError::QuestionCountOutOfRange(count));
        }
        Ok(Self::over(&catalog::ELEMENTS[..count]))
    }

    fn over(questions: &'static [Element]) -> Self {
        let mut session = Self {
            questions,
            current_index: 0,
            score: 0,
            scored_current: false,
            placements: BTreeMap::new(),
            available: BTreeSet::new(),
            feedback: Feedback::None,
            status: QuizStatus::InProgress,
            pending: None,
            next_ticket: 1,
        };
        session.start_question();
        session
    }

    // --- accessors ---

    #[must_use]
    pub const fn status(&self) -> QuizStatus {
        self.status
    }

    #[must_use]
    pub const fn is_complete(&self) -> bool {
        matches!(self.status, QuizStatus::Complete)
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub const fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    #[must_use]
    pub const fn pending_advance(&self) -> Option<AdvanceTicket> {
        self.pending
    }

    /// Element being asked about; `None` once complete.
    #[must_use]
    pub fn current_element(&self) -> Option<&'static Element> {
        self.questions.get(self.current_index)
    }

    /// Correct answer for the current question.
    #[must_use]
    pub fn target(&self) -> ShellConfiguration {
        self.current_element()
            .map(|e| ShellConfiguration::for_electrons(e.electron_count()))
            .unwrap_or_default()
    }

    #[must_use]
    pub const fn placements(&self) -> &BTreeMap<ElectronId, usize> {
        &self.placements
    }

    #[must_use]
    pub const fn available_electrons(&self) -> &BTreeSet<ElectronId> {
        &self.available
    }

    /// Electrons currently placed in the 0-based `shell`.
    #[must_use]
    pub fn occupancy(&self, shell: usize) -> u32 {
        let count = self.placements.values().filter(|&&s| s == shell).count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    /// Whether `check_answer` would be accepted right now.
    #[must_use]
    pub fn can_check(&self) -> bool {
        self.status == QuizStatus::InProgress && self.available.is_empty()
    }

    // --- transitions ---

    fn start_question(&mut self) {
        self.placements.clear();
        self.feedback = Feedback::None;
        let electrons = self.current_element().map_or(0, Element::electron_count);
        self.available = (0..electrons).map(ElectronId).collect();
    }

    fn set_status(&mut self, next: QuizStatus) {
        debug_assert!(
            self.status.can_transition_to(next),
            "quiz transition {} -> {next}",
            self.status
        );
        self.status = next;
    }

    fn ensure_in_progress(&self) -> Result<(), EngineError> {
        match self.status {
            QuizStatus::InProgress => Ok(()),
            QuizStatus::AwaitingAdvance => Err(EngineError::AnswerAlreadyChecked),
            QuizStatus::Complete => Err(EngineError::QuizComplete),
        }
    }

    /// Drop `electron` into the 0-based `shell`.
    ///
    /// Refused when the electron is not waiting to be placed or the shell is
    /// already at its 2n² capacity.
    pub fn place_electron(&mut self, electron: ElectronId, shell: usize) -> Result<(), EngineError> {
        self.try_place(electron, shell).inspect_err(|error| {
            tracing::debug!(%error, %electron, shell, "placement refused");
        })
    }

    fn try_place(&mut self, electron: ElectronId, shell: usize) -> Result<(), EngineError> {
        self.ensure_in_progress()?;
        if shell >= MAX_SHELLS {
            return Err(EngineError::ShellOutOfRange {
                shell,
                max: MAX_SHELLS - 1,
            });
        }
        if !self.available.contains(&electron) {
            return Err(EngineError::UnknownElectron(electron.to_string()));
        }
        let capacity = shell_capacity(shell);
        if self.occupancy(shell) >= capacity {
            return Err(EngineError::ShellFull { shell, capacity });
        }

        self.available.remove(&electron);
        self.placements.insert(electron, shell);
        tracing::debug!(%electron, shell, remaining = self.available.len(), "electron placed");
        Ok(())
    }

    /// Grade the current placement against the target configuration.
    ///
    /// Every electron must be placed first. The answer is correct only if
    /// each target shell holds exactly its target count and nothing sits in
    /// a shell beyond the target's outermost one.
    pub fn check_answer(&mut self) -> Result<CheckResult, EngineError> {
        self.ensure_in_progress().inspect_err(|error| {
            tracing::debug!(%error, "answer check refused");
        })?;
        if !self.available.is_empty() {
            let error = EngineError::IncompleteAnswer {
                remaining: self.available.len(),
            };
            tracing::debug!(%error, "answer check refused");
            return Err(error);
        }

        let target = self.target();
        let expected_total = self.current_element().map_or(0, Element::electron_count);
        let per_shell: Vec<u32> = (0..target.len()).map(|s| self.occupancy(s)).collect();
        let overflow = self.placements.values().any(|&s| s >= target.len());
        let placed = u32::try_from(self.placements.len()).unwrap_or(u32::MAX);
        let correct = target.as_slice() == per_shell.as_slice() && !overflow && placed == expected_total;

        if correct {
            if !self.scored_current {
                self.score += 1;
                self.scored_current = true;
            }
            self.feedback = Feedback::Correct {
                message: CORRECT_MESSAGE.to_string(),
            };
        } else {
            self.feedback = Feedback::incorrect(target);
        }

        let ticket = AdvanceTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending = Some(ticket);
        self.set_status(QuizStatus::AwaitingAdvance);

        tracing::debug!(
            question = self.current_index + 1,
            correct,
            score = self.score,
            %ticket,
            "answer checked"
        );
        Ok(CheckResult { correct, ticket })
    }

    /// Move past the checked question. Stale tickets are refused.
    pub fn fire_advance(&mut self, ticket: AdvanceTicket) -> Result<(), EngineError> {
        if self.pending != Some(ticket) {
            let error = EngineError::StaleAdvance(ticket.id());
            tracing::debug!(%error, "advance ignored");
            return Err(error);
        }
        self.pending = None;

        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.scored_current = false;
            self.set_status(QuizStatus::InProgress);
            self.start_question();
            tracing::debug!(question = self.current_index + 1, "next question");
        } else {
            self.current_index = self.questions.len();
            self.placements.clear();
            self.available.clear();
            self.set_status(QuizStatus::Complete);
            tracing::info!(
                score = self.score,
                total = self.questions.len(),
                "quiz complete"
            );
        }
        Ok(())
    }

    /// Clear the current question's placements and feedback. Disarms any
    /// pending advance; the score is kept.
    pub fn reset_question(&mut self) -> Result<(), EngineError> {
        if self.is_complete() {
            tracing::debug!("reset refused: quiz complete");
            return Err(EngineError::QuizComplete);
        }
        self.pending = None;
        self.status = QuizStatus::InProgress;
        self.start_question();
        tracing::debug!(question = self.current_index + 1, "question reset");
        Ok(())
    }

    /// Back to the first question with a zero score, from any state.
    pub fn restart(&mut self) {
        self.current_index = 0;
        self.score = 0;
        self.scored_current = false;
        self.pending = None;
        self.status = QuizStatus::InProgress;
        self.start_question();
        tracing::debug!("quiz restarted");
    }

    /// Final result; `None` until complete.
    #[must_use]
    pub fn outcome(&self) -> Option<QuizOutcome> {
        if !self.is_complete() {
            return None;
        }
        let total = self.questions.len();
        #[allow(clippy::cast_precision_loss)]
        let percentage = f64::from(self.score) * 100.0 / total as f64;
        Some(QuizOutcome {
            score: self.score,
            total_questions: total,
            percentage,
            grade: Grade::from_percentage(percentage),
        })
    }

    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        let target = self.target();
        let outermost_placed = self.placements.values().max().map_or(0, |&s| s + 1);
        let shells = (0..target.len().max(outermost_placed))
            .map(|index| ShellSlot {
                shell: index + 1,
                placed: self.occupancy(index),
                target: target.get(index).unwrap_or(0),
                capacity: shell_capacity(index),
            })
            .collect();

        QuizSnapshot {
            status: self.status,
            question_number: self.current_index + 1,
            total_questions: self.questions.len(),
            score: self.score,
            element: self.current_element().copied(),
            target,
            shells,
            available: self.available.iter().copied().collect(),
            placements: self
                .placements
                .iter()
                .map(|(&electron, &shell)| Placement { electron, shell })
                .collect(),
            can_check: self.can_check(),
            feedback: self.feedback.clone(),
            pending_advance: self.pending,
            outcome: self.outcome(),
        }
    }
}
