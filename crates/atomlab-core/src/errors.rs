//! Rejection reasons for engine intents.
//!
//! The engine never panics on bad input from the presentation layer. An intent
//! that cannot be applied returns one of these variants and the state it was
//! aimed at is left exactly as it was. Callers that want the "guided sandbox"
//! behavior simply drop the error.

use thiserror::Error;

/// Why an intent was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Atomic number outside the catalog.
    #[error("Atomic number {0} is outside 1..={max}", max = crate::catalog::MAX_ATOMIC_NUMBER)]
    AtomicNumberOutOfRange(u32),

    /// No catalog element carries this symbol.
    #[error("Unknown element symbol: {0}")]
    UnknownSymbol(String),

    /// Neutron adjustment would leave the light-isotope window.
    #[error("Mass number {requested} is outside {min}..={max}")]
    MassOutOfRange { requested: i64, min: u32, max: u32 },

    /// Neutron count only changes while isotope mode is on.
    #[error("Isotope mode is off; the mass number is fixed at the element default")]
    IsotopeModeOff,

    /// Electron is not among the ones still waiting to be placed.
    #[error("Electron {0} is not available for placement")]
    UnknownElectron(String),

    /// Shell has no room left under the 2n² rule.
    #[error("Shell {shell} is full ({capacity} electrons)")]
    ShellFull { shell: usize, capacity: u32 },

    /// Shell index beyond the outermost modelled shell.
    #[error("Shell {shell} does not exist (max {max})")]
    ShellOutOfRange { shell: usize, max: usize },

    /// Answer checked before every electron was placed.
    #[error("{remaining} electron(s) still need to be placed")]
    IncompleteAnswer { remaining: usize },

    /// Answer already checked; waiting for the auto-advance.
    #[error("Answer already checked for this question")]
    AnswerAlreadyChecked,

    /// Every question has been answered.
    #[error("Quiz is complete")]
    QuizComplete,

    /// Advance timer fired after the question was reset or the quiz restarted.
    #[error("Advance ticket {0} is no longer pending")]
    StaleAdvance(u64),

    /// Question count outside the catalog.
    #[error("Question count {0} is outside 1..={max}", max = crate::catalog::MAX_ATOMIC_NUMBER)]
    QuestionCountOutOfRange(usize),
}
