//! # atomlab-core
//!
//! Atomic model and quiz engine for Atomlab.
//!
//! This crate holds everything with actual rules in it:
//! - The element catalog for atomic numbers 1 through 20
//! - Electron shell filling under the 2n² capacity rule
//! - Atom state for the simulation view (isotopes, highlight selection)
//! - The electron placement quiz and its answer-checking state machine
//! - Serializable snapshots handed to whatever renders the model
//!
//! Nothing here does I/O. Every operation is synchronous; rejected intents
//! come back as [`EngineError`] and leave the state untouched.

pub mod atom;
pub mod catalog;
pub mod errors;
pub mod page;
pub mod quiz;
pub mod shells;
pub mod snapshots;

pub use atom::{AtomState, Highlight};
pub use catalog::{Category, Element};
pub use errors::EngineError;
pub use page::Page;
pub use quiz::{AdvanceTicket, CheckResult, ElectronId, Feedback, Grade, QuizSession, QuizStatus};
pub use shells::ShellConfiguration;
