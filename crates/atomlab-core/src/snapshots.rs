//! Read-only views handed to the presentation layer.
//!
//! These structs are what a renderer consumes: they are built fresh from the
//! engine state on demand and serialize to JSON for the CLI.

use schemars::JsonSchema;
use serde::Serialize;
use std::fmt;

use crate::atom::Highlight;
use crate::catalog::{Category, Element};
use crate::quiz::{AdvanceTicket, ElectronId, Feedback, Grade, QuizStatus};
use crate::shells::ShellConfiguration;

/// Particle tallies for a neutral atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ParticleCounts {
    /// Charge +1 each.
    pub protons: u32,
    /// Charge 0.
    pub neutrons: u32,
    /// Charge -1 each.
    pub electrons: u32,
}

/// Everything the simulation view shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct AtomSnapshot {
    pub atomic_number: u32,
    pub symbol: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub period: u32,
    pub group: u32,
    pub fact: Option<&'static str>,
    pub mass_number: u32,
    pub isotope_mode: bool,
    pub highlight: Highlight,
    pub particles: ParticleCounts,
    pub shells: ShellConfiguration,
}

/// Catalog entry together with its shell layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ElementDetail {
    #[serde(flatten)]
    pub element: Element,
    pub neutrons: u32,
    pub shells: ShellConfiguration,
}

impl From<&Element> for ElementDetail {
    fn from(element: &Element) -> Self {
        Self {
            element: *element,
            neutrons: element.default_neutrons(),
            shells: ShellConfiguration::for_electrons(element.electron_count()),
        }
    }
}

/// One drop zone in the quiz: how full it is against the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct ShellSlot {
    /// 1-based shell number.
    pub shell: usize,
    pub placed: u32,
    /// Electrons the correct answer puts here.
    pub target: u32,
    /// 2n² limit.
    pub capacity: u32,
}

/// Renders as `Shell 2 (3/4)`.
impl fmt::Display for ShellSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shell {} ({}/{})", self.shell, self.placed, self.target)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Placement {
    pub electron: ElectronId,
    /// 0-based shell index.
    pub shell: usize,
}

/// Final result once every question has been answered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct QuizOutcome {
    pub score: u32,
    pub total_questions: usize,
    /// Unrounded `score / total * 100`.
    pub percentage: f64,
    pub grade: Grade,
}

/// Everything the quiz view shows.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct QuizSnapshot {
    pub status: QuizStatus,
    /// 1-based; equals `total_questions + 1` once complete.
    pub question_number: usize,
    pub total_questions: usize,
    pub score: u32,
    pub element: Option<Element>,
    pub target: ShellConfiguration,
    pub shells: Vec<ShellSlot>,
    pub available: Vec<ElectronId>,
    pub placements: Vec<Placement>,
    pub can_check: bool,
    pub feedback: Feedback,
    pub pending_advance: Option<AdvanceTicket>,
    pub outcome: Option<QuizOutcome>,
}
