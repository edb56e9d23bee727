use anyhow::bail;
use atomlab_core::shells::{MAX_SHELLS, shell_capacity};
use atomlab_core::snapshots::{AtomSnapshot, QuizSnapshot};
use atomlab_core::{AdvanceTicket, AtomState, EngineError, Page, QuizSession, catalog};
use serde::Serialize;

use super::intent::Intent;

/// What the run loop should do after an intent was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Render,
    /// An answer was checked; fire the ticket after the feedback delay.
    Armed(AdvanceTicket),
    Help,
    Quit,
}

/// The page in front, serialized for json/raw output.
#[derive(Debug, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum SessionView {
    Simulation(AtomSnapshot),
    Quiz(QuizSnapshot),
}

/// Both engines plus page routing. Each page keeps its state while hidden.
#[derive(Debug)]
pub struct Session {
    page: Page,
    atom: AtomState,
    quiz: QuizSession,
}

impl Session {
    pub fn new(
        page: Page,
        initial_atomic_number: u32,
        question_count: usize,
    ) -> Result<Self, EngineError> {
        Ok(Self {
            page,
            atom: AtomState::with_atomic_number(initial_atomic_number)?,
            quiz: QuizSession::with_question_count(question_count)?,
        })
    }

    pub const fn page(&self) -> Page {
        self.page
    }

    pub const fn quiz(&self) -> &QuizSession {
        &self.quiz
    }

    pub fn view(&self) -> SessionView {
        match self.page {
            Page::Simulation => SessionView::Simulation(self.atom.snapshot()),
            Page::Quiz => SessionView::Quiz(self.quiz.snapshot()),
        }
    }

    /// Apply one intent. Errors are rejections; the session stays usable.
    pub fn apply(&mut self, intent: Intent) -> anyhow::Result<Step> {
        match intent {
            Intent::Show => Ok(Step::Render),
            Intent::Help => Ok(Step::Help),
            Intent::Quit => Ok(Step::Quit),
            Intent::TogglePage => {
                self.page = self.page.toggle();
                tracing::debug!(page = %self.page, "page switched");
                Ok(Step::Render)
            }
            Intent::Reset => {
                match self.page {
                    Page::Simulation => self.atom.reset(),
                    Page::Quiz => self.quiz.reset_question()?,
                }
                Ok(Step::Render)
            }
            Intent::SetElement(query) => {
                self.require(Page::Simulation, "z")?;
                let element = catalog::resolve(&query)?;
                self.atom.set_atomic_number(element.atomic_number)?;
                Ok(Step::Render)
            }
            Intent::Isotope(enabled) => {
                self.require(Page::Simulation, "isotope")?;
                self.atom.set_isotope_mode(enabled);
                Ok(Step::Render)
            }
            Intent::Neutrons(delta) => {
                self.require(Page::Simulation, "n+/n-")?;
                self.atom.adjust_neutrons(delta)?;
                Ok(Step::Render)
            }
            Intent::Highlight(kind) => {
                self.require(Page::Simulation, "highlight")?;
                self.atom.set_highlight(kind);
                Ok(Step::Render)
            }
            Intent::Place { electron, shell } => {
                self.require(Page::Quiz, "place")?;
                self.quiz.place_electron(electron, shell)?;
                Ok(Step::Render)
            }
            Intent::Fill { shell, count } => {
                self.require(Page::Quiz, "fill")?;
                self.fill(shell, count)?;
                Ok(Step::Render)
            }
            Intent::Check => {
                self.require(Page::Quiz, "check")?;
                let result = self.quiz.check_answer()?;
                Ok(Step::Armed(result.ticket))
            }
            Intent::Restart => {
                self.require(Page::Quiz, "restart")?;
                self.quiz.restart();
                Ok(Step::Render)
            }
        }
    }

    /// Timer callback. A stale ticket is a no-op.
    pub fn advance(&mut self, ticket: AdvanceTicket) -> bool {
        match self.quiz.fire_advance(ticket) {
            Ok(()) => true,
            Err(error) => {
                tracing::debug!(%error, "auto-advance skipped");
                false
            }
        }
    }

    fn require(&self, page: Page, command: &str) -> anyhow::Result<()> {
        if self.page != page {
            let switch = match page {
                Page::Simulation => "sim",
                Page::Quiz => "quiz",
            };
            bail!("'{command}' only works on the {page} page (type '{switch}' to switch)");
        }
        Ok(())
    }

    /// Place up to `count` of the lowest-numbered waiting electrons into
    /// `shell`. Either all of them fit or nothing is placed.
    fn fill(&mut self, shell: usize, count: u32) -> Result<(), EngineError> {
        if shell >= MAX_SHELLS {
            return Err(EngineError::ShellOutOfRange {
                shell,
                max: MAX_SHELLS - 1,
            });
        }
        let electrons = self
            .quiz
            .available_electrons()
            .iter()
            .take(count as usize)
            .copied()
            .collect::<Vec<_>>();
        let capacity = shell_capacity(shell);
        let free = capacity.saturating_sub(self.quiz.occupancy(shell));
        if electrons.len() > free as usize {
            return Err(EngineError::ShellFull { shell, capacity });
        }
        for electron in electrons {
            self.quiz.place_electron(electron, shell)?;
        }
        Ok(())
    }
}
