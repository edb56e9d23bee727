//! Which view is in front. Routing only; no engine state lives here.

use schemars::JsonSchema;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Simulation,
    Quiz,
}

impl Page {
    /// The "advance page" intent: simulation and quiz swap.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Simulation => Self::Quiz,
            Self::Quiz => Self::Simulation,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Simulation => "simulation",
            Self::Quiz => "quiz",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
