//! # atomlab-config
//!
//! Layered configuration loading for Atomlab using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ATOMLAB_*` prefix, `__` as separator)
//! 2. Project-level `.atomlab/config.toml`
//! 3. User-level `~/.config/atomlab/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ATOMLAB_QUIZ__FEEDBACK_DELAY_MS` -> `quiz.feedback_delay_ms`,
//! `ATOMLAB_SIMULATION__INITIAL_ATOMIC_NUMBER` -> `simulation.initial_atomic_number`.
//!
//! # Usage
//!
//! ```no_run
//! use atomlab_config::AtomlabConfig;
//!
//! let config = AtomlabConfig::load_with_dotenv().expect("config");
//! println!("feedback delay: {:?}", config.quiz.feedback_delay());
//! ```

mod error;
mod quiz;
mod simulation;

pub use error::ConfigError;
pub use quiz::QuizConfig;
pub use simulation::SimulationConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_PATH: &str = ".atomlab/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AtomlabConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub quiz: QuizConfig,
}

impl AtomlabConfig {
    /// Load and validate configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("ATOMLAB_").split("__"))
    }

    /// Check every section against the engine's bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.simulation.validate()?;
        self.quiz.validate()
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("atomlab").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AtomlabConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.simulation.initial_atomic_number, 1);
        assert_eq!(config.quiz.question_count, 10);
    }

    #[test]
    fn defaults_extract_from_serialized_provider() {
        let figment = Figment::from(Serialized::defaults(AtomlabConfig::default()));
        let config = AtomlabConfig::from_figment(&figment).expect("should extract defaults");
        assert_eq!(config.quiz.feedback_delay_ms, 2000);
    }
}
