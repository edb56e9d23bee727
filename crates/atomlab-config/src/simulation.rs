//! Simulation view settings.

use atomlab_core::catalog::MAX_ATOMIC_NUMBER;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_initial_atomic_number() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimulationConfig {
    /// Element selected when a simulation session starts.
    #[serde(default = "default_initial_atomic_number")]
    pub initial_atomic_number: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            initial_atomic_number: default_initial_atomic_number(),
        }
    }
}

impl SimulationConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=MAX_ATOMIC_NUMBER).contains(&self.initial_atomic_number) {
            return Err(ConfigError::InvalidValue {
                field: "simulation.initial_atomic_number".to_string(),
                reason: format!(
                    "{} is outside 1..={MAX_ATOMIC_NUMBER}",
                    self.initial_atomic_number
                ),
            });
        }
        Ok(())
    }
}
