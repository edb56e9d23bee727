//! Electron shell filling under the 2n² rule.
//!
//! This is the simplified classroom model: shell `n` (1-based) holds at most
//! `2n²` electrons and is filled completely before shell `n + 1` receives any.
//! It is not real orbital chemistry (potassium gets `[2, 8, 8, 1]` in reality,
//! `[2, 8, 9]` here).

use schemars::JsonSchema;
use serde::Serialize;
use std::fmt;

/// Outermost shell the engine will accept placements into.
pub const MAX_SHELLS: usize = 7;

/// Capacity of the shell at 0-based `index`: `2 * (index + 1)²`.
#[must_use]
pub const fn shell_capacity(index: usize) -> u32 {
    let n = index as u32 + 1;
    2 * n * n
}

/// Electron count per shell, innermost first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct ShellConfiguration(Vec<u32>);

impl ShellConfiguration {
    /// Fill `electrons` into shells in order. Zero electrons yields no shells.
    #[must_use]
    pub fn for_electrons(electrons: u32) -> Self {
        let mut shells = Vec::new();
        let mut remaining = electrons;
        let mut index = 0;
        while remaining > 0 {
            let placed = remaining.min(shell_capacity(index));
            shells.push(placed);
            remaining -= placed;
            index += 1;
        }
        Self(shells)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Number of occupied shells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total electrons across all shells.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.0.iter().sum()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<u32> {
        self.0.get(index).copied()
    }
}

impl From<Vec<u32>> for ShellConfiguration {
    fn from(shells: Vec<u32>) -> Self {
        Self(shells)
    }
}

impl PartialEq<[u32]> for ShellConfiguration {
    fn eq(&self, other: &[u32]) -> bool {
        self.0 == other
    }
}

impl<const N: usize> PartialEq<[u32; N]> for ShellConfiguration {
    fn eq(&self, other: &[u32; N]) -> bool {
        self.0 == other
    }
}

/// Renders as `2, 8, 1`.
impl fmt::Display for ShellConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, count) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{count}")?;
        }
        Ok(())
    }
}
