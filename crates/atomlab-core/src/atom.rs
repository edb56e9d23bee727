//! Atom state behind the simulation view.
//!
//! Holds the selected element, its mass number, the isotope toggle and the
//! particle highlight. The neutron count is always derived from the mass
//! number, and the mass number always stays within `[Z, Z + 10]`.

use schemars::JsonSchema;
use serde::Serialize;
use std::fmt;

use crate::catalog::{self, Element};
use crate::errors::EngineError;
use crate::shells::ShellConfiguration;
use crate::snapshots::{AtomSnapshot, ParticleCounts};

/// Most extra neutrons an isotope may carry beyond `Z`.
pub const MAX_EXTRA_NEUTRONS: u32 = 10;

// ---------------------------------------------------------------------------
// Highlight
// ---------------------------------------------------------------------------

/// Which nucleus particles the view should emphasize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Highlight {
    #[default]
    None,
    Protons,
    Neutrons,
}

impl Highlight {
    /// Selecting the active highlight again clears it.
    #[must_use]
    pub fn toggled(self, kind: Self) -> Self {
        if self == kind { Self::None } else { kind }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Protons => "protons",
            Self::Neutrons => "neutrons",
        }
    }
}

impl fmt::Display for Highlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AtomState
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomState {
    element: &'static Element,
    mass_number: u32,
    isotope_mode: bool,
    highlight: Highlight,
}

impl Default for AtomState {
    fn default() -> Self {
        Self::new()
    }
}

impl AtomState {
    /// Session start: hydrogen, default isotope.
    #[must_use]
    pub fn new() -> Self {
        let element = &catalog::ELEMENTS[0];
        Self {
            element,
            mass_number: element.mass_number,
            isotope_mode: false,
            highlight: Highlight::None,
        }
    }

    /// Start on a specific element instead of hydrogen.
    pub fn with_atomic_number(atomic_number: u32) -> Result<Self, EngineError> {
        let mut state = Self::new();
        state.set_atomic_number(atomic_number)?;
        Ok(state)
    }

    #[must_use]
    pub const fn element(&self) -> &'static Element {
        self.element
    }

    #[must_use]
    pub const fn atomic_number(&self) -> u32 {
        self.element.atomic_number
    }

    #[must_use]
    pub const fn mass_number(&self) -> u32 {
        self.mass_number
    }

    #[must_use]
    pub const fn neutron_count(&self) -> u32 {
        self.mass_number - self.element.atomic_number
    }

    #[must_use]
    pub const fn isotope_mode(&self) -> bool {
        self.isotope_mode
    }

    #[must_use]
    pub const fn highlight(&self) -> Highlight {
        self.highlight
    }

    /// Shells for the neutral atom.
    #[must_use]
    pub fn shells(&self) -> ShellConfiguration {
        ShellConfiguration::for_electrons(self.element.electron_count())
    }

    /// Allowed mass range for the current element.
    #[must_use]
    pub const fn mass_bounds(&self) -> (u32, u32) {
        let z = self.element.atomic_number;
        (z, z + MAX_EXTRA_NEUTRONS)
    }

    /// Select a new element.
    ///
    /// Outside isotope mode the mass number snaps to the element's default.
    /// Inside isotope mode the current mass is kept, pulled into the new
    /// element's `[Z, Z + 10]` window if it falls outside.
    pub fn set_atomic_number(&mut self, atomic_number: u32) -> Result<(), EngineError> {
        let element = catalog::element(atomic_number).inspect_err(|error| {
            tracing::debug!(%error, "atomic number rejected");
        })?;

        self.element = element;
        if self.isotope_mode {
            let (min, max) = self.mass_bounds();
            self.mass_number = self.mass_number.clamp(min, max);
        } else {
            self.mass_number = element.mass_number;
        }

        tracing::debug!(
            atomic_number,
            symbol = element.symbol,
            mass_number = self.mass_number,
            "element selected"
        );
        Ok(())
    }

    /// Flip isotope mode. Turning it on keeps the current mass; turning it
    /// off snaps the mass back to the element default.
    pub fn set_isotope_mode(&mut self, enabled: bool) {
        self.isotope_mode = enabled;
        if !enabled {
            self.mass_number = self.element.mass_number;
        }
        tracing::debug!(enabled, mass_number = self.mass_number, "isotope mode");
    }

    /// Add or remove neutrons, staying within `[Z, Z + 10]`.
    ///
    /// Refused outside isotope mode.
    pub fn adjust_neutrons(&mut self, delta: i32) -> Result<(), EngineError> {
        if !self.isotope_mode {
            tracing::debug!(delta, "neutron adjustment rejected: isotope mode off");
            return Err(EngineError::IsotopeModeOff);
        }
        let (min, max) = self.mass_bounds();
        let requested = i64::from(self.mass_number) + i64::from(delta);
        if requested < i64::from(min) || requested > i64::from(max) {
            let error = EngineError::MassOutOfRange { requested, min, max };
            tracing::debug!(%error, "neutron adjustment rejected");
            return Err(error);
        }

        // In range, so it fits in u32.
        self.mass_number = u32::try_from(requested).unwrap_or(self.mass_number);
        tracing::debug!(
            mass_number = self.mass_number,
            neutrons = self.neutron_count(),
            "neutrons adjusted"
        );
        Ok(())
    }

    /// Restore the default isotope and clear isotope mode and highlight.
    pub fn reset(&mut self) {
        self.mass_number = self.element.mass_number;
        self.isotope_mode = false;
        self.highlight = Highlight::None;
        tracing::debug!(atomic_number = self.atomic_number(), "atom reset");
    }

    /// Select `kind`, or clear it if it is already selected.
    pub fn set_highlight(&mut self, kind: Highlight) {
        self.highlight = self.highlight.toggled(kind);
    }

    #[must_use]
    pub fn snapshot(&self) -> AtomSnapshot {
        let element = self.element;
        AtomSnapshot {
            atomic_number: element.atomic_number,
            symbol: element.symbol,
            name: element.name,
            category: element.category,
            period: element.period,
            group: element.group,
            fact: element.fact,
            mass_number: self.mass_number,
            isotope_mode: self.isotope_mode,
            highlight: self.highlight,
            particles: ParticleCounts {
                protons: element.atomic_number,
                neutrons: self.neutron_count(),
                electrons: element.electron_count(),
            },
            shells: self.shells(),
        }
    }
}
