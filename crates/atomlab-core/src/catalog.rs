//! Static reference data for the first twenty elements.
//!
//! The catalog is a fixed array ordered by atomic number, so element `Z` lives
//! at index `Z - 1`. Lookups are plain indexing; nothing here is mutable.

use schemars::JsonSchema;
use serde::Serialize;
use std::fmt;

use crate::errors::EngineError;

/// Highest atomic number the catalog covers.
pub const MAX_ATOMIC_NUMBER: u32 = 20;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Periodic-table family, display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Nonmetal,
    NobleGas,
    AlkaliMetal,
    AlkalineEarthMetal,
    Metalloid,
    Halogen,
    PostTransitionMetal,
}

impl Category {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nonmetal => "nonmetal",
            Self::NobleGas => "noble_gas",
            Self::AlkaliMetal => "alkali_metal",
            Self::AlkalineEarthMetal => "alkaline_earth_metal",
            Self::Metalloid => "metalloid",
            Self::Halogen => "halogen",
            Self::PostTransitionMetal => "post_transition_metal",
        }
    }

    /// Human label, e.g. `"Noble Gas"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nonmetal => "Nonmetal",
            Self::NobleGas => "Noble Gas",
            Self::AlkaliMetal => "Alkali Metal",
            Self::AlkalineEarthMetal => "Alkaline Earth Metal",
            Self::Metalloid => "Metalloid",
            Self::Halogen => "Halogen",
            Self::PostTransitionMetal => "Post-transition Metal",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Element
// ---------------------------------------------------------------------------

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
pub struct Element {
    pub atomic_number: u32,
    pub symbol: &'static str,
    pub name: &'static str,
    /// Mass number of the most common isotope.
    pub mass_number: u32,
    pub category: Category,
    pub period: u32,
    pub group: u32,
    pub fact: Option<&'static str>,
}

impl Element {
    /// Electrons in the neutral atom.
    #[must_use]
    pub const fn electron_count(&self) -> u32 {
        self.atomic_number
    }

    /// Neutrons in the default isotope.
    #[must_use]
    pub const fn default_neutrons(&self) -> u32 {
        self.mass_number - self.atomic_number
    }
}

macro_rules! element {
    ($z:literal, $sym:literal, $name:literal, $mass:literal, $cat:ident, $period:literal, $group:literal, $fact:literal) => {
        Element {
            atomic_number: $z,
            symbol: $sym,
            name: $name,
            mass_number: $mass,
            category: Category::$cat,
            period: $period,
            group: $group,
            fact: Some($fact),
        }
    };
}

/// All catalog entries, index `Z - 1`.
pub static ELEMENTS: [Element; MAX_ATOMIC_NUMBER as usize] = [
    element!(1, "H", "Hydrogen", 1, Nonmetal, 1, 1, "Most abundant element in the universe!"),
    element!(2, "He", "Helium", 4, NobleGas, 1, 18, "Second lightest element and makes balloons float!"),
    element!(3, "Li", "Lithium", 7, AlkaliMetal, 2, 1, "Used in rechargeable batteries for phones and laptops!"),
    element!(4, "Be", "Beryllium", 9, AlkalineEarthMetal, 2, 2, "One of the lightest metals, used in aerospace applications!"),
    element!(5, "B", "Boron", 11, Metalloid, 2, 13, "Essential for plant growth and found in glass!"),
    element!(6, "C", "Carbon", 12, Nonmetal, 2, 14, "Foundation of all organic life on Earth!"),
    element!(7, "N", "Nitrogen", 14, Nonmetal, 2, 15, "Makes up 78% of Earth's atmosphere!"),
    element!(8, "O", "Oxygen", 16, Nonmetal, 2, 16, "Essential for breathing and combustion!"),
    element!(9, "F", "Fluorine", 19, Halogen, 2, 17, "Most electronegative element, found in toothpaste!"),
    element!(10, "Ne", "Neon", 20, NobleGas, 2, 18, "Creates bright orange-red light in neon signs!"),
    element!(11, "Na", "Sodium", 23, AlkaliMetal, 3, 1, "Essential for nerve function, found in table salt!"),
    element!(12, "Mg", "Magnesium", 24, AlkalineEarthMetal, 3, 2, "Burns with brilliant white light, used in fireworks!"),
    element!(13, "Al", "Aluminum", 27, PostTransitionMetal, 3, 13, "Third most abundant element in Earth's crust!"),
    element!(14, "Si", "Silicon", 28, Metalloid, 3, 14, "Foundation of computer chips and glass!"),
    element!(15, "P", "Phosphorus", 31, Nonmetal, 3, 15, "Essential for DNA, RNA, and bone formation!"),
    element!(16, "S", "Sulfur", 32, Nonmetal, 3, 16, "Creates the smell of rotten eggs and volcanic gases!"),
    element!(17, "Cl", "Chlorine", 35, Halogen, 3, 17, "Used to disinfect swimming pools and drinking water!"),
    element!(18, "Ar", "Argon", 40, NobleGas, 3, 18, "Third most abundant gas in Earth's atmosphere!"),
    element!(19, "K", "Potassium", 39, AlkaliMetal, 4, 1, "Essential for muscle function, found in bananas!"),
    element!(20, "Ca", "Calcium", 40, AlkalineEarthMetal, 4, 2, "Essential for strong bones and teeth!"),
];

/// Every catalog entry in atomic-number order.
#[must_use]
pub fn elements() -> &'static [Element] {
    &ELEMENTS
}

/// Look up an element by atomic number.
pub fn element(atomic_number: u32) -> Result<&'static Element, EngineError> {
    if !(1..=MAX_ATOMIC_NUMBER).contains(&atomic_number) {
        return Err(EngineError::AtomicNumberOutOfRange(atomic_number));
    }
    Ok(&ELEMENTS[(atomic_number - 1) as usize])
}

/// Look up an element by symbol, ignoring case.
pub fn by_symbol(symbol: &str) -> Result<&'static Element, EngineError> {
    ELEMENTS
        .iter()
        .find(|e| e.symbol.eq_ignore_ascii_case(symbol))
        .ok_or_else(|| EngineError::UnknownSymbol(symbol.to_string()))
}

/// Resolve either an atomic number (`"6"`) or a symbol (`"C"`).
pub fn resolve(query: &str) -> Result<&'static Element, EngineError> {
    let query = query.trim();
    match query.parse::<u32>() {
        Ok(z) => element(z),
        Err(_) => by_symbol(query),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_indexed_by_atomic_number() {
        for (index, element) in ELEMENTS.iter().enumerate() {
            assert_eq!(element.atomic_number as usize, index + 1);
            assert!(element.mass_number >= element.atomic_number);
        }
    }

    #[test]
    fn symbols_are_unique() {
        for (i, a) in ELEMENTS.iter().enumerate() {
            for b in &ELEMENTS[i + 1..] {
                assert_ne!(a.symbol, b.symbol);
            }
        }
    }

    #[test]
    fn lookup_bounds() {
        assert_eq!(element(1).map(|e| e.symbol), Ok("H"));
        assert_eq!(element(20).map(|e| e.symbol), Ok("Ca"));
        assert_eq!(element(0), Err(EngineError::AtomicNumberOutOfRange(0)));
        assert_eq!(element(21), Err(EngineError::AtomicNumberOutOfRange(21)));
    }

    #[test]
    fn symbol_lookup_ignores_case() {
        assert_eq!(by_symbol("cl").map(|e| e.atomic_number), Ok(17));
        assert_eq!(by_symbol("NA").map(|e| e.name), Ok("Sodium"));
        assert!(matches!(by_symbol("Fe"), Err(EngineError::UnknownSymbol(_))));
    }

    #[test]
    fn resolve_accepts_number_or_symbol() {
        assert_eq!(resolve("6").map(|e| e.name), Ok("Carbon"));
        assert_eq!(resolve(" o ").map(|e| e.name), Ok("Oxygen"));
    }

    #[test]
    fn carbon_defaults() {
        let carbon = element(6).unwrap();
        assert_eq!(carbon.mass_number, 12);
        assert_eq!(carbon.default_neutrons(), 6);
        assert_eq!(carbon.electron_count(), 6);
        assert_eq!(carbon.category.label(), "Nonmetal");
    }
}
