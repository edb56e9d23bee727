//! Terminal preferences resolved once at startup.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// Narrower terminals than this fall back to unconstrained tables.
const MIN_TERM_WIDTH: usize = 40;

#[derive(Clone, Copy, Debug, Default)]
pub struct UiPrefs {
    /// Color feedback and grade keywords in tables and quiz panels.
    pub table_color: bool,
    /// `COLUMNS`, when set and usable.
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

/// Color only ever applies to table output. `auto` also needs a TTY, no
/// `--quiet` and no `NO_COLOR`.
fn wants_color(flags: &GlobalFlags, is_tty: bool) -> bool {
    if flags.format != OutputFormat::Table {
        return false;
    }
    match flags.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => is_tty && !flags.quiet && std::env::var_os("NO_COLOR").is_none(),
    }
}

pub fn init(flags: &GlobalFlags) {
    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= MIN_TERM_WIDTH);

    let _ = UI_PREFS.set(UiPrefs {
        table_color: wants_color(flags, std::io::stdout().is_terminal()),
        term_width,
    });
}

/// Preferences set by [`init`]; plain uncolored output if it never ran
/// (unit tests render through here too).
#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}
