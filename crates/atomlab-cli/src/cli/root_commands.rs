use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Show one element and its shell configuration.
    Element(ElementArgs),
    /// List every element in the catalog.
    Catalog,
    /// Fill a number of electrons into shells (2n² rule).
    Shells(ShellsArgs),
    /// Interactive atom simulation.
    Simulate(SessionArgs),
    /// Interactive electron-shell quiz.
    Quiz(SessionArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ElementArgs {
    /// Atomic number (1-20) or symbol, e.g. `6` or `C`.
    pub element: String,
}

#[derive(Clone, Debug, Args)]
pub struct ShellsArgs {
    /// Electron count.
    pub electrons: u32,
}

#[derive(Clone, Debug, Default, Args)]
pub struct SessionArgs {
    /// Override the configured feedback delay (milliseconds).
    #[arg(long)]
    pub delay_ms: Option<u64>,
}
