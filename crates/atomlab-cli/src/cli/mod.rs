use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `atomlab` binary.
#[derive(Debug, Parser)]
#[command(
    name = "atomlab",
    version,
    about = "Atomlab - atomic structure explorer and electron shell quiz"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Table coloring: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            color: self.color,
            quiet: self.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, ColorMode, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["atomlab", "--format", "json", "--verbose", "catalog"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Catalog));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["atomlab", "element", "C", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Element(ref args) if args.element == "C"));
    }

    #[test]
    fn defaults_to_table_output() {
        let cli = Cli::try_parse_from(["atomlab", "shells", "11"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.color, ColorMode::Auto);
        assert!(matches!(cli.command, Commands::Shells(ref args) if args.electrons == 11));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["atomlab", "--format", "xml", "catalog"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn shells_rejects_negative_count() {
        assert!(Cli::try_parse_from(["atomlab", "shells", "-3"]).is_err());
    }

    #[test]
    fn quiz_accepts_delay_override() {
        let cli = Cli::try_parse_from(["atomlab", "quiz", "--delay-ms", "0"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Quiz(ref args) if args.delay_ms == Some(0)));
    }
}
