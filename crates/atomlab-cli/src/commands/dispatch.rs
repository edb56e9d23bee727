use atomlab_config::AtomlabConfig;
use atomlab_core::Page;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    config: &AtomlabConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Element(args) => commands::element::handle(&args, flags),
        Commands::Catalog => commands::catalog::handle(flags),
        Commands::Shells(args) => commands::shells::handle(&args, flags),
        Commands::Simulate(args) => {
            commands::session::handle(Page::Simulation, &args, config, flags).await
        }
        Commands::Quiz(args) => commands::session::handle(Page::Quiz, &args, config, flags).await,
    }
}
