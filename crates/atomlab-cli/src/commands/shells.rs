use atomlab_core::ShellConfiguration;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ShellsArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ShellsResponse {
    electrons: u32,
    shells: ShellConfiguration,
}

/// Handle `atomlab shells <electrons>`.
pub fn handle(args: &ShellsArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(
        &ShellsResponse {
            electrons: args.electrons,
            shells: ShellConfiguration::for_electrons(args.electrons),
        },
        flags.format,
    )
}
