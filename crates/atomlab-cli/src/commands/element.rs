use atomlab_core::catalog;
use atomlab_core::snapshots::ElementDetail;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ElementArgs;
use crate::output::output;

/// Handle `atomlab element <number|symbol>`.
pub fn handle(args: &ElementArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let element = catalog::resolve(&args.element)?;
    tracing::debug!(symbol = element.symbol, "element resolved");
    output(&ElementDetail::from(element), flags.format)
}
