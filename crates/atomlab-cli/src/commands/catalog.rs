use atomlab_core::catalog;
use atomlab_core::snapshots::ElementDetail;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `atomlab catalog`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = catalog::elements()
        .iter()
        .map(ElementDetail::from)
        .collect::<Vec<_>>();
    output(&rows, flags.format)
}
