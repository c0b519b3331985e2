use anyhow::bail;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ItemArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lfb item`.
pub fn handle(args: &ItemArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(detail) = ctx.board.item_detail(&args.id) else {
        bail!("item '{}' not found", args.id);
    };
    output(&detail, flags.format)
}
