use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lfb stats`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.board.stats(), flags.format)
}
