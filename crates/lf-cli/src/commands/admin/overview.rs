use lf_core::session::AdminToken;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(token: &AdminToken<'_>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.board.admin_overview(token), flags.format)
}
