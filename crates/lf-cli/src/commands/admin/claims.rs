use lf_core::entities::Claim;
use lf_core::feedback::Confirm;
use lf_core::session::AdminToken;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::commands::shared::outcome::ActionResponse;
use crate::context::AppContext;
use crate::output::output;

pub fn pending(limit: Option<u32>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let mut claims: Vec<&Claim> = ctx.board.list_pending_claims();
    apply_limit(&mut claims, limit);
    output(&claims, flags.format)
}

pub fn approve(
    token: &AdminToken<'_>,
    id: &str,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let outcome = ctx.board.approve_claim(token, id)?;
    output(&ActionResponse::new("approve-claim", id, outcome), flags.format)
}

pub fn reject(
    token: &AdminToken<'_>,
    id: &str,
    confirm: &dyn Confirm,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let outcome = ctx.board.reject_claim(token, id, confirm)?;
    output(&ActionResponse::new("reject-claim", id, outcome), flags.format)
}
