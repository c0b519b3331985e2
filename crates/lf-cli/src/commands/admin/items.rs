use lf_core::feedback::Confirm;
use lf_core::session::AdminToken;

use crate::cli::GlobalFlags;
use crate::commands::shared::outcome::ActionResponse;
use crate::context::AppContext;
use crate::output::output;

pub fn approve(
    token: &AdminToken<'_>,
    id: &str,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let outcome = ctx.board.approve_item(token, id)?;
    output(&ActionResponse::new("approve", id, outcome), flags.format)
}

pub fn toggle(
    token: &AdminToken<'_>,
    id: &str,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let outcome = ctx.board.toggle_claimed(token, id)?;
    output(&ActionResponse::new("toggle", id, outcome), flags.format)
}

pub fn delete(
    token: &AdminToken<'_>,
    id: &str,
    confirm: &dyn Confirm,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let outcome = ctx.board.delete_item(token, id, confirm)?;
    output(&ActionResponse::new("delete", id, outcome), flags.format)
}
