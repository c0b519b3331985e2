use lf_core::drafts::ContactDraft;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ContactArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lfb contact`.
pub fn handle(args: &ContactArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let message = ctx.board.send_contact_message(ContactDraft {
        name: args.name.clone(),
        email: args.email.clone(),
        message: args.message.clone(),
    })?;
    output(&message, flags.format)
}
