use lf_core::drafts::ClaimDraft;
use lf_core::enums::Severity;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ClaimArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::ui;

/// Handle `lfb claim`.
pub fn handle(args: &ClaimArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match ctx.board.item(&args.item_id) {
        None => ui::notice(
            Severity::Warning,
            &format!("No item '{}' on the board; the claim is recorded anyway.", args.item_id),
        ),
        Some(item) if !item.is_claimable() => ui::notice(
            Severity::Warning,
            &format!(
                "Item '{}' is {} and not open for claims.",
                item.id,
                item.status.as_str().to_lowercase()
            ),
        ),
        Some(_) => {}
    }

    let draft = ClaimDraft {
        claimant_name: args.name.clone(),
        claimant_contact: args.contact.clone(),
        description: args.description.clone(),
    };
    let claim = ctx.board.submit_claim(&args.item_id, draft)?;
    output(&claim, flags.format)
}
