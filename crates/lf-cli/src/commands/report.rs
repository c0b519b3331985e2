use anyhow::Context;
use chrono::Utc;
use lf_core::drafts::ItemDraft;
use lf_store::photo::encode_photo;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ReportArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lfb report`.
pub async fn handle(
    args: &ReportArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let photo = match &args.photo {
        Some(path) => Some(
            encode_photo(path, ctx.config.general.photo_max_bytes)
                .await
                .context("failed to attach photo")?,
        ),
        None => None,
    };

    let draft = ItemDraft {
        name: args.name.clone(),
        category: args.category.clone(),
        description: args.description.clone(),
        location: args.location.clone(),
        date_found: args
            .date_found
            .clone()
            .unwrap_or_else(|| Utc::now().date_naive().format("%Y-%m-%d").to_string()),
        finder_name: args.finder_name.clone(),
        finder_contact: args.finder_contact.clone(),
        photo,
    };

    let item = ctx.board.create_item(draft)?;
    output(&item, flags.format)
}
