use lf_core::entities::Item;
use lf_core::filter::ItemFilter;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::BrowseArgs;
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::context::AppContext;
use crate::output::output;

/// Handle `lfb browse`.
pub fn handle(args: &BrowseArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let filter = ItemFilter::from_form(
        args.search.as_deref().unwrap_or_default(),
        args.category.as_deref().unwrap_or_default(),
        args.status.as_deref().unwrap_or_default(),
    )?;
    let limit = effective_limit(args.limit, flags.limit, ctx.config.general.default_limit);

    let mut items: Vec<&Item> = ctx.board.list_visible(&filter);
    tracing::debug!(matched = items.len(), limit, "browse");
    apply_limit(&mut items, limit);

    output(&items, flags.format)
}
