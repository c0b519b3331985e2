use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Report(args) => commands::report::handle(&args, ctx, flags).await,
        Commands::Browse(args) => commands::browse::handle(&args, ctx, flags),
        Commands::Item(args) => commands::item::handle(&args, ctx, flags),
        Commands::Claim(args) => commands::claim::handle(&args, ctx, flags),
        Commands::Stats => commands::stats::handle(ctx, flags),
        Commands::Contact(args) => commands::contact::handle(&args, ctx, flags),
        Commands::Admin(args) => commands::admin::handle(&args, ctx, flags),
    }
}
