use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::subcommands::AdminCommands;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Report a found item (hidden until an admin approves it).
    Report(ReportArgs),
    /// Browse approved items.
    Browse(BrowseArgs),
    /// Show one item with its claims.
    Item(ItemArgs),
    /// Claim an item as yours.
    Claim(ClaimArgs),
    /// Board statistics.
    Stats,
    /// Send a message to the board operators.
    Contact(ContactArgs),
    /// Admin actions (requires the admin password).
    Admin(AdminArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub category: String,
    #[arg(long)]
    pub description: String,
    /// Where the item was found
    #[arg(long)]
    pub location: String,
    /// YYYY-MM-DD, defaults to today (UTC)
    #[arg(long)]
    pub date_found: Option<String>,
    #[arg(long)]
    pub finder_name: String,
    /// Phone or email
    #[arg(long)]
    pub finder_contact: String,
    /// Image file to attach
    #[arg(long)]
    pub photo: Option<PathBuf>,
}

#[derive(Clone, Debug, Args)]
pub struct BrowseArgs {
    /// Case-insensitive match on name, description, or location
    #[arg(long)]
    pub search: Option<String>,
    /// Exact category
    #[arg(long)]
    pub category: Option<String>,
    /// available or claimed
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct ItemArgs {
    pub id: String,
}

#[derive(Clone, Debug, Args)]
pub struct ClaimArgs {
    /// Id of the item being claimed
    pub item_id: String,
    #[arg(long)]
    pub name: String,
    /// Phone or email
    #[arg(long)]
    pub contact: String,
    /// Proof of ownership
    #[arg(long)]
    pub description: String,
}

#[derive(Clone, Debug, Args)]
pub struct ContactArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub message: String,
}

#[derive(Clone, Debug, Args)]
pub struct AdminArgs {
    /// Admin password
    #[arg(long)]
    pub password: String,

    #[command(subcommand)]
    pub action: AdminCommands,
}
