use clap::Subcommand;

/// Admin panel commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AdminCommands {
    /// Pending items, approved items, and pending claims.
    Overview,
    /// Publish a pending item.
    Approve { id: String },
    /// Flip an approved item between available and claimed.
    Toggle { id: String },
    /// Delete an item.
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// List claims awaiting review.
    PendingClaims {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Approve a claim and mark its item claimed.
    ApproveClaim { id: String },
    /// Reject (delete) a claim.
    RejectClaim {
        id: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}
