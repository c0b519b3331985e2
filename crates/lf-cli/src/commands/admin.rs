mod claims;
mod items;
mod overview;

use anyhow::bail;
use lf_core::enums::Severity;
use lf_core::feedback::messages;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AdminArgs;
use crate::cli::subcommands::AdminCommands;
use crate::context::AppContext;
use crate::ui::{self, StdinConfirm};

/// Handle `lfb admin`. Each invocation logs in afresh; the session lives
/// only as long as the command.
pub fn handle(args: &AdminArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut session = ctx.config.admin.session();
    if !session.login(&args.password) {
        ui::notice(Severity::Danger, messages::LOGIN_FAILED);
        bail!("admin login failed");
    }
    ui::notice(Severity::Success, messages::LOGIN_OK);
    let token = session.token()?;

    match &args.action {
        AdminCommands::Overview => overview::run(&token, ctx, flags),
        AdminCommands::Approve { id } => items::approve(&token, id, ctx, flags),
        AdminCommands::Toggle { id } => items::toggle(&token, id, ctx, flags),
        AdminCommands::Delete { id, yes } => {
            items::delete(&token, id, &StdinConfirm::new(*yes), ctx, flags)
        }
        AdminCommands::PendingClaims { limit } => claims::pending(*limit, ctx, flags),
        AdminCommands::ApproveClaim { id } => claims::approve(&token, id, ctx, flags),
        AdminCommands::RejectClaim { id, yes } => {
            claims::reject(&token, id, &StdinConfirm::new(*yes), ctx, flags)
        }
    }
}

#[cfg(test)]
mod tests {
    use lf_config::BoardConfig;
    use tempfile::TempDir;

    use super::*;
    use crate::cli::OutputFormat;

    fn flags() -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Raw,
            limit: None,
            quiet: true,
            data_dir: None,
        }
    }

    fn context(dir: &TempDir) -> AppContext {
        AppContext::init(BoardConfig::default(), Some(dir.path().to_path_buf())).unwrap()
    }

    #[test]
    fn wrong_password_stops_before_any_action() {
        let dir = TempDir::new().unwrap();
        let mut ctx = context(&dir);
        let args = AdminArgs {
            password: "wrong".into(),
            action: AdminCommands::Overview,
        };

        let err = handle(&args, &mut ctx, &flags()).unwrap_err();
        assert!(err.to_string().contains("login failed"));
    }

    #[test]
    fn unknown_ids_are_quiet_no_ops() {
        let dir = TempDir::new().unwrap();
        let mut ctx = context(&dir);
        for action in [
            AdminCommands::Approve { id: "nope".into() },
            AdminCommands::Toggle { id: "nope".into() },
            AdminCommands::Delete {
                id: "nope".into(),
                yes: true,
            },
            AdminCommands::ApproveClaim { id: "nope".into() },
            AdminCommands::RejectClaim {
                id: "nope".into(),
                yes: true,
            },
        ] {
            let args = AdminArgs {
                password: "admin123".into(),
                action,
            };
            assert!(handle(&args, &mut ctx, &flags()).is_ok());
        }
        assert!(ctx.board.items().is_empty());
        assert!(ctx.board.claims().is_empty());
    }
}
