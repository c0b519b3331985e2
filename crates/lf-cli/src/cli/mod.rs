use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `lfb` binary.
#[derive(Debug, Parser)]
#[command(name = "lfb", version, about = "Lost & found bulletin board")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max rows to return from listing commands
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress notifications)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Data directory (overrides storage.dir from config)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            data_dir: self.data_dir.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::subcommands::AdminCommands;
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "lfb", "--format", "table", "--limit", "10", "--verbose", "stats",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Stats));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["lfb", "stats", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Stats));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["lfb", "--format", "xml", "stats"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["lfb", "--data-dir", "/tmp/board", "stats"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.data_dir.as_deref(), Some(Path::new("/tmp/board")));
    }

    #[test]
    fn browse_filters_are_optional() {
        let cli = Cli::try_parse_from(["lfb", "browse", "--search", "wallet"])
            .expect("cli should parse");
        let Commands::Browse(args) = cli.command else {
            panic!("expected browse");
        };
        assert_eq!(args.search.as_deref(), Some("wallet"));
        assert!(args.category.is_none());
        assert!(args.status.is_none());
    }

    #[test]
    fn report_requires_finder_fields() {
        let parsed = Cli::try_parse_from([
            "lfb",
            "report",
            "--name",
            "Umbrella",
            "--category",
            "Accessories",
            "--description",
            "Blue",
            "--location",
            "Lobby",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn admin_password_precedes_action() {
        let cli = Cli::try_parse_from(["lfb", "admin", "--password", "pw", "delete", "42", "--yes"])
            .expect("cli should parse");
        let Commands::Admin(args) = cli.command else {
            panic!("expected admin");
        };
        assert_eq!(args.password, "pw");
        assert!(matches!(
            args.action,
            AdminCommands::Delete { ref id, yes: true } if id == "42"
        ));
    }

    #[test]
    fn admin_without_password_is_rejected() {
        assert!(Cli::try_parse_from(["lfb", "admin", "overview"]).is_err());
    }
}
