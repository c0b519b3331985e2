use std::io::{BufRead, IsTerminal, Write};
use std::sync::OnceLock;

use lf_core::enums::Severity;
use lf_core::feedback::{Confirm, Notifier};

use crate::cli::{GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub table_color: bool,
    pub notice_color: bool,
    pub quiet: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let no_color = std::env::var_os("NO_COLOR").is_some();
    let table_color = std::io::stdout().is_terminal()
        && flags.format == OutputFormat::Table
        && !flags.quiet
        && !no_color;
    let notice_color = std::io::stderr().is_terminal() && !no_color;

    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    let _ = UI_PREFS.set(UiPrefs {
        table_color,
        notice_color,
        quiet: flags.quiet,
        term_width,
    });
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        table_color: false,
        notice_color: false,
        quiet: false,
        term_width: None,
    })
}

/// Print a notice line to stderr unless `--quiet` is set.
pub fn notice(severity: Severity, message: &str) {
    let prefs = prefs();
    if prefs.quiet {
        return;
    }
    eprintln!("{}", format_notice(severity, message, prefs.notice_color));
}

fn format_notice(severity: Severity, message: &str, color: bool) -> String {
    let tag = match severity {
        Severity::Success => "ok",
        Severity::Info => "info",
        Severity::Warning => "warn",
        Severity::Danger => "error",
    };
    if !color {
        return format!("[{tag}] {message}");
    }
    let code = match severity {
        Severity::Success => "32",
        Severity::Info => "36",
        Severity::Warning => "33",
        Severity::Danger => "31",
    };
    format!("\u{1b}[{code}m[{tag}]\u{1b}[0m {message}")
}

/// Board notifier for the terminal: notices go to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        tracing::debug!(%severity, "{message}");
        notice(severity, message);
    }
}

/// Confirmation that reads `y`/`yes` from stdin, or answers yes up front
/// when `--yes` was passed.
#[derive(Debug, Clone, Copy)]
pub struct StdinConfirm {
    assume_yes: bool,
}

impl StdinConfirm {
    #[must_use]
    pub const fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{prompt} [y/N] ");
        let _ = std::io::stderr().flush();

        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        is_affirmative(&answer)
    }
}

fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
