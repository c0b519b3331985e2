//! Default notification sink backed by `tracing`.

use lf_core::enums::Severity;
use lf_core::feedback::Notifier;

/// Forwards notifications to the tracing subscriber.
///
/// Used when the board is opened without a front-end notifier, e.g. from
/// scripts or tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Success | Severity::Info => tracing::info!(%severity, "{message}"),
            Severity::Warning => tracing::warn!(%severity, "{message}"),
            Severity::Danger => tracing::error!(%severity, "{message}"),
        }
    }
}
