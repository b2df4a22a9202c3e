//! Diagnostic sink for teardown step failures.

use tracing::error;

/// Receives the label and error of every teardown step that fails.
///
/// Implementations must not fail themselves; the coordinator calls the sink
/// from inside its isolation boundary and has nowhere to report a broken
/// sink to.
pub trait DiagnosticSink: Send + Sync {
    fn error(&self, label: &str, err: &anyhow::Error);
}

/// Production sink, forwards step failures to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn error(&self, label: &str, err: &anyhow::Error) {
        error!("Ignoring error during logout ({label}): {err:#}");
    }
}
