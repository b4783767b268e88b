//! `tracing`-backed sink implementation.

use crate::{EventSink, PropertyBag, ScopeGuard};
use seclog_types::Severity;
use serde_json::Value;

/// Sink that forwards records to the `tracing` ecosystem.
///
/// Scoped properties become an entered `security_event` span carrying the
/// rendered bag; the span stays entered on the current thread until the
/// returned guard drops.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Create a new tracing sink.
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for TracingSink {
    fn begin_scope(&self, properties: &PropertyBag) -> ScopeGuard {
        let span = tracing::info_span!("security_event", properties = %properties);
        let entered = span.entered();
        ScopeGuard::new(move || drop(entered))
    }

    fn log_at(&self, severity: Severity, template: &str, args: &[Value]) {
        match severity {
            Severity::Info => {
                tracing::info!(target: "seclog", args = ?args, "{}", template);
            }
            Severity::Warning => {
                tracing::warn!(target: "seclog", args = ?args, "{}", template);
            }
            Severity::Error => {
                tracing::error!(target: "seclog", args = ?args, "{}", template);
            }
            Severity::Critical => {
                tracing::error!(target: "seclog", severity = "critical", args = ?args, "{}", template);
            }
        }
    }
}
