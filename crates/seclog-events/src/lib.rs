//! Per-category security event wrappers.
//!
//! One method per event kind on [`SecurityEvents`], grouped into category
//! modules. Each wrapper selects its kind's canonical name and default
//! severity, builds the event label from the kind's positional arguments,
//! and dispatches through the facade with the caller's message template,
//! optional metadata, and format arguments.
//!
//! Wrapper arguments are optional-friendly: a blank argument simply drops
//! out of the label, so an unauthenticated call site can pass `""` for a
//! user id without producing `event:,` noise.

mod authn;
mod authz;
mod crypt;
mod excess;
mod input;
mod malicious;
mod privilege;
mod sensitive;
mod sequence;
mod session;
mod sys;
mod upload;
mod user;

use seclog_core::build_label;
use serde_json::Value;

pub use seclog_core::{SecurityLogConfig, SecurityLogger};
pub use seclog_types::{SecurityEvent, SecurityMetadata, Severity};

/// Recorder exposing one method per security event kind.
#[derive(Debug, Clone)]
pub struct SecurityEvents {
    log: SecurityLogger,
}

impl SecurityEvents {
    /// Create a recorder over a dispatch facade.
    pub fn new(log: SecurityLogger) -> Self {
        Self { log }
    }

    /// The underlying facade.
    pub fn logger(&self) -> &SecurityLogger {
        &self.log
    }

    /// Dispatch an event at its default severity.
    pub(crate) fn dispatch(
        &self,
        event: SecurityEvent,
        label_args: &[Option<&str>],
        template: &str,
        metadata: Option<&SecurityMetadata>,
        format_args: &[Value],
    ) {
        self.dispatch_at(
            event,
            event.default_severity(),
            label_args,
            template,
            metadata,
            format_args,
        );
    }

    /// Dispatch an event at an explicit severity.
    pub(crate) fn dispatch_at(
        &self,
        event: SecurityEvent,
        severity: Severity,
        label_args: &[Option<&str>],
        template: &str,
        metadata: Option<&SecurityMetadata>,
        format_args: &[Value],
    ) {
        let label = build_label(event.name(), label_args);
        self.log
            .emit(&label, severity, template, metadata, format_args);
    }
}

/// Append extra values onto caller-supplied format args.
///
/// Some wrappers forward their semantic arguments to the sink in addition
/// to using them in the label; this mirrors the observed call-site
/// behavior even where the duplication looks incidental.
pub(crate) fn append_args(format_args: &[Value], extra: &[&str]) -> Vec<Value> {
    let mut args = format_args.to_vec();
    args.extend(extra.iter().map(|v| Value::from(*v)));
    args
}
