//! The structured-logger collaborator interface.

use crate::PropertyBag;
use seclog_types::Severity;
use serde_json::Value;
use std::fmt;

/// A structured-logger sink accepting seclog records.
///
/// The message template's placeholders are opaque to the core; the sink's
/// own templating consumes them together with the positional arguments.
/// Implementations are responsible for their own thread-safety.
pub trait EventSink: Send + Sync {
    /// Establish ambient contextual properties for the lifetime of the
    /// returned guard. Dropping the guard removes them.
    fn begin_scope(&self, properties: &PropertyBag) -> ScopeGuard;

    /// Forward one record at the given severity.
    fn log_at(&self, severity: Severity, template: &str, args: &[Value]);
}

/// RAII guard for a scoped logging context.
///
/// Runs its release action exactly once when dropped, which includes
/// unwinding out of a panicking sink call.
pub struct ScopeGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl ScopeGuard {
    /// Create a guard that runs `release` on drop.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Create a guard with nothing to release.
    pub fn noop() -> Self {
        Self { release: None }
    }
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for ScopeGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopeGuard")
            .field("armed", &self.release.is_some())
            .finish()
    }
}
