//! Test utilities for seclog crates.

use seclog_core::{EventSink, PropertyBag, ScopeGuard};
use seclog_types::Severity;
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// One record captured by a [`MemorySink`].
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRecord {
    /// Severity the record was logged at.
    pub severity: Severity,
    /// Message template as passed to the sink.
    pub template: String,
    /// Positional format arguments.
    pub args: Vec<Value>,
    /// Snapshot of the innermost active scope at log time.
    pub properties: PropertyBag,
}

/// In-memory capturing sink for assertions in tests.
///
/// Clones share the same captured state, so a test can hand one clone to
/// the logger under test and keep another for assertions.
#[derive(Clone, Default)]
pub struct MemorySink {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    scopes: Vec<PropertyBag>,
    records: Vec<CapturedRecord>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// All records captured so far.
    pub fn records(&self) -> Vec<CapturedRecord> {
        self.inner.lock().expect("sink poisoned").records.clone()
    }

    /// The single captured record; panics unless exactly one exists.
    pub fn single_record(&self) -> CapturedRecord {
        let records = self.records();
        assert_eq!(records.len(), 1, "expected exactly one record, got {}", records.len());
        records.into_iter().next().expect("record")
    }

    /// Number of scopes currently open.
    pub fn open_scopes(&self) -> usize {
        self.inner.lock().expect("sink poisoned").scopes.len()
    }

    /// Discard captured records and scopes.
    pub fn clear(&self) {
        let mut inner = self.inner.lock().expect("sink poisoned");
        inner.records.clear();
        inner.scopes.clear();
    }
}

impl EventSink for MemorySink {
    fn begin_scope(&self, properties: &PropertyBag) -> ScopeGuard {
        let inner = Arc::clone(&self.inner);
        inner
            .lock()
            .expect("sink poisoned")
            .scopes
            .push(properties.clone());
        ScopeGuard::new(move || {
            inner.lock().expect("sink poisoned").scopes.pop();
        })
    }

    fn log_at(&self, severity: Severity, template: &str, args: &[Value]) {
        let mut inner = self.inner.lock().expect("sink poisoned");
        let properties = inner.scopes.last().cloned().unwrap_or_default();
        inner.records.push(CapturedRecord {
            severity,
            template: template.to_string(),
            args: args.to_vec(),
            properties,
        });
    }
}

/// Assert that a Result is Ok and return the value.
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a Result is Err.
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(_) => {}
        }
    };
}
