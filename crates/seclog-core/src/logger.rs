//! The dispatch facade.

use crate::properties::{keys, PropertyBag};
use crate::{populate_properties, Error, EventSink, Result, SecurityLogConfig};
use seclog_types::{SecurityMetadata, Severity};
use serde_json::Value;
use std::sync::Arc;

/// Facade dispatching security events to a structured-logger sink.
///
/// Bound to one application identifier at construction. Holds no other
/// state; concurrent calls are independent.
#[derive(Clone)]
pub struct SecurityLogger {
    sink: Arc<dyn EventSink>,
    app_id: String,
}

impl SecurityLogger {
    /// Create a facade bound to the config's application identifier.
    ///
    /// Fails with [`Error::InvalidConfig`] when the identifier is empty or
    /// whitespace-only; the facade is never usable after that.
    pub fn new(sink: Arc<dyn EventSink>, config: SecurityLogConfig) -> Result<Self> {
        if config.app_id.trim().is_empty() {
            return Err(Error::invalid_config("application id must not be blank"));
        }
        Ok(Self {
            sink,
            app_id: config.app_id,
        })
    }

    /// The bound application identifier.
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Emit one security event record.
    ///
    /// See [`emit_with`] for the dispatch steps. Sink failures propagate
    /// unchanged.
    pub fn emit(
        &self,
        event_label: &str,
        severity: Severity,
        template: &str,
        metadata: Option<&SecurityMetadata>,
        format_args: &[Value],
    ) {
        emit_with(
            self.sink.as_ref(),
            &self.app_id,
            event_label,
            severity,
            template,
            metadata,
            format_args,
        );
    }
}

impl std::fmt::Debug for SecurityLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecurityLogger")
            .field("app_id", &self.app_id)
            .finish_non_exhaustive()
    }
}

/// Emit one security event record through an explicit sink and app id.
///
/// Steps, in order: build a fresh bag holding exactly the application id
/// and the pre-built event label, enrich it from the metadata, open a
/// scoped context carrying the bag, and forward severity, template, and
/// format args to the sink inside that scope. The scope is released on
/// every exit path, including a panicking sink; nothing is caught or
/// retried.
///
/// The unbound form permits an empty `app_id`; the bound facade validates
/// it at construction instead.
pub fn emit_with(
    sink: &dyn EventSink,
    app_id: &str,
    event_label: &str,
    severity: Severity,
    template: &str,
    metadata: Option<&SecurityMetadata>,
    format_args: &[Value],
) {
    let mut bag = PropertyBag::new();
    bag.insert(keys::APP_ID, app_id);
    bag.insert(keys::EVENT, event_label);
    populate_properties(&mut bag, metadata);

    let _scope = sink.begin_scope(&bag);
    sink.log_at(severity, template, format_args);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Debug, Clone)]
    struct Record {
        severity: Severity,
        template: String,
        args: Vec<Value>,
        properties: PropertyBag,
    }

    #[derive(Default)]
    struct State {
        scopes: Vec<PropertyBag>,
        records: Vec<Record>,
    }

    #[derive(Clone, Default)]
    struct RecordingSink {
        inner: Arc<Mutex<State>>,
        panic_on_log: bool,
    }

    impl RecordingSink {
        fn panicking() -> Self {
            Self {
                panic_on_log: true,
                ..Self::default()
            }
        }

        fn open_scopes(&self) -> usize {
            self.inner.lock().unwrap().scopes.len()
        }

        fn records(&self) -> Vec<Record> {
            self.inner.lock().unwrap().records.clone()
        }
    }

    impl EventSink for RecordingSink {
        fn begin_scope(&self, properties: &PropertyBag) -> crate::ScopeGuard {
            let inner = Arc::clone(&self.inner);
            inner.lock().unwrap().scopes.push(properties.clone());
            crate::ScopeGuard::new(move || {
                inner.lock().unwrap().scopes.pop();
            })
        }

        fn log_at(&self, severity: Severity, template: &str, args: &[Value]) {
            if self.panic_on_log {
                panic!("sink unavailable");
            }
            let mut inner = self.inner.lock().unwrap();
            let properties = inner.scopes.last().cloned().unwrap_or_default();
            inner.records.push(Record {
                severity,
                template: template.to_string(),
                args: args.to_vec(),
                properties,
            });
        }
    }

    fn logger(sink: RecordingSink) -> SecurityLogger {
        SecurityLogger::new(Arc::new(sink), SecurityLogConfig::new("app-1")).unwrap()
    }

    #[test]
    fn test_blank_app_id_rejected() {
        let sink = RecordingSink::default();
        for bad in ["", "   ", "\t"] {
            let err =
                SecurityLogger::new(Arc::new(sink.clone()), SecurityLogConfig::new(bad))
                    .unwrap_err();
            assert!(matches!(err, Error::InvalidConfig(_)));
        }
        assert!(sink.records().is_empty());
    }

    #[test]
    fn test_emit_forwards_record_in_scope() {
        let sink = RecordingSink::default();
        let log = logger(sink.clone());

        log.emit(
            "authn_login_fail:u1",
            Severity::Warning,
            "login failed for {UserId}",
            None,
            &[json!("u1")],
        );

        let records = sink.records();
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.severity, Severity::Warning);
        assert_eq!(record.template, "login failed for {UserId}");
        assert_eq!(record.args, vec![json!("u1")]);
        assert_eq!(record.properties.get(keys::APP_ID), Some(&json!("app-1")));
        assert_eq!(
            record.properties.get(keys::EVENT),
            Some(&json!("authn_login_fail:u1"))
        );
        assert_eq!(record.properties.len(), 2);
        assert_eq!(sink.open_scopes(), 0);
    }

    #[test]
    fn test_emit_enriches_from_metadata() {
        let sink = RecordingSink::default();
        let log = logger(sink.clone());
        let meta = SecurityMetadata::new()
            .with_source_ip("198.51.100.3")
            .with_request_method("POST");

        log.emit("authz_fail:u1,acct", Severity::Critical, "denied", Some(&meta), &[]);

        let records = sink.records();
        let bag = &records[0].properties;
        assert_eq!(bag.len(), 4);
        let names: Vec<_> = bag.iter().map(|(k, _)| k.to_string()).collect();
        assert_eq!(
            names,
            vec![keys::APP_ID, keys::EVENT, keys::SOURCE_IP, keys::REQUEST_METHOD]
        );
    }

    #[test]
    fn test_scope_released_when_sink_panics() {
        let sink = RecordingSink::panicking();
        let log = logger(sink.clone());

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            log.emit("sys_crash", Severity::Warning, "boom", None, &[]);
        }));
        assert!(result.is_err());
        assert_eq!(sink.open_scopes(), 0);
    }

    #[test]
    fn test_emit_with_allows_empty_app_id() {
        let sink = RecordingSink::default();
        let handle = sink.clone();

        emit_with(&handle, "", "session_created:u1", Severity::Info, "created", None, &[]);

        let records = sink.records();
        assert_eq!(records[0].properties.get(keys::APP_ID), Some(&json!("")));
    }

    #[test]
    fn test_emit_is_deterministic() {
        let sink = RecordingSink::default();
        let log = logger(sink.clone());
        let meta = SecurityMetadata::new().with_region("eu-central-1");

        for _ in 0..2 {
            log.emit(
                "user_updated:admin,u2",
                Severity::Warning,
                "updated",
                Some(&meta),
                &[json!("u2")],
            );
        }

        let records = sink.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].properties, records[1].properties);
        assert_eq!(records[0].args, records[1].args);
    }
}
