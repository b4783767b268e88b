//! End-to-end tests for the category wrapper surface.

use seclog_core::{keys, SecurityLogConfig, SecurityLogger};
use seclog_events::SecurityEvents;
use seclog_test_utils::MemorySink;
use seclog_types::{SecurityMetadata, Severity};
use serde_json::json;
use std::sync::Arc;

fn recorder(sink: &MemorySink) -> SecurityEvents {
    let log = SecurityLogger::new(Arc::new(sink.clone()), SecurityLogConfig::new("shop-api"))
        .expect("valid config");
    SecurityEvents::new(log)
}

#[test]
fn login_success_emits_label_and_default_severity() {
    let sink = MemorySink::new();
    let events = recorder(&sink);

    events.authn_login_success("login ok", "u1", &[], None);

    let record = sink.single_record();
    assert_eq!(record.severity, Severity::Info);
    assert_eq!(
        record.properties.get(keys::EVENT),
        Some(&json!("authn_login_success:u1"))
    );
    assert_eq!(record.properties.get(keys::APP_ID), Some(&json!("shop-api")));
    assert_eq!(sink.open_scopes(), 0);
}

#[test]
fn login_fail_appends_user_id_to_format_args() {
    let sink = MemorySink::new();
    let events = recorder(&sink);

    events.authn_login_fail("login failed for {UserId}", "u1", &[], None);

    let record = sink.single_record();
    assert_eq!(record.severity, Severity::Warning);
    assert_eq!(
        record.properties.get(keys::EVENT),
        Some(&json!("authn_login_fail:u1"))
    );
    assert_eq!(record.args, vec![json!("u1")]);
}

#[test]
fn login_fail_max_appends_user_id_and_limit() {
    let sink = MemorySink::new();
    let events = recorder(&sink);

    events.authn_login_fail_max("limit reached", "u1", "5", &[json!("extra")], None);

    let record = sink.single_record();
    assert_eq!(
        record.properties.get(keys::EVENT),
        Some(&json!("authn_login_fail_max:u1,5"))
    );
    assert_eq!(record.args, vec![json!("extra"), json!("u1"), json!("5")]);
}

#[test]
fn blank_arguments_drop_out_of_labels() {
    let sink = MemorySink::new();
    let events = recorder(&sink);

    // Unauthenticated request: no user id available.
    events.authn_login_fail("login failed", "", &[], None);

    let record = sink.single_record();
    assert_eq!(
        record.properties.get(keys::EVENT),
        Some(&json!("authn_login_fail"))
    );
}

#[test]
fn upload_validation_uses_caller_severity() {
    let sink = MemorySink::new();
    let events = recorder(&sink);

    events.upload_validation(
        "scan finished",
        "report.pdf",
        "virusscan",
        "passed",
        Severity::Info,
        &[],
        None,
    );
    events.upload_validation(
        "scan finished",
        "evil.exe",
        "virusscan",
        "FAILED",
        Severity::Critical,
        &[],
        None,
    );

    let records = sink.records();
    assert_eq!(records[0].severity, Severity::Info);
    assert_eq!(
        records[0].properties.get(keys::EVENT),
        Some(&json!("upload_validation:report.pdf,virusscan,passed"))
    );
    assert_eq!(records[1].severity, Severity::Critical);
}

#[test]
fn metadata_enriches_wrapper_scope() {
    let sink = MemorySink::new();
    let events = recorder(&sink);
    let meta = SecurityMetadata::new()
        .with_source_ip("203.0.113.9")
        .with_region("ap-southeast-1");

    events.authz_fail("denied", "u1", "invoice-42", &[], Some(&meta));

    let record = sink.single_record();
    assert_eq!(record.severity, Severity::Critical);
    assert_eq!(
        record.properties.get(keys::EVENT),
        Some(&json!("authz_fail:u1,invoice-42"))
    );
    assert_eq!(record.properties.get(keys::SOURCE_IP), Some(&json!("203.0.113.9")));
    assert_eq!(record.properties.get(keys::REGION), Some(&json!("ap-southeast-1")));
    assert_eq!(record.properties.len(), 4);
}

#[test]
fn variadic_label_arguments_join_in_order() {
    let sink = MemorySink::new();
    let events = recorder(&sink);

    events.authn_token_created("token issued", "u1", &["read", "write"], &[], None);
    events.input_validation_fail("bad input", &["email", "zip"], "u2", &[], None);
    events.user_created("user added", "admin", "u3", &["role:viewer"], &[], None);

    let records = sink.records();
    assert_eq!(
        records[0].properties.get(keys::EVENT),
        Some(&json!("authn_token_created:u1,read,write"))
    );
    assert_eq!(
        records[1].properties.get(keys::EVENT),
        Some(&json!("input_validation_fail:email,zip,u2"))
    );
    assert_eq!(
        records[2].properties.get(keys::EVENT),
        Some(&json!("user_created:admin,u3,role:viewer"))
    );
}

#[test]
fn identical_calls_are_deterministic() {
    let sink = MemorySink::new();
    let events = recorder(&sink);
    let meta = SecurityMetadata::new().with_user_agent("curl/8.5");

    events.session_expired("expired", "u1", "timeout", &[], Some(&meta));
    events.session_expired("expired", "u1", "timeout", &[], Some(&meta));

    let records = sink.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0], records[1]);
}

#[test]
fn each_wrapper_emits_exactly_one_record() {
    let sink = MemorySink::new();
    let events = recorder(&sink);

    events.authz_admin("admin action", "root", "user-purge", &[], None);
    assert_eq!(sink.records().len(), 1);
    sink.clear();

    events.sys_crash("crashed", "oom", &[], None);
    let record = sink.single_record();
    assert_eq!(record.severity, Severity::Warning);
    assert_eq!(record.properties.get(keys::EVENT), Some(&json!("sys_crash:oom")));
    sink.clear();

    events.malicious_cors("cors probe", "198.51.100.7", "curl/8.5", "evil.example", &[], None);
    let record = sink.single_record();
    assert_eq!(record.severity, Severity::Critical);
    assert_eq!(
        record.properties.get(keys::EVENT),
        Some(&json!("malicious_cors:198.51.100.7,curl/8.5,evil.example"))
    );
}

#[test]
fn blank_app_id_is_rejected_before_any_log_call() {
    let sink = MemorySink::new();
    let result = SecurityLogger::new(Arc::new(sink.clone()), SecurityLogConfig::new("  "));
    assert!(result.is_err());
    assert!(sink.records().is_empty());
}
