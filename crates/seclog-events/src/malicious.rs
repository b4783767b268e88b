//! Malicious activity events.
//!
//! The first argument is whichever identity is available at the call
//! site: a user id for authenticated traffic, otherwise the client IP.

use crate::SecurityEvents;
use seclog_types::{SecurityEvent, SecurityMetadata};
use serde_json::Value;

impl SecurityEvents {
    /// Excessive 404 responses generated by `user_or_ip`.
    pub fn malicious_excess_404(
        &self,
        template: &str,
        user_or_ip: &str,
        user_agent: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::MaliciousExcess404,
            &[Some(user_or_ip), Some(user_agent)],
            template,
            metadata,
            format_args,
        );
    }

    /// Unexpected input `input_name` submitted by `user_or_ip`.
    pub fn malicious_extraneous(
        &self,
        template: &str,
        user_or_ip: &str,
        input_name: &str,
        user_agent: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::MaliciousExtraneous,
            &[Some(user_or_ip), Some(input_name), Some(user_agent)],
            template,
            metadata,
            format_args,
        );
    }

    /// Known attack tool `tool_name` detected for `user_or_ip`.
    pub fn malicious_attack_tool(
        &self,
        template: &str,
        user_or_ip: &str,
        tool_name: &str,
        user_agent: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::MaliciousAttackTool,
            &[Some(user_or_ip), Some(tool_name), Some(user_agent)],
            template,
            metadata,
            format_args,
        );
    }

    /// Cross-origin request from an unexpected `referer`.
    pub fn malicious_cors(
        &self,
        template: &str,
        user_or_ip: &str,
        user_agent: &str,
        referer: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::MaliciousCors,
            &[Some(user_or_ip), Some(user_agent), Some(referer)],
            template,
            metadata,
            format_args,
        );
    }

    /// Direct object reference attempt by `user_or_ip`.
    pub fn malicious_direct_reference(
        &self,
        template: &str,
        user_or_ip: &str,
        user_agent: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::MaliciousDirectReference,
            &[Some(user_or_ip), Some(user_agent)],
            template,
            metadata,
            format_args,
        );
    }
}
