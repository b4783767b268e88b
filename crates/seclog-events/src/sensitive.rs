//! Sensitive data access events.

use crate::SecurityEvents;
use seclog_types::{SecurityEvent, SecurityMetadata};
use serde_json::Value;

impl SecurityEvents {
    /// `user_id` created the sensitive `object`.
    pub fn sensitive_create(
        &self,
        template: &str,
        user_id: &str,
        object: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::SensitiveCreate,
            &[Some(user_id), Some(object)],
            template,
            metadata,
            format_args,
        );
    }

    /// `user_id` read the sensitive `object`.
    pub fn sensitive_read(
        &self,
        template: &str,
        user_id: &str,
        object: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::SensitiveRead,
            &[Some(user_id), Some(object)],
            template,
            metadata,
            format_args,
        );
    }

    /// `user_id` updated the sensitive `object`.
    pub fn sensitive_update(
        &self,
        template: &str,
        user_id: &str,
        object: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::SensitiveUpdate,
            &[Some(user_id), Some(object)],
            template,
            metadata,
            format_args,
        );
    }

    /// `user_id` deleted the sensitive `object`.
    pub fn sensitive_delete(
        &self,
        template: &str,
        user_id: &str,
        object: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::SensitiveDelete,
            &[Some(user_id), Some(object)],
            template,
            metadata,
            format_args,
        );
    }
}
