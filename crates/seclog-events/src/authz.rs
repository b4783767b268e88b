//! Authorization events.

use crate::SecurityEvents;
use seclog_types::{SecurityEvent, SecurityMetadata};
use serde_json::Value;

impl SecurityEvents {
    /// `user_id` was denied access to `resource`.
    pub fn authz_fail(
        &self,
        template: &str,
        user_id: &str,
        resource: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::AuthzFail,
            &[Some(user_id), Some(resource)],
            template,
            metadata,
            format_args,
        );
    }

    /// Authorization for `user_id` changed from `from_role` to `to_role`.
    pub fn authz_change(
        &self,
        template: &str,
        user_id: &str,
        from_role: &str,
        to_role: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::AuthzChange,
            &[Some(user_id), Some(from_role), Some(to_role)],
            template,
            metadata,
            format_args,
        );
    }

    /// `user_id` performed the administrative action described by `detail`.
    pub fn authz_admin(
        &self,
        template: &str,
        user_id: &str,
        detail: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::AuthzAdmin,
            &[Some(user_id), Some(detail)],
            template,
            metadata,
            format_args,
        );
    }
}
