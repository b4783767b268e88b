//! Privilege change events.

use crate::SecurityEvents;
use seclog_types::{SecurityEvent, SecurityMetadata};
use serde_json::Value;

impl SecurityEvents {
    /// Permissions on `object` changed by `user_id` from `from_level` to `to_level`.
    pub fn privilege_permissions_changed(
        &self,
        template: &str,
        user_id: &str,
        object: &str,
        from_level: &str,
        to_level: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::PrivilegePermissionsChanged,
            &[Some(user_id), Some(object), Some(from_level), Some(to_level)],
            template,
            metadata,
            format_args,
        );
    }
}
