//! Session lifecycle events.

use crate::SecurityEvents;
use seclog_types::{SecurityEvent, SecurityMetadata};
use serde_json::Value;

impl SecurityEvents {
    /// Session created for `user_id`.
    pub fn session_created(
        &self,
        template: &str,
        user_id: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::SessionCreated,
            &[Some(user_id)],
            template,
            metadata,
            format_args,
        );
    }

    /// Session renewed for `user_id`.
    pub fn session_renewed(
        &self,
        template: &str,
        user_id: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::SessionRenewed,
            &[Some(user_id)],
            template,
            metadata,
            format_args,
        );
    }

    /// Session for `user_id` expired for `reason`.
    pub fn session_expired(
        &self,
        template: &str,
        user_id: &str,
        reason: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::SessionExpired,
            &[Some(user_id), Some(reason)],
            template,
            metadata,
            format_args,
        );
    }

    /// `user_id` presented a session that had already expired.
    pub fn session_use_after_expire(
        &self,
        template: &str,
        user_id: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::SessionUseAfterExpire,
            &[Some(user_id)],
            template,
            metadata,
            format_args,
        );
    }
}
