//! Rate limiting events.

use crate::SecurityEvents;
use seclog_types::{SecurityEvent, SecurityMetadata};
use serde_json::Value;

impl SecurityEvents {
    /// `user_id` exceeded the rate limit `max`.
    pub fn excess_rate_limit_exceeded(
        &self,
        template: &str,
        user_id: &str,
        max: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::ExcessRateLimitExceeded,
            &[Some(user_id), Some(max)],
            template,
            metadata,
            format_args,
        );
    }
}
