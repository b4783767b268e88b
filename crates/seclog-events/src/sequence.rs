//! Business-flow sequencing events.

use crate::SecurityEvents;
use seclog_types::{SecurityEvent, SecurityMetadata};
use serde_json::Value;

impl SecurityEvents {
    /// `user_id` performed flow steps out of their expected order.
    pub fn sequence_fail(
        &self,
        template: &str,
        user_id: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::SequenceFail,
            &[Some(user_id)],
            template,
            metadata,
            format_args,
        );
    }
}
