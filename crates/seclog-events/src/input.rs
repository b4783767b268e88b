//! Input validation events.

use crate::SecurityEvents;
use seclog_types::{SecurityEvent, SecurityMetadata};
use serde_json::Value;

impl SecurityEvents {
    /// Validation failed for one or more `fields` submitted by `user_id`.
    pub fn input_validation_fail(
        &self,
        template: &str,
        fields: &[&str],
        user_id: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        let mut label_args: Vec<Option<&str>> = fields.iter().map(|f| Some(*f)).collect();
        label_args.push(Some(user_id));
        self.dispatch(
            SecurityEvent::InputValidationFail,
            &label_args,
            template,
            metadata,
            format_args,
        );
    }

    /// Validation failed for a single discrete `field` submitted by `user_id`.
    pub fn input_validation_discrete_fail(
        &self,
        template: &str,
        field: &str,
        user_id: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::InputValidationDiscreteFail,
            &[Some(field), Some(user_id)],
            template,
            metadata,
            format_args,
        );
    }
}
