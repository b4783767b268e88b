//! User management events.

use crate::SecurityEvents;
use seclog_types::{SecurityEvent, SecurityMetadata};
use serde_json::Value;

impl SecurityEvents {
    /// `user_id` created `new_user_id` with the given attributes.
    pub fn user_created(
        &self,
        template: &str,
        user_id: &str,
        new_user_id: &str,
        attributes: &[&str],
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        let mut label_args: Vec<Option<&str>> = vec![Some(user_id), Some(new_user_id)];
        label_args.extend(attributes.iter().map(|a| Some(*a)));
        self.dispatch(
            SecurityEvent::UserCreated,
            &label_args,
            template,
            metadata,
            format_args,
        );
    }

    /// `user_id` updated `on_user_id` with the given attributes.
    pub fn user_updated(
        &self,
        template: &str,
        user_id: &str,
        on_user_id: &str,
        attributes: &[&str],
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        let mut label_args: Vec<Option<&str>> = vec![Some(user_id), Some(on_user_id)];
        label_args.extend(attributes.iter().map(|a| Some(*a)));
        self.dispatch(
            SecurityEvent::UserUpdated,
            &label_args,
            template,
            metadata,
            format_args,
        );
    }

    /// `user_id` archived `on_user_id`.
    pub fn user_archived(
        &self,
        template: &str,
        user_id: &str,
        on_user_id: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::UserArchived,
            &[Some(user_id), Some(on_user_id)],
            template,
            metadata,
            format_args,
        );
    }

    /// `user_id` deleted `on_user_id`.
    pub fn user_deleted(
        &self,
        template: &str,
        user_id: &str,
        on_user_id: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::UserDeleted,
            &[Some(user_id), Some(on_user_id)],
            template,
            metadata,
            format_args,
        );
    }
}
