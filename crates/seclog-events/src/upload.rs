//! File upload events.

use crate::SecurityEvents;
use seclog_types::{SecurityEvent, SecurityMetadata, Severity};
use serde_json::Value;

impl SecurityEvents {
    /// `user_id` finished uploading `filename` of `content_type`.
    pub fn upload_complete(
        &self,
        template: &str,
        user_id: &str,
        filename: &str,
        content_type: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::UploadComplete,
            &[Some(user_id), Some(filename), Some(content_type)],
            template,
            metadata,
            format_args,
        );
    }

    /// Uploaded `filename` moved from `from` to its stored location `to`.
    pub fn upload_stored(
        &self,
        template: &str,
        filename: &str,
        from: &str,
        to: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::UploadStored,
            &[Some(filename), Some(from), Some(to)],
            template,
            metadata,
            format_args,
        );
    }

    /// `user_id` deleted the uploaded file `file_id`.
    pub fn upload_delete(
        &self,
        template: &str,
        user_id: &str,
        file_id: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::UploadDelete,
            &[Some(user_id), Some(file_id)],
            template,
            metadata,
            format_args,
        );
    }

    /// Validation of `filename` by `scanner` ended with `result`.
    ///
    /// The only wrapper whose severity comes from the caller: a failed
    /// virus scan and a passed one share the event kind but not the level.
    pub fn upload_validation(
        &self,
        template: &str,
        filename: &str,
        scanner: &str,
        result: &str,
        level: Severity,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch_at(
            SecurityEvent::UploadValidation,
            level,
            &[Some(filename), Some(scanner), Some(result)],
            template,
            metadata,
            format_args,
        );
    }
}
