//! Cryptographic failure events.

use crate::SecurityEvents;
use seclog_types::{SecurityEvent, SecurityMetadata};
use serde_json::Value;

impl SecurityEvents {
    /// Decryption failed for data belonging to `user_id`.
    pub fn crypt_decrypt_fail(
        &self,
        template: &str,
        user_id: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::CryptDecryptFail,
            &[Some(user_id)],
            template,
            metadata,
            format_args,
        );
    }

    /// Encryption failed for data belonging to `user_id`.
    pub fn crypt_encrypt_fail(
        &self,
        template: &str,
        user_id: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::CryptEncryptFail,
            &[Some(user_id)],
            template,
            metadata,
            format_args,
        );
    }
}
