//! Authentication events.

use crate::{append_args, SecurityEvents};
use seclog_types::{SecurityEvent, SecurityMetadata};
use serde_json::Value;

impl SecurityEvents {
    /// Successful login for `user_id`.
    pub fn authn_login_success(
        &self,
        template: &str,
        user_id: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::AuthnLoginSuccess,
            &[Some(user_id)],
            template,
            metadata,
            format_args,
        );
    }

    /// Failed login attempt for `user_id`.
    ///
    /// The user id is also appended to the forwarded format args.
    pub fn authn_login_fail(
        &self,
        template: &str,
        user_id: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::AuthnLoginFail,
            &[Some(user_id)],
            template,
            metadata,
            &append_args(format_args, &[user_id]),
        );
    }

    /// Login failures for `user_id` reached the `max_limit` threshold.
    pub fn authn_login_fail_max(
        &self,
        template: &str,
        user_id: &str,
        max_limit: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::AuthnLoginFailMax,
            &[Some(user_id), Some(max_limit)],
            template,
            metadata,
            &append_args(format_args, &[user_id, max_limit]),
        );
    }

    /// Account for `user_id` locked for `reason`.
    pub fn authn_login_lock(
        &self,
        template: &str,
        user_id: &str,
        reason: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::AuthnLoginLock,
            &[Some(user_id), Some(reason)],
            template,
            metadata,
            &append_args(format_args, &[user_id, reason]),
        );
    }

    /// Password changed for `user_id`.
    pub fn authn_password_change(
        &self,
        template: &str,
        user_id: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::AuthnPasswordChange,
            &[Some(user_id)],
            template,
            metadata,
            format_args,
        );
    }

    /// Password change failed for `user_id`.
    pub fn authn_password_change_fail(
        &self,
        template: &str,
        user_id: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::AuthnPasswordChangeFail,
            &[Some(user_id)],
            template,
            metadata,
            format_args,
        );
    }

    /// `user_id` appeared in `region1` and `region2` implausibly fast.
    pub fn authn_impossible_travel(
        &self,
        template: &str,
        user_id: &str,
        region1: &str,
        region2: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::AuthnImpossibleTravel,
            &[Some(user_id), Some(region1), Some(region2)],
            template,
            metadata,
            format_args,
        );
    }

    /// Token created for `user_id` with the given entitlements.
    pub fn authn_token_created(
        &self,
        template: &str,
        user_id: &str,
        entitlements: &[&str],
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        let mut label_args: Vec<Option<&str>> = vec![Some(user_id)];
        label_args.extend(entitlements.iter().map(|e| Some(*e)));
        self.dispatch(
            SecurityEvent::AuthnTokenCreated,
            &label_args,
            template,
            metadata,
            format_args,
        );
    }

    /// Token `token_id` revoked for `user_id`.
    pub fn authn_token_revoked(
        &self,
        template: &str,
        user_id: &str,
        token_id: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::AuthnTokenRevoked,
            &[Some(user_id), Some(token_id)],
            template,
            metadata,
            format_args,
        );
    }

    /// Revoked token `token_id` presented again for `user_id`.
    pub fn authn_token_reuse(
        &self,
        template: &str,
        user_id: &str,
        token_id: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::AuthnTokenReuse,
            &[Some(user_id), Some(token_id)],
            template,
            metadata,
            format_args,
        );
    }

    /// Token deleted for the application `token_app_id`.
    pub fn authn_token_delete(
        &self,
        template: &str,
        token_app_id: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::AuthnTokenDelete,
            &[Some(token_app_id)],
            template,
            metadata,
            format_args,
        );
    }
}
