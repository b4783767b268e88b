//! The security event vocabulary.

use crate::Severity;
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::EnumIter;

/// A security event kind.
///
/// Each kind carries a canonical identifier used as the event label prefix
/// and a default severity. The table is fixed at compile time; call sites
/// never extend it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum SecurityEvent {
    // Authentication
    AuthnLoginSuccess,
    AuthnLoginFail,
    AuthnLoginFailMax,
    AuthnLoginLock,
    AuthnPasswordChange,
    AuthnPasswordChangeFail,
    AuthnImpossibleTravel,
    AuthnTokenCreated,
    AuthnTokenRevoked,
    AuthnTokenReuse,
    AuthnTokenDelete,

    // Authorization
    AuthzFail,
    AuthzChange,
    AuthzAdmin,

    // Cryptography
    CryptDecryptFail,
    CryptEncryptFail,

    // Rate limiting
    ExcessRateLimitExceeded,

    // Input validation
    InputValidationFail,
    InputValidationDiscreteFail,

    // Malicious activity
    MaliciousExcess404,
    MaliciousExtraneous,
    MaliciousAttackTool,
    MaliciousCors,
    MaliciousDirectReference,

    // Privilege changes
    PrivilegePermissionsChanged,

    // Sensitive data access
    SensitiveCreate,
    SensitiveRead,
    SensitiveUpdate,
    SensitiveDelete,

    // Sequencing
    SequenceFail,

    // Sessions
    SessionCreated,
    SessionRenewed,
    SessionExpired,
    SessionUseAfterExpire,

    // System lifecycle
    SysStartup,
    SysShutdown,
    SysRestart,
    SysCrash,
    SysMonitorDisabled,
    SysMonitorEnabled,

    // File uploads
    UploadComplete,
    UploadStored,
    UploadDelete,
    UploadValidation,

    // User management
    UserCreated,
    UserUpdated,
    UserArchived,
    UserDeleted,
}

impl SecurityEvent {
    /// Canonical event identifier, used as the label prefix.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AuthnLoginSuccess => "authn_login_success",
            Self::AuthnLoginFail => "authn_login_fail",
            Self::AuthnLoginFailMax => "authn_login_fail_max",
            Self::AuthnLoginLock => "authn_login_lock",
            Self::AuthnPasswordChange => "authn_password_change",
            Self::AuthnPasswordChangeFail => "authn_password_change_fail",
            Self::AuthnImpossibleTravel => "authn_impossible_travel",
            Self::AuthnTokenCreated => "authn_token_created",
            Self::AuthnTokenRevoked => "authn_token_revoked",
            Self::AuthnTokenReuse => "authn_token_reuse",
            Self::AuthnTokenDelete => "authn_token_delete",
            Self::AuthzFail => "authz_fail",
            Self::AuthzChange => "authz_change",
            Self::AuthzAdmin => "authz_admin",
            Self::CryptDecryptFail => "crypt_decrypt_fail",
            Self::CryptEncryptFail => "crypt_encrypt_fail",
            Self::ExcessRateLimitExceeded => "excess_rate_limit_exceeded",
            Self::InputValidationFail => "input_validation_fail",
            Self::InputValidationDiscreteFail => "input_validation_discrete_fail",
            Self::MaliciousExcess404 => "malicious_excess_404",
            Self::MaliciousExtraneous => "malicious_extraneous",
            Self::MaliciousAttackTool => "malicious_attack_tool",
            Self::MaliciousCors => "malicious_cors",
            Self::MaliciousDirectReference => "malicious_direct_reference",
            Self::PrivilegePermissionsChanged => "privilege_permissions_changed",
            Self::SensitiveCreate => "sensitive_create",
            Self::SensitiveRead => "sensitive_read",
            Self::SensitiveUpdate => "sensitive_update",
            Self::SensitiveDelete => "sensitive_delete",
            Self::SequenceFail => "sequence_fail",
            Self::SessionCreated => "session_created",
            Self::SessionRenewed => "session_renewed",
            Self::SessionExpired => "session_expired",
            Self::SessionUseAfterExpire => "session_use_after_expire",
            Self::SysStartup => "sys_startup",
            Self::SysShutdown => "sys_shutdown",
            Self::SysRestart => "sys_restart",
            Self::SysCrash => "sys_crash",
            Self::SysMonitorDisabled => "sys_monitor_disabled",
            Self::SysMonitorEnabled => "sys_monitor_enabled",
            Self::UploadComplete => "upload_complete",
            Self::UploadStored => "upload_stored",
            Self::UploadDelete => "upload_delete",
            Self::UploadValidation => "upload_validation",
            Self::UserCreated => "user_created",
            Self::UserUpdated => "user_updated",
            Self::UserArchived => "user_archived",
            Self::UserDeleted => "user_deleted",
        }
    }

    /// Get the default severity for this event kind.
    ///
    /// `UploadValidation` is the one kind whose wrapper takes an explicit
    /// severity from the caller; its entry here is only a fallback.
    pub fn default_severity(&self) -> Severity {
        match self {
            // Critical
            Self::AuthnPasswordChangeFail
            | Self::AuthnImpossibleTravel
            | Self::AuthnTokenReuse
            | Self::AuthzFail
            | Self::MaliciousExtraneous
            | Self::MaliciousAttackTool
            | Self::MaliciousCors
            | Self::MaliciousDirectReference
            | Self::SequenceFail
            | Self::SessionUseAfterExpire => Severity::Critical,

            // Info
            Self::AuthnLoginSuccess
            | Self::AuthnPasswordChange
            | Self::AuthnTokenCreated
            | Self::AuthnTokenRevoked
            | Self::SessionCreated
            | Self::SessionRenewed
            | Self::SessionExpired
            | Self::UploadComplete
            | Self::UploadStored
            | Self::UploadDelete
            | Self::UploadValidation => Severity::Info,

            // Warning (default for the rest of the table)
            _ => Severity::Warning,
        }
    }

    /// Get all event kinds.
    pub fn all() -> impl Iterator<Item = Self> {
        use strum::IntoEnumIterator;
        Self::iter()
    }
}

impl fmt::Display for SecurityEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
