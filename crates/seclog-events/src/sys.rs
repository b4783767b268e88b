//! System lifecycle events.

use crate::SecurityEvents;
use seclog_types::{SecurityEvent, SecurityMetadata};
use serde_json::Value;

impl SecurityEvents {
    /// System started by `user_id`.
    pub fn sys_startup(
        &self,
        template: &str,
        user_id: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::SysStartup,
            &[Some(user_id)],
            template,
            metadata,
            format_args,
        );
    }

    /// System shut down by `user_id`.
    pub fn sys_shutdown(
        &self,
        template: &str,
        user_id: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::SysShutdown,
            &[Some(user_id)],
            template,
            metadata,
            format_args,
        );
    }

    /// System restarted by `user_id`.
    pub fn sys_restart(
        &self,
        template: &str,
        user_id: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::SysRestart,
            &[Some(user_id)],
            template,
            metadata,
            format_args,
        );
    }

    /// System crashed for `reason`.
    pub fn sys_crash(
        &self,
        template: &str,
        reason: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::SysCrash,
            &[Some(reason)],
            template,
            metadata,
            format_args,
        );
    }

    /// `user_id` disabled the monitoring agent `monitor`.
    pub fn sys_monitor_disabled(
        &self,
        template: &str,
        user_id: &str,
        monitor: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::SysMonitorDisabled,
            &[Some(user_id), Some(monitor)],
            template,
            metadata,
            format_args,
        );
    }

    /// `user_id` enabled the monitoring agent `monitor`.
    pub fn sys_monitor_enabled(
        &self,
        template: &str,
        user_id: &str,
        monitor: &str,
        format_args: &[Value],
        metadata: Option<&SecurityMetadata>,
    ) {
        self.dispatch(
            SecurityEvent::SysMonitorEnabled,
            &[Some(user_id), Some(monitor)],
            template,
            metadata,
            format_args,
        );
    }
}
