//! Security event vocabulary for seclog.
//!
//! This crate defines the fixed taxonomy shared by the rest of the
//! workspace:
//!
//! - Severity levels for emitted events
//! - The event-kind enumeration with canonical names and default severities
//! - The optional request/network metadata record

mod event;
mod metadata;
mod severity;

pub use event::SecurityEvent;
pub use metadata::SecurityMetadata;
pub use severity::Severity;
