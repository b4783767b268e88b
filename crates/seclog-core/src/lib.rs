//! Event label construction and dispatch core for seclog.
//!
//! This crate turns a named security event plus its call-site arguments
//! into a deterministic label and a structured property bag, then forwards
//! both to a pluggable structured-logger sink. It includes:
//!
//! - The pure label builder (`name` or `name:arg1,arg2,...`)
//! - Metadata enrichment into an ordered property bag
//! - The `EventSink` collaborator trait with a tracing-backed implementation
//! - The dispatch facade bound to an application identifier

mod config;
mod enrich;
mod error;
mod label;
mod logger;
mod properties;
mod sink;
mod tracing_sink;

pub use config::SecurityLogConfig;
pub use enrich::populate_properties;
pub use error::{Error, Result};
pub use label::build_label;
pub use logger::{emit_with, SecurityLogger};
pub use properties::{keys, PropertyBag};
pub use sink::{EventSink, ScopeGuard};
pub use tracing_sink::TracingSink;
