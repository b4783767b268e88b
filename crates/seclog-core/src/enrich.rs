//! Metadata enrichment of the property bag.

use crate::properties::{keys, PropertyBag};
use seclog_types::SecurityMetadata;

/// Merge security metadata into a property bag.
///
/// Fields are visited in a fixed canonical order; each present, non-blank
/// field is inserted under its fixed property name, everything else is
/// skipped. Keys outside the ten metadata names are never touched, so
/// pre-populated entries like the application id and event label survive
/// untouched. Absent metadata is a no-op.
pub fn populate_properties(bag: &mut PropertyBag, metadata: Option<&SecurityMetadata>) {
    let Some(meta) = metadata else {
        return;
    };

    let fields: [(&str, Option<&String>); 10] = [
        (keys::USER_AGENT, meta.user_agent.as_ref()),
        (keys::SOURCE_IP, meta.source_ip.as_ref()),
        (keys::HOST_IP, meta.host_ip.as_ref()),
        (keys::HOSTNAME, meta.hostname.as_ref()),
        (keys::PROTOCOL, meta.protocol.as_ref()),
        (keys::PORT, meta.port.as_ref()),
        (keys::REQUEST_URI, meta.request_uri.as_ref()),
        (keys::REQUEST_METHOD, meta.request_method.as_ref()),
        (keys::REGION, meta.region.as_ref()),
        (keys::GEO, meta.geo.as_ref()),
    ];

    for (key, value) in fields {
        if let Some(value) = value {
            if !value.trim().is_empty() {
                bag.insert(key, value.as_str());
            }
        }
    }
}
