//! Optional request/network metadata attached to security events.

use serde::{Deserialize, Serialize};

/// Contextual metadata for a security event.
///
/// Every field is independently optional; an absent field is omitted from
/// the emitted property bag rather than logged as empty. Constructed fresh
/// per call site and consumed immediately by the enricher.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityMetadata {
    /// Client user agent string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Originating IP address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_ip: Option<String>,
    /// IP address of the serving host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_ip: Option<String>,
    /// Name of the serving host.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Request protocol (e.g. https).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    /// Request port.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    /// Request URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_uri: Option<String>,
    /// Request method (e.g. GET).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_method: Option<String>,
    /// Deployment region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Geolocation of the client.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geo: Option<String>,
}

impl SecurityMetadata {
    /// Create an all-absent metadata record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user agent.
    pub fn with_user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set the source IP address.
    pub fn with_source_ip(mut self, ip: impl Into<String>) -> Self {
        self.source_ip = Some(ip.into());
        self
    }

    /// Set the host IP address.
    pub fn with_host_ip(mut self, ip: impl Into<String>) -> Self {
        self.host_ip = Some(ip.into());
        self
    }

    /// Set the hostname.
    pub fn with_hostname(mut self, name: impl Into<String>) -> Self {
        self.hostname = Some(name.into());
        self
    }

    /// Set the protocol.
    pub fn with_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    /// Set the port.
    pub fn with_port(mut self, port: impl Into<String>) -> Self {
        self.port = Some(port.into());
        self
    }

    /// Set the request URI.
    pub fn with_request_uri(mut self, uri: impl Into<String>) -> Self {
        self.request_uri = Some(uri.into());
        self
    }

    /// Set the request method.
    pub fn with_request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    /// Set the region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the geolocation.
    pub fn with_geo(mut self, geo: impl Into<String>) -> Self {
        self.geo = Some(geo.into());
        self
    }

    /// Check whether every field is absent.
    pub fn is_empty(&self) -> bool {
        self.user_agent.is_none()
            && self.source_ip.is_none()
            && self.host_ip.is_none()
            && self.hostname.is_none()
            && self.protocol.is_none()
            && self.port.is_none()
            && self.request_uri.is_none()
            && self.request_method.is_none()
            && self.region.is_none()
            && self.geo.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(SecurityMetadata::new().is_empty());
    }

    #[test]
    fn test_builder_setters() {
        let meta = SecurityMetadata::new()
            .with_source_ip("10.0.0.1")
            .with_region("eu-west-1");
        assert_eq!(meta.source_ip.as_deref(), Some("10.0.0.1"));
        assert_eq!(meta.region.as_deref(), Some("eu-west-1"));
        assert!(meta.user_agent.is_none());
        assert!(!meta.is_empty());
    }

    #[test]
    fn test_serde_skips_absent_fields() {
        let meta = SecurityMetadata::new().with_hostname("api-1");
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json, serde_json::json!({ "hostname": "api-1" }));
    }
}
