//! Ordered property bag attached to emitted log records.

use indexmap::IndexMap;
use serde_json::Value;
use std::fmt;

/// Well-known property names used in emitted bags.
pub mod keys {
    /// Application identifier, present on every record.
    pub const APP_ID: &str = "AppId";
    /// Event label, present on every record.
    pub const EVENT: &str = "Event";

    /// Client user agent.
    pub const USER_AGENT: &str = "UserAgent";
    /// Originating IP address.
    pub const SOURCE_IP: &str = "SourceIp";
    /// Serving host IP address.
    pub const HOST_IP: &str = "HostIp";
    /// Serving host name.
    pub const HOSTNAME: &str = "Hostname";
    /// Request protocol.
    pub const PROTOCOL: &str = "Protocol";
    /// Request port.
    pub const PORT: &str = "Port";
    /// Request URI.
    pub const REQUEST_URI: &str = "RequestUri";
    /// Request method.
    pub const REQUEST_METHOD: &str = "RequestMethod";
    /// Deployment region.
    pub const REGION: &str = "Region";
    /// Client geolocation.
    pub const GEO: &str = "Geo";
}

/// An insertion-ordered mapping from property name to value.
///
/// Built fresh per log call and handed to the sink as the record's scoped
/// context. Never shared across calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyBag {
    entries: IndexMap<String, Value>,
}

impl PropertyBag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a property, replacing any existing value under the same name.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Look up a property by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Check whether a property is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate properties in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the bag is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for PropertyBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, value) in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{key}={value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut bag = PropertyBag::new();
        bag.insert("b", "2");
        bag.insert("a", "1");
        bag.insert("c", "3");
        let names: Vec<_> = bag.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut bag = PropertyBag::new();
        bag.insert("a", "1");
        bag.insert("b", "2");
        bag.insert("a", "3");
        assert_eq!(bag.len(), 2);
        assert_eq!(bag.get("a"), Some(&Value::from("3")));
        let names: Vec<_> = bag.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_display_lists_pairs() {
        let mut bag = PropertyBag::new();
        bag.insert(keys::APP_ID, "app");
        bag.insert(keys::EVENT, "authn_login_success:u1");
        assert_eq!(
            bag.to_string(),
            "AppId=\"app\", Event=\"authn_login_success:u1\""
        );
    }
}
