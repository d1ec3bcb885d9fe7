//! Host Entity
//!
//! Typed view of one NixOS machine discovered in Terraform output.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key that marks a Terraform output node as a NixOS host
pub const HOST_TYPE_KEY: &str = "_type";

/// Marker value identifying a NixOS host node
pub const HOST_TYPE_VALUE: &str = "nixos_host";

/// A machine discovered in provisioning output
///
/// `hostname`, `ip` and `tags` are typed; every other key the provisioning
/// tool emitted lives in `extra` and is written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostRecord {
    hostname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tags: Option<Vec<String>>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl HostRecord {
    pub fn new(hostname: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            ip: None,
            tags: None,
            extra: Map::new(),
        }
    }

    pub fn with_ip(mut self, ip: impl Into<String>) -> Self {
        self.ip = Some(ip.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Build a record from a marked output node.
    ///
    /// Returns `None` when the node is not marked as a NixOS host, and an
    /// error when it is marked but its typed fields have the wrong shape.
    /// The marker key is dropped, as are keys holding `null`.
    pub fn from_node(node: &Map<String, Value>) -> Option<serde_json::Result<Self>> {
        if !is_host_node(node) {
            return None;
        }

        let attributes: Map<String, Value> = node
            .iter()
            .filter(|(k, v)| k.as_str() != HOST_TYPE_KEY && !v.is_null())
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Some(serde_json::from_value(Value::Object(attributes)))
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn ip(&self) -> Option<&str> {
        self.ip.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }

    /// Attributes that have no dedicated field
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    pub fn has_any_tag(&self, wanted: &[String]) -> bool {
        self.tags().iter().any(|t| wanted.contains(t))
    }

    /// One-line summary used by host listings
    pub fn short_summary(&self) -> String {
        format!(
            "Hostname: {} \t tags: {} \t ip: {}",
            self.hostname,
            self.tags().join(", "),
            self.ip.as_deref().unwrap_or("")
        )
    }
}

/// Whether a mapping carries the exact `_type: nixos_host` marker pair
fn is_host_node(node: &Map<String, Value>) -> bool {
    node.get(HOST_TYPE_KEY).and_then(Value::as_str) == Some(HOST_TYPE_VALUE)
}

impl fmt::Display for HostRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hostname: {}", self.hostname)?;
        if let Some(ip) = &self.ip {
            write!(f, ", Ip: {}", ip)?;
        }
        if let Some(tags) = &self.tags {
            write!(f, ", Tags: [{}]", tags.join(", "))?;
        }
        for (key, value) in &self.extra {
            write!(f, ", {}: {}", capitalize(key), value)?;
        }
        Ok(())
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
