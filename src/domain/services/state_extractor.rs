//! State Extractor Domain Service
//!
//! Finds NixOS hosts inside Terraform output. Output values can nest
//! arbitrarily, so the whole tree is walked depth-first and every mapping
//! carrying `_type: nixos_host` becomes a [`HostRecord`].

use serde_json::Value;

use crate::domain::entities::HostRecord;
use crate::domain::value_objects::TagFilter;

/// Name of the state document field holding Terraform outputs
pub const OUTPUTS_KEY: &str = "outputs";

/// A marked mapping that could not be read as a host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedHost {
    /// Location in the state document, e.g. `outputs.dns.value[1]`
    pub path: String,
    pub reason: String,
}

/// Hosts found in an outputs tree, plus the marked nodes that were skipped
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub hosts: Vec<HostRecord>,
    pub skipped: Vec<SkippedHost>,
}

/// Extracts host records from a parsed Terraform state document
#[derive(Debug, Default, Clone, Copy)]
pub struct StateExtractor;

impl StateExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract hosts from a full state document (rooted above `outputs`).
    pub fn extract_from_state(&self, state: &Value, tags: &TagFilter) -> Extraction {
        match state.get(OUTPUTS_KEY) {
            Some(outputs) => self.extract(outputs, tags),
            None => Extraction::default(),
        }
    }

    /// Extract hosts from an outputs tree, in traversal order.
    ///
    /// The tag filter applies to hosts only. Skipped nodes are always
    /// reported since their tags could not be read.
    pub fn extract(&self, outputs: &Value, tags: &TagFilter) -> Extraction {
        let mut extraction = Extraction::default();
        collect_hosts(outputs, OUTPUTS_KEY.to_string(), &mut extraction);
        extraction.hosts.retain(|host| tags.matches(host));
        extraction
    }
}

/// Depth-first walk: a marked mapping is recorded before its children, and
/// the walk keeps descending into it. Nested host records are therefore
/// collected too.
fn collect_hosts(node: &Value, path: String, found: &mut Extraction) {
    match node {
        Value::Object(map) => {
            match HostRecord::from_node(map) {
                Some(Ok(host)) => found.hosts.push(host),
                Some(Err(err)) => found.skipped.push(SkippedHost {
                    path: path.clone(),
                    reason: err.to_string(),
                }),
                None => {}
            }
            for (key, value) in map {
                collect_hosts(value, format!("{}.{}", path, key), found);
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                collect_hosts(item, format!("{}[{}]", path, index), found);
            }
        }
        _ => {}
    }
}
