//! Terraform state file repository
//!
//! Reads a `terraform.tfstate` JSON document and hands its `outputs`
//! to the [`StateExtractor`].

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use serde_json::Value;

use crate::domain::entities::HostRecord;
use crate::domain::ports::{DeployEvent, DeployEventSink, HostRepository};
use crate::domain::services::StateExtractor;
use crate::domain::value_objects::TagFilter;
use crate::error::{TerramenaError, TerramenaResult};
use crate::infrastructure::events::TracingEventSink;

/// Host repository reading a Terraform state file from disk
///
/// Marked outputs that cannot be read as hosts are reported as warnings
/// and left out of the result.
pub struct TerraformStateRepository {
    path: PathBuf,
    extractor: StateExtractor,
    sink: Arc<dyn DeployEventSink>,
}

impl TerraformStateRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            extractor: StateExtractor::new(),
            sink: Arc::new(TracingEventSink),
        }
    }

    pub fn with_sink(mut self, sink: Arc<dyn DeployEventSink>) -> Self {
        self.sink = sink;
        self
    }

    fn read_document(&self) -> TerramenaResult<Value> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| TerramenaError::StateUnreadable {
                path: self.path.clone(),
                cause: Box::new(e),
            })?;

        serde_json::from_str(&content).map_err(|e| TerramenaError::StateUnreadable {
            path: self.path.clone(),
            cause: Box::new(e),
        })
    }
}

impl HostRepository for TerraformStateRepository {
    fn load_hosts(&self, tags: &TagFilter) -> TerramenaResult<Vec<HostRecord>> {
        let document = self.read_document()?;
        let extraction = self.extractor.extract_from_state(&document, tags);
        for skipped in &extraction.skipped {
            self.sink.on_event(DeployEvent::Warning {
                message: format!(
                    "skipping nixos host at {} in {}: {}",
                    skipped.path,
                    self.path.display(),
                    skipped.reason
                ),
            });
        }
        Ok(extraction.hosts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::deploy_events::testing::RecordingEventSink;
    use tempfile::tempdir;

    const STATE: &str = r#"{
        "version": 4,
        "outputs": {
            "dns": {
                "value": {"_type": "nixos_host", "hostname": "ns1", "ip": "10.0.0.53", "tags": ["dns"]},
                "type": "object"
            },
            "web": {
                "value": [
                    {"_type": "nixos_host", "hostname": "web1", "ip": "10.0.1.1", "tags": ["web"]},
                    {"_type": "nixos_host", "hostname": "web2", "ip": "10.0.1.2", "tags": ["web", "edge"]}
                ]
            }
        },
        "resources": []
    }"#;

    #[test]
    fn loads_hosts_in_document_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("terraform.tfstate");
        fs::write(&path, STATE).unwrap();

        let repo = TerraformStateRepository::new(&path);
        let hosts = repo.load_hosts(&TagFilter::all()).unwrap();

        let names: Vec<&str> = hosts.iter().map(|h| h.hostname()).collect();
        assert_eq!(names, ["ns1", "web1", "web2"]);
    }

    #[test]
    fn applies_tag_filter() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("terraform.tfstate");
        fs::write(&path, STATE).unwrap();

        let repo = TerraformStateRepository::new(&path);
        let hosts = repo.load_hosts(&TagFilter::new(["edge", "dns"])).unwrap();

        let names: Vec<&str> = hosts.iter().map(|h| h.hostname()).collect();
        assert_eq!(names, ["ns1", "web2"]);
    }

    #[test]
    fn missing_file_is_state_unreadable() {
        let dir = tempdir().unwrap();
        let repo = TerraformStateRepository::new(dir.path().join("absent.tfstate"));

        let err = repo.load_hosts(&TagFilter::all()).unwrap_err();
        assert!(matches!(err, TerramenaError::StateUnreadable { .. }));
        assert!(err.to_string().contains("absent.tfstate"));
    }

    #[test]
    fn invalid_json_is_state_unreadable() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("terraform.tfstate");
        fs::write(&path, "{ not json").unwrap();

        let err = TerraformStateRepository::new(&path)
            .load_hosts(&TagFilter::all())
            .unwrap_err();
        assert!(matches!(err, TerramenaError::StateUnreadable { .. }));
    }

    #[test]
    fn malformed_hosts_are_reported_as_warnings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("terraform.tfstate");
        fs::write(
            &path,
            r#"{"outputs": {
                "dns": {"value": [
                    {"_type": "nixos_host", "hostname": "ns1", "tags": ["dns"]},
                    {"_type": "nixos_host", "hostname": "ns2", "tags": ["dns", 7]}
                ]},
                "web": {"value": {"_type": "nixos_host", "hostname": "web1", "ip": 167772162}}
            }}"#,
        )
        .unwrap();
        let sink = RecordingEventSink::new();

        let hosts = TerraformStateRepository::new(&path)
            .with_sink(Arc::new(sink.clone()))
            .load_hosts(&TagFilter::all())
            .unwrap();

        let names: Vec<&str> = hosts.iter().map(|h| h.hostname()).collect();
        assert_eq!(names, ["ns1"]);

        let warnings: Vec<String> = sink
            .recorded()
            .into_iter()
            .filter_map(|event| match event {
                DeployEvent::Warning { message } => Some(message),
                _ => None,
            })
            .collect();
        assert_eq!(warnings.len(), 2, "{:?}", warnings);
        assert!(warnings[0].starts_with("skipping nixos host at outputs.dns.value[1] in "));
        assert!(warnings[0].contains("invalid type: integer `7`"));
        assert!(warnings[1].contains("outputs.web.value"));
        assert!(warnings[1].contains("terraform.tfstate"));
    }

    #[test]
    fn well_formed_state_emits_no_warnings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("terraform.tfstate");
        fs::write(&path, STATE).unwrap();
        let sink = RecordingEventSink::new();

        TerraformStateRepository::new(&path)
            .with_sink(Arc::new(sink.clone()))
            .load_hosts(&TagFilter::all())
            .unwrap();

        assert!(sink.recorded().is_empty());
    }
}
