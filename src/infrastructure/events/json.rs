//! JSON Event Sink
//!
//! Outputs deploy events as NDJSON for CI/automation consumption.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use crate::infrastructure::process;
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl DeployEventSink for JsonEventSink {
    fn on_event(&self, event: DeployEvent) {
        let json = match event {
            DeployEvent::WorkspaceCreated { path } => serde_json::json!({
                "event": "workspace_created",
                "command": "deploy",
                "path": path.display().to_string(),
            }),

            DeployEvent::PathCopied {
                source,
                destination,
            } => serde_json::json!({
                "event": "path_copied",
                "command": "deploy",
                "source": source.display().to_string(),
                "destination": destination.display().to_string(),
            }),

            DeployEvent::TemplateResolved { path } => serde_json::json!({
                "event": "template_resolved",
                "command": "deploy",
                "path": path.display().to_string(),
            }),

            DeployEvent::HostsDiscovered { hosts } => serde_json::json!({
                "event": "hosts_discovered",
                "command": "deploy",
                "count": hosts.len(),
                "hosts": hosts,
            }),

            DeployEvent::BuildStarted { command } => serde_json::json!({
                "event": "build_start",
                "command": "deploy",
                "exec": command,
            }),

            DeployEvent::ArtifactBuilt { path } => serde_json::json!({
                "event": "build_complete",
                "command": "deploy",
                "artifact": path.display().to_string(),
            }),

            DeployEvent::DeployStarted { command, env } => {
                let env: serde_json::Map<String, serde_json::Value> = env
                    .into_iter()
                    .map(|(k, v)| (k, serde_json::Value::String(v)))
                    .collect();
                serde_json::json!({
                    "event": "deploy_start",
                    "command": "deploy",
                    "exec": command,
                    "env": env,
                })
            }

            DeployEvent::SignalForwarded { pid } => serde_json::json!({
                "event": "signal_forwarded",
                "command": "deploy",
                "pid": pid,
                "signal": process::FORWARDED_SIGNAL,
            }),

            DeployEvent::DeployFinished { code, success } => {
                let status = if success { "success" } else { "failed" };
                serde_json::json!({
                    "event": "complete",
                    "command": "deploy",
                    "status": status,
                    "exit_code": code,
                })
            }

            DeployEvent::WorkspaceRemoved { path } => serde_json::json!({
                "event": "workspace_removed",
                "command": "deploy",
                "path": path.display().to_string(),
            }),

            DeployEvent::Warning { message } => serde_json::json!({
                "event": "warning",
                "command": "deploy",
                "message": message,
            }),
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}
