//! `nix-build` artifact builder
//!
//! Evaluates the workspace's deployment template with the host set and the
//! channel file, printing the resulting deployment file path on stdout.

use std::process::{Command, Stdio};
use std::sync::Arc;

use crate::domain::entities::{HostRecord, Workspace};
use crate::domain::ports::{ArtifactBuilder, DeployEvent, DeployEventSink};
use crate::domain::value_objects::DeploymentArtifact;
use crate::error::{TerramenaError, TerramenaResult};
use crate::infrastructure::process::display_command;

/// Artifact builder shelling out to `nix-build`
pub struct NixBuilder {
    program: String,
    sink: Arc<dyn DeployEventSink>,
}

impl NixBuilder {
    pub fn new(program: impl Into<String>, sink: Arc<dyn DeployEventSink>) -> Self {
        Self {
            program: program.into(),
            sink,
        }
    }

    /// Arguments passed to `nix-build`
    pub fn args(workspace: &Workspace, hosts: &[HostRecord]) -> TerramenaResult<Vec<String>> {
        let hosts_json =
            serde_json::to_string(hosts).map_err(|e| TerramenaError::BuildFailed {
                command: "nix-build".to_string(),
                reason: format!("cannot serialize hosts: {}", e),
            })?;

        Ok(vec![
            workspace.template_file().display().to_string(),
            "--no-out-link".to_string(),
            "--argstr".to_string(),
            "hosts".to_string(),
            hosts_json,
            "--argstr".to_string(),
            "channels".to_string(),
            workspace.channel_file().display().to_string(),
        ])
    }
}

impl ArtifactBuilder for NixBuilder {
    fn build(
        &self,
        workspace: &Workspace,
        hosts: &[HostRecord],
    ) -> TerramenaResult<DeploymentArtifact> {
        let args = Self::args(workspace, hosts)?;
        let command = display_command(&self.program, &args);
        self.sink.on_event(DeployEvent::BuildStarted {
            command: command.clone(),
        });

        let output = Command::new(&self.program)
            .args(&args)
            .current_dir(workspace.path())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| TerramenaError::BuildFailed {
                command: command.clone(),
                reason: format!("cannot start {}: {}", self.program, e),
            })?;

        if !output.status.success() {
            let reason = match output.status.code() {
                Some(code) => format!("{} exited with code {}", self.program, code),
                None => format!("{} was terminated by a signal", self.program),
            };
            return Err(TerramenaError::BuildFailed { command, reason });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let path = stdout.trim();
        if path.is_empty() {
            return Err(TerramenaError::BuildFailed {
                command,
                reason: format!("{} printed no output path", self.program),
            });
        }

        let artifact = DeploymentArtifact::new(path);
        self.sink.on_event(DeployEvent::ArtifactBuilt {
            path: artifact.path().to_path_buf(),
        });
        Ok(artifact)
    }
}
