//! Tracing Event Sink
//!
//! Maps deploy events onto `tracing` log lines: stage progress at `info`,
//! exact commands and copies at `debug`, problems at `warn`.

use crate::domain::ports::{DeployEvent, DeployEventSink};
use crate::infrastructure::process;

/// Event sink that logs through the global `tracing` subscriber
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventSink;

impl DeployEventSink for TracingEventSink {
    fn on_event(&self, event: DeployEvent) {
        match event {
            DeployEvent::WorkspaceCreated { path } => {
                tracing::info!("building workspace in {}", path.display());
            }
            DeployEvent::PathCopied {
                source,
                destination,
            } => {
                tracing::debug!("copied {} to {}", source.display(), destination.display());
            }
            DeployEvent::TemplateResolved { path } => {
                tracing::debug!("colmena deployment template: {}", path.display());
            }
            DeployEvent::HostsDiscovered { hosts } => {
                tracing::info!("found {} nixos host(s)", hosts.len());
                for host in &hosts {
                    tracing::debug!("{}", host);
                }
            }
            DeployEvent::BuildStarted { command } => {
                tracing::info!("building colmena deployment file...");
                tracing::debug!("nix-build command: {}", command);
            }
            DeployEvent::ArtifactBuilt { path } => {
                tracing::info!("deployment file: {}", path.display());
            }
            DeployEvent::DeployStarted { command, env } => {
                tracing::info!("running colmena...");
                tracing::debug!("colmena env: {:?}", env);
                tracing::debug!("colmena command: {}", command);
            }
            DeployEvent::SignalForwarded { pid } => {
                tracing::warn!(
                    "termination requested, sent {} to colmena (pid {})",
                    process::FORWARDED_SIGNAL,
                    pid
                );
            }
            DeployEvent::DeployFinished { code, success } => {
                if success {
                    tracing::info!("colmena finished successfully");
                } else {
                    match code {
                        Some(code) => tracing::warn!("colmena exited with code {}", code),
                        None => tracing::warn!("colmena was terminated by a signal"),
                    }
                }
            }
            DeployEvent::WorkspaceRemoved { path } => {
                tracing::debug!("removed workspace {}", path.display());
            }
            DeployEvent::Warning { message } => {
                tracing::warn!("{}", message);
            }
        }
    }
}
