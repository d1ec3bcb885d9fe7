//! Deploy Event Port
//!
//! Provides an observable interface for deploy operations.
//! Every component receives its sink explicitly; there is no global logger.

use std::path::PathBuf;

use crate::domain::entities::HostRecord;

/// Event emitted during deploy operations
#[derive(Debug, Clone)]
pub enum DeployEvent {
    /// Temporary workspace allocated
    WorkspaceCreated { path: PathBuf },

    /// A source was copied into the workspace
    PathCopied {
        source: PathBuf,
        destination: PathBuf,
    },

    /// Deployment template located
    TemplateResolved { path: PathBuf },

    /// Hosts found in the Terraform state (after tag filtering)
    HostsDiscovered { hosts: Vec<HostRecord> },

    /// `nix-build` is about to run
    BuildStarted { command: String },

    /// `nix-build` produced a deployment file
    ArtifactBuilt { path: PathBuf },

    /// Colmena is about to run
    DeployStarted {
        command: String,
        env: Vec<(String, String)>,
    },

    /// A termination request was relayed to the colmena process as SIGTERM
    SignalForwarded { pid: u32 },

    /// Colmena exited
    DeployFinished { code: Option<i32>, success: bool },

    /// Temporary workspace removed
    WorkspaceRemoved { path: PathBuf },

    /// Non-fatal problem worth surfacing
    Warning { message: String },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - TracingEventSink: Log lines through `tracing`
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);

    /// Check if this sink wants detailed events (e.g., per-copy)
    ///
    /// Some sinks (like CI) may only want summary events.
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {
        // Do nothing
    }

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
