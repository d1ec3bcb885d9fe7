//! Deploy Result
//!
//! Result types for deploy operations.

use std::path::PathBuf;

use crate::domain::entities::HostRecord;
use crate::domain::value_objects::{DeploymentArtifact, ExitOutcome};

/// Result of a deploy operation that reached colmena
#[derive(Debug, Clone)]
pub struct DeployResult {
    /// Hosts the deployment was built for
    pub hosts: Vec<HostRecord>,
    /// Deployment file produced by nix-build
    pub artifact: DeploymentArtifact,
    /// How colmena exited
    pub outcome: ExitOutcome,
    /// Workspace the deployment was built in (already removed)
    pub workspace: PathBuf,
}

impl DeployResult {
    pub fn is_success(&self) -> bool {
        self.outcome.success()
    }

    pub fn exit_code(&self) -> i32 {
        self.outcome.exit_code()
    }
}
