//! Deployment Ports
//!
//! The two external-tool boundaries: building the deployment file and
//! running it against the hosts.

use std::collections::BTreeMap;

use crate::domain::entities::{HostRecord, Workspace};
use crate::domain::value_objects::{
    CancellationToken, DeploymentArtifact, ExitOutcome, Goal, TagFilter,
};
use crate::error::TerramenaResult;

/// Builds a deployment artifact from a workspace and a host set
pub trait ArtifactBuilder {
    fn build(&self, workspace: &Workspace, hosts: &[HostRecord])
        -> TerramenaResult<DeploymentArtifact>;
}

/// Optional switches for the deployment tool
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeployFlags {
    pub show_trace: bool,
    pub no_substitutes: bool,
}

/// Everything needed to launch one deployment
#[derive(Debug, Clone)]
pub struct LaunchRequest {
    pub goal: Goal,
    pub artifact: DeploymentArtifact,
    pub tags: TagFilter,
    /// Variables added on top of the inherited environment
    pub env: BTreeMap<String, String>,
    pub flags: DeployFlags,
}

/// Runs a deployment artifact as a supervised child process
pub trait DeploymentLauncher {
    /// Run to completion. A non-zero exit is reported in the outcome,
    /// not as an error.
    fn launch(
        &self,
        request: &LaunchRequest,
        cancel: &CancellationToken,
    ) -> TerramenaResult<ExitOutcome>;
}
