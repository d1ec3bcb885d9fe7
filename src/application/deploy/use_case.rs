//! Deploy Use Case
//!
//! Orchestrates the deployment flow:
//! 1. Provision a temporary workspace
//! 2. Load the NixOS hosts from the Terraform state
//! 3. Build the deployment file with nix-build
//! 4. Run colmena against it
//! 5. Release the workspace
//!
//! This use case is pure orchestration - all I/O lives behind ports.

use std::sync::Arc;

use crate::domain::entities::Workspace;
use crate::domain::ports::{
    ArtifactBuilder, DeployEvent, DeployEventSink, DeploymentLauncher, HostRepository,
    LaunchRequest, WorkspaceProvisioner,
};
use crate::domain::value_objects::CancellationToken;
use crate::error::TerramenaResult;

use super::options::DeployOptions;
use super::result::DeployResult;

/// Deploy use case - orchestrates the deployment flow
///
/// This use case is parameterized by its dependencies (ports),
/// allowing for easy testing and different implementations.
pub struct DeployUseCase<H, W, B, L>
where
    H: HostRepository,
    W: WorkspaceProvisioner,
    B: ArtifactBuilder,
    L: DeploymentLauncher,
{
    hosts: H,
    provisioner: W,
    builder: B,
    launcher: L,
    sink: Arc<dyn DeployEventSink>,
}

impl<H, W, B, L> DeployUseCase<H, W, B, L>
where
    H: HostRepository,
    W: WorkspaceProvisioner,
    B: ArtifactBuilder,
    L: DeploymentLauncher,
{
    pub fn new(
        hosts: H,
        provisioner: W,
        builder: B,
        launcher: L,
        sink: Arc<dyn DeployEventSink>,
    ) -> Self {
        Self {
            hosts,
            provisioner,
            builder,
            launcher,
            sink,
        }
    }

    /// Execute the deploy use case
    ///
    /// A colmena run that exits non-zero is reported through
    /// [`DeployResult::outcome`], not as an error. The workspace is released
    /// exactly once whenever it was created.
    pub fn execute(
        &self,
        options: &DeployOptions,
        cancel: &CancellationToken,
    ) -> TerramenaResult<DeployResult> {
        let workspace = self.provisioner.provision(&options.workspace)?;
        let result = self.deploy_from(&workspace, options, cancel);
        self.release(workspace);
        result
    }

    fn deploy_from(
        &self,
        workspace: &Workspace,
        options: &DeployOptions,
        cancel: &CancellationToken,
    ) -> TerramenaResult<DeployResult> {
        let hosts = self.hosts.load_hosts(&options.tags)?;
        self.sink.on_event(DeployEvent::HostsDiscovered {
            hosts: hosts.clone(),
        });

        let artifact = self.builder.build(workspace, &hosts)?;

        let request = LaunchRequest {
            goal: options.goal,
            artifact: artifact.clone(),
            tags: options.tags.clone(),
            env: options.env.clone(),
            flags: options.flags,
        };
        let outcome = self.launcher.launch(&request, cancel)?;

        Ok(DeployResult {
            hosts,
            artifact,
            outcome,
            workspace: workspace.path().to_path_buf(),
        })
    }

    /// Release failures are surfaced as warnings
    fn release(&self, workspace: Workspace) {
        let path = workspace.path().to_path_buf();
        match self.provisioner.release(workspace) {
            Ok(()) => self.sink.on_event(DeployEvent::WorkspaceRemoved { path }),
            Err(e) => self.sink.on_event(DeployEvent::Warning {
                message: format!("failed to remove workspace {}: {}", path.display(), e),
            }),
        }
    }
}
