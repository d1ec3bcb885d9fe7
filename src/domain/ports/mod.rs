//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod deploy_events;
pub mod deployment;
pub mod host_repository;
pub mod workspace_provisioner;

pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink};
pub use deployment::{ArtifactBuilder, DeployFlags, DeploymentLauncher, LaunchRequest};
pub use host_repository::HostRepository;
pub use workspace_provisioner::{WorkspaceProvisioner, WorkspaceSpec};
