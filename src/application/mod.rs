//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Workspace, host discovery, nix-build, colmena, cleanup
//! - `ListHostsUseCase` - Host discovery for `terramena list`
//! - `SshUseCase` - Host lookup for `terramena ssh`

pub mod deploy;
pub mod list;
pub mod ssh;

pub use deploy::{DeployOptions, DeployResult, DeployUseCase};
pub use list::{render_host_list, ListHostsUseCase};
pub use ssh::{SshInvocation, SshOptions, SshTarget, SshUseCase};
