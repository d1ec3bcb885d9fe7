//! Domain Entities
//!
//! - `HostRecord` - A NixOS machine discovered in Terraform output
//! - `Workspace` - The disposable directory a deployment is built in

pub mod host;
pub mod workspace;

pub use host::{HostRecord, HOST_TYPE_KEY, HOST_TYPE_VALUE};
pub use workspace::Workspace;
