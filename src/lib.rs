//! Terramena - deploy NixOS hosts discovered in Terraform output
//!
//! Terramena reads a Terraform state file, finds the outputs marked as NixOS
//! hosts, builds a Colmena deployment for them with `nix-build` inside a
//! throwaway workspace, and runs Colmena against the result.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::HostRecord;
pub use domain::services::StateExtractor;
pub use domain::value_objects::{Goal, TagFilter};
pub use error::{TerramenaError, TerramenaResult};
