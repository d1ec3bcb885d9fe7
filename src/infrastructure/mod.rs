//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `state/` - Terraform state repository
//! - `workspace/` - Temporary workspace builder and template lookup
//! - `nix/` - `nix-build` artifact builder
//! - `colmena/` - Supervised colmena runner
//! - `events/` - Event sinks (tracing, NDJSON)
//! - `process` - Child process helpers and signal forwarding

pub mod colmena;
pub mod events;
pub mod nix;
pub mod process;
pub mod state;
pub mod workspace;

// Re-export for convenience
pub use colmena::{deployment_env, ColmenaCommand, ColmenaRunner};
pub use events::{JsonEventSink, TracingEventSink};
pub use nix::NixBuilder;
pub use state::TerraformStateRepository;
pub use workspace::{TemplateLocator, TempWorkspaceBuilder};
