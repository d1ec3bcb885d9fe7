//! Deploy Module
//!
//! Orchestrates the deployment flow for Terramena.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`DeployOptions`)
//! - `result` - Result types (`DeployResult`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use terramena::application::deploy::{DeployOptions, DeployUseCase};
//!
//! let use_case = DeployUseCase::new(hosts, provisioner, builder, launcher, sink);
//! let result = use_case.execute(&DeployOptions::new(spec), &cancel)?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::DeployOptions;
pub use result::DeployResult;
pub use use_case::DeployUseCase;
