//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Command line definition
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use terramena::presentation::factory;
//!
//! let use_case = factory::create_deploy_use_case(&config, &state, sink, json);
//! let result = use_case.execute(&options, &cancel)?;
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, Commands};
pub use factory::{
    create_deploy_use_case, create_event_sink, create_list_use_case, create_ssh_use_case,
};
