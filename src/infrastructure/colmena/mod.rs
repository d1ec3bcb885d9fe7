//! Colmena deployment adapter

mod command;
mod runner;

pub use command::ColmenaCommand;
pub use runner::{deployment_env, ColmenaRunner, SSH_CONFIG_ENV};
