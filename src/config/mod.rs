//! Configuration module for Terramena
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TERRAMENA_*)
//! 3. Project config (./terramena.toml)
//! 4. User config (~/.config/terramena/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{with_overrides_from, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{
    Config, DeployConfig, StateConfig, ToolsConfig, DEFAULT_CHANNEL_PATH,
    DEFAULT_SSH_CONFIG_PATH, DEFAULT_STATE_PATH, DEFAULT_TEMPLATE_SEARCH_DEPTH,
};
