//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Goal;
use crate::error::TerramenaResult;

use super::loader::{self, ConfigWarning};

/// Default Terraform state file
pub const DEFAULT_STATE_PATH: &str = "./terraform.tfstate";
/// Default ssh_config handed to colmena and ssh
pub const DEFAULT_SSH_CONFIG_PATH: &str = "./ssh_config";
/// Default channel (nixpkgs pin) file
pub const DEFAULT_CHANNEL_PATH: &str = "./channels.nix";
/// How many directory levels above the executable are searched for the template
pub const DEFAULT_TEMPLATE_SEARCH_DEPTH: usize = 1;

/// Terraform state configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateConfig {
    #[serde(default = "default_state_path")]
    pub path: PathBuf,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            path: default_state_path(),
        }
    }
}

fn default_state_path() -> PathBuf {
    PathBuf::from(DEFAULT_STATE_PATH)
}

/// Deploy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployConfig {
    #[serde(default = "default_channel_path")]
    pub channel: PathBuf,

    #[serde(default = "default_ssh_config_path")]
    pub ssh_config: PathBuf,

    /// Explicit deployment template (searched for when unset)
    #[serde(default)]
    pub template: Option<PathBuf>,

    #[serde(default = "default_template_search_depth")]
    pub template_search_depth: usize,

    #[serde(default)]
    pub goal: Goal,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            channel: default_channel_path(),
            ssh_config: default_ssh_config_path(),
            template: None,
            template_search_depth: default_template_search_depth(),
            goal: Goal::default(),
        }
    }
}

fn default_channel_path() -> PathBuf {
    PathBuf::from(DEFAULT_CHANNEL_PATH)
}

fn default_ssh_config_path() -> PathBuf {
    PathBuf::from(DEFAULT_SSH_CONFIG_PATH)
}

fn default_template_search_depth() -> usize {
    DEFAULT_TEMPLATE_SEARCH_DEPTH
}

/// External programs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    #[serde(default = "default_nix_build")]
    pub nix_build: String,

    #[serde(default = "default_colmena")]
    pub colmena: String,

    #[serde(default = "default_ssh")]
    pub ssh: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            nix_build: default_nix_build(),
            colmena: default_colmena(),
            ssh: default_ssh(),
        }
    }
}

fn default_nix_build() -> String {
    "nix-build".to_string()
}

fn default_colmena() -> String {
    "colmena".to_string()
}

fn default_ssh() -> String {
    "ssh".to_string()
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub state: StateConfig,

    #[serde(default)]
    pub deploy: DeployConfig,

    #[serde(default)]
    pub tools: ToolsConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> TerramenaResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> TerramenaResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults, then apply
    /// environment overrides
    pub fn discover(project_root: Option<&Path>) -> TerramenaResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(project_root)
    }

    /// Apply environment variable overrides (TERRAMENA_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
