//! Goal value object - what Colmena should do with the built deployment

use serde::{Deserialize, Serialize};

/// Colmena deployment goal
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    /// Build, push and activate the new configuration
    #[default]
    Apply,
    /// Only build the system profiles
    Build,
    /// Build and push closures without activating
    Push,
    /// Make the configuration the boot default
    Boot,
    /// Switch to the configuration and make it the boot default
    Switch,
    /// Activate without making it the boot default
    Test,
    /// Show what activation would do
    DryActivate,
}

impl Goal {
    /// Subcommand name passed to colmena
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Apply => "apply",
            Goal::Build => "build",
            Goal::Push => "push",
            Goal::Boot => "boot",
            Goal::Switch => "switch",
            Goal::Test => "test",
            Goal::DryActivate => "dry-activate",
        }
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
