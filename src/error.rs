//! Error types for Terramena
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Terramena operations
pub type TerramenaResult<T> = Result<T, TerramenaError>;

/// Boxed cause used where several underlying error types can surface
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Main error type for Terramena operations
#[derive(Error, Debug)]
pub enum TerramenaError {
    /// Terraform state could not be read or parsed
    #[error("failed to read state file {path}: {cause}")]
    StateUnreadable {
        path: PathBuf,
        #[source]
        cause: BoxedCause,
    },

    /// Deployment template not found in any candidate location
    #[error("colmena deployment file named {name} not found (searched: {})", display_paths(.searched))]
    TemplateNotFound { name: String, searched: Vec<PathBuf> },

    /// Extra path requested for the workspace does not exist
    #[error("extra path not found: {path}")]
    ExtraPathMissing { path: PathBuf },

    /// Copying into the workspace failed
    #[error("failed to build workspace while copying {path}: {cause}")]
    WorkspaceBuildFailed {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },

    /// External build tool failed
    #[error("deployment build failed: {reason}\n  command: {command}")]
    BuildFailed { command: String, reason: String },

    /// Deployment process could not be started
    #[error("failed to start `{command}`: {cause}")]
    SpawnFailed {
        command: String,
        #[source]
        cause: std::io::Error,
    },

    /// NixOS module root is not a directory
    #[error("invalid nixos root module directory: {path}")]
    ModuleRootNotFound { path: PathBuf },

    /// Channel file does not exist
    #[error("invalid channel file: {path}")]
    ChannelFileNotFound { path: PathBuf },

    /// No discovered host matches the requested hostname
    #[error("cannot find hostname {hostname} in nixos hosts")]
    HostNotFound { hostname: String },

    /// Host was found but carries no address to connect to
    #[error("host {hostname} has no ip address")]
    HostWithoutAddress { hostname: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl TerramenaError {
    /// Path most closely associated with this error, if any
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            TerramenaError::StateUnreadable { path, .. }
            | TerramenaError::ExtraPathMissing { path }
            | TerramenaError::WorkspaceBuildFailed { path, .. }
            | TerramenaError::ModuleRootNotFound { path }
            | TerramenaError::ChannelFileNotFound { path } => Some(path),
            TerramenaError::InvalidConfig { file, .. } => Some(file),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_state_unreadable() {
        let err = TerramenaError::StateUnreadable {
            path: PathBuf::from("terraform.tfstate"),
            cause: "expected value at line 1 column 1".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to read state file terraform.tfstate: expected value at line 1 column 1"
        );
    }

    #[test]
    fn test_error_display_template_not_found_lists_candidates() {
        let err = TerramenaError::TemplateNotFound {
            name: "colmena_deployment.nix".to_string(),
            searched: vec![PathBuf::from("/a/colmena_deployment.nix"), PathBuf::from("/b")],
        };
        let msg = err.to_string();
        assert!(msg.contains("colmena_deployment.nix not found"));
        assert!(msg.contains("/a/colmena_deployment.nix, /b"));
    }

    #[test]
    fn test_error_display_build_failed_includes_command() {
        let err = TerramenaError::BuildFailed {
            command: "nix-build /tmp/x/colmena_deployment.nix".to_string(),
            reason: "exit status 1".to_string(),
        };
        assert!(err.to_string().contains("command: nix-build /tmp/x"));
    }

    #[test]
    fn test_error_path_accessor() {
        let err = TerramenaError::ExtraPathMissing {
            path: PathBuf::from("secrets"),
        };
        assert_eq!(err.path(), Some(std::path::Path::new("secrets")));
        let err = TerramenaError::HostNotFound {
            hostname: "h1".to_string(),
        };
        assert!(err.path().is_none());
    }
}
