//! Build artifact and process outcome value objects

use std::path::{Path, PathBuf};

/// Path to the deployment file produced by `nix-build`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentArtifact(PathBuf);

impl DeploymentArtifact {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl std::fmt::Display for DeploymentArtifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// How the deployment process ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitOutcome {
    /// Exit code, `None` when the child was killed by a signal
    pub code: Option<i32>,
    /// Whether a termination signal was forwarded to the child
    pub forwarded_signal: bool,
}

impl ExitOutcome {
    pub fn from_code(code: i32) -> Self {
        Self {
            code: Some(code),
            forwarded_signal: false,
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Exit code to hand back to the shell
    pub fn exit_code(&self) -> i32 {
        match self.code {
            Some(code) => code,
            None => 1,
        }
    }
}

impl From<std::process::ExitStatus> for ExitOutcome {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
            forwarded_signal: false,
        }
    }
}
