//! Workspace Provisioner Port
//!
//! Creates and disposes of the temporary directory a deployment is built in.

use std::path::PathBuf;

use crate::domain::entities::Workspace;
use crate::error::TerramenaResult;

/// What goes into a workspace
#[derive(Debug, Clone, Default)]
pub struct WorkspaceSpec {
    /// NixOS module root; its contents are copied to the workspace root
    pub module_root: PathBuf,
    /// Channel (nixpkgs pin) file
    pub channel_file: PathBuf,
    /// Explicit deployment template, searched for when `None`
    pub template: Option<PathBuf>,
    /// Extra files or directories copied to the workspace root, in order
    pub extra_paths: Vec<PathBuf>,
}

impl WorkspaceSpec {
    pub fn new(module_root: impl Into<PathBuf>, channel_file: impl Into<PathBuf>) -> Self {
        Self {
            module_root: module_root.into(),
            channel_file: channel_file.into(),
            template: None,
            extra_paths: Vec::new(),
        }
    }

    pub fn with_template(mut self, template: Option<PathBuf>) -> Self {
        self.template = template;
        self
    }

    pub fn with_extra_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.extra_paths = paths;
        self
    }
}

/// Builds and releases deployment workspaces
pub trait WorkspaceProvisioner {
    /// Create and populate a fresh workspace.
    ///
    /// On error nothing is left behind on disk.
    fn provision(&self, spec: &WorkspaceSpec) -> TerramenaResult<Workspace>;

    /// Remove a workspace created by [`WorkspaceProvisioner::provision`]
    fn release(&self, workspace: Workspace) -> std::io::Result<()> {
        workspace.close()
    }
}
