//! Workspace Entity
//!
//! An isolated, disposable directory that holds everything `nix-build` needs:
//! the NixOS module root, the channel file and the deployment template.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Ephemeral build directory owned by a single deploy run
///
/// The directory is removed either explicitly through [`Workspace::close`]
/// or when the value is dropped.
#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
    sources: Vec<PathBuf>,
    channel_file: PathBuf,
    template_file: PathBuf,
}

impl Workspace {
    pub fn new(dir: TempDir) -> Self {
        Self {
            dir,
            sources: Vec::new(),
            channel_file: PathBuf::new(),
            template_file: PathBuf::new(),
        }
    }

    /// Absolute path of the workspace root
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Source paths copied into the workspace, in copy order
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// The workspace's copy of the channel file
    pub fn channel_file(&self) -> &Path {
        &self.channel_file
    }

    /// The workspace's copy of the deployment template
    pub fn template_file(&self) -> &Path {
        &self.template_file
    }

    pub(crate) fn record_source(&mut self, source: impl Into<PathBuf>) {
        self.sources.push(source.into());
    }

    pub(crate) fn set_channel_file(&mut self, path: PathBuf) {
        self.channel_file = path;
    }

    pub(crate) fn set_template_file(&mut self, path: PathBuf) {
        self.template_file = path;
    }

    /// Remove the directory and everything in it
    pub fn close(self) -> std::io::Result<()> {
        self.dir.close()
    }
}
