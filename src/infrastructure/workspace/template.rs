//! Deployment template lookup

use std::path::{Path, PathBuf};

use crate::error::{TerramenaError, TerramenaResult};

/// File name of the Colmena deployment template
pub const TEMPLATE_FILE_NAME: &str = "colmena_deployment.nix";

/// Finds the deployment template on disk
///
/// Candidates, first hit wins:
/// 1. the explicitly configured path
/// 2. `<exe dir>/../share/terramena/colmena_deployment.nix`
/// 3. the executable's directory and `depth` parent directories above it:
///    `<dir>/colmena_deployment.nix`, then `<dir>/share/colmena_deployment.nix`
#[derive(Debug, Clone)]
pub struct TemplateLocator {
    explicit: Option<PathBuf>,
    exe_dir: Option<PathBuf>,
    depth: usize,
}

impl TemplateLocator {
    pub fn new(exe_dir: Option<PathBuf>, depth: usize) -> Self {
        Self {
            explicit: None,
            exe_dir,
            depth,
        }
    }

    /// Locator rooted at the directory of the running executable
    pub fn from_current_exe(depth: usize) -> Self {
        let exe_dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));
        Self::new(exe_dir, depth)
    }

    pub fn with_explicit(mut self, path: Option<PathBuf>) -> Self {
        self.explicit = path;
        self
    }

    /// Every path checked, in lookup order
    pub fn candidates(&self, explicit: Option<&Path>) -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        if let Some(path) = explicit.or(self.explicit.as_deref()) {
            candidates.push(path.to_path_buf());
        }

        if let Some(exe_dir) = &self.exe_dir {
            candidates.push(
                exe_dir
                    .join("..")
                    .join("share")
                    .join("terramena")
                    .join(TEMPLATE_FILE_NAME),
            );

            for dir in exe_dir.ancestors().take(self.depth + 1) {
                candidates.push(dir.join(TEMPLATE_FILE_NAME));
                candidates.push(dir.join("share").join(TEMPLATE_FILE_NAME));
            }
        }

        candidates
    }

    /// Resolve the template, preferring `explicit` over the configured path
    pub fn locate(&self, explicit: Option<&Path>) -> TerramenaResult<PathBuf> {
        let candidates = self.candidates(explicit);

        candidates
            .iter()
            .find(|path| path.is_file())
            .cloned()
            .ok_or_else(|| TerramenaError::TemplateNotFound {
                name: TEMPLATE_FILE_NAME.to_string(),
                searched: candidates,
            })
    }
}
