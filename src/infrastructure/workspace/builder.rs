//! Temporary workspace builder

use std::sync::Arc;

use crate::domain::entities::Workspace;
use crate::domain::ports::{DeployEvent, DeployEventSink, WorkspaceProvisioner, WorkspaceSpec};
use crate::error::{TerramenaError, TerramenaResult};

use super::copy::{copy_contents, copy_into};
use super::template::TemplateLocator;

/// Prefix of every workspace directory
pub const WORKSPACE_PREFIX: &str = "terramena";

/// Provisions workspaces as fresh directories under the system temp dir
///
/// If population fails partway, the directory is removed before the error
/// is returned.
pub struct TempWorkspaceBuilder {
    locator: TemplateLocator,
    sink: Arc<dyn DeployEventSink>,
}

impl TempWorkspaceBuilder {
    pub fn new(locator: TemplateLocator, sink: Arc<dyn DeployEventSink>) -> Self {
        Self { locator, sink }
    }

    fn copied(&self, source: &std::path::Path, destination: &std::path::Path) {
        if self.sink.wants_detailed_events() {
            self.sink.on_event(DeployEvent::PathCopied {
                source: source.to_path_buf(),
                destination: destination.to_path_buf(),
            });
        }
    }

    fn validate(&self, spec: &WorkspaceSpec) -> TerramenaResult<()> {
        if !spec.module_root.is_dir() {
            return Err(TerramenaError::ModuleRootNotFound {
                path: spec.module_root.clone(),
            });
        }
        if !spec.channel_file.is_file() {
            return Err(TerramenaError::ChannelFileNotFound {
                path: spec.channel_file.clone(),
            });
        }
        Ok(())
    }
}

impl WorkspaceProvisioner for TempWorkspaceBuilder {
    fn provision(&self, spec: &WorkspaceSpec) -> TerramenaResult<Workspace> {
        self.validate(spec)?;
        let template = self.locator.locate(spec.template.as_deref())?;
        self.sink.on_event(DeployEvent::TemplateResolved {
            path: template.clone(),
        });

        let dir = tempfile::Builder::new()
            .prefix(WORKSPACE_PREFIX)
            .tempdir()
            .map_err(|cause| TerramenaError::WorkspaceBuildFailed {
                path: std::env::temp_dir(),
                cause,
            })?;

        // Dropping `workspace` on any early return removes the directory.
        let mut workspace = Workspace::new(dir);
        self.sink.on_event(DeployEvent::WorkspaceCreated {
            path: workspace.path().to_path_buf(),
        });

        copy_contents(&spec.module_root, workspace.path())?;
        workspace.record_source(&spec.module_root);
        self.copied(&spec.module_root, workspace.path());

        let channel = copy_into(&spec.channel_file, workspace.path())?;
        workspace.record_source(&spec.channel_file);
        self.copied(&spec.channel_file, &channel);
        workspace.set_channel_file(channel);

        let template_copy = copy_into(&template, workspace.path())?;
        workspace.record_source(&template);
        self.copied(&template, &template_copy);
        workspace.set_template_file(template_copy);

        for extra in &spec.extra_paths {
            if !extra.exists() {
                return Err(TerramenaError::ExtraPathMissing {
                    path: extra.clone(),
                });
            }
            let destination = copy_into(extra, workspace.path())?;
            workspace.record_source(extra);
            self.copied(extra, &destination);
        }

        Ok(workspace)
    }
}
