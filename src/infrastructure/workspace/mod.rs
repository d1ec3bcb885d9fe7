//! Workspace provisioning on the local file system

mod builder;
mod copy;
mod template;

pub use builder::{TempWorkspaceBuilder, WORKSPACE_PREFIX};
pub use template::{TemplateLocator, TEMPLATE_FILE_NAME};
