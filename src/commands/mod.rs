//! Subcommand entry points

pub mod deploy;
pub mod list;
pub mod ssh;

use std::path::{Path, PathBuf};

/// CLI value when given, configured value otherwise
pub(crate) fn or_configured(cli: Option<PathBuf>, configured: &Path) -> PathBuf {
    cli.unwrap_or_else(|| configured.to_path_buf())
}
