//! Recursive copy helpers

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{TerramenaError, TerramenaResult};

fn failed(path: &Path) -> impl FnOnce(io::Error) -> TerramenaError + '_ {
    move |cause| TerramenaError::WorkspaceBuildFailed {
        path: path.to_path_buf(),
        cause,
    }
}

/// Copy the contents of `source_dir` into `dest_dir` (like `cp -r src/. dest`)
pub(crate) fn copy_contents(source_dir: &Path, dest_dir: &Path) -> TerramenaResult<()> {
    for entry in fs::read_dir(source_dir).map_err(failed(source_dir))? {
        let entry = entry.map_err(failed(source_dir))?;
        let path = entry.path();
        copy_entry(&path, &dest_dir.join(entry.file_name()))?;
    }
    Ok(())
}

/// Copy a file or directory into `dest_dir` under its base name
pub(crate) fn copy_into(source: &Path, dest_dir: &Path) -> TerramenaResult<PathBuf> {
    let name = source.file_name().ok_or_else(|| TerramenaError::WorkspaceBuildFailed {
        path: source.to_path_buf(),
        cause: io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"),
    })?;
    let destination = dest_dir.join(name);
    copy_entry(source, &destination)?;
    Ok(destination)
}

fn copy_entry(source: &Path, destination: &Path) -> TerramenaResult<()> {
    let meta = fs::symlink_metadata(source).map_err(failed(source))?;
    let file_type = meta.file_type();

    if file_type.is_symlink() {
        copy_symlink(source, destination)
    } else if file_type.is_dir() {
        fs::create_dir_all(destination).map_err(failed(source))?;
        copy_contents(source, destination)
    } else {
        fs::copy(source, destination).map_err(failed(source))?;
        Ok(())
    }
}

#[cfg(unix)]
fn copy_symlink(source: &Path, destination: &Path) -> TerramenaResult<()> {
    let target = fs::read_link(source).map_err(failed(source))?;
    std::os::unix::fs::symlink(target, destination).map_err(failed(source))
}

// Without portable symlinks the link is followed.
#[cfg(not(unix))]
fn copy_symlink(source: &Path, destination: &Path) -> TerramenaResult<()> {
    if source.is_dir() {
        fs::create_dir_all(destination).map_err(failed(source))?;
        copy_contents(source, destination)
    } else {
        fs::copy(source, destination).map_err(failed(source))?;
        Ok(())
    }
}
