//! Filesystem helpers for writing the output theme.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Symlink hops followed before giving up.
pub const MAX_SYMLINK_HOPS: usize = 40;

/// Removes `dest` if it exists and creates it again, empty.
pub fn reset_dir(dest: &Path) -> Result<()> {
    match fs::symlink_metadata(dest) {
        Ok(meta) if meta.is_dir() => {
            tracing::debug!(path = %dest.display(), "clearing destination");
            fs::remove_dir_all(dest).map_err(|e| Error::io(dest, e))?;
        }
        Ok(_) => fs::remove_file(dest).map_err(|e| Error::io(dest, e))?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(Error::io(dest, e)),
    }
    fs::create_dir_all(dest).map_err(|e| Error::io(dest, e))
}

/// Creates `dir` and its parents; succeeds if it already exists.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))
}

/// Follows a chain of symbolic links to the file it ends at.
///
/// Relative link targets are resolved against the directory holding the
/// link, not the working directory.
pub fn resolve_symlinks(path: &Path) -> Result<PathBuf> {
    let mut current = path.to_path_buf();
    for _ in 0..MAX_SYMLINK_HOPS {
        let meta = fs::symlink_metadata(&current).map_err(|e| Error::io(&current, e))?;
        if !meta.file_type().is_symlink() {
            return Ok(current);
        }

        let target = fs::read_link(&current).map_err(|e| Error::io(&current, e))?;
        current = if target.is_absolute() {
            target
        } else {
            current
                .parent()
                .map(|parent| parent.join(&target))
                .unwrap_or(target)
        };
    }
    Err(Error::SymlinkLoop {
        path: path.to_path_buf(),
    })
}

/// Copies the file `from` resolves to into `to`, overwriting `to`.
pub fn copy_resolved(from: &Path, to: &Path) -> Result<u64> {
    let source = resolve_symlinks(from)?;
    fs::copy(&source, to).map_err(|e| {
        if source.exists() {
            Error::io(to, e)
        } else {
            Error::io(source, e)
        }
    })
}
