//! Atomic file writes.
//!
//! All writes follow the same pattern:
//! 1. Write content to a uniquely named temporary file in the target's directory
//! 2. Sync the file to disk (fsync)
//! 3. Rename it over the target
//!
//! The temporary file lives beside the target so the rename stays on one
//! filesystem. If any step fails the temporary file is removed and the target
//! keeps its previous content (or stays absent).
//!
//! A replaced file keeps its mode. A new file gets the mode `File::create`
//! would give it (`0o666` minus the umask on unix).

use crate::error::{ReadmeError, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::Builder;

/// Atomically write bytes to a file, creating parent directories as needed.
///
/// # Example
///
/// ```no_run
/// use readme_gen::fs::atomic_write;
/// use std::path::Path;
///
/// atomic_write(Path::new("README.md"), b"# Demo\n")?;
/// # Ok::<(), readme_gen::error::ReadmeError>(())
/// ```
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if !parent.exists() {
        fs::create_dir_all(parent).map_err(|e| {
            ReadmeError::write(
                path,
                format!(
                    "failed to create parent directory '{}': {}",
                    parent.display(),
                    e
                ),
            )
        })?;
    }

    let existing_permissions = fs::metadata(path)
        .ok()
        .filter(|meta| meta.is_file())
        .map(|meta| meta.permissions());

    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Requested mode is filtered by the umask at creation.
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    // Dropping `temp` on any error path deletes the temporary file.
    let mut temp = builder.tempfile_in(parent).map_err(|e| {
        ReadmeError::write(path, format!("failed to create temporary file: {}", e))
    })?;

    if let Some(permissions) = existing_permissions {
        temp.as_file().set_permissions(permissions).map_err(|e| {
            ReadmeError::write(path, format!("failed to copy file permissions: {}", e))
        })?;
    }

    temp.write_all(content).map_err(|e| {
        ReadmeError::write(path, format!("failed to write temporary file: {}", e))
    })?;

    temp.as_file().sync_all().map_err(|e| {
        ReadmeError::write(path, format!("failed to sync temporary file to disk: {}", e))
    })?;

    temp.persist(path).map_err(|e| {
        ReadmeError::write(path, format!("failed to replace target: {}", e.error))
    })?;

    tracing::debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Atomically write a string to a file.
///
/// Convenience wrapper around `atomic_write` for string content.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}
