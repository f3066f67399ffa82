//! All-or-nothing file replacement.
//!
//! New content is written to a temporary file next to the target and renamed
//! over it, so a failure at any point leaves the original file intact.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Replaces the contents of an existing file atomically.
///
/// Symlinks are resolved first so the link itself survives and its target is
/// replaced. The replacement keeps the target's permissions. Read-only targets
/// are rejected up front rather than silently replaced by the rename.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    let target = fs::canonicalize(path)?;
    let path = target.as_path();

    let permissions = fs::metadata(path)?.permissions();
    if permissions.readonly() {
        return Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            format!("File is read-only: {}", path.display()),
        ));
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.as_file().set_permissions(permissions)?;

    tmp.persist(path).map_err(|e| e.error)?;
    log::debug!("Replaced: {}", path.display());
    Ok(())
}
