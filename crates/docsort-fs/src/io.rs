//! Text reads and atomic writes with file locking

use fs2::FileExt;
use std::fs::{self, File, OpenOptions, Permissions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Read a file as UTF-8 text.
///
/// Content that is not valid UTF-8 is reported as an I/O error.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Write text content to a file atomically.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    write_atomic(path, content.as_bytes())
}

/// Write content atomically to a file with locking.
///
/// Uses write-to-temp-then-rename so a reader never sees a half-written file.
/// Symlinks are followed, so the file they point to is the one replaced, and
/// an existing file keeps its permissions. The target stays exclusively
/// locked until the rename is done.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let target = resolve_target(path)?;
    let permissions = existing_permissions(&target)?;

    let lock_file = open_for_lock(&target, permissions.is_some())?;
    FileExt::lock_exclusive(&lock_file).map_err(|_| Error::LockFailed {
        path: target.clone(),
    })?;

    let temp_path = temp_path_for(&target);
    let result = write_temp(&temp_path, content, permissions)
        .and_then(|()| fs::rename(&temp_path, &target).map_err(|e| Error::io(&target, e)));

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    let unlocked = unlock(&lock_file, &target);
    result.and(unlocked)
}

/// Canonical location of the file behind `path`; a file that does not exist
/// yet is written at `path` itself.
fn resolve_target(path: &Path) -> Result<PathBuf> {
    match dunce::canonicalize(path) {
        Ok(target) => Ok(target),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(e) => Err(Error::io(path, e)),
    }
}

fn existing_permissions(target: &Path) -> Result<Option<Permissions>> {
    match fs::metadata(target) {
        Ok(metadata) => Ok(Some(metadata.permissions())),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(target, e)),
    }
}

/// Opens the target for locking. An existing file is only read, so read-only
/// files can still be replaced; a missing one is created empty.
fn open_for_lock(target: &Path, exists: bool) -> Result<File> {
    let mut options = OpenOptions::new();
    if exists {
        options.read(true);
    } else {
        options.write(true).create(true).truncate(false);
    }
    options.open(target).map_err(|e| Error::io(target, e))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let temp_name = format!(
        ".{}.{}.tmp",
        path.file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    path.with_file_name(temp_name)
}

fn write_temp(temp_path: &Path, content: &[u8], permissions: Option<Permissions>) -> Result<()> {
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))?;

    if let Some(permissions) = permissions {
        temp_file
            .set_permissions(permissions)
            .map_err(|e| Error::io(temp_path, e))?;
    }

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(temp_path, e))?;
    temp_file.sync_all().map_err(|e| Error::io(temp_path, e))?;

    tracing::trace!(path = %temp_path.display(), bytes = content.len(), "Wrote temp file");
    Ok(())
}

fn unlock(lock_file: &File, target: &Path) -> Result<()> {
    FileExt::unlock(lock_file).map_err(|_| Error::LockFailed {
        path: target.to_path_buf(),
    })
}
