//! Atomic file replacement.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::Builder;

/// Mode requested for a new destination, before the umask is applied.
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o666;

/// Write `contents` to `path`, replacing any existing file in one step.
///
/// The data goes to a temporary file in the destination directory first,
/// which is then renamed over `path`. A failure at any point leaves the
/// previous file untouched and removes the temporary file. Missing parent
/// directories are created.
///
/// A replaced file keeps its permissions. A new file gets the same
/// umask-derived mode a plain `File::create` would give it.
pub fn write_atomic(path: &Path, contents: &[u8]) -> io::Result<()> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let existing = fs::metadata(path).ok().map(|m| m.permissions());

    let mut builder = Builder::new();
    #[cfg(unix)]
    if existing.is_none() {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(NEW_FILE_MODE));
    }

    let mut temp = builder.tempfile_in(parent)?;
    if let Some(permissions) = existing {
        temp.as_file().set_permissions(permissions)?;
    }
    temp.write_all(contents)?;
    temp.as_file().sync_all()?;

    // Rename within the same directory
    temp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
