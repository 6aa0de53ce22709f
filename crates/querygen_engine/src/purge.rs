use std::fs;
use std::io;
use std::path::Path;

use querygen_logging::qg_warn;
use thiserror::Error;

/// Saved queries used to be persisted under `savedQueries:<mode>` keys.
pub const LEGACY_KEY_PREFIX: &str = "savedQueries:";

#[derive(Debug, Error)]
pub enum PurgeError {
    #[error("state path is not a directory: {0}")]
    NotADirectory(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Deletes every leftover saved-queries entry in `dir`. A missing directory
/// counts as already clean. Entries that cannot be removed are logged and
/// skipped. Returns how many entries were deleted.
pub fn purge_legacy_state(dir: &Path) -> Result<usize, PurgeError> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(0),
        Err(err) => {
            if dir.exists() && !dir.is_dir() {
                return Err(PurgeError::NotADirectory(dir.display().to_string()));
            }
            return Err(err.into());
        }
    };

    let mut removed = 0;
    for entry in entries {
        let entry = entry?;
        let name = entry.file_name();
        if !name.to_string_lossy().starts_with(LEGACY_KEY_PREFIX) {
            continue;
        }
        let path = entry.path();
        let result = if path.is_dir() {
            fs::remove_dir_all(&path)
        } else {
            fs::remove_file(&path)
        };
        match result {
            Ok(()) => removed += 1,
            Err(err) => qg_warn!("Failed to remove legacy state {:?}: {}", path, err),
        }
    }
    Ok(removed)
}
