use crate::error::PersistError;
use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Directory name under the platform data directory
pub const PROJECT_NAME: &str = "ChronoWork";
/// Save file name inside the project directory
pub const SAVE_FILENAME: &str = "chrono.save";
/// Log file name inside the project directory
pub const LOG_FILENAME: &str = "chronowork.log";

/// Get the default data directory (e.g. ~/.local/share/ChronoWork on Linux)
pub fn default_data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Could not determine the user data directory")?;
    Ok(base.join(PROJECT_NAME))
}

/// Resolve the data directory, preferring an explicit override
pub fn resolve_data_dir(override_dir: Option<PathBuf>) -> Result<PathBuf> {
    match override_dir {
        Some(dir) => Ok(dir),
        None => default_data_dir(),
    }
}

/// Path of the save file inside `data_dir`
pub fn save_file(data_dir: &Path) -> PathBuf {
    data_dir.join(SAVE_FILENAME)
}

/// Path of the log file inside `data_dir`
pub fn log_file(data_dir: &Path) -> PathBuf {
    data_dir.join(LOG_FILENAME)
}

/// Atomically write bytes to a file using temp file + rename.
/// The parent directory is created if it does not exist.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<(), PersistError> {
    let path = path.as_ref();
    let dir = path.parent().ok_or(PersistError::NoParentDir)?;
    fs::create_dir_all(dir)?;

    // Create temp file in the same directory so the rename stays on one filesystem
    let mut temp_file = NamedTempFile::new_in(dir)?;
    temp_file.write_all(content)?;
    temp_file.as_file().sync_all()?;
    temp_file.persist(path).map_err(|e| e.error)?;

    Ok(())
}

/// Read file bytes, `None` if it doesn't exist
pub fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Option<Vec<u8>>, PersistError> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
