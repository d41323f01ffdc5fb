use super::codec::{decode_store, encode_store};
use super::files::{atomic_write, read_bytes, save_file};
use crate::domain::ChronoStore;
use crate::error::PersistError;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Best-effort storage for the timers.
///
/// Neither `load` nor `save` reports errors to the caller: an unreadable file is
/// the same as no file, and a failed write leaves memory untouched.
#[derive(Debug, Clone)]
pub struct SaveFile {
    path: PathBuf,
}

impl SaveFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Save file inside a data directory
    pub fn in_dir(data_dir: &Path) -> Self {
        Self::new(save_file(data_dir))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted timers, or zeroed defaults if there are none
    pub fn load(&self) -> ChronoStore {
        match self.try_load() {
            Ok(Some(store)) => {
                info!(path = %self.path.display(), "loaded saved timers");
                store
            }
            Ok(None) => {
                debug!(path = %self.path.display(), "no save file, starting fresh");
                ChronoStore::default()
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "unreadable save file, starting fresh");
                ChronoStore::default()
            }
        }
    }

    /// Write every slot's offset and label. Returns whether the write succeeded.
    pub fn save(&self, store: &ChronoStore) -> bool {
        match self.try_save(store) {
            Ok(()) => {
                debug!(path = %self.path.display(), "saved timers");
                true
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to save timers");
                false
            }
        }
    }

    fn try_load(&self) -> Result<Option<ChronoStore>, PersistError> {
        match read_bytes(&self.path)? {
            Some(bytes) => decode_store(&bytes).map(Some),
            None => Ok(None),
        }
    }

    fn try_save(&self, store: &ChronoStore) -> Result<(), PersistError> {
        atomic_write(&self.path, &encode_store(store))
    }
}
