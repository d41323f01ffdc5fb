use crate::persistence::{log_file, resolve_data_dir, save_file};
use crate::scheduler::refresh_interval;
use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;
use tracing::Level;

/// Runtime settings gathered from the command line
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory holding the save file and the log
    pub data_dir: PathBuf,
    /// Display refresh period while a timer runs
    pub refresh_interval: Duration,
    pub log_level: Level,
}

impl Settings {
    pub fn from_cli(data_dir: Option<PathBuf>, verbose: bool) -> Result<Self> {
        Ok(Self {
            data_dir: resolve_data_dir(data_dir)?,
            refresh_interval: refresh_interval(),
            log_level: if verbose { Level::DEBUG } else { Level::INFO },
        })
    }

    pub fn save_path(&self) -> PathBuf {
        save_file(&self.data_dir)
    }

    pub fn log_path(&self) -> PathBuf {
        log_file(&self.data_dir)
    }
}
