use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{AppState, StateStore, StorageError};

pub const STATE_FILE_NAME: &str = "buddy-capture-data.json";

/// Stores the record as a JSON file inside a work directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create the work directory if needed and point at the state file in it.
    pub fn open(work_dir: &Path) -> Result<Self, StorageError> {
        fs::create_dir_all(work_dir)?;
        Ok(Self {
            path: work_dir.join(STATE_FILE_NAME),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StateStore for FileStore {
    fn load(&self) -> Result<Option<AppState>, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        // an unreadable record is treated as no record
        match serde_json::from_str(&contents) {
            Ok(state) => Ok(Some(state)),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring corrupt state file");
                Ok(None)
            }
        }
    }

    fn save(&mut self, state: &AppState) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(state)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "state saved");
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
