//! Persistence of the participant list and the assignment mapping.
//!
//! The engine never touches storage; callers save after each operation.

pub mod file;
pub mod memory;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::models::Assignments;

pub use file::FileStore;
pub use memory::MemoryStore;

/// The persisted record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub participants: Vec<String>,
    pub assignments: Assignments,
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not encode state: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub trait StateStore {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<AppState>, StorageError>;
    fn save(&mut self, state: &AppState) -> Result<(), StorageError>;
    fn clear(&mut self) -> Result<(), StorageError>;
}
