use super::{AppState, StateStore, StorageError};

/// Keeps the record in memory only.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Option<AppState>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: AppState) -> Self {
        Self { state: Some(state), saves: 0 }
    }

    /// Number of successful saves so far.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Result<Option<AppState>, StorageError> {
        Ok(self.state.clone())
    }

    fn save(&mut self, state: &AppState) -> Result<(), StorageError> {
        self.state = Some(state.clone());
        self.saves += 1;
        Ok(())
    }

    fn clear(&mut self) -> Result<(), StorageError> {
        self.state = None;
        Ok(())
    }
}
