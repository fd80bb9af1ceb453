use crate::engine::models::{Reveal, Roster};
use crate::engine::Exchange;

pub const MAX_NAME_LEN: usize = 30;

pub enum InputAction {
    Back,
    Continue,
}

/// Status line shown under a screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Warning(String),
    Error(String),
}

/// Participant manager: edits a draft that is only stored on save.
pub struct ManageUIState {
    pub draft: Roster,
    pub input: String,
    pub highlight_index: usize,
    pub confirm_clear: bool,
    pub notice: Option<Notice>,
}

impl ManageUIState {
    pub fn new(exchange: &Exchange) -> Self {
        Self {
            draft: exchange.roster().clone(),
            input: String::new(),
            highlight_index: 0,
            confirm_clear: false,
            notice: None,
        }
    }

    pub fn has_changes(&self, exchange: &Exchange) -> bool {
        self.draft.names() != exchange.participants()
    }

    pub fn highlighted(&self) -> Option<&str> {
        self.draft.names().get(self.highlight_index).map(String::as_str)
    }

    pub fn clamp_highlight(&mut self) {
        if self.highlight_index >= self.draft.len() {
            self.highlight_index = self.draft.len().saturating_sub(1);
        }
    }
}

/// Buddy reveal screen.
pub struct SelectionUIState {
    pub highlight_index: usize,
    pub revealed: Option<Reveal>,
    pub confirm_reset: bool,
    pub notice: Option<Notice>,
}

impl SelectionUIState {
    pub fn new() -> Self {
        Self {
            highlight_index: 0,
            revealed: None,
            confirm_reset: false,
            notice: None,
        }
    }

    pub fn clear_selection(&mut self) {
        self.revealed = None;
        self.notice = None;
    }
}

impl Default for SelectionUIState {
    fn default() -> Self {
        Self::new()
    }
}
