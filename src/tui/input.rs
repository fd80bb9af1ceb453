use crossterm::event::KeyCode;

use crate::engine::ExchangeError;
use crate::session::{Session, SessionError};
use crate::storage::StateStore;
use crate::tui::app::{InputAction, ManageUIState, Notice, SelectionUIState, MAX_NAME_LEN};

pub fn handle_manage_input<S: StateStore>(
    key_code: KeyCode,
    ui_state: &mut ManageUIState,
    session: &mut Session<S>,
) -> InputAction {
    if ui_state.confirm_clear {
        ui_state.confirm_clear = false;
        if matches!(key_code, KeyCode::Char('y') | KeyCode::Char('Y')) {
            ui_state.draft.clear();
            ui_state.highlight_index = 0;
            ui_state.notice = Some(match session.clear() {
                Ok(()) => Notice::Info("All participants cleared".to_string()),
                Err(e) => Notice::Error(e.to_string()),
            });
        } else {
            ui_state.notice = None;
        }
        return InputAction::Continue;
    }

    match key_code {
        KeyCode::Esc => InputAction::Back,
        KeyCode::Char(c) => {
            if ui_state.input.chars().count() < MAX_NAME_LEN {
                ui_state.input.push(c);
            }
            InputAction::Continue
        }
        KeyCode::Backspace => {
            ui_state.input.pop();
            InputAction::Continue
        }
        KeyCode::Enter => {
            handle_add_name(ui_state);
            InputAction::Continue
        }
        KeyCode::Up => {
            if !ui_state.draft.is_empty() {
                if ui_state.highlight_index == 0 {
                    ui_state.highlight_index = ui_state.draft.len() - 1;
                } else {
                    ui_state.highlight_index -= 1;
                }
            }
            InputAction::Continue
        }
        KeyCode::Down => {
            if !ui_state.draft.is_empty() {
                ui_state.highlight_index = (ui_state.highlight_index + 1) % ui_state.draft.len();
            }
            InputAction::Continue
        }
        KeyCode::Delete => {
            if let Some(name) = ui_state.highlighted().map(str::to_string) {
                ui_state.draft.remove(&name);
                ui_state.clamp_highlight();
                ui_state.notice = Some(Notice::Info(format!("Removed {name}")));
            }
            InputAction::Continue
        }
        KeyCode::F(2) => {
            handle_save(ui_state, session);
            InputAction::Continue
        }
        KeyCode::F(8) => {
            if !ui_state.draft.is_empty() {
                ui_state.confirm_clear = true;
                ui_state.notice = Some(Notice::Warning(
                    "Clear all participants? Press Y to confirm".to_string(),
                ));
            }
            InputAction::Continue
        }
        _ => InputAction::Continue,
    }
}

fn handle_add_name(ui_state: &mut ManageUIState) {
    let input = std::mem::take(&mut ui_state.input);
    match ui_state.draft.add(&input) {
        Ok(name) => {
            ui_state.notice = Some(Notice::Info(format!("Added {name}")));
            ui_state.highlight_index = ui_state.draft.len() - 1;
        }
        Err(ExchangeError::EmptyName) => {}
        Err(e) => {
            ui_state.notice = Some(Notice::Warning(e.to_string()));
            ui_state.input = input;
        }
    }
}

fn handle_save<S: StateStore>(ui_state: &mut ManageUIState, session: &mut Session<S>) {
    if ui_state.draft.is_empty() || !ui_state.has_changes(session.exchange()) {
        return;
    }
    ui_state.notice = Some(match session.replace_participants(ui_state.draft.names()) {
        Ok(()) => Notice::Info(format!(
            "Saved {} participants, assignments reset",
            ui_state.draft.len()
        )),
        Err(e) => Notice::Error(e.to_string()),
    });
}

pub fn handle_selection_input<S: StateStore>(
    key_code: KeyCode,
    ui_state: &mut SelectionUIState,
    session: &mut Session<S>,
) -> InputAction {
    if ui_state.confirm_reset {
        ui_state.confirm_reset = false;
        if matches!(key_code, KeyCode::Char('y') | KeyCode::Char('Y')) {
            ui_state.clear_selection();
            ui_state.notice = Some(match session.reset_assignments() {
                Ok(()) => Notice::Info("All assignments reset".to_string()),
                Err(e) => Notice::Error(e.to_string()),
            });
        } else {
            ui_state.notice = None;
        }
        return InputAction::Continue;
    }

    let participant_count = session.exchange().participants().len();

    match key_code {
        KeyCode::Esc | KeyCode::Char('q') => InputAction::Back,
        _ if participant_count < 2 => InputAction::Continue,
        KeyCode::Up if ui_state.revealed.is_none() => {
            if ui_state.highlight_index == 0 {
                ui_state.highlight_index = participant_count - 1;
            } else {
                ui_state.highlight_index -= 1;
            }
            ui_state.notice = None;
            InputAction::Continue
        }
        KeyCode::Down if ui_state.revealed.is_none() => {
            ui_state.highlight_index = (ui_state.highlight_index + 1) % participant_count;
            ui_state.notice = None;
            InputAction::Continue
        }
        KeyCode::Enter => {
            if ui_state.revealed.is_some() {
                ui_state.clear_selection();
            } else {
                handle_reveal(ui_state, session);
            }
            InputAction::Continue
        }
        KeyCode::Char('x') => {
            ui_state.clear_selection();
            InputAction::Continue
        }
        KeyCode::Char('r') => {
            if session.exchange().revealed_count() > 0 {
                ui_state.confirm_reset = true;
                ui_state.notice = Some(Notice::Warning(
                    "Reset all buddy assignments? Press Y to confirm".to_string(),
                ));
            }
            InputAction::Continue
        }
        _ => InputAction::Continue,
    }
}

fn handle_reveal<S: StateStore>(ui_state: &mut SelectionUIState, session: &mut Session<S>) {
    let Some(giver) = session
        .exchange()
        .participants()
        .get(ui_state.highlight_index)
        .cloned()
    else {
        return;
    };

    match session.reveal(&giver) {
        Ok(reveal) => {
            ui_state.notice = reveal.regenerated.then(|| {
                Notice::Warning("Assignments were redealt, earlier reveals no longer hold".to_string())
            });
            ui_state.revealed = Some(reveal);
        }
        Err(SessionError::Exchange(ExchangeError::NoEligibleReceiver(name))) => {
            ui_state.notice = Some(Notice::Error(format!(
                "No buddy could be assigned to {name}. Press R to reset all assignments."
            )));
        }
        Err(e) => {
            tracing::error!(error = %e, "reveal failed");
            ui_state.notice = Some(Notice::Error(e.to_string()));
        }
    }
}
