use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::engine::Exchange;
use crate::tui::app::ManageUIState;
use super::render_notice;

pub fn render_manage_participants(f: &mut Frame, ui_state: &ManageUIState, exchange: &Exchange) {
    let area = f.area();

    let outer = Block::default()
        .title(Span::styled(
            "Manage Participants",
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    f.render_widget(outer.clone(), area);
    let size = outer.inner(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name input
            Constraint::Min(5),    // Participant list
            Constraint::Length(3), // Notice
            Constraint::Length(2), // Footer
        ])
        .split(size);

    let input_display = if ui_state.input.is_empty() {
        "_".to_string()
    } else {
        format!("{}_", ui_state.input)
    };
    let input = Paragraph::new(input_display)
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL).title("Add Participant Name"));
    f.render_widget(input, chunks[0]);

    let mut items: Vec<ListItem> = ui_state
        .draft
        .names()
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let selected = i == ui_state.highlight_index;
            let style = if selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if selected { "▶ " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                Span::styled(name.as_str(), style),
            ]))
        })
        .collect();
    if items.is_empty() {
        items.push(ListItem::new(Span::styled(
            "No participants yet. Type a name above!",
            Style::default().fg(Color::Gray),
        )));
    }
    let title = format!("Participants ({})", ui_state.draft.len());
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, chunks[1]);

    if ui_state.notice.is_some() {
        render_notice(f, chunks[2], ui_state.notice.as_ref());
    } else if ui_state.has_changes(exchange) && !ui_state.draft.is_empty() {
        let unsaved = Paragraph::new("You have unsaved changes. Press F2 to save.")
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(unsaved, chunks[2]);
    }

    let footer = Paragraph::new("Enter: add  ↑/↓: select  Del: remove  F2: save all  F8: clear all  Esc: back")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(footer, chunks[3]);
}
