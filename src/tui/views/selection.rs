use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::engine::models::Reveal;
use crate::engine::Exchange;
use crate::tui::app::SelectionUIState;
use super::render_notice;

pub fn render_buddy_selection(f: &mut Frame, ui_state: &SelectionUIState, exchange: &Exchange) {
    let area = f.area();

    let outer = Block::default()
        .title(Span::styled(
            "Select Your Buddy",
            Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightRed));
    f.render_widget(outer.clone(), area);
    let size = outer.inner(area);

    if exchange.participants().len() < 2 {
        render_not_enough(f, size);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress
            Constraint::Min(5),    // Names or revealed buddy
            Constraint::Length(3), // Notice
            Constraint::Length(2), // Footer
        ])
        .split(size);

    let progress = format!(
        "Revealed {}/{} | Policy: {}",
        exchange.revealed_count(),
        exchange.participants().len(),
        exchange.policy()
    );
    let progress_para = Paragraph::new(progress)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(progress_para, chunks[0]);

    match &ui_state.revealed {
        Some(reveal) => render_revealed(f, chunks[1], reveal),
        None => render_name_picker(f, chunks[1], ui_state, exchange),
    }

    render_notice(f, chunks[2], ui_state.notice.as_ref());

    let footer = if ui_state.revealed.is_some() {
        "Enter/X: clear selection  R: reset all  Esc: back"
    } else {
        "↑/↓: who are you?  Enter: reveal  R: reset all  Esc: back"
    };
    let footer = Paragraph::new(footer)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(footer, chunks[3]);
}

fn render_name_picker(f: &mut Frame, area: Rect, ui_state: &SelectionUIState, exchange: &Exchange) {
    let items: Vec<ListItem> = exchange
        .participants()
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
            let done = if exchange.assignments().contains_key(name) { " ✓" } else { "" };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Yellow)),
                Span::styled(name.as_str(), style),
                Span::styled(done, Style::default().fg(Color::Green)),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title("Who are you?"));
    f.render_widget(list, area);
}

fn render_revealed(f: &mut Frame, area: Rect, reveal: &Reveal) {
    let message = Paragraph::new(vec![
        Line::from(format!("{}, your Secret Santa buddy is:", reveal.giver)),
        Line::from(""),
        Line::from(Span::styled(
            reveal.receiver.as_str(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Remember to keep it secret!",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    f.render_widget(message, area);
}

fn render_not_enough(f: &mut Frame, area: Rect) {
    let message = Paragraph::new(vec![
        Line::from(""),
        Line::from("You need at least 2 participants to start the buddy selection."),
        Line::from(""),
        Line::from(Span::styled(
            "Add participants from the main menu. Press Esc to go back.",
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(message, area);
}
