pub mod manage;
pub mod selection;

pub use manage::render_manage_participants;
pub use selection::render_buddy_selection;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::Notice;

fn render_notice(f: &mut Frame, area: Rect, notice: Option<&Notice>) {
    let Some(notice) = notice else {
        return;
    };
    let (text, color) = match notice {
        Notice::Info(text) => (text, Color::Green),
        Notice::Warning(text) => (text, Color::Yellow),
        Notice::Error(text) => (text, Color::Red),
    };
    let para = Paragraph::new(text.as_str())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(para, area);
}
