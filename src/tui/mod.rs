pub mod app;
pub mod input;
pub mod views;

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Terminal,
};

use crate::session::Session;
use crate::storage::StateStore;
use app::{InputAction, ManageUIState, SelectionUIState};
use input::{handle_manage_input, handle_selection_input};
use views::{render_buddy_selection, render_manage_participants};

type Term = Terminal<CrosstermBackend<Stdout>>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StartAction {
    ManageParticipants,
    SelectBuddy,
    Quit,
}

const TITLE: &[&str] = &[
    r" ___         _    _            ___              _                ",
    r"| _ )_  _ __| |__| |_  _      / __|__ _ _ __ __| |_ _  _ _ _ ___  ",
    r"| _ \ || / _` / _` | || |    | (__/ _` | '_ \  _|  _| || | '_/ -_) ",
    r"|___/\_,_\__,_\__,_|\_, |     \___\__,_| .__/\__|\__|\_,_|_| \___| ",
    r"                   |__/                |_|                        ",
];

const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Run the menu and screens until the user quits.
pub fn run_app<S: StateStore>(session: &mut Session<S>) -> io::Result<()> {
    enable_raw_mode()?;
    execute!(io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let result = run_screens(&mut terminal, session);

    // Restore terminal
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();
    result
}

fn run_screens<S: StateStore>(terminal: &mut Term, session: &mut Session<S>) -> io::Result<()> {
    loop {
        match run_start_page(terminal)? {
            StartAction::ManageParticipants => run_manage_participants(terminal, session)?,
            StartAction::SelectBuddy => run_buddy_selection(terminal, session)?,
            StartAction::Quit => return Ok(()),
        }
    }
}

/// Next key press, or `None` if nothing arrived within the poll interval.
fn next_key() -> io::Result<Option<KeyCode>> {
    if event::poll(POLL_INTERVAL)? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(Some(key.code));
            }
        }
    }
    Ok(None)
}

fn run_start_page(terminal: &mut Term) -> io::Result<StartAction> {
    let mut selected: usize = 0;
    let options = [
        ("Manage participants", StartAction::ManageParticipants),
        ("Select your buddy", StartAction::SelectBuddy),
        ("Quit", StartAction::Quit),
    ];

    loop {
        terminal.draw(|f| {
            let area = f.area();
            let outer = Block::default()
                .title(Span::styled(
                    "Main Menu",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan));
            f.render_widget(outer.clone(), area);
            let size = outer.inner(area);

            let title_lines = TITLE.len() as u16 + 2;
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(title_lines.min(size.height.saturating_sub(4))),
                    Constraint::Min(3),
                    Constraint::Length(2),
                ])
                .split(size);

            let mut title = Text::from(TITLE.iter().map(|l| Line::from(*l)).collect::<Vec<_>>());
            title.lines.push(Line::from(""));
            title.lines.push(Line::from(Span::styled(
                "New Year's Gift Exchange Made Easy",
                Style::default().fg(Color::Gray),
            )));
            let title = Paragraph::new(title)
                .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center);
            f.render_widget(title, chunks[0]);

            // Menu
            let items: Vec<ListItem> = options
                .iter()
                .enumerate()
                .map(|(i, (label, _))| {
                    let style = if i == selected {
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    let marker = if i == selected { "▶ " } else { "  " };
                    ListItem::new(vec![
                        Line::from(vec![Span::styled(marker, style), Span::styled(*label, style)]),
                        Line::from(""),
                    ])
                })
                .collect();
            f.render_widget(List::new(items).block(Block::default()), chunks[1]);

            // Footer
            let footer = Paragraph::new(Line::from(vec![
                Span::styled("↑/↓", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                Span::raw(" to navigate  "),
                Span::styled("Enter", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
                Span::raw(" to select  "),
                Span::styled("Q", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
                Span::raw(" to quit"),
            ]))
            .alignment(Alignment::Center);
            f.render_widget(footer, chunks[2]);
        })?;

        match next_key()? {
            Some(KeyCode::Char('q')) | Some(KeyCode::Esc) => return Ok(StartAction::Quit),
            Some(KeyCode::Up) => {
                if selected == 0 { selected = options.len() - 1; } else { selected -= 1; }
            }
            Some(KeyCode::Down) => selected = (selected + 1) % options.len(),
            Some(KeyCode::Enter) => return Ok(options[selected].1),
            _ => {}
        }
    }
}

fn run_manage_participants<S: StateStore>(terminal: &mut Term, session: &mut Session<S>) -> io::Result<()> {
    let mut ui_state = ManageUIState::new(session.exchange());
    loop {
        terminal.draw(|f| render_manage_participants(f, &ui_state, session.exchange()))?;
        if let Some(key_code) = next_key()? {
            if let InputAction::Back = handle_manage_input(key_code, &mut ui_state, session) {
                return Ok(());
            }
        }
    }
}

fn run_buddy_selection<S: StateStore>(terminal: &mut Term, session: &mut Session<S>) -> io::Result<()> {
    let mut ui_state = SelectionUIState::new();
    loop {
        terminal.draw(|f| render_buddy_selection(f, &ui_state, session.exchange()))?;
        if let Some(key_code) = next_key()? {
            if let InputAction::Back = handle_selection_input(key_code, &mut ui_state, session) {
                return Ok(());
            }
        }
    }
}
