mod browse;
mod home;
pub mod layout;
mod quiz;
mod quiz_menu;
mod summary;

pub use browse::draw_browse;
pub use home::draw_home;
pub use layout::{calculate_quiz_chunks, calculate_screen_chunks, calculate_summary_chunks};
pub use quiz::draw_quiz;
pub use quiz_menu::{draw_quiz_config, draw_quiz_menu};
pub use summary::draw_summary;

use crate::app::App;
use crate::models::AppState;
use crate::timer::Scheduler;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw<S: Scheduler>(f: &mut Frame, app: &App<S>) {
    match app.state {
        AppState::Home => draw_home(f, app),
        AppState::Browse(view) => draw_browse(f, app, view),
        AppState::QuizMenu => draw_quiz_menu(f, app),
        AppState::QuizConfig => draw_quiz_config(f, app),
        AppState::Quiz => draw_quiz(f, app),
        AppState::Summary => draw_summary(f, app),
    }
}

fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// One line of "key description" pairs for the help bar.
fn help_line(entries: &[(&str, &str)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(entries.len() * 2);
    for (key, description) in entries {
        spans.push(Span::styled(key.to_string(), key_style()));
        spans.push(Span::from(format!(" {}  ", description)));
    }
    Line::from(spans)
}

fn draw_title(f: &mut Frame, area: Rect, title: String) {
    let header = Paragraph::new(title)
        .style(key_style())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, area);
}

fn draw_help(f: &mut Frame, area: Rect, entries: &[(&str, &str)]) {
    let help = Paragraph::new(help_line(entries))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}
