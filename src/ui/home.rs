use super::layout::calculate_screen_chunks;
use super::{draw_help, draw_title};
use crate::app::{App, HomeEntry, HOME_ENTRIES};
use crate::models::BrowseView;
use crate::timer::Scheduler;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

fn entry_description(entry: HomeEntry) -> &'static str {
    match entry {
        HomeEntry::Browse(view) => match view {
            BrowseView::Kana => "Hiragana and katakana charts",
            BrowseView::Kanji => "Kanji with readings and meanings",
            BrowseView::Grammar => "Sentence patterns with examples",
            BrowseView::Particles => "Particles and how they are used",
            BrowseView::Vocab => "Word list with readings",
        },
        HomeEntry::Quiz => "Timed quizzes over the material",
    }
}

pub fn draw_home<S: Scheduler>(f: &mut Frame, app: &App<S>) {
    let layout = calculate_screen_chunks(f.area());

    draw_title(
        f,
        layout.title_area,
        format!("Nihongo Quiz - Level {}", app.level.label()),
    );

    let items: Vec<ListItem> = HOME_ENTRIES
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let selected = i == app.home_index;
            let marker = if selected { "> " } else { "  " };
            let style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}{:<12}", marker, entry.label()), style),
                Span::styled(
                    entry_description(*entry),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Menu")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(list, layout.body_area);

    draw_help(
        f,
        layout.help_area,
        &[
            ("↑/↓", "Navigate"),
            ("Enter", "Open"),
            ("l", "Toggle level"),
            ("q", "Quit"),
        ],
    );
}
