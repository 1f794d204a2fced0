use super::layout::{calculate_screen_chunks, centered_rect};
use super::{draw_help, draw_title};
use crate::app::{App, ConfigField};
use crate::config::{MAX_COUNT, MAX_MINUTES};
use crate::models::QuizMode;
use crate::timer::Scheduler;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw_quiz_menu<S: Scheduler>(f: &mut Frame, app: &App<S>) {
    let layout = calculate_screen_chunks(f.area());
    draw_title(f, layout.title_area, "Choose a Quiz".to_string());

    let items: Vec<ListItem> = QuizMode::ALL
        .iter()
        .enumerate()
        .map(|(i, mode)| {
            let selected = i == app.menu_index;
            let style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if selected { "> " } else { "  " };
            ListItem::new(Text::from(vec![
                Line::from(Span::styled(format!("{}{}", marker, mode.title()), style)),
                Line::from(Span::styled(
                    format!("    {}", mode.description()),
                    Style::default().fg(Color::DarkGray),
                )),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(list, layout.body_area);

    draw_help(
        f,
        layout.help_area,
        &[("↑/↓", "Navigate"), ("Enter", "Configure"), ("Esc", "Back")],
    );
}

fn field_line(label: &str, value: String, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let arrows = if focused { ("◀ ", " ▶") } else { ("  ", "  ") };
    Line::from(vec![
        Span::from(format!("{:<12}", label)),
        Span::styled(format!("{}{}{}", arrows.0, value, arrows.1), style),
    ])
}

pub fn draw_quiz_config<S: Scheduler>(f: &mut Frame, app: &App<S>) {
    let layout = calculate_screen_chunks(f.area());
    let title = app
        .selected_mode
        .map(|mode| mode.title())
        .unwrap_or("Quiz");
    draw_title(f, layout.title_area, format!("{} - Settings", title));

    let mut text = Text::default();
    text.push_line(Line::from(""));
    text.push_line(field_line(
        "Minutes",
        format!("{} (1-{})", app.draft.minutes, MAX_MINUTES),
        app.draft.field == ConfigField::Minutes,
    ));
    text.push_line(Line::from(""));
    text.push_line(field_line(
        "Questions",
        format!("{} (1-{})", app.draft.count, MAX_COUNT),
        app.draft.field == ConfigField::Count,
    ));
    if let Some(message) = &app.message {
        text.push_line(Line::from(""));
        text.push_line(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        )));
    }

    let panel = centered_rect(50, 9, layout.body_area);
    let form = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Quiz settings")
                .border_style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(form, panel);

    draw_help(
        f,
        layout.help_area,
        &[
            ("Tab", "Switch field"),
            ("←/→", "Adjust"),
            ("Enter", "Start"),
            ("Esc", "Back"),
        ],
    );
}

#[cfg(test)]
mod tests {
    use crate::models::{AppState, QuizMode};
    use crate::ui::test_support::{render, test_app};

    #[test]
    fn test_menu_lists_all_modes() {
        let mut app = test_app();
        app.set_state(AppState::QuizMenu);
        let screen = render(&app, 80, 30);
        for mode in QuizMode::ALL {
            assert!(screen.contains(mode.title()), "missing {}", mode.title());
        }
        assert!(screen.contains("> Hiragana Drill"));
    }

    #[test]
    fn test_config_screen_shows_draft() {
        let mut app = test_app();
        app.select_mode(QuizMode::Translation);
        app.draft.minutes = 7;
        app.draft.count = 12;
        let screen = render(&app, 80, 24);
        assert!(screen.contains("Translation - Settings"));
        assert!(screen.contains("7 (1-60)"));
        assert!(screen.contains("12 (1-50)"));
    }

    #[test]
    fn test_config_screen_shows_message() {
        let mut app = test_app();
        app.select_mode(QuizMode::Translation);
        app.message = Some("No content available".to_string());
        let screen = render(&app, 80, 24);
        assert!(screen.contains("No content available"));
    }
}
