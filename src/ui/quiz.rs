use super::layout::calculate_quiz_chunks;
use super::draw_help;
use crate::app::App;
use crate::timer::Scheduler;
use crate::utils::cursor_column;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const LOW_TIME_SECONDS: u32 = 60;

/// Digit keys that answer a question with `count` options, e.g. "1-3".
pub fn choice_keys_label(count: usize) -> String {
    if count <= 1 {
        "1".to_string()
    } else {
        format!("1-{}", count)
    }
}

pub fn draw_quiz<S: Scheduler>(f: &mut Frame, app: &App<S>) {
    let layout = calculate_quiz_chunks(f.area());
    let snapshot = app.controller.snapshot();
    let Some(question) = snapshot.question else {
        return;
    };
    let mode_title = app
        .controller
        .config()
        .map(|c| c.mode.title())
        .unwrap_or("Quiz");

    let time_style = if snapshot.remaining_seconds <= LOW_TIME_SECONDS {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(
                "Question {} / {} - {}",
                snapshot.index + 1,
                snapshot.total,
                mode_title
            ),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(format!("   Score {}   ", snapshot.score)),
        Span::styled(
            format!("Time {}", app.controller.formatted_time()),
            time_style,
        ),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let stem = Paragraph::new(Text::from(question.stem.as_str()))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(question.category.label()),
        );
    f.render_widget(stem, layout.question_area);

    if question.is_free_text() {
        let input = if app.input_buffer.is_empty() {
            Text::from(Span::styled(
                "[Type your answer here...]",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Text::from(app.input_buffer.as_str())
        };
        let answer = Paragraph::new(input)
            .block(Block::default().borders(Borders::ALL).title("Your Answer"));
        f.render_widget(answer, layout.answer_area);

        let column = cursor_column(&app.input_buffer, app.cursor_position) as u16;
        let max_x = layout.answer_area.right().saturating_sub(2);
        let cursor_x = (layout.answer_area.x + 1 + column).min(max_x);
        f.set_cursor_position((cursor_x, layout.answer_area.y + 1));
    } else {
        let lines: Vec<Line> = question
            .options()
            .iter()
            .enumerate()
            .map(|(i, option)| {
                Line::from(vec![
                    Span::styled(
                        format!("{}. ", i + 1),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::from(option.clone()),
                ])
            })
            .collect();
        let options = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Options"));
        f.render_widget(options, layout.answer_area);
    }

    let mut aids = Text::default();
    if let Some(feedback) = &app.last_feedback {
        let line = if feedback.correct {
            Line::from(Span::styled(
                "Previous: correct!",
                Style::default().fg(Color::Green),
            ))
        } else {
            Line::from(Span::styled(
                format!("Previous: wrong, the answer was {}", feedback.expected),
                Style::default().fg(Color::Red),
            ))
        };
        aids.push_line(line);
    }
    if snapshot.aids.show_hint {
        let hint = question.hint.as_deref().unwrap_or("No hint for this question");
        aids.push_line(Line::from(vec![
            Span::styled("Hint: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::from(hint.to_string()),
        ]));
    }
    if snapshot.aids.show_answer_key {
        aids.push_line(Line::from(vec![
            Span::styled(
                "Answer: ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(question.correct_answer().to_string()),
        ]));
    }
    let aids = Paragraph::new(aids)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(aids, layout.aids_area);

    let choice_keys = choice_keys_label(question.options().len());
    let answer_keys = if question.is_free_text() {
        ("Enter", "Submit")
    } else {
        (choice_keys.as_str(), "Answer")
    };
    draw_help(
        f,
        layout.help_area,
        &[
            answer_keys,
            ("Ctrl+H", "Hint"),
            ("Ctrl+K", "Answer key"),
            ("Ctrl+F", "Finish"),
            ("Esc", "Quit"),
        ],
    );
}

#[cfg(test)]
mod tests {
    use super::choice_keys_label;
    use crate::content::Script;
    use crate::models::{AppState, Category, Question, QuizConfig, QuizMode};
    use crate::ui::test_support::{render, test_app};

    #[test]
    fn test_choice_keys_label() {
        assert_eq!(choice_keys_label(1), "1");
        assert_eq!(choice_keys_label(2), "1-2");
        assert_eq!(choice_keys_label(4), "1-4");
    }

    #[test]
    fn test_help_matches_option_count() {
        let mut app = test_app();
        let question = Question::choice(
            "What is the reading of \"ぢ\"?".to_string(),
            vec!["ji".into(), "zu".into()],
            0,
            Category::Hiragana,
            Some("ji".into()),
        );
        let config = QuizConfig::new(QuizMode::Kana(Script::Hiragana), 1, 60).unwrap();
        app.controller.start(config, vec![question]).unwrap();
        app.state = AppState::Quiz;

        let screen = render(&app, 100, 30);
        assert!(screen.contains("1-2 Answer"));
        assert!(!screen.contains("1-4"));
    }

    #[test]
    fn test_choice_question_renders_options_and_timer() {
        let mut app = test_app();
        app.select_mode(QuizMode::Kana(Script::Hiragana));
        app.draft.count = 3;
        app.draft.minutes = 2;
        app.start_quiz();

        let screen = render(&app, 100, 30);
        assert!(screen.contains("Question 1 / 3 - Hiragana Drill"));
        assert!(screen.contains("Time 2:00"));
        assert!(screen.contains("Score 0"));
        let question = app.controller.snapshot().question.unwrap().clone();
        for (i, option) in question.options().iter().enumerate() {
            assert!(screen.contains(&format!("{}. {}", i + 1, option)));
        }
        assert!(!screen.contains("Hint:"));
    }

    #[test]
    fn test_aids_are_drawn_when_toggled() {
        let mut app = test_app();
        app.select_mode(QuizMode::Kana(Script::Katakana));
        app.start_quiz();
        app.controller.toggle_hint();
        app.controller.toggle_answer_key();

        let question = app.controller.snapshot().question.unwrap().clone();
        let screen = render(&app, 100, 30);
        assert!(screen.contains("Hint:"));
        assert!(screen.contains(&format!("Answer: {}", question.correct_answer())));
    }

    #[test]
    fn test_text_question_shows_input() {
        let mut app = test_app();
        app.select_mode(QuizMode::Translation);
        app.start_quiz();
        assert!(render(&app, 100, 30).contains("[Type your answer here...]"));

        for c in "watashi".chars() {
            app.insert_char(c);
        }
        let screen = render(&app, 100, 30);
        assert!(screen.contains("watashi"));
        assert!(screen.contains("Enter Submit"));
    }

    #[test]
    fn test_feedback_after_wrong_answer() {
        let mut app = test_app();
        app.select_mode(QuizMode::Kana(Script::Hiragana));
        app.draft.count = 2;
        app.start_quiz();
        let question = app.controller.snapshot().question.unwrap().clone();
        let wrong = (question.correct_index().unwrap() + 1) % question.options().len();
        app.answer_choice(wrong);

        let screen = render(&app, 120, 30);
        assert!(screen.contains(&format!(
            "Previous: wrong, the answer was {}",
            question.correct_answer()
        )));
    }
}
