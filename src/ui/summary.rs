use super::layout::calculate_summary_chunks;
use super::{draw_help, draw_title};
use crate::app::App;
use crate::timer::Scheduler;
use crate::utils::truncate_string;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn percentage(score: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((score as f64 / total as f64) * 100.0).round() as u32
}

pub fn draw_summary<S: Scheduler>(f: &mut Frame, app: &App<S>) {
    let layout = calculate_summary_chunks(f.area());
    let session = app.controller.session();
    let total = session.questions().len();
    let mode_title = app
        .controller
        .config()
        .map(|c| c.mode.title())
        .unwrap_or("Quiz");

    draw_title(f, layout.header_area, format!("Session Summary - {}", mode_title));

    let pct = percentage(session.score(), total);
    let grade_style = if pct >= 80 {
        Style::default().fg(Color::Green)
    } else if pct >= 50 {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Red)
    };
    let mut score_text = Text::default();
    score_text.push_line(Line::from(vec![
        Span::styled("Score: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("{} / {} ({}%)", session.score(), total, pct),
            grade_style.add_modifier(Modifier::BOLD),
        ),
    ]));
    score_text.push_line(Line::from(format!(
        "Answered: {}   Time left: {}",
        session.responses().len(),
        app.controller.formatted_time()
    )));
    let score = Paragraph::new(score_text).block(Block::default().borders(Borders::ALL));
    f.render_widget(score, layout.score_area);

    let width = layout.review_area.width.saturating_sub(4) as usize;
    let mut review = Text::default();
    for (i, question) in session.questions().iter().enumerate() {
        let response = session.responses().iter().find(|r| r.question_index == i);
        let (marker, style) = match response {
            Some(r) if r.correct => ("[✓]", Style::default().fg(Color::Green)),
            Some(_) => ("[✗]", Style::default().fg(Color::Red)),
            None => ("[ ]", Style::default().fg(Color::DarkGray)),
        };
        review.push_line(Line::from(vec![
            Span::styled(format!("{} ", marker), style),
            Span::from(truncate_string(
                &format!("{}. {}", i + 1, question.stem),
                width.saturating_sub(4),
            )),
        ]));
        let given = response.map(|r| r.given.as_str()).unwrap_or("-");
        review.push_line(Line::from(truncate_string(
            &format!("    Your answer: {}   Correct: {}", given, question.correct_answer()),
            width,
        )));
    }
    let review = Paragraph::new(review)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Review"));
    f.render_widget(review, layout.review_area);

    draw_help(
        f,
        layout.footer_area,
        &[("r", "Retry"), ("m", "Quiz Menu"), ("q", "Quit")],
    );
}
