use super::layout::calculate_screen_chunks;
use super::{draw_help, draw_title};
use crate::app::App;
use crate::content::{ContentProvider, GrammarKind, KanaGroup, Level, Script};
use crate::models::BrowseView;
use crate::timer::Scheduler;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const KANA_PER_ROW: usize = 5;

fn heading(text: String) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

fn placeholder(text: &mut Text<'static>, level: Level) {
    text.push_line(Line::from(Span::styled(
        format!("No entries for level {}", level.label()),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )));
}

fn kana_text(content: &ContentProvider) -> Text<'static> {
    let mut text = Text::default();
    for script in [Script::Hiragana, Script::Katakana] {
        let name = match script {
            Script::Hiragana => "Hiragana",
            Script::Katakana => "Katakana",
        };
        for group in KanaGroup::ALL {
            let kana = content.kana_group(script, group);
            if kana.is_empty() {
                continue;
            }
            text.push_line(heading(format!("{} - {}", name, group.label())));
            for row in kana.chunks(KANA_PER_ROW) {
                let cells: Vec<String> = row
                    .iter()
                    .map(|k| format!("{} {:<5}", k.char, k.romaji))
                    .collect();
                text.push_line(Line::from(cells.join(" ")));
            }
            text.push_line(Line::from(""));
        }
    }
    text
}

fn kanji_text(content: &ContentProvider, level: Level) -> Text<'static> {
    let mut text = Text::default();
    let kanji = content.kanji(level);
    if kanji.is_empty() {
        placeholder(&mut text, level);
    }
    for k in kanji {
        text.push_line(Line::from(vec![
            Span::styled(
                format!("{}  ", k.char),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::from(format!("on: {}  kun: {}  ", k.onyomi, k.kunyomi)),
            Span::styled(k.meaning.clone(), Style::default().fg(Color::Green)),
        ]));
    }
    text
}

fn grammar_text(content: &ContentProvider, level: Level, kind: GrammarKind) -> Text<'static> {
    let mut text = Text::default();
    let patterns = content.grammar(level, kind);
    if patterns.is_empty() {
        placeholder(&mut text, level);
    }
    for g in patterns {
        text.push_line(heading(g.title.clone()));
        text.push_line(Line::from(Span::styled(
            g.formula.clone(),
            Style::default().fg(Color::Cyan),
        )));
        text.push_line(Line::from(g.explanation.clone()));
        text.push_line(Line::from(Span::styled(
            format!("例: {}", g.example),
            Style::default().fg(Color::DarkGray),
        )));
        text.push_line(Line::from(""));
    }
    text
}

fn vocab_text(content: &ContentProvider, level: Level) -> Text<'static> {
    let mut text = Text::default();
    let words = content.vocab(level);
    if words.is_empty() {
        placeholder(&mut text, level);
    }
    for v in words {
        text.push_line(Line::from(vec![
            Span::styled(
                v.word.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::from(format!(" ({}) - ", v.reading)),
            Span::styled(v.meaning.clone(), Style::default().fg(Color::Green)),
        ]));
    }
    text
}

pub fn browse_text(content: &ContentProvider, view: BrowseView, level: Level) -> Text<'static> {
    match view {
        BrowseView::Kana => kana_text(content),
        BrowseView::Kanji => kanji_text(content, level),
        BrowseView::Grammar => grammar_text(content, level, GrammarKind::Pattern),
        BrowseView::Particles => grammar_text(content, level, GrammarKind::Particle),
        BrowseView::Vocab => vocab_text(content, level),
    }
}

pub fn draw_browse<S: Scheduler>(f: &mut Frame, app: &App<S>, view: BrowseView) {
    let layout = calculate_screen_chunks(f.area());

    let title = match view {
        BrowseView::Kana => view.title().to_string(),
        _ => format!("{} - Level {}", view.title(), app.level.label()),
    };
    draw_title(f, layout.title_area, title);

    let body = Paragraph::new(browse_text(&app.content, view, app.level))
        .wrap(Wrap { trim: false })
        .scroll((app.browse_scroll, 0))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(body, layout.body_area);

    draw_help(
        f,
        layout.help_area,
        &[("↑/↓", "Scroll"), ("l", "Toggle level"), ("Esc", "Back")],
    );
}
