use crate::content::{Level, Script};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// What a question is checked against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum AnswerKey {
    Choice {
        options: Vec<String>,
        correct_index: usize,
    },
    Text {
        expected: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    Hiragana,
    Katakana,
    Kanji,
    Vocab,
    Translation,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Hiragana => "HIRAGANA",
            Category::Katakana => "KATAKANA",
            Category::Kanji => "Kanji",
            Category::Vocab => "Vocab",
            Category::Translation => "Translation",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub stem: String,
    pub key: AnswerKey,
    pub category: Category,
    pub hint: Option<String>,
}

impl Question {
    pub fn choice(
        stem: String,
        options: Vec<String>,
        correct_index: usize,
        category: Category,
        hint: Option<String>,
    ) -> Self {
        debug_assert!(correct_index < options.len());
        Self {
            stem,
            key: AnswerKey::Choice {
                options,
                correct_index,
            },
            category,
            hint,
        }
    }

    pub fn text(stem: String, expected: String, category: Category, hint: Option<String>) -> Self {
        Self {
            stem,
            key: AnswerKey::Text { expected },
            category,
            hint,
        }
    }

    /// Empty for free-text questions.
    pub fn options(&self) -> &[String] {
        match &self.key {
            AnswerKey::Choice { options, .. } => options,
            AnswerKey::Text { .. } => &[],
        }
    }

    pub fn correct_index(&self) -> Option<usize> {
        match &self.key {
            AnswerKey::Choice { correct_index, .. } => Some(*correct_index),
            AnswerKey::Text { .. } => None,
        }
    }

    pub fn expected_text(&self) -> Option<&str> {
        match &self.key {
            AnswerKey::Choice { .. } => None,
            AnswerKey::Text { expected } => Some(expected),
        }
    }

    pub fn is_free_text(&self) -> bool {
        matches!(self.key, AnswerKey::Text { .. })
    }

    /// The string a learner should have produced, for the answer key and review.
    pub fn correct_answer(&self) -> &str {
        match &self.key {
            AnswerKey::Choice {
                options,
                correct_index,
            } => options[*correct_index].as_str(),
            AnswerKey::Text { expected } => expected,
        }
    }
}

/// Restricts a character-set quiz to one kind of sub-question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixedFocus {
    Kanji,
    Vocab,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizMode {
    Kana(Script),
    CharacterSet {
        level: Level,
        focus: Option<MixedFocus>,
    },
    Translation,
}

impl QuizMode {
    pub const ALL: [QuizMode; 7] = [
        QuizMode::Kana(Script::Hiragana),
        QuizMode::Kana(Script::Katakana),
        QuizMode::CharacterSet {
            level: Level::N5,
            focus: None,
        },
        QuizMode::CharacterSet {
            level: Level::N4,
            focus: None,
        },
        QuizMode::CharacterSet {
            level: Level::N5,
            focus: Some(MixedFocus::Kanji),
        },
        QuizMode::CharacterSet {
            level: Level::N5,
            focus: Some(MixedFocus::Vocab),
        },
        QuizMode::Translation,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            QuizMode::Kana(Script::Hiragana) => "hiragana",
            QuizMode::Kana(Script::Katakana) => "katakana",
            QuizMode::CharacterSet {
                level: Level::N5,
                focus: None,
            } => "jlpt-n5",
            QuizMode::CharacterSet {
                level: Level::N4,
                focus: None,
            } => "jlpt-n4",
            QuizMode::CharacterSet {
                focus: Some(MixedFocus::Kanji),
                ..
            } => "kanji-practice",
            QuizMode::CharacterSet {
                focus: Some(MixedFocus::Vocab),
                ..
            } => "vocab-practice",
            QuizMode::Translation => "translation",
        }
    }

    pub fn from_key(key: &str) -> Option<QuizMode> {
        QuizMode::ALL.into_iter().find(|mode| mode.key() == key)
    }

    pub fn title(&self) -> &'static str {
        match self.key() {
            "hiragana" => "Hiragana Drill",
            "katakana" => "Katakana Drill",
            "jlpt-n5" => "JLPT N5 Simulation",
            "jlpt-n4" => "JLPT N4 Simulation",
            "kanji-practice" => "Kanji Practice",
            "vocab-practice" => "Vocabulary Practice",
            _ => "Translation",
        }
    }

    pub fn description(&self) -> &'static str {
        match self.key() {
            "hiragana" => "Pick the romaji reading of a hiragana glyph",
            "katakana" => "Pick the romaji reading of a katakana glyph",
            "jlpt-n5" => "Mixed N5 kanji and vocabulary questions",
            "jlpt-n4" => "Mixed N4 kanji and vocabulary questions",
            "kanji-practice" => "N5 kanji meanings and on'yomi",
            "vocab-practice" => "N5 vocabulary readings and meanings",
            _ => "Type translations of example sentences",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("a quiz needs at least one question")]
    NoItems,
    #[error("a quiz needs at least one second on the clock")]
    NoTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizConfig {
    pub mode: QuizMode,
    pub item_count: usize,
    pub duration_seconds: u32,
}

impl QuizConfig {
    pub fn new(
        mode: QuizMode,
        item_count: usize,
        duration_seconds: u32,
    ) -> Result<Self, ConfigError> {
        if item_count == 0 {
            return Err(ConfigError::NoItems);
        }
        if duration_seconds == 0 {
            return Err(ConfigError::NoTime);
        }
        Ok(Self {
            mode,
            item_count,
            duration_seconds,
        })
    }

    pub fn from_minutes(mode: QuizMode, item_count: usize, minutes: u32) -> Result<Self, ConfigError> {
        Self::new(mode, item_count, minutes.saturating_mul(60))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum QuizStatus {
    Configuring,
    Active,
    Finished,
}

/// Per-question aids; never carried over to the next question.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuestionAids {
    pub show_hint: bool,
    pub show_answer_key: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub question_index: usize,
    pub given: String,
    pub correct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseView {
    Kana,
    Kanji,
    Grammar,
    Particles,
    Vocab,
}

impl BrowseView {
    pub fn title(&self) -> &'static str {
        match self {
            BrowseView::Kana => "Kana",
            BrowseView::Kanji => "Kanji",
            BrowseView::Grammar => "Grammar (Bunpou)",
            BrowseView::Particles => "Particles",
            BrowseView::Vocab => "Vocabulary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Home,
    Browse(BrowseView),
    QuizMenu,
    QuizConfig,
    Quiz,
    Summary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_keys_round_trip() {
        for mode in QuizMode::ALL {
            assert_eq!(QuizMode::from_key(mode.key()), Some(mode));
        }
        assert_eq!(QuizMode::from_key("romaji-speedrun"), None);
    }

    #[test]
    fn test_quiz_config_rejects_zero() {
        let mode = QuizMode::Translation;
        assert_eq!(QuizConfig::new(mode, 0, 60), Err(ConfigError::NoItems));
        assert_eq!(QuizConfig::new(mode, 5, 0), Err(ConfigError::NoTime));
        let config = QuizConfig::from_minutes(mode, 5, 2).unwrap();
        assert_eq!(config.duration_seconds, 120);
    }

    #[test]
    fn test_question_accessors() {
        let q = Question::choice(
            "What is the reading of \"か\"?".to_string(),
            vec!["ki".into(), "ka".into(), "ko".into(), "ku".into()],
            1,
            Category::Hiragana,
            Some("ka".into()),
        );
        assert_eq!(q.options().len(), 4);
        assert_eq!(q.correct_index(), Some(1));
        assert_eq!(q.expected_text(), None);
        assert_eq!(q.correct_answer(), "ka");
        assert!(!q.is_free_text());

        let t = Question::text(
            "Write the romaji for: \"saya makan\"".into(),
            "watashi wa tabemasu".into(),
            Category::Translation,
            None,
        );
        assert!(t.options().is_empty());
        assert_eq!(t.correct_index(), None);
        assert_eq!(t.expected_text(), Some("watashi wa tabemasu"));
        assert!(t.is_free_text());
    }

    #[test]
    fn test_status_orders_forward() {
        assert!(QuizStatus::Configuring < QuizStatus::Active);
        assert!(QuizStatus::Active < QuizStatus::Finished);
    }
}
