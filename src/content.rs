//! Bundled study tables and read-only lookups over them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const KANA_JSON: &str = include_str!("../data/kana.json");
const KANJI_JSON: &str = include_str!("../data/kanji.json");
const VOCAB_JSON: &str = include_str!("../data/vocab.json");
const GRAMMAR_JSON: &str = include_str!("../data/grammar.json");
const SENTENCES_JSON: &str = include_str!("../data/sentences.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    N5,
    N4,
}

impl Level {
    pub fn label(&self) -> &'static str {
        match self {
            Level::N5 => "N5",
            Level::N4 => "N4",
        }
    }

    pub fn toggled(&self) -> Level {
        match self {
            Level::N5 => Level::N4,
            Level::N4 => Level::N5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Hiragana,
    Katakana,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KanaGroup {
    Gojuon,
    Dakuon,
    Handakuon,
    Yoon,
}

impl KanaGroup {
    pub const ALL: [KanaGroup; 4] = [
        KanaGroup::Gojuon,
        KanaGroup::Dakuon,
        KanaGroup::Handakuon,
        KanaGroup::Yoon,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            KanaGroup::Gojuon => "Gojuon",
            KanaGroup::Dakuon => "Dakuon",
            KanaGroup::Handakuon => "Handakuon",
            KanaGroup::Yoon => "Yoon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrammarKind {
    Pattern,
    Particle,
}

/// Anything the generator can draw from. The key identifies an item within its table.
pub trait ContentItem {
    fn key(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kana {
    pub char: String,
    pub romaji: String,
    pub script: Script,
    pub group: KanaGroup,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kanji {
    pub char: String,
    pub onyomi: String,
    pub kunyomi: String,
    pub meaning: String,
    pub level: Level,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocab {
    pub word: String,
    pub reading: String,
    pub meaning: String,
    pub level: Level,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarPattern {
    pub title: String,
    pub formula: String,
    pub explanation: String,
    pub example: String,
    pub level: Level,
    pub kind: GrammarKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    pub japanese: String,
    pub romaji: String,
    pub indonesian: String,
    pub level: Level,
}

impl ContentItem for Kana {
    fn key(&self) -> &str {
        &self.char
    }
}

impl ContentItem for Kanji {
    fn key(&self) -> &str {
        &self.char
    }
}

impl ContentItem for Vocab {
    fn key(&self) -> &str {
        &self.word
    }
}

impl ContentItem for GrammarPattern {
    fn key(&self) -> &str {
        &self.title
    }
}

impl ContentItem for Sentence {
    fn key(&self) -> &str {
        &self.japanese
    }
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to parse bundled {table} table: {source}")]
    Parse {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

fn parse_table<T: for<'de> Deserialize<'de>>(
    table: &'static str,
    json: &str,
) -> Result<Vec<T>, ContentError> {
    serde_json::from_str(json).map_err(|source| ContentError::Parse { table, source })
}

/// Immutable after construction; shared freely between generator calls.
#[derive(Debug, Clone, Default)]
pub struct ContentProvider {
    kana: Vec<Kana>,
    kanji: Vec<Kanji>,
    vocab: Vec<Vocab>,
    grammar: Vec<GrammarPattern>,
    sentences: Vec<Sentence>,
}

impl ContentProvider {
    pub fn new(
        kana: Vec<Kana>,
        kanji: Vec<Kanji>,
        vocab: Vec<Vocab>,
        grammar: Vec<GrammarPattern>,
        sentences: Vec<Sentence>,
    ) -> Self {
        Self {
            kana,
            kanji,
            vocab,
            grammar,
            sentences,
        }
    }

    /// Loads the tables compiled into the binary.
    pub fn bundled() -> Result<Self, ContentError> {
        Ok(Self {
            kana: parse_table("kana", KANA_JSON)?,
            kanji: parse_table("kanji", KANJI_JSON)?,
            vocab: parse_table("vocab", VOCAB_JSON)?,
            grammar: parse_table("grammar", GRAMMAR_JSON)?,
            sentences: parse_table("sentences", SENTENCES_JSON)?,
        })
    }

    pub fn kana(&self, script: Option<Script>) -> Vec<&Kana> {
        self.kana
            .iter()
            .filter(|k| script.is_none_or(|s| k.script == s))
            .collect()
    }

    pub fn kana_group(&self, script: Script, group: KanaGroup) -> Vec<&Kana> {
        self.kana
            .iter()
            .filter(|k| k.script == script && k.group == group)
            .collect()
    }

    pub fn kanji(&self, level: Level) -> Vec<&Kanji> {
        self.kanji.iter().filter(|k| k.level == level).collect()
    }

    pub fn grammar(&self, level: Level, kind: GrammarKind) -> Vec<&GrammarPattern> {
        self.grammar
            .iter()
            .filter(|g| g.level == level && g.kind == kind)
            .collect()
    }

    pub fn vocab(&self, level: Level) -> Vec<&Vocab> {
        self.vocab.iter().filter(|v| v.level == level).collect()
    }

    pub fn sentences(&self, level: Level) -> Vec<&Sentence> {
        self.sentences.iter().filter(|s| s.level == level).collect()
    }
}
