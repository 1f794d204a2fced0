//! Turns content tables into quiz questions.

pub mod choice;

use crate::content::{ContentProvider, Kana, Kanji, Level, Script, Vocab};
use crate::models::{Category, MixedFocus, Question, QuizMode};
use crate::random::RandomSource;
use choice::{build_options, pick};

pub struct QuestionGenerator<'a> {
    content: &'a ContentProvider,
}

impl<'a> QuestionGenerator<'a> {
    pub fn new(content: &'a ContentProvider) -> Self {
        Self { content }
    }

    /// Produces up to `count` questions. Draws from an empty pool are skipped,
    /// so a mode without content yields an empty list.
    pub fn generate(
        &self,
        mode: QuizMode,
        count: usize,
        rng: &mut dyn RandomSource,
    ) -> Vec<Question> {
        match mode {
            QuizMode::Kana(script) => {
                let pool = self.content.kana(Some(script));
                (0..count)
                    .filter_map(|_| kana_question(rng, script, &pool))
                    .collect()
            }
            QuizMode::CharacterSet { level, focus } => self.character_set(level, focus, count, rng),
            QuizMode::Translation => self.translation(count, rng),
        }
    }

    /// Same as [`generate`](Self::generate) but keyed by the menu name; unknown names give nothing.
    pub fn generate_named(
        &self,
        key: &str,
        count: usize,
        rng: &mut dyn RandomSource,
    ) -> Vec<Question> {
        match QuizMode::from_key(key) {
            Some(mode) => self.generate(mode, count, rng),
            None => Vec::new(),
        }
    }

    fn character_set(
        &self,
        level: Level,
        focus: Option<MixedFocus>,
        count: usize,
        rng: &mut dyn RandomSource,
    ) -> Vec<Question> {
        let kanji = self.content.kanji(level);
        let vocab = self.content.vocab(level);

        (0..count)
            .filter_map(|_| {
                let sub = focus.unwrap_or_else(|| {
                    let preferred = if rng.chance() {
                        MixedFocus::Kanji
                    } else {
                        MixedFocus::Vocab
                    };
                    // A mixed quiz falls back to whichever table still has items.
                    match preferred {
                        MixedFocus::Kanji if kanji.is_empty() => MixedFocus::Vocab,
                        MixedFocus::Vocab if vocab.is_empty() => MixedFocus::Kanji,
                        other => other,
                    }
                });
                match sub {
                    MixedFocus::Kanji => kanji_question(rng, &kanji),
                    MixedFocus::Vocab => vocab_question(rng, &vocab),
                }
            })
            .collect()
    }

    fn translation(&self, count: usize, rng: &mut dyn RandomSource) -> Vec<Question> {
        let mut sentences = self.content.sentences(Level::N5);
        sentences.extend(self.content.sentences(Level::N4));

        let mut questions = Vec::with_capacity(count);
        for _ in 0..count {
            let Some(target) = pick(rng, &sentences) else {
                break;
            };
            let question = if rng.chance() {
                Question::text(
                    format!("Translate into Indonesian: \"{}\"", target.japanese),
                    target.indonesian.clone(),
                    Category::Translation,
                    Some(target.romaji.clone()),
                )
            } else {
                Question::text(
                    format!("Write the romaji for: \"{}\"", target.indonesian),
                    target.romaji.clone(),
                    Category::Translation,
                    Some(target.japanese.clone()),
                )
            };
            questions.push(question);
        }
        questions
    }
}

fn kana_question(rng: &mut dyn RandomSource, script: Script, pool: &[&Kana]) -> Option<Question> {
    let target = pick(rng, pool)?;
    let (options, correct_index) = build_options(rng, target, pool, |k| k.romaji.as_str());
    let category = match script {
        Script::Hiragana => Category::Hiragana,
        Script::Katakana => Category::Katakana,
    };
    Some(Question::choice(
        format!("What is the reading of \"{}\"?", target.char),
        options,
        correct_index,
        category,
        Some(target.romaji.clone()),
    ))
}

fn kanji_question(rng: &mut dyn RandomSource, pool: &[&Kanji]) -> Option<Question> {
    let target = pick(rng, pool)?;
    let (stem, (options, correct_index)) = if rng.chance() {
        (
            format!("What does the kanji \"{}\" mean?", target.char),
            build_options(rng, target, pool, |k| k.meaning.as_str()),
        )
    } else {
        (
            format!("What is the on'yomi of \"{}\"?", target.char),
            build_options(rng, target, pool, |k| k.onyomi.as_str()),
        )
    };
    Some(Question::choice(
        stem,
        options,
        correct_index,
        Category::Kanji,
        Some(target.kunyomi.clone()),
    ))
}

fn vocab_question(rng: &mut dyn RandomSource, pool: &[&Vocab]) -> Option<Question> {
    let target = pick(rng, pool)?;
    let (stem, (options, correct_index)) = if rng.chance() {
        (
            format!("How is \"{}\" read?", target.word),
            build_options(rng, target, pool, |v| v.reading.as_str()),
        )
    } else {
        (
            format!("What does \"{}\" mean?", target.word),
            build_options(rng, target, pool, |v| v.meaning.as_str()),
        )
    };
    Some(Question::choice(
        stem,
        options,
        correct_index,
        Category::Vocab,
        Some(target.reading.clone()),
    ))
}
