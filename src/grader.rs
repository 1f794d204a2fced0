use crate::models::{AnswerKey, Question};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Choice(usize),
    Text(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("answer kind does not match the question")]
pub struct ShapeMismatch;

pub fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

pub fn choice_matches(submitted: usize, correct_index: usize) -> bool {
    submitted == correct_index
}

/// Case-insensitive, surrounding whitespace ignored, otherwise exact.
pub fn text_matches(candidate: &str, expected: &str) -> bool {
    normalize(candidate) == normalize(expected)
}

pub fn grade(question: &Question, submission: &Submission) -> Result<bool, ShapeMismatch> {
    match (&question.key, submission) {
        (AnswerKey::Choice { correct_index, .. }, Submission::Choice(index)) => {
            Ok(choice_matches(*index, *correct_index))
        }
        (AnswerKey::Text { expected }, Submission::Text(raw)) => Ok(text_matches(raw, expected)),
        _ => Err(ShapeMismatch),
    }
}
