use std::path::PathBuf;

pub const DEFAULT_MINUTES: u32 = 10;
pub const DEFAULT_COUNT: usize = 10;
pub const MAX_MINUTES: u32 = 60;
pub const MAX_COUNT: usize = 50;
pub const DEFAULT_LOG_FILE: &str = "nihongo_quiz.log";

const ENV_MINUTES: &str = "NIHONGO_QUIZ_MINUTES";
const ENV_COUNT: &str = "NIHONGO_QUIZ_COUNT";
const ENV_LOG: &str = "NIHONGO_QUIZ_LOG";
const ENV_SEED: &str = "NIHONGO_QUIZ_SEED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub default_minutes: u32,
    pub default_count: usize,
    pub log_path: PathBuf,
    /// Fixed seed for reproducible quizzes; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_minutes: DEFAULT_MINUTES,
            default_count: DEFAULT_COUNT,
            log_path: PathBuf::from(DEFAULT_LOG_FILE),
            seed: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from any key lookup. Unparseable values fall back to defaults,
    /// numbers are clamped to what the config screen allows.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let default_minutes = lookup(ENV_MINUTES)
            .and_then(|v| v.trim().parse::<u32>().ok())
            .map(|m| m.clamp(1, MAX_MINUTES))
            .unwrap_or(defaults.default_minutes);
        let default_count = lookup(ENV_COUNT)
            .and_then(|v| v.trim().parse::<usize>().ok())
            .map(|c| c.clamp(1, MAX_COUNT))
            .unwrap_or(defaults.default_count);
        let log_path = lookup(ENV_LOG)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.log_path);
        let seed = lookup(ENV_SEED).and_then(|v| v.trim().parse::<u64>().ok());

        Self {
            default_minutes,
            default_count,
            log_path,
            seed,
        }
    }
}
