pub mod app;
pub mod config;
pub mod content;
pub mod generator;
pub mod grader;
pub mod input;
pub mod logger;
pub mod models;
pub mod random;
pub mod session;
pub mod timer;
pub mod ui;
pub mod utils;

// Re-exports for convenience
pub use app::App;
pub use config::Settings;
pub use content::{ContentError, ContentProvider, Level, Script};
pub use generator::QuestionGenerator;
pub use grader::{grade, Submission};
pub use input::handle_key;
pub use models::{AnswerKey, AppState, Question, QuizConfig, QuizMode, QuizStatus};
pub use random::{RandomSource, StdRandom};
pub use session::{QuizController, QuizSession, SessionError, SessionSnapshot, TickOutcome};
pub use timer::{format_time, ManualScheduler, Scheduler, ThreadScheduler, TimerTick};
