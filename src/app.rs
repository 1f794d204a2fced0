use crate::config::{Settings, MAX_COUNT, MAX_MINUTES};
use crate::content::{ContentProvider, Level};
use crate::generator::QuestionGenerator;
use crate::logger;
use crate::models::{AppState, BrowseView, QuizConfig, QuizMode, QuizStatus};
use crate::random::StdRandom;
use crate::session::{AnswerOutcome, QuizController, SessionError, SubmitError, TickOutcome};
use crate::timer::{Scheduler, TimerTick};
use crate::utils::byte_index;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeEntry {
    Browse(BrowseView),
    Quiz,
}

pub const HOME_ENTRIES: [HomeEntry; 6] = [
    HomeEntry::Browse(BrowseView::Kana),
    HomeEntry::Browse(BrowseView::Kanji),
    HomeEntry::Browse(BrowseView::Grammar),
    HomeEntry::Browse(BrowseView::Particles),
    HomeEntry::Browse(BrowseView::Vocab),
    HomeEntry::Quiz,
];

impl HomeEntry {
    pub fn label(&self) -> &'static str {
        match self {
            HomeEntry::Browse(view) => view.title(),
            HomeEntry::Quiz => "Quiz",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    Minutes,
    Count,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigDraft {
    pub minutes: u32,
    pub count: usize,
    pub field: ConfigField,
}

impl ConfigDraft {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            minutes: settings.default_minutes,
            count: settings.default_count,
            field: ConfigField::Minutes,
        }
    }

    pub fn switch_field(&mut self) {
        self.field = match self.field {
            ConfigField::Minutes => ConfigField::Count,
            ConfigField::Count => ConfigField::Minutes,
        };
    }

    pub fn increase(&mut self) {
        match self.field {
            ConfigField::Minutes => self.minutes = (self.minutes + 1).min(MAX_MINUTES),
            ConfigField::Count => self.count = (self.count + 1).min(MAX_COUNT),
        }
    }

    pub fn decrease(&mut self) {
        match self.field {
            ConfigField::Minutes => self.minutes = self.minutes.saturating_sub(1).max(1),
            ConfigField::Count => self.count = self.count.saturating_sub(1).max(1),
        }
    }
}

/// Result of the most recent answer, shown above the next question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub correct: bool,
    pub expected: String,
}

pub struct App<S: Scheduler> {
    pub state: AppState,
    pub level: Level,
    pub content: ContentProvider,
    pub settings: Settings,
    pub home_index: usize,
    pub browse_scroll: u16,
    pub menu_index: usize,
    pub selected_mode: Option<QuizMode>,
    pub draft: ConfigDraft,
    pub controller: QuizController<S>,
    pub rng: StdRandom,
    pub input_buffer: String,
    /// In characters, not bytes.
    pub cursor_position: usize,
    pub last_feedback: Option<Feedback>,
    pub message: Option<String>,
    pub should_quit: bool,
}

impl<S: Scheduler> App<S> {
    pub fn new(content: ContentProvider, settings: Settings, scheduler: S) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRandom::seeded(seed),
            None => StdRandom::from_entropy(),
        };
        Self {
            state: AppState::Home,
            level: Level::N5,
            content,
            draft: ConfigDraft::from_settings(&settings),
            settings,
            home_index: 0,
            browse_scroll: 0,
            menu_index: 0,
            selected_mode: None,
            controller: QuizController::new(scheduler),
            rng,
            input_buffer: String::new(),
            cursor_position: 0,
            last_feedback: None,
            message: None,
            should_quit: false,
        }
    }

    /// Switches screens. Leaving the quiz screens always stops the clock.
    pub fn set_state(&mut self, state: AppState) {
        let in_quiz = matches!(state, AppState::Quiz | AppState::Summary);
        if !in_quiz && self.controller.status() != QuizStatus::Configuring {
            self.controller.abandon();
            self.clear_input();
            self.last_feedback = None;
        }
        if matches!(state, AppState::Browse(_)) {
            self.browse_scroll = 0;
        }
        self.message = None;
        self.state = state;
    }

    pub fn open_home_entry(&mut self) {
        match HOME_ENTRIES[self.home_index] {
            HomeEntry::Browse(view) => self.set_state(AppState::Browse(view)),
            HomeEntry::Quiz => {
                self.menu_index = 0;
                self.set_state(AppState::QuizMenu);
            }
        }
    }

    pub fn toggle_level(&mut self) {
        self.level = self.level.toggled();
        self.browse_scroll = 0;
    }

    pub fn select_mode(&mut self, mode: QuizMode) {
        self.selected_mode = Some(mode);
        self.draft = ConfigDraft::from_settings(&self.settings);
        self.set_state(AppState::QuizConfig);
    }

    pub fn start_quiz(&mut self) {
        let Some(mode) = self.selected_mode else {
            self.set_state(AppState::QuizMenu);
            return;
        };
        let config = match QuizConfig::from_minutes(mode, self.draft.count, self.draft.minutes) {
            Ok(config) => config,
            Err(e) => {
                self.message = Some(e.to_string());
                return;
            }
        };

        let questions = QuestionGenerator::new(&self.content).generate(mode, config.item_count, &mut self.rng);
        match self.controller.start(config, questions) {
            Ok(()) => {
                self.clear_input();
                self.last_feedback = None;
                self.message = None;
                self.state = AppState::Quiz;
            }
            Err(SessionError::NoQuestions) => {
                self.message = Some(format!("No content available for {}", mode.title()));
            }
            Err(e) => {
                logger::log(&format!("Failed to start quiz: {}", e));
                self.message = Some(e.to_string());
            }
        }
    }

    pub fn retry(&mut self) {
        self.start_quiz();
    }

    pub fn answer_choice(&mut self, option_index: usize) {
        let expected = self.current_expected();
        let result = self.controller.submit_choice(option_index);
        self.after_submit(result, expected);
    }

    pub fn answer_text(&mut self) {
        if self.input_buffer.trim().is_empty() {
            return;
        }
        let expected = self.current_expected();
        let raw = std::mem::take(&mut self.input_buffer);
        let result = self.controller.submit_text(&raw);
        self.cursor_position = 0;
        self.after_submit(result, expected);
    }

    fn current_expected(&self) -> String {
        self.controller
            .snapshot()
            .question
            .map(|q| q.correct_answer().to_string())
            .unwrap_or_default()
    }

    fn after_submit(&mut self, result: Result<AnswerOutcome, SubmitError>, expected: String) {
        match result {
            Ok(outcome) => {
                self.last_feedback = Some(Feedback {
                    correct: outcome.correct,
                    expected,
                });
                if outcome.finished {
                    self.state = AppState::Summary;
                }
            }
            Err(e) => logger::log(&format!("Submission ignored: {}", e)),
        }
    }

    pub fn finish_early(&mut self) {
        if self.controller.force_finish() {
            self.clear_input();
            self.state = AppState::Summary;
        }
    }

    pub fn on_tick(&mut self, tick: TimerTick) {
        if self.controller.on_tick(tick) == TickOutcome::Expired && self.state == AppState::Quiz {
            self.clear_input();
            self.state = AppState::Summary;
        }
    }

    pub fn insert_char(&mut self, c: char) {
        let at = byte_index(&self.input_buffer, self.cursor_position);
        self.input_buffer.insert(at, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        let at = byte_index(&self.input_buffer, self.cursor_position - 1);
        self.input_buffer.remove(at);
        self.cursor_position -= 1;
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input_buffer.chars().count() {
            self.cursor_position += 1;
        }
    }

    fn clear_input(&mut self) {
        self.input_buffer.clear();
        self.cursor_position = 0;
    }
}
