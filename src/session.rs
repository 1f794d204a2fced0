use crate::grader::{self, ShapeMismatch, Submission};
use crate::logger;
use crate::models::{Question, QuestionAids, QuizConfig, QuizStatus, Response};
use crate::timer::{format_time, CancelToken, Countdown, Scheduler, SchedulerError, TimerTick, TICK_PERIOD};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    score: usize,
    status: QuizStatus,
    aids: QuestionAids,
    responses: Vec<Response>,
}

impl QuizSession {
    pub fn configuring() -> Self {
        Self {
            questions: Vec::new(),
            current_index: 0,
            score: 0,
            status: QuizStatus::Configuring,
            aids: QuestionAids::default(),
            responses: Vec::new(),
        }
    }

    fn active(questions: Vec<Question>) -> Self {
        Self {
            questions,
            status: QuizStatus::Active,
            ..Self::configuring()
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn status(&self) -> QuizStatus {
        self.status
    }

    pub fn aids(&self) -> QuestionAids {
        self.aids
    }

    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    fn finish(&mut self) {
        self.status = QuizStatus::Finished;
        self.aids = QuestionAids::default();
    }

    /// Moves to the next question, or finishes on the last one.
    fn advance(&mut self) {
        self.aids = QuestionAids::default();
        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
        } else {
            self.finish();
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("cannot start a quiz without questions")]
    NoQuestions,
    #[error(transparent)]
    Timer(#[from] SchedulerError),
}

/// Why a submission was refused. State is untouched in every case.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("no quiz is running")]
    NotActive,
    #[error(transparent)]
    WrongShape(#[from] ShapeMismatch),
    #[error("option {index} is out of range for a question with {count} options")]
    OptionOutOfRange { index: usize, count: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub finished: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Running { remaining: u32 },
    Expired,
    /// No live timer for this generation.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot<'a> {
    pub index: usize,
    pub total: usize,
    pub score: usize,
    pub status: QuizStatus,
    pub question: Option<&'a Question>,
    pub aids: QuestionAids,
    pub remaining_seconds: u32,
}

#[derive(Debug)]
struct ActiveTimer {
    generation: u64,
    countdown: Countdown,
    token: CancelToken,
}

/// Owns the one quiz in progress and the single timer bound to it.
pub struct QuizController<S: Scheduler> {
    scheduler: S,
    session: QuizSession,
    config: Option<QuizConfig>,
    timer: Option<ActiveTimer>,
    last_generation: u64,
    remaining_seconds: u32,
}

impl<S: Scheduler> QuizController<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            session: QuizSession::configuring(),
            config: None,
            timer: None,
            last_generation: 0,
            remaining_seconds: 0,
        }
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn config(&self) -> Option<&QuizConfig> {
        self.config.as_ref()
    }

    pub fn status(&self) -> QuizStatus {
        self.session.status
    }

    /// Replaces whatever session existed with a fresh active one and restarts the clock.
    pub fn start(&mut self, config: QuizConfig, questions: Vec<Question>) -> Result<(), SessionError> {
        self.stop_timer();
        self.session = QuizSession::configuring();
        if questions.is_empty() {
            return Err(SessionError::NoQuestions);
        }

        self.last_generation += 1;
        let generation = self.last_generation;
        let token = self.scheduler.schedule(TICK_PERIOD, generation)?;
        self.timer = Some(ActiveTimer {
            generation,
            countdown: Countdown::new(config.duration_seconds),
            token,
        });
        self.remaining_seconds = config.duration_seconds;

        logger::log(&format!(
            "Session started: mode={} questions={} duration={}s",
            config.mode.key(),
            questions.len(),
            config.duration_seconds
        ));
        self.session = QuizSession::active(questions);
        self.config = Some(config);
        Ok(())
    }

    pub fn submit_choice(&mut self, option_index: usize) -> Result<AnswerOutcome, SubmitError> {
        let question = self.active_question()?;
        let options = question.options();
        let given = match options.get(option_index) {
            Some(option) => option.clone(),
            // Free-text questions have no options; grading reports the shape mismatch.
            None if question.is_free_text() => String::new(),
            None => {
                return Err(SubmitError::OptionOutOfRange {
                    index: option_index,
                    count: options.len(),
                });
            }
        };
        self.submit(Submission::Choice(option_index), given)
    }

    pub fn submit_text(&mut self, raw: &str) -> Result<AnswerOutcome, SubmitError> {
        self.submit(Submission::Text(raw.to_string()), raw.trim().to_string())
    }

    fn active_question(&self) -> Result<&Question, SubmitError> {
        if self.session.status != QuizStatus::Active {
            return Err(SubmitError::NotActive);
        }
        self.session.current_question().ok_or(SubmitError::NotActive)
    }

    fn submit(&mut self, submission: Submission, given: String) -> Result<AnswerOutcome, SubmitError> {
        let question = self.active_question()?;
        let correct = grader::grade(question, &submission).inspect_err(|_| {
            logger::log(&format!(
                "Rejected {:?} for question {}",
                submission,
                self.session.current_index + 1
            ));
        })?;

        let session = &mut self.session;
        if correct {
            session.score += 1;
        }
        session.responses.push(Response {
            question_index: session.current_index,
            given,
            correct,
        });
        session.advance();

        let finished = session.status == QuizStatus::Finished;
        if finished {
            self.stop_timer();
            self.log_finish("all questions answered");
        }
        Ok(AnswerOutcome { correct, finished })
    }

    /// Ends the active quiz immediately. Returns false when nothing was running.
    pub fn force_finish(&mut self) -> bool {
        if self.session.status != QuizStatus::Active {
            return false;
        }
        self.stop_timer();
        self.session.finish();
        self.log_finish("forced");
        true
    }

    /// Applies one timer tick. Ticks from a cancelled or replaced timer are ignored.
    pub fn on_tick(&mut self, tick: TimerTick) -> TickOutcome {
        let Some(timer) = self.timer.as_mut() else {
            return TickOutcome::Ignored;
        };
        if timer.generation != tick.generation || timer.token.is_cancelled() {
            return TickOutcome::Ignored;
        }

        let expired = timer.countdown.tick();
        self.remaining_seconds = timer.countdown.remaining();
        if !expired {
            return TickOutcome::Running {
                remaining: self.remaining_seconds,
            };
        }

        self.stop_timer();
        if self.session.status == QuizStatus::Active {
            self.session.finish();
            self.log_finish("time is up");
        }
        TickOutcome::Expired
    }

    /// Leaves the quiz: stops the clock and drops the session.
    pub fn abandon(&mut self) {
        self.stop_timer();
        self.session = QuizSession::configuring();
        self.config = None;
        self.remaining_seconds = 0;
    }

    pub fn toggle_hint(&mut self) {
        if self.session.status == QuizStatus::Active {
            self.session.aids.show_hint = !self.session.aids.show_hint;
        }
    }

    pub fn toggle_answer_key(&mut self) {
        if self.session.status == QuizStatus::Active {
            self.session.aids.show_answer_key = !self.session.aids.show_answer_key;
        }
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn formatted_time(&self) -> String {
        format_time(self.remaining_seconds)
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            index: self.session.current_index,
            total: self.session.questions.len(),
            score: self.session.score,
            status: self.session.status,
            question: self.session.current_question(),
            aids: self.session.aids,
            remaining_seconds: self.remaining_seconds,
        }
    }

    fn stop_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.token.cancel();
        }
    }

    fn log_finish(&self, reason: &str) {
        logger::log(&format!(
            "Session finished ({}): score {}/{}",
            reason,
            self.session.score,
            self.session.questions.len()
        ));
    }
}

impl<S: Scheduler> Drop for QuizController<S> {
    fn drop(&mut self) {
        self.stop_timer();
    }
}
