use crate::app::{App, HOME_ENTRIES};
use crate::models::{AppState, QuizMode};
use crate::timer::Scheduler;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Routes one key press to the handler for the current screen.
pub fn handle_key<S: Scheduler>(app: &mut App<S>, key: KeyEvent) {
    match app.state {
        AppState::Home => handle_home(app, key),
        AppState::Browse(_) => handle_browse(app, key),
        AppState::QuizMenu => handle_quiz_menu(app, key),
        AppState::QuizConfig => handle_quiz_config(app, key),
        AppState::Quiz => handle_quiz(app, key),
        AppState::Summary => handle_summary(app, key),
    }
}

fn handle_home<S: Scheduler>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.home_index = app.home_index.saturating_sub(1),
        KeyCode::Down => {
            if app.home_index < HOME_ENTRIES.len() - 1 {
                app.home_index += 1;
            }
        }
        KeyCode::Enter => app.open_home_entry(),
        KeyCode::Char('l') => app.toggle_level(),
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}

fn handle_browse<S: Scheduler>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.browse_scroll = app.browse_scroll.saturating_sub(1),
        KeyCode::Down => app.browse_scroll = app.browse_scroll.saturating_add(1),
        KeyCode::PageUp => app.browse_scroll = app.browse_scroll.saturating_sub(10),
        KeyCode::PageDown => app.browse_scroll = app.browse_scroll.saturating_add(10),
        KeyCode::Char('l') => app.toggle_level(),
        KeyCode::Esc | KeyCode::Char('q') => app.set_state(AppState::Home),
        _ => {}
    }
}

fn handle_quiz_menu<S: Scheduler>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.menu_index = app.menu_index.saturating_sub(1),
        KeyCode::Down => {
            if app.menu_index < QuizMode::ALL.len() - 1 {
                app.menu_index += 1;
            }
        }
        KeyCode::Enter => app.select_mode(QuizMode::ALL[app.menu_index]),
        KeyCode::Esc | KeyCode::Char('q') => app.set_state(AppState::Home),
        _ => {}
    }
}

fn handle_quiz_config<S: Scheduler>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Down | KeyCode::Tab => app.draft.switch_field(),
        KeyCode::Left | KeyCode::Char('-') => app.draft.decrease(),
        KeyCode::Right | KeyCode::Char('+') => app.draft.increase(),
        KeyCode::Enter => app.start_quiz(),
        KeyCode::Esc => app.set_state(AppState::QuizMenu),
        _ => {}
    }
}

fn handle_quiz<S: Scheduler>(app: &mut App<S>, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('h') => app.controller.toggle_hint(),
            KeyCode::Char('k') => app.controller.toggle_answer_key(),
            KeyCode::Char('f') => app.finish_early(),
            _ => {}
        }
        return;
    }
    if key.code == KeyCode::Esc {
        app.set_state(AppState::QuizMenu);
        return;
    }

    let snapshot = app.controller.snapshot();
    let Some(question) = snapshot.question else {
        return;
    };

    if question.is_free_text() {
        match key.code {
            KeyCode::Enter => app.answer_text(),
            KeyCode::Backspace => app.delete_char(),
            KeyCode::Left => app.move_cursor_left(),
            KeyCode::Right => app.move_cursor_right(),
            KeyCode::Char(c) => app.insert_char(c),
            _ => {}
        }
    } else if let KeyCode::Char(c) = key.code
        && let Some(digit) = c.to_digit(10)
    {
        let option_count = question.options().len();
        let index = digit as usize;
        if (1..=option_count).contains(&index) {
            app.answer_choice(index - 1);
        }
    }
}

fn handle_summary<S: Scheduler>(app: &mut App<S>, key: KeyEvent) {
    match key.code {
        KeyCode::Char('r') => app.retry(),
        KeyCode::Char('m') | KeyCode::Esc => app.set_state(AppState::QuizMenu),
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::content::{ContentProvider, Level};
    use crate::models::QuizStatus;
    use crate::timer::ManualScheduler;

    fn press(app: &mut App<ManualScheduler>, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App<ManualScheduler>, c: char) {
        handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn test_app() -> App<ManualScheduler> {
        let settings = Settings {
            seed: Some(11),
            ..Settings::default()
        };
        App::new(
            ContentProvider::bundled().unwrap(),
            settings,
            ManualScheduler::new(),
        )
    }

    fn start_mode(app: &mut App<ManualScheduler>, key: &str, count: usize) {
        let position = QuizMode::ALL.iter().position(|m| m.key() == key).unwrap();
        app.set_state(AppState::QuizMenu);
        for _ in 0..position {
            press(app, KeyCode::Down);
        }
        press(app, KeyCode::Enter);
        app.draft.count = count;
        press(app, KeyCode::Enter);
    }

    #[test]
    fn test_home_navigation_bounds() {
        let mut app = test_app();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.home_index, 0);
        for _ in 0..20 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.home_index, HOME_ENTRIES.len() - 1);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state, AppState::QuizMenu);
    }

    #[test]
    fn test_level_toggle_and_quit() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.level, Level::N4);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_config_keys_adjust_draft() {
        let mut app = test_app();
        app.set_state(AppState::QuizMenu);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state, AppState::QuizConfig);

        let minutes = app.draft.minutes;
        press(&mut app, KeyCode::Right);
        assert_eq!(app.draft.minutes, minutes + 1);
        press(&mut app, KeyCode::Tab);
        let count = app.draft.count;
        press(&mut app, KeyCode::Left);
        assert_eq!(app.draft.count, count - 1);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state, AppState::QuizMenu);
    }

    #[test]
    fn test_number_keys_answer_choice() {
        let mut app = test_app();
        start_mode(&mut app, "hiragana", 2);
        assert_eq!(app.state, AppState::Quiz);

        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.controller.snapshot().index, 0);

        let correct = app.controller.snapshot().question.unwrap().correct_index().unwrap();
        let digit = char::from_digit(correct as u32 + 1, 10).unwrap();
        press(&mut app, KeyCode::Char(digit));
        assert_eq!(app.controller.snapshot().index, 1);
        assert_eq!(app.controller.snapshot().score, 1);
    }

    #[test]
    fn test_aid_shortcuts() {
        let mut app = test_app();
        start_mode(&mut app, "katakana", 3);
        ctrl(&mut app, 'h');
        ctrl(&mut app, 'k');
        let aids = app.controller.snapshot().aids;
        assert!(aids.show_hint);
        assert!(aids.show_answer_key);
        ctrl(&mut app, 'f');
        assert_eq!(app.state, AppState::Summary);
    }

    #[test]
    fn test_typing_and_submitting_text() {
        let mut app = test_app();
        start_mode(&mut app, "translation", 1);
        for c in "abc".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "ab");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state, AppState::Summary);
        assert_eq!(app.controller.session().responses()[0].given, "ab");
    }

    #[test]
    fn test_escape_abandons_quiz() {
        let mut app = test_app();
        start_mode(&mut app, "jlpt-n5", 4);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state, AppState::QuizMenu);
        assert_eq!(app.controller.status(), QuizStatus::Configuring);
    }

    #[test]
    fn test_summary_retry_and_menu() {
        let mut app = test_app();
        start_mode(&mut app, "vocab-practice", 2);
        ctrl(&mut app, 'f');
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.controller.status(), QuizStatus::Active);

        ctrl(&mut app, 'f');
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.state, AppState::QuizMenu);
    }
}
