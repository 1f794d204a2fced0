use crossbeam_channel::{select, unbounded, Receiver};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use nihongo_quiz::{
    handle_key, logger, ui, App, ContentProvider, Settings, ThreadScheduler, TimerTick,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::thread;

fn spawn_input_reader() -> io::Result<Receiver<Event>> {
    let (tx, rx) = unbounded();
    thread::Builder::new()
        .name("nihongo-quiz::input".to_string())
        .spawn(move || {
            loop {
                match event::read() {
                    Ok(ev) => {
                        if tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        logger::log(&format!("Input reader stopped: {}", e));
                        break;
                    }
                }
            }
        })?;
    Ok(rx)
}

fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App<ThreadScheduler>,
    input_rx: Receiver<Event>,
    tick_rx: Receiver<TimerTick>,
) -> io::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, app))?;

        select! {
            recv(input_rx) -> ev => match ev {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => handle_key(app, key),
                Ok(_) => {}
                Err(_) => break,
            },
            recv(tick_rx) -> tick => {
                if let Ok(tick) = tick {
                    app.on_tick(tick);
                }
            }
        }
    }
    Ok(())
}

fn main() -> io::Result<()> {
    let settings = Settings::from_env();
    logger::init(&settings.log_path);
    logger::log("Starting nihongo-quiz");

    let content = ContentProvider::bundled().map_err(io::Error::other)?;
    let (scheduler, tick_rx) = ThreadScheduler::channel();
    let mut app = App::new(content, settings, scheduler);
    let input_rx = spawn_input_reader()?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app, input_rx, tick_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        logger::log(&format!("Exited with error: {}", e));
    }
    logger::log("Shutting down");
    result
}
