mod app;
mod event;
mod game;
mod logging;
mod scores;
mod settings;
mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use app::App;
use event::{Event, EventHandler};
use scores::JsonScoreStore;
use settings::Settings;

/// Input poll interval. Finer than the physics tick so timers fire on time.
const POLL_RATE_MS: u64 = 10;

fn main() -> io::Result<()> {
    let (settings, notes) = Settings::load();
    if let Err(e) = logging::init(&settings) {
        eprintln!("brick-breaker: {e}; running without a log");
    }
    logging::replay(&notes, log::logger());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle(ui::TITLE))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let store = JsonScoreStore::new(&settings.score_file);
    log::info!("scores at {}", store.path().display());
    let mut app = App::new(Box::new(store));
    let event_handler = EventHandler::new(POLL_RATE_MS);

    let result = run(&mut terminal, &mut app, &event_handler);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("terminal error: {e}");
    }
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        match events.next()? {
            Event::Tick => {}
            Event::Key(key) => app.on_key(key),
        }
        app.on_tick();

        if app.should_quit {
            log::info!("quit with score {}", app.game.score());
            return Ok(());
        }
    }
}
