use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Breakout, Command};
use crate::scores::ScoreStore;

pub struct App {
    pub should_quit: bool,
    pub game: Breakout,
    started: Instant,
}

impl App {
    pub fn new(store: Box<dyn ScoreStore>) -> Self {
        Self {
            should_quit: false,
            game: Breakout::new(store),
            started: Instant::now(),
        }
    }

    /// Advance the game clock to wall time and run whatever came due.
    pub fn on_tick(&mut self) {
        let now = u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX);
        self.game.update(now);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if is_quit(&key) {
            self.should_quit = true;
            return;
        }
        if let Some(command) = command_for(&key) {
            self.game.handle(command);
        }
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        _ => false,
    }
}

fn command_for(key: &KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::MoveRight),
        KeyCode::Char(' ') => Some(Command::Launch),
        _ => None,
    }
}
