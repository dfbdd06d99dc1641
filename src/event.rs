use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, KeyEvent, KeyEventKind};

pub enum Event {
    Key(KeyEvent),
    Tick,
}

/// Forwards terminal input from a polling thread. The thread never touches
/// game state; the main loop drains the channel and drives the game.
pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(poll_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::channel();
        let poll_rate = Duration::from_millis(poll_rate_ms);

        thread::spawn(move || loop {
            match event::poll(poll_rate) {
                Ok(true) => {
                    let Ok(crossterm::event::Event::Key(key)) = event::read() else {
                        continue;
                    };
                    // Repeats keep the paddle sliding while an arrow is held
                    if key.kind != KeyEventKind::Release && tx.send(Event::Key(key)).is_err() {
                        return;
                    }
                }
                Ok(false) => {
                    if tx.send(Event::Tick).is_err() {
                        return;
                    }
                }
                Err(e) => {
                    log::error!("input polling failed: {e}");
                    return;
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self) -> io::Result<Event> {
        self.rx
            .recv()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }
}
