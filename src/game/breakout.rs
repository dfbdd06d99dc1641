//! The game loop: setup, launch, fixed-interval ticks and the end states.

use super::ball::BallId;
use super::consts::*;
use super::hud::{Hud, LAUNCH_PROMPT};
use super::scheduler::{Action, Scheduler};
use super::{Arena, Ball, Brick, GameObject, Paddle};
use crate::scores::ScoreStore;

/// Player intents, already decoupled from any key binding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Launch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Ball resting on the paddle, waiting for launch
    AwaitingLaunch,
    /// Ticking every `TICK_MS`
    Running,
    /// Ball missed, respawn pending
    RoundLost,
    Won,
    GameOver,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Won | Phase::GameOver)
    }
}

pub struct Breakout {
    arena: Arena,
    ball: Ball,
    next_ball_id: BallId,
    lives: u8,
    score: u32,
    high_score: Option<u32>,
    phase: Phase,
    scheduler: Scheduler,
    hud: Hud,
    store: Box<dyn ScoreStore>,
}

impl Breakout {
    pub fn new(store: Box<dyn ScoreStore>) -> Self {
        let paddle = Paddle::new(FIELD_WIDTH / 2.0, PADDLE_Y);
        let mut arena = Arena::new(paddle);

        let columns = (0..)
            .map(|col| BRICK_MARGIN + col as f32 * BRICK_WIDTH)
            .take_while(|x| *x < FIELD_WIDTH - BRICK_MARGIN);
        for x in columns {
            for (y, hits) in BRICK_ROWS {
                arena.add_brick(Brick::new(x + BRICK_WIDTH / 2.0, y, hits));
            }
        }

        let mut game = Self {
            arena,
            ball: Ball::new(0, FIELD_WIDTH / 2.0, BALL_REST_Y),
            next_ball_id: 1,
            lives: START_LIVES,
            score: 0,
            high_score: None,
            phase: Phase::AwaitingLaunch,
            scheduler: Scheduler::new(),
            hud: Hud::new(),
            store,
        };
        game.setup();
        log::info!(
            "new game: {} bricks, {} lives",
            game.arena.bricks_remaining(),
            game.lives
        );
        game
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// All-time best, known once the session has ended
    pub fn high_score(&self) -> Option<u32> {
        self.high_score
    }

    pub fn handle(&mut self, command: Command) {
        if self.phase.is_terminal() {
            return;
        }
        match command {
            Command::MoveLeft => self.move_paddle(-PADDLE_STEP),
            Command::MoveRight => self.move_paddle(PADDLE_STEP),
            Command::Launch => {
                if self.phase == Phase::AwaitingLaunch {
                    self.launch();
                }
            }
        }
    }

    /// Run every scheduled action that has come due by `now_ms`.
    pub fn update(&mut self, now_ms: u64) {
        while let Some(action) = self.scheduler.next_due(now_ms) {
            match action {
                Action::Tick => self.tick(),
                Action::Respawn => self.respawn(),
            }
        }
    }

    fn move_paddle(&mut self, offset: f32) {
        self.arena
            .paddle_mut()
            .move_by(offset, FIELD_WIDTH, &mut self.ball);
    }

    /// Fresh ball on the paddle. Bricks, score and lives carry over.
    fn setup(&mut self) {
        let cx = self.arena.paddle().bounds().center_x();
        self.ball = Ball::new(self.next_ball_id, cx, BALL_REST_Y);
        self.next_ball_id += 1;
        self.arena.paddle_mut().carry(&self.ball);

        self.hud.update_lives(self.lives);
        self.hud.update_score(self.score);
        self.hud.show_banner(LAUNCH_PROMPT);
        self.phase = Phase::AwaitingLaunch;
    }

    fn launch(&mut self) {
        self.hud.hide_banner();
        self.arena.paddle_mut().release();
        self.phase = Phase::Running;
        log::info!("ball {} launched", self.ball.id());
        self.tick();
    }

    fn respawn(&mut self) {
        log::info!("respawning, {} lives left", self.lives);
        self.setup();
    }

    fn tick(&mut self) {
        if self.phase != Phase::Running {
            return;
        }

        let contacts = self.arena.overlapping(&self.ball.bounds());
        let points = self.ball.resolve_collision(&contacts, &mut self.arena);
        if points > 0 {
            self.score += points;
            self.hud.update_score(self.score);
        }
        self.ball.advance(FIELD_WIDTH);

        if self.arena.bricks_remaining() == 0 {
            self.ball.stop();
            self.finish(Phase::Won);
        } else if self.ball.bounds().bottom >= FIELD_HEIGHT {
            self.ball.stop();
            match self.lives.checked_sub(1) {
                Some(left) => {
                    self.lives = left;
                    self.phase = Phase::RoundLost;
                    log::info!("ball missed, {left} lives left");
                    self.scheduler.after(RESPAWN_DELAY_MS, Action::Respawn);
                }
                None => self.finish(Phase::GameOver),
            }
        } else {
            self.scheduler.after(TICK_MS, Action::Tick);
        }
    }

    /// Persist the session and show the closing message. Store failures are
    /// reported in the message; the best score then falls back to 0.
    fn finish(&mut self, phase: Phase) {
        self.phase = phase;

        let saved = match self.store.record_score(self.score) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("could not record score {}: {e}", self.score);
                false
            }
        };
        let high = self.store.highest_score().unwrap_or_else(|e| {
            log::warn!("could not read high score: {e}");
            0
        });
        self.high_score = Some(high);

        let headline = match phase {
            Phase::Won => "You win! Every brick is down.",
            _ => "Game Over!",
        };
        let mut message = format!(
            "{headline}\nYour Score: {}\nHighest Score: {high}",
            self.score
        );
        if !saved {
            message.push_str("\n(score could not be saved)");
        }
        self.hud.show_banner(message);
        log::info!("{phase:?} with score {} (best {high})", self.score);
    }
}
