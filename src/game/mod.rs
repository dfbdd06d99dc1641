pub mod arena;
pub mod ball;
pub mod breakout;
pub mod brick;
pub mod geometry;
pub mod hud;
pub mod paddle;
pub mod scheduler;

pub use arena::{Arena, Contact, EntityId};
pub use ball::Ball;
pub use breakout::{Breakout, Command, Phase};
pub use brick::{Brick, HitOutcome};
pub use geometry::{Bounds, Direction, Sign};
pub use paddle::Paddle;

/// Fixed gameplay constants. Playfield units, milliseconds for delays.
pub mod consts {
    pub const FIELD_WIDTH: f32 = 610.0;
    pub const FIELD_HEIGHT: f32 = 400.0;

    pub const TICK_MS: u64 = 50;
    pub const RESPAWN_DELAY_MS: u64 = 1000;

    pub const START_LIVES: u8 = 3;
    pub const BRICK_POINTS: u32 = 5;

    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_Y: f32 = 326.0;
    pub const PADDLE_STEP: f32 = 10.0;

    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED: f32 = 11.0;
    /// Ball center height when resting on the paddle
    pub const BALL_REST_Y: f32 = 310.0;

    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_MARGIN: f32 = 5.0;
    /// (center y, hit-count) per row, top to bottom
    pub const BRICK_ROWS: [(f32, u8); 3] = [(50.0, 3), (70.0, 2), (90.0, 1)];
}

/// Capabilities every drawable entity shares.
pub trait GameObject {
    fn bounds(&self) -> Bounds;
    fn translate(&mut self, dx: f32, dy: f32);
}
