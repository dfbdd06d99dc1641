use super::ball::{Ball, BallId};
use super::consts::{PADDLE_HEIGHT, PADDLE_WIDTH};
use super::{Bounds, GameObject};

#[derive(Debug, Clone)]
pub struct Paddle {
    bounds: Bounds,
    /// Ball resting on the paddle before launch. Not owned.
    carrying: Option<BallId>,
}

impl Paddle {
    pub fn new(cx: f32, cy: f32) -> Self {
        Self {
            bounds: Bounds::centered(cx, cy, PADDLE_WIDTH, PADDLE_HEIGHT),
            carrying: None,
        }
    }

    pub fn carry(&mut self, ball: &Ball) {
        self.carrying = Some(ball.id());
    }

    pub fn release(&mut self) {
        self.carrying = None;
    }

    pub fn is_carrying(&self, ball: &Ball) -> bool {
        self.carrying == Some(ball.id())
    }

    /// Slide horizontally by `offset`. A move that would push either edge
    /// outside `[0, field_width]` is rejected outright. Returns whether the
    /// paddle moved.
    pub fn move_by(&mut self, offset: f32, field_width: f32, ball: &mut Ball) -> bool {
        if self.bounds.left + offset < 0.0 || self.bounds.right + offset > field_width {
            return false;
        }
        self.translate(offset, 0.0);
        if self.is_carrying(ball) {
            ball.translate(offset, 0.0);
        }
        true
    }
}

impl GameObject for Paddle {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.bounds = self.bounds.translated(dx, dy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::consts::FIELD_WIDTH;
    use proptest::prelude::*;

    #[test]
    fn rejected_move_leaves_paddle_untouched() {
        let mut paddle = Paddle::new(45.0, 326.0);
        let mut ball = Ball::new(1, 45.0, 310.0);
        let before = paddle.bounds();
        // left edge is at 5, a step of 10 would land at -5
        assert!(!paddle.move_by(-10.0, FIELD_WIDTH, &mut ball));
        assert_eq!(paddle.bounds(), before);
    }

    #[test]
    fn move_to_exact_edge_is_allowed() {
        let mut paddle = Paddle::new(45.0, 326.0);
        let mut ball = Ball::new(1, 45.0, 310.0);
        assert!(paddle.move_by(-5.0, FIELD_WIDTH, &mut ball));
        assert_eq!(paddle.bounds().left, 0.0);
    }

    #[test]
    fn carried_ball_follows_paddle() {
        let mut paddle = Paddle::new(305.0, 326.0);
        let mut ball = Ball::new(7, 305.0, 310.0);
        paddle.carry(&ball);
        paddle.move_by(10.0, FIELD_WIDTH, &mut ball);
        assert_eq!(ball.bounds().center_x(), 315.0);

        paddle.release();
        paddle.move_by(10.0, FIELD_WIDTH, &mut ball);
        assert_eq!(ball.bounds().center_x(), 315.0);
        assert_eq!(paddle.bounds().center_x(), 325.0);
    }

    #[test]
    fn stale_ball_is_not_carried() {
        let mut paddle = Paddle::new(305.0, 326.0);
        let old = Ball::new(1, 305.0, 310.0);
        let mut new = Ball::new(2, 305.0, 310.0);
        paddle.carry(&old);
        paddle.move_by(10.0, FIELD_WIDTH, &mut new);
        assert_eq!(new.bounds().center_x(), 305.0);
    }

    proptest! {
        #[test]
        fn paddle_never_leaves_playfield(steps in proptest::collection::vec(-40.0f32..40.0, 0..200)) {
            let mut paddle = Paddle::new(FIELD_WIDTH / 2.0, 326.0);
            let mut ball = Ball::new(1, 0.0, 0.0);
            for step in steps {
                paddle.move_by(step, FIELD_WIDTH, &mut ball);
                let b = paddle.bounds();
                prop_assert!(b.left >= 0.0);
                prop_assert!(b.right <= FIELD_WIDTH);
            }
        }
    }
}
