use super::consts::{BALL_RADIUS, BALL_SPEED};
use super::{Arena, Bounds, Contact, Direction, EntityId, GameObject, HitOutcome, Sign};

/// Identifies one ball instance. A fresh ball is built on every setup, so the
/// paddle can tell a stale association from the current one.
pub type BallId = u32;

#[derive(Debug, Clone)]
pub struct Ball {
    id: BallId,
    bounds: Bounds,
    direction: Direction,
    /// Distance per tick along each axis; `None` once the ball is stopped
    speed: Option<f32>,
}

impl Ball {
    pub fn new(id: BallId, cx: f32, cy: f32) -> Self {
        Self {
            id,
            bounds: Bounds::centered(cx, cy, BALL_RADIUS * 2.0, BALL_RADIUS * 2.0),
            direction: Direction::new(Sign::Pos, Sign::Neg),
            speed: Some(BALL_SPEED),
        }
    }

    pub fn id(&self) -> BallId {
        self.id
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[cfg(test)]
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    pub fn speed(&self) -> Option<f32> {
        self.speed
    }

    pub fn stop(&mut self) {
        self.speed = None;
    }

    /// One tick of motion. Side walls flip dx, the ceiling flips dy. There is
    /// no floor: dropping past the bottom is a miss the game loop detects.
    pub fn advance(&mut self, field_width: f32) {
        let Some(speed) = self.speed else { return };
        let b = self.bounds;
        if b.left <= 0.0 || b.right >= field_width {
            self.direction.dx = self.direction.dx.flipped();
        }
        if b.top <= 0.0 {
            self.direction.dy = self.direction.dy.flipped();
        }
        self.translate(
            self.direction.dx.as_f32() * speed,
            self.direction.dy.as_f32() * speed,
        );
    }

    /// Redirect off whatever the ball currently overlaps and damage every
    /// brick among `contacts`. Returns the points earned by destroyed bricks.
    ///
    /// Wedged between several objects the ball simply reverses vertically.
    /// Against a single object, a center past either side edge forces the
    /// horizontal direction outward; otherwise the ball reverses vertically.
    /// A lone brick redirects the ball by the same rule as the paddle.
    pub fn resolve_collision(&mut self, contacts: &[Contact], arena: &mut Arena) -> u32 {
        let mid_x = self.bounds.center_x();
        match contacts {
            [] => return 0,
            [single] => {
                let other = single.bounds;
                if mid_x > other.right {
                    self.direction.dx = Sign::Pos;
                } else if mid_x < other.left {
                    self.direction.dx = Sign::Neg;
                } else {
                    self.direction.dy = self.direction.dy.flipped();
                }
            }
            _ => self.direction.dy = self.direction.dy.flipped(),
        }

        let mut points = 0;
        for contact in contacts {
            if let EntityId::Brick(_) = contact.id {
                if let Some(HitOutcome::Destroyed { points: p }) = arena.hit(contact.id) {
                    points += p;
                }
            }
        }
        points
    }
}

impl GameObject for Ball {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.bounds = self.bounds.translated(dx, dy);
    }
}
