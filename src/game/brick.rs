use super::consts::{BRICK_HEIGHT, BRICK_POINTS, BRICK_WIDTH};
use super::{Bounds, GameObject};

/// Result of a single hit on a brick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// Brick survived with this many hits left
    Damaged(u8),
    /// Brick is gone; award the points
    Destroyed { points: u32 },
}

#[derive(Debug, Clone)]
pub struct Brick {
    bounds: Bounds,
    hits: u8,
}

impl Brick {
    pub fn new(cx: f32, cy: f32, hits: u8) -> Self {
        debug_assert!((1..=3).contains(&hits));
        Self {
            bounds: Bounds::centered(cx, cy, BRICK_WIDTH, BRICK_HEIGHT),
            hits,
        }
    }

    pub fn hits(&self) -> u8 {
        self.hits
    }

    pub fn hit(&mut self) -> HitOutcome {
        self.hits = self.hits.saturating_sub(1);
        if self.hits == 0 {
            HitOutcome::Destroyed { points: BRICK_POINTS }
        } else {
            HitOutcome::Damaged(self.hits)
        }
    }
}

impl GameObject for Brick {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.bounds = self.bounds.translated(dx, dy);
    }
}
