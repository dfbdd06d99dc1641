//! Owner of the paddle and bricks.
//!
//! Entries are addressed by a tagged [`EntityId`]. Brick slots are never
//! reused, so an id stays valid (or dead) for the whole session.

use super::{Bounds, Brick, GameObject, HitOutcome, Paddle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityId {
    Paddle,
    Brick(usize),
}

/// An arena entry found overlapping the ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub id: EntityId,
    pub bounds: Bounds,
}

#[derive(Debug, Clone)]
pub struct Arena {
    paddle: Paddle,
    bricks: Vec<Option<Brick>>,
}

impl Arena {
    pub fn new(paddle: Paddle) -> Self {
        Self {
            paddle,
            bricks: Vec::new(),
        }
    }

    pub fn add_brick(&mut self, brick: Brick) -> EntityId {
        self.bricks.push(Some(brick));
        EntityId::Brick(self.bricks.len() - 1)
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn paddle_mut(&mut self) -> &mut Paddle {
        &mut self.paddle
    }

    #[cfg(test)]
    pub fn brick(&self, index: usize) -> Option<&Brick> {
        self.bricks.get(index).and_then(Option::as_ref)
    }

    /// Live bricks in creation order
    pub fn bricks(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().flatten()
    }

    pub fn bricks_remaining(&self) -> usize {
        self.bricks().count()
    }

    pub fn remove(&mut self, id: EntityId) {
        match id {
            EntityId::Brick(index) => {
                if let Some(slot) = self.bricks.get_mut(index) {
                    *slot = None;
                }
            }
            // The paddle lives for the whole session
            EntityId::Paddle => {}
        }
    }

    /// Every live entry whose box overlaps `area`, paddle first, then bricks
    /// in creation order.
    pub fn overlapping(&self, area: &Bounds) -> Vec<Contact> {
        let mut contacts = Vec::new();
        let paddle = self.paddle.bounds();
        if paddle.overlaps(area) {
            contacts.push(Contact {
                id: EntityId::Paddle,
                bounds: paddle,
            });
        }
        for (index, slot) in self.bricks.iter().enumerate() {
            if let Some(brick) = slot {
                let bounds = brick.bounds();
                if bounds.overlaps(area) {
                    contacts.push(Contact {
                        id: EntityId::Brick(index),
                        bounds,
                    });
                }
            }
        }
        contacts
    }

    /// Damage the brick behind `id`, dropping it from the arena once its
    /// hit-count runs out. Returns `None` for the paddle or a dead slot.
    pub fn hit(&mut self, id: EntityId) -> Option<HitOutcome> {
        let EntityId::Brick(index) = id else {
            return None;
        };
        let brick = self.bricks.get_mut(index)?.as_mut()?;
        let outcome = brick.hit();
        match outcome {
            HitOutcome::Destroyed { points } => {
                log::debug!("brick {index} destroyed (+{points})");
                self.remove(id);
            }
            HitOutcome::Damaged(left) => {
                log::trace!("brick {index} damaged, {left} hits left");
            }
        }
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena_with_two_bricks() -> Arena {
        let mut arena = Arena::new(Paddle::new(305.0, 326.0));
        arena.add_brick(Brick::new(42.5, 50.0, 1));
        arena.add_brick(Brick::new(117.5, 50.0, 2));
        arena
    }

    #[test]
    fn overlap_query_lists_paddle_before_bricks() {
        let mut arena = Arena::new(Paddle::new(80.0, 70.0));
        arena.add_brick(Brick::new(42.5, 60.0, 1));
        let contacts = arena.overlapping(&Bounds::new(60.0, 55.0, 70.0, 66.0));
        let ids: Vec<_> = contacts.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![EntityId::Paddle, EntityId::Brick(0)]);
    }

    #[test]
    fn destroyed_brick_leaves_collision_set() {
        let mut arena = arena_with_two_bricks();
        let probe = Bounds::new(70.0, 45.0, 90.0, 55.0);
        assert_eq!(arena.overlapping(&probe).len(), 2);

        assert_eq!(
            arena.hit(EntityId::Brick(0)),
            Some(HitOutcome::Destroyed { points: 5 })
        );
        assert_eq!(arena.bricks_remaining(), 1);
        let contacts = arena.overlapping(&probe);
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].id, EntityId::Brick(1));

        // Slot is dead now, ids are not reused
        assert_eq!(arena.hit(EntityId::Brick(0)), None);
        assert!(arena.brick(0).is_none());
    }

    #[test]
    fn hitting_the_paddle_does_nothing() {
        let mut arena = arena_with_two_bricks();
        assert_eq!(arena.hit(EntityId::Paddle), None);
        assert_eq!(arena.bricks_remaining(), 2);
    }
}
