//! One-shot timers on a logical millisecond clock.
//!
//! The game owns the scheduler and is the only thing that fires it, so every
//! action runs on the same actor, one at a time.

use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// One physics step
    Tick,
    /// Rebuild the ball after a lost life
    Respawn,
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    due: u64,
    action: Action,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    now: u64,
    /// Sorted by due time, ties in scheduling order
    pending: VecDeque<Timer>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn now(&self) -> u64 {
        self.now
    }

    #[cfg(test)]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    #[cfg(test)]
    pub fn is_pending(&self, action: Action) -> bool {
        self.pending.iter().any(|t| t.action == action)
    }

    /// Fire `action` once, no earlier than `delay_ms` from now.
    pub fn after(&mut self, delay_ms: u64, action: Action) {
        let due = self.now + delay_ms;
        let at = self.pending.partition_point(|t| t.due <= due);
        self.pending.insert(at, Timer { due, action });
        log::trace!("scheduled {action:?} at {due}ms");
    }

    /// Pop the next action due at or before `until`, moving the clock to its
    /// due time so anything it schedules is measured from there.
    pub fn next_due(&mut self, until: u64) -> Option<Action> {
        match self.pending.front() {
            Some(timer) if timer.due <= until => {
                let timer = self.pending.pop_front()?;
                self.now = timer.due;
                Some(timer.action)
            }
            _ => {
                self.now = self.now.max(until);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_due_order() {
        let mut s = Scheduler::new();
        s.after(1000, Action::Respawn);
        s.after(50, Action::Tick);
        assert_eq!(s.next_due(2000), Some(Action::Tick));
        assert_eq!(s.now(), 50);
        assert_eq!(s.next_due(2000), Some(Action::Respawn));
        assert_eq!(s.next_due(2000), None);
        assert_eq!(s.now(), 2000);
        assert!(s.is_idle());
    }

    #[test]
    fn nothing_fires_early() {
        let mut s = Scheduler::new();
        s.after(50, Action::Tick);
        assert_eq!(s.next_due(49), None);
        assert_eq!(s.now(), 49);
        assert!(s.is_pending(Action::Tick));
        assert_eq!(s.next_due(50), Some(Action::Tick));
    }

    #[test]
    fn rescheduling_is_relative_to_due_time() {
        let mut s = Scheduler::new();
        s.after(50, Action::Tick);
        // a late wake-up at 120ms still keeps the 50ms cadence
        assert_eq!(s.next_due(120), Some(Action::Tick));
        s.after(50, Action::Tick);
        assert_eq!(s.next_due(120), Some(Action::Tick));
        assert_eq!(s.now(), 100);
        s.after(50, Action::Tick);
        assert_eq!(s.next_due(120), None);
        assert_eq!(s.now(), 120);
    }

    #[test]
    fn equal_due_times_keep_scheduling_order() {
        let mut s = Scheduler::new();
        s.after(10, Action::Respawn);
        s.after(10, Action::Tick);
        assert_eq!(s.next_due(10), Some(Action::Respawn));
        assert_eq!(s.next_due(10), Some(Action::Tick));
    }
}
