//! Timed steps for playback, highlight clearing and auto-advance.
//!
//! Every pending step is stamped with the scheduler's epoch. The engine calls
//! [`Scheduler::invalidate`] on each phase change, which drops whatever is
//! pending and bumps the epoch, so a step scheduled for an earlier phase can
//! never fire into a later one. The scheduler does not own a clock: callers
//! pass the current time in, either from a real `Instant` or a synthetic one.

use std::time::Duration;

use decode_types::GameAction;

#[derive(Debug, Clone)]
struct Pending {
    due: Duration,
    epoch: u64,
    seq: u64,
    action: GameAction,
}

/// A step that came due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueStep {
    pub due: Duration,
    pub action: GameAction,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    epoch: u64,
    next_seq: u64,
    pending: Vec<Pending>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `action` to fire at `due`.
    pub fn schedule(&mut self, due: Duration, action: GameAction) {
        self.pending.push(Pending {
            due,
            epoch: self.epoch,
            seq: self.next_seq,
            action,
        });
        self.next_seq += 1;
    }

    /// Drop every pending step and start a new epoch.
    pub fn invalidate(&mut self) {
        if !self.pending.is_empty() {
            log::debug!(target: "scheduler", "dropping {} stale step(s)", self.pending.len());
        }
        self.pending.clear();
        self.epoch += 1;
    }

    /// Remove and return the earliest step due at or before `now`.
    /// Steps with the same due time fire in scheduling order.
    pub fn pop_due(&mut self, now: Duration) -> Option<DueStep> {
        let idx = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due <= now && p.epoch == self.epoch)
            .min_by_key(|(_, p)| (p.due, p.seq))
            .map(|(i, _)| i)?;
        let p = self.pending.remove(idx);
        Some(DueStep {
            due: p.due,
            action: p.action,
        })
    }

    /// Due time of the earliest pending step.
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.iter().map(|p| p.due).min()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
