//! Virtual clock for deferred actions.
//!
//! `TimerQueue` stands in for a browser's `setTimeout` when the game runs
//! headless. Time only moves when `advance` is called, which makes flip-back
//! and win delays easy to step through in tests.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Duration;

use super::session::Deferred;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Timer {
    due: Duration,
    /// Insertion order, breaks ties between timers due at the same instant.
    seq: u64,
    action: Deferred,
}

impl Ord for Timer {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.due, self.seq).cmp(&(other.due, other.seq))
    }
}

impl PartialOrd for Timer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One-shot timers on a virtual clock.
#[derive(Clone, Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_seq: u64,
    pending: BinaryHeap<Reverse<Timer>>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the queue was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of timers that have not fired yet.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// When the next timer fires, if any.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.pending.peek().map(|Reverse(timer)| timer.due)
    }

    /// Schedule `action` to fire `delay` from now.
    pub fn schedule(&mut self, delay: Duration, action: Deferred) {
        let timer = Timer {
            due: self.now + delay,
            seq: self.next_seq,
            action,
        };
        self.next_seq += 1;
        self.pending.push(Reverse(timer));
    }

    /// Move the clock forward and return every action that became due.
    ///
    /// Actions come back in due order; timers due at the same instant keep
    /// the order they were scheduled in.
    pub fn advance(&mut self, by: Duration) -> Vec<Deferred> {
        self.now += by;

        let mut due = Vec::new();
        while let Some(Reverse(timer)) = self.pending.peek() {
            if timer.due > self.now {
                break;
            }
            if let Some(Reverse(timer)) = self.pending.pop() {
                due.push(timer.action);
            }
        }
        due
    }
}
