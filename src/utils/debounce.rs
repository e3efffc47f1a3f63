//! Save debounce timer
//!
//! Poll-driven quiet-period tracking for autosave. The session bumps a
//! mutation revision on every document change; the host polls with its
//! own clock. The debouncer restarts the quiet period whenever it
//! observes a new revision and reports due exactly once per quiet period
//! after the last observed mutation. Keeping the clock on the caller's
//! side leaves the core synchronous and thread-free.

/// Tracks one debounced deadline against a mutation revision counter.
#[derive(Clone, Copy, Debug)]
pub struct SaveDebouncer {
    quiet_ms: f64,
    seen_revision: u64,
    deadline: Option<f64>,
}

impl SaveDebouncer {
    pub fn new(quiet_ms: f64) -> Self {
        Self {
            quiet_ms,
            seen_revision: 0,
            deadline: None,
        }
    }

    /// Observe the current revision at time `now_ms`; true means the
    /// quiet period has elapsed since the last mutation and the caller
    /// should fire now. Firing disarms the deadline until the next
    /// revision change.
    pub fn poll(&mut self, revision: u64, now_ms: f64) -> bool {
        if revision != self.seen_revision {
            self.seen_revision = revision;
            self.deadline = Some(now_ms + self.quiet_ms);
            return false;
        }
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Disarm without firing (manual save, document replaced).
    pub fn reset(&mut self, revision: u64) {
        self.seen_revision = revision;
        self.deadline = None;
    }
}
