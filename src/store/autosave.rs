//! Debounced autosave scheduling
//!
//! Coalesces rapid edits into a single persistence write issued after a
//! quiet period. The scheduler is a pure state machine over an explicit
//! millisecond clock supplied by the caller, so the host drives it from
//! its timer of choice and the tests drive it directly.

/// Quiet period after the last mutation before a save is issued
pub const AUTOSAVE_DELAY_MS: f64 = 1500.0;

/// Debounce state machine for persistence writes
///
/// At most one write is ever in flight: a change arriving while a write
/// is outstanding reschedules after completion rather than racing it,
/// and a failed write reschedules a retry for the next cycle.
#[derive(Debug, Clone)]
pub struct AutosaveScheduler {
    delay_ms: f64,
    deadline: Option<f64>,
    in_flight: bool,
}

impl AutosaveScheduler {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms,
            deadline: None,
            in_flight: false,
        }
    }

    /// A document mutation happened at `now`
    ///
    /// Supersedes any pending deadline: the quiet period restarts.
    pub fn note_change(&mut self, now_ms: f64) {
        self.deadline = Some(now_ms + self.delay_ms);
    }

    /// Whether a save should be issued at `now`
    ///
    /// Returns `true` at most once per quiet period and marks the write
    /// in flight; the caller must report back via `save_finished`.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        if self.in_flight {
            return false;
        }
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                self.in_flight = true;
                true
            }
            _ => false,
        }
    }

    /// The issued write completed
    ///
    /// On failure the write is rescheduled for the next cycle.
    pub fn save_finished(&mut self, now_ms: f64, success: bool) {
        self.in_flight = false;
        if !success {
            log::warn!("autosave failed, retrying on next cycle");
            self.deadline = Some(now_ms + self.delay_ms);
        }
    }

    /// Whether edits are waiting for their quiet period
    pub fn has_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Whether a write is currently outstanding
    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Drop any pending schedule (used when a document is replaced)
    pub fn reset(&mut self) {
        self.deadline = None;
        self.in_flight = false;
    }
}

impl Default for AutosaveScheduler {
    fn default() -> Self {
        Self::new(AUTOSAVE_DELAY_MS)
    }
}
