//! User-initiated click flag.
//!
//! A click on a tab both activates it and (through navigation) triggers the
//! route synchroniser. While the flag is set the session skips automatic
//! centring, so the clicked tab does not jump under the pointer.

/// Flag set on click and expiring after a fixed delay.
#[derive(Debug, Clone)]
pub struct ClickGuard {
    reset_after_ms: i64,
    set_at: Option<i64>,
}

impl ClickGuard {
    pub fn new(reset_after_ms: u64) -> Self {
        Self {
            reset_after_ms: i64::try_from(reset_after_ms).unwrap_or(i64::MAX),
            set_at: None,
        }
    }

    /// Record a click at `now`. A new click restarts the timer.
    pub fn mark(&mut self, now: i64) {
        self.set_at = Some(now);
    }

    /// Whether the flag is still set at `now`. Expired flags are cleared.
    pub fn is_active(&mut self, now: i64) -> bool {
        match self.set_at {
            Some(at) if now.saturating_sub(at) < self.reset_after_ms => true,
            Some(_) => {
                self.set_at = None;
                false
            }
            None => false,
        }
    }

    /// Cancel the pending reset.
    pub fn clear(&mut self) {
        self.set_at = None;
    }
}
