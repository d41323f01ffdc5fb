/// One independent timer: an optional open interval plus the time already banked
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChronoSlot {
    /// Unix timestamp (seconds) of the last start; `None` while stopped
    pub running_since: Option<i64>,
    /// Seconds accrued by previous running intervals, excluding the open one
    pub accumulated_offset: i64,
    /// User-edited project label
    pub label: String,
}

impl ChronoSlot {
    /// A stopped slot carrying previously banked time (used by the loader)
    pub fn stopped(accumulated_offset: i64, label: String) -> Self {
        Self {
            running_since: None,
            accumulated_offset,
            label,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    /// Total elapsed seconds at `now`: banked offset plus the open interval, if any
    pub fn elapsed_at(&self, now: i64) -> i64 {
        self.accumulated_offset.saturating_add(self.live_interval(now))
    }

    /// Open interval length; a wall clock seen going backward counts as zero
    fn live_interval(&self, now: i64) -> i64 {
        self.running_since
            .map(|since| now.saturating_sub(since).max(0))
            .unwrap_or(0)
    }

    /// Open a running interval. Returns false if one was already open.
    pub fn start(&mut self, now: i64) -> bool {
        if self.is_running() {
            return false;
        }
        self.running_since = Some(now);
        true
    }

    /// Fold the open interval into the offset and close it.
    /// Returns false if the slot was not running.
    pub fn fold(&mut self, now: i64) -> bool {
        let live = self.live_interval(now);
        match self.running_since.take() {
            Some(_) => {
                self.accumulated_offset = self.accumulated_offset.saturating_add(live);
                true
            }
            None => false,
        }
    }

    /// Zero the timer, running or not. The label is kept.
    pub fn reset(&mut self) {
        self.running_since = None;
        self.accumulated_offset = 0;
    }
}
