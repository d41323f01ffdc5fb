use crate::domain::{format_clock, format_work_days, non_negative, ChronoStore, SLOT_COUNT};
use std::time::{Duration, Instant};
use tracing::debug;

/// Default refresh interval in milliseconds
pub const DEFAULT_REFRESH_MS: u64 = 1000;

/// Get refresh interval
pub fn refresh_interval() -> Duration {
    Duration::from_millis(DEFAULT_REFRESH_MS)
}

/// Receiver of per-slot display text
pub trait DisplaySink {
    fn push_display(&mut self, slot: usize, clock_text: &str, work_days_text: &str);
}

/// Recompute every slot's text at `now` and push it to `sink`
pub fn refresh_all<S: DisplaySink + ?Sized>(store: &ChronoStore, now: i64, sink: &mut S) {
    for slot in 0..SLOT_COUNT {
        let elapsed = non_negative(store.elapsed_seconds(slot, now));
        sink.push_display(slot, &format_clock(elapsed), &format_work_days(elapsed));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// No periodic activity
    Idle,
    /// Ticking; next refresh due at `next_tick`
    Active { next_tick: Instant },
}

/// Drives the once-per-interval display refresh while any timer runs.
///
/// The scheduler never touches the store itself. The event loop asks it how
/// long to wait and whether a refresh is due, then performs the refresh on the
/// same thread that handles input.
#[derive(Debug)]
pub struct RefreshScheduler {
    state: SchedulerState,
    interval: Duration,
    refresh_pending: bool,
}

impl RefreshScheduler {
    /// Starts Idle with one refresh pending so the initial values are shown
    pub fn new(interval: Duration) -> Self {
        Self {
            state: SchedulerState::Idle,
            interval,
            refresh_pending: true,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SchedulerState::Active { .. })
    }

    /// Move to Active if `any_running`, to Idle otherwise
    pub fn sync(&mut self, any_running: bool, now: Instant) {
        if any_running {
            self.activate(now);
        } else {
            self.deactivate();
        }
    }

    /// Idle -> Active. A no-op while already Active, so the tick phase is kept.
    pub fn activate(&mut self, now: Instant) {
        if let SchedulerState::Idle = self.state {
            debug!("refresh scheduler active");
            self.state = SchedulerState::Active {
                next_tick: now + self.interval,
            };
        }
    }

    /// Active -> Idle, with one immediate refresh to show the final values
    pub fn deactivate(&mut self) {
        if self.is_active() {
            debug!("refresh scheduler idle");
            self.state = SchedulerState::Idle;
            self.refresh_pending = true;
        }
    }

    /// Ask for a refresh on the next poll regardless of state
    pub fn request_refresh(&mut self) {
        self.refresh_pending = true;
    }

    /// How long the event loop may wait before the next refresh.
    /// `None` means there is nothing scheduled and it may block indefinitely.
    pub fn time_until_refresh(&self, now: Instant) -> Option<Duration> {
        if self.refresh_pending {
            return Some(Duration::ZERO);
        }
        match self.state {
            SchedulerState::Idle => None,
            SchedulerState::Active { next_tick } => Some(next_tick.saturating_duration_since(now)),
        }
    }

    /// Whether a refresh is due at `now`; consumes the pending request or tick
    pub fn poll_due(&mut self, now: Instant) -> bool {
        let mut due = std::mem::take(&mut self.refresh_pending);

        if let SchedulerState::Active { next_tick } = self.state {
            if now >= next_tick {
                due = true;
                let mut next = next_tick + self.interval;
                // Skip missed ticks rather than firing a burst after a stall
                if next <= now {
                    next = now + self.interval;
                }
                self.state = SchedulerState::Active { next_tick: next };
            }
        }

        due
    }
}

impl Default for RefreshScheduler {
    fn default() -> Self {
        Self::new(refresh_interval())
    }
}
