use crate::clock::Clock;
use crate::domain::{format_clock, format_work_days, ChronoStore, UiMode, SLOT_COUNT};
use crate::persistence::SaveFile;
use crate::scheduler::{refresh_all, DisplaySink, RefreshScheduler};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Last text pushed for one slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotDisplay {
    pub clock: String,
    pub work_days: String,
}

impl Default for SlotDisplay {
    fn default() -> Self {
        Self {
            clock: format_clock(0),
            work_days: format_work_days(0),
        }
    }
}

/// Per-slot display cache the renderer reads from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayTable {
    pub rows: [SlotDisplay; SLOT_COUNT],
}

impl DisplaySink for DisplayTable {
    fn push_display(&mut self, slot: usize, clock_text: &str, work_days_text: &str) {
        let row = &mut self.rows[slot];
        row.clock.clear();
        row.clock.push_str(clock_text);
        row.work_days.clear();
        row.work_days.push_str(work_days_text);
    }
}

/// Main application state.
///
/// Owns the timers and is the single place where they are mutated; the event
/// loop calls into it for input and for scheduled refreshes.
pub struct AppState {
    pub store: ChronoStore,
    pub scheduler: RefreshScheduler,
    pub display: DisplayTable,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub needs_save: bool,
    save_file: SaveFile,
    clock: Box<dyn Clock>,
}

impl AppState {
    pub fn new(
        store: ChronoStore,
        save_file: SaveFile,
        clock: Box<dyn Clock>,
        refresh_interval: Duration,
    ) -> Self {
        let mut scheduler = RefreshScheduler::new(refresh_interval);
        scheduler.sync(store.any_running(), Instant::now());

        Self {
            store,
            scheduler,
            display: DisplayTable::default(),
            selected_index: 0,
            ui_mode: UiMode::Normal,
            needs_save: false,
            save_file,
            clock,
        }
    }

    /// Load persisted timers and build the state around them
    pub fn load(save_file: SaveFile, clock: Box<dyn Clock>, refresh_interval: Duration) -> Self {
        let store = save_file.load();
        Self::new(store, save_file, clock, refresh_interval)
    }

    pub fn save_path(&self) -> &std::path::Path {
        self.save_file.path()
    }

    /// Start slot `index` if it is stopped
    pub fn start(&mut self, index: usize) {
        let now = self.clock.now();
        if self.store.start(index, now) {
            debug!(slot = index, "timer started");
            self.scheduler.activate(Instant::now());
            self.scheduler.request_refresh();
        }
    }

    /// Stop slot `index` if it is running, then save
    pub fn stop(&mut self, index: usize) {
        let now = self.clock.now();
        if self.store.stop(index, now) {
            debug!(slot = index, elapsed = self.store.elapsed_seconds(index, now), "timer stopped");
            if !self.store.any_running() {
                self.scheduler.deactivate();
            }
            self.scheduler.request_refresh();
            self.needs_save = true;
        }
    }

    /// Zero slot `index`. Other slots may keep the scheduler active.
    pub fn reset(&mut self, index: usize) {
        self.store.reset(index);
        debug!(slot = index, "timer reset");
        self.scheduler.sync(self.store.any_running(), Instant::now());
        self.scheduler.request_refresh();
    }

    pub fn set_label(&mut self, index: usize, text: impl Into<String>) {
        self.store.set_label(index, text);
    }

    /// Run a refresh if the scheduler says one is due. Returns true if it ran.
    pub fn refresh_if_due(&mut self, now: Instant) -> bool {
        if !self.scheduler.poll_due(now) {
            return false;
        }
        let wall = self.clock.now();
        refresh_all(&self.store, wall, &mut self.display);
        true
    }

    /// How long the event loop may block waiting for input
    pub fn poll_timeout(&self, now: Instant) -> Option<Duration> {
        self.scheduler.time_until_refresh(now)
    }

    /// Write the timers if a save was requested
    pub fn flush_save(&mut self) {
        if self.needs_save {
            self.save_file.save(&self.store);
            self.needs_save = false;
        }
    }

    /// Finalize running timers and save. Called once when the app closes.
    pub fn shutdown(&mut self) {
        let folded = self.store.finalize(self.clock.now());
        info!(running = folded, "shutting down, saving timers");
        self.scheduler.deactivate();
        self.save_file.save(&self.store);
        self.needs_save = false;
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < SLOT_COUNT {
            self.selected_index += 1;
        }
    }

    /// Select a slot by index; out-of-range requests are ignored
    pub fn select(&mut self, index: usize) {
        if index < SLOT_COUNT {
            self.selected_index = index;
        }
    }

    pub fn start_selected(&mut self) {
        self.start(self.selected_index);
    }

    pub fn stop_selected(&mut self) {
        self.stop(self.selected_index);
    }

    pub fn reset_selected(&mut self) {
        self.reset(self.selected_index);
    }

    /// Enter label editing for the selected slot
    pub fn begin_label_edit(&mut self) {
        self.ui_mode = UiMode::EditingLabel;
    }

    pub fn finish_label_edit(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    /// Append a character to the selected slot's label
    pub fn label_add_char(&mut self, c: char) {
        let index = self.selected_index;
        let mut text = self.store.label(index).to_string();
        text.push(c);
        self.set_label(index, text);
    }

    /// Remove the last character of the selected slot's label
    pub fn label_backspace(&mut self) {
        let index = self.selected_index;
        let mut text = self.store.label(index).to_string();
        if text.pop().is_some() {
            self.set_label(index, text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::testing::ManualClock;
    use crate::domain::ChronoSlot;
    use pretty_assertions::assert_eq;
    use tempfile::{tempdir, TempDir};

    fn create_test_app() -> (AppState, ManualClock, TempDir) {
        let temp_dir = tempdir().unwrap();
        let clock = ManualClock::at(1_700_000_000);
        let app = AppState::load(
            SaveFile::in_dir(temp_dir.path()),
            Box::new(clock.clone()),
            Duration::from_secs(1),
        );
        (app, clock, temp_dir)
    }

    #[test]
    fn test_initial_state_idle_with_zero_display() {
        let (mut app, _clock, _dir) = create_test_app();

        assert!(!app.scheduler.is_active());
        assert!(app.refresh_if_due(Instant::now()));
        assert_eq!(app.display.rows[0].clock, "00:00:00");
        assert_eq!(app.display.rows[0].work_days, "0.0 J/H");
    }

    #[test]
    fn test_start_activates_scheduler() {
        let (mut app, _clock, _dir) = create_test_app();
        app.start(1);

        assert!(app.store.is_running(1));
        assert!(app.scheduler.is_active());
        assert!(!app.needs_save);
    }

    #[test]
    fn test_stop_folds_time_and_saves() {
        let (mut app, clock, dir) = create_test_app();
        app.set_label(0, "Website");
        app.start(0);
        clock.advance(10);
        app.stop(0);

        assert_eq!(app.store.elapsed_seconds(0, clock.now()), 10);
        assert!(!app.scheduler.is_active());
        assert!(app.needs_save);

        app.flush_save();
        assert!(!app.needs_save);

        let reloaded = SaveFile::in_dir(dir.path()).load();
        assert_eq!(reloaded.slot(0), &ChronoSlot::stopped(10, "Website".to_string()));
    }

    #[test]
    fn test_stop_shows_final_value_immediately() {
        let (mut app, clock, _dir) = create_test_app();
        app.refresh_if_due(Instant::now());
        app.start(2);
        clock.advance(3_661);
        app.stop(2);

        assert!(app.refresh_if_due(Instant::now()));
        assert_eq!(app.display.rows[2].clock, "01:01:01");
        // Nothing left to refresh afterwards
        assert!(!app.refresh_if_due(Instant::now()));
        assert_eq!(app.poll_timeout(Instant::now()), None);
    }

    #[test]
    fn test_running_slot_refreshes_on_next_tick() {
        let (mut app, clock, _dir) = create_test_app();
        app.start(0);
        assert!(app.refresh_if_due(Instant::now()));
        assert_eq!(app.display.rows[0].clock, "00:00:00");

        clock.advance(5);
        assert!(app.scheduler.is_active());
        assert!(app.refresh_if_due(Instant::now() + Duration::from_secs(1)));
        assert_eq!(app.display.rows[0].clock, "00:00:05");
        assert_eq!(app.display.rows[1].clock, "00:00:00");
        assert!(app.store.is_running(0));
    }

    #[test]
    fn test_stop_on_stopped_slot_is_noop() {
        let (mut app, _clock, _dir) = create_test_app();
        let before = app.store.clone();
        app.stop(0);

        assert_eq!(app.store, before);
        assert!(!app.needs_save);
    }

    #[test]
    fn test_stop_one_of_two_keeps_scheduler_active() {
        let (mut app, clock, _dir) = create_test_app();
        app.start(0);
        app.start(1);
        clock.advance(5);
        app.stop(0);

        assert!(app.scheduler.is_active());
        app.stop(1);
        assert!(!app.scheduler.is_active());
    }

    #[test]
    fn test_reset_keeps_scheduler_while_other_slot_runs() {
        let (mut app, clock, _dir) = create_test_app();
        app.start(0);
        app.start(1);
        clock.advance(30);

        app.reset(0);
        assert!(app.scheduler.is_active());
        assert_eq!(app.store.elapsed_seconds(0, clock.now()), 0);

        app.reset(1);
        assert!(!app.scheduler.is_active());
        assert!(!app.needs_save);
    }

    #[test]
    fn test_shutdown_folds_running_and_saves() {
        let (mut app, clock, dir) = create_test_app();
        app.set_label(1, "Audit");
        app.start(1);
        clock.advance(120);
        app.shutdown();

        assert!(!app.store.any_running());
        let reloaded = SaveFile::in_dir(dir.path()).load();
        assert_eq!(reloaded.slot(1).accumulated_offset, 120);
        assert_eq!(reloaded.label(1), "Audit");
        assert!(!reloaded.any_running());
    }

    #[test]
    fn test_restart_restores_offsets_stopped() {
        let (mut app, clock, dir) = create_test_app();
        app.start(0);
        clock.advance(45);
        app.shutdown();

        let restarted = AppState::load(
            SaveFile::in_dir(dir.path()),
            Box::new(clock.clone()),
            Duration::from_secs(1),
        );
        assert!(!restarted.scheduler.is_active());
        assert_eq!(restarted.store.elapsed_seconds(0, clock.now() + 1_000), 45);
    }

    #[test]
    fn test_running_store_starts_scheduler_active() {
        let temp_dir = tempdir().unwrap();
        let clock = ManualClock::at(0);
        let mut store = ChronoStore::new();
        store.start(2, 0);

        let app = AppState::new(
            store,
            SaveFile::in_dir(temp_dir.path()),
            Box::new(clock),
            Duration::from_secs(1),
        );
        assert!(app.scheduler.is_active());
    }

    #[test]
    fn test_label_editing() {
        let (mut app, _clock, _dir) = create_test_app();
        app.select(2);
        app.begin_label_edit();
        for c in "Audit".chars() {
            app.label_add_char(c);
        }
        app.label_backspace();
        app.finish_label_edit();

        assert_eq!(app.store.label(2), "Audi");
        assert_eq!(app.ui_mode, UiMode::Normal);
        // Label edits alone do not save
        assert!(!app.needs_save);
    }

    #[test]
    fn test_selection_bounds() {
        let (mut app, _clock, _dir) = create_test_app();
        app.move_selection_up();
        assert_eq!(app.selected_index, 0);

        for _ in 0..10 {
            app.move_selection_down();
        }
        assert_eq!(app.selected_index, SLOT_COUNT - 1);

        app.select(SLOT_COUNT);
        assert_eq!(app.selected_index, SLOT_COUNT - 1);
    }
}
