use super::slot::ChronoSlot;

/// Number of timers shown and persisted
pub const SLOT_COUNT: usize = 3;

/// Fixed, index-addressed set of timers.
///
/// Every operation takes an explicit slot index in `0..SLOT_COUNT`.
///
/// # Panics
///
/// Indices outside that range are a caller bug and panic on the slice access.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChronoStore {
    slots: [ChronoSlot; SLOT_COUNT],
}

impl ChronoStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_slots(slots: [ChronoSlot; SLOT_COUNT]) -> Self {
        Self { slots }
    }

    pub fn slots(&self) -> &[ChronoSlot; SLOT_COUNT] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> &ChronoSlot {
        &self.slots[index]
    }

    /// Start slot `index`. Returns false if it was already running.
    pub fn start(&mut self, index: usize, now: i64) -> bool {
        self.slots[index].start(now)
    }

    /// Stop slot `index`, banking the open interval.
    /// Returns false (and changes nothing) if it was not running.
    pub fn stop(&mut self, index: usize, now: i64) -> bool {
        self.slots[index].fold(now)
    }

    /// Zero slot `index` whatever its state
    pub fn reset(&mut self, index: usize) {
        self.slots[index].reset();
    }

    pub fn set_label(&mut self, index: usize, text: impl Into<String>) {
        self.slots[index].label = text.into();
    }

    pub fn label(&self, index: usize) -> &str {
        &self.slots[index].label
    }

    pub fn elapsed_seconds(&self, index: usize, now: i64) -> i64 {
        self.slots[index].elapsed_at(now)
    }

    pub fn is_running(&self, index: usize) -> bool {
        self.slots[index].is_running()
    }

    pub fn any_running(&self) -> bool {
        self.slots.iter().any(ChronoSlot::is_running)
    }

    /// Fold every open interval into its offset before the final save.
    /// Returns how many slots were still running.
    pub fn finalize(&mut self, now: i64) -> usize {
        self.slots
            .iter_mut()
            .map(|slot| slot.fold(now))
            .filter(|folded| *folded)
            .count()
    }
}
