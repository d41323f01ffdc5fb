pub mod enums;
pub mod format;
pub mod slot;
pub mod store;

pub use enums::{RunStatus, UiMode};
pub use format::{format_clock, format_work_days, non_negative};
pub use slot::ChronoSlot;
pub use store::{ChronoStore, SLOT_COUNT};
