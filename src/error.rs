use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Save file ended early while reading slot {slot}")]
    Truncated { slot: usize },
    #[error("Slot {slot} has a negative offset ({offset})")]
    NegativeOffset { slot: usize, offset: i64 },
    #[error("Label length prefix of slot {slot} is malformed")]
    LengthOverflow { slot: usize },
    #[error("Label of slot {slot} is not valid UTF-8")]
    InvalidUtf8 { slot: usize },
    #[error("Save file path has no parent directory")]
    NoParentDir,
}
