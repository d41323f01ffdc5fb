pub mod adapter;
pub mod codec;
pub mod files;

pub use adapter::SaveFile;
pub use files::{log_file, resolve_data_dir, save_file};
