pub mod files;
pub mod history;
pub mod store;

pub use files::{ensure_data_dir, get_data_dir, log_file, store_file};
pub use history::{load_history, save_history};
#[cfg(test)]
pub use store::MemoryStore;
pub use store::{JsonFileStore, KeyValueStore, StoreError};
