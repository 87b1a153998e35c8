mod persistence;
mod store;
mod usage;

pub use persistence::{load_database, save_database, JsonFileStore};
pub use store::{Database, MemoryStore, RecordStore};
pub use usage::{EntitlementGate, UsageState};
