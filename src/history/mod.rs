//! Rolling analysis history and derived statistics

pub mod backend;
pub mod stats;
pub mod store;

pub use backend::{HistoryBackend, JsonFileBackend, MemoryBackend};
pub use stats::{ChartPoint, Stats};
pub use store::{HistoryEntry, HistoryStore};
