//! Pluggable persistence backings for the history store

use crate::error::{Error, Result};
use crate::history::store::HistoryEntry;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Load/save of the serialized entry list. The store treats one backend as
/// authoritative; an optional second backend acts as a best-effort mirror.
pub trait HistoryBackend: Send {
    fn load(&self) -> Result<Vec<HistoryEntry>>;
    fn save(&self, entries: &[HistoryEntry]) -> Result<()>;

    /// Label used in log messages when a mirror write is swallowed.
    fn describe(&self) -> String;
}

/// Durable backing: one JSON file under the platform data directory.
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistoryBackend for JsonFileBackend {
    fn load(&self) -> Result<Vec<HistoryEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| Error::Persistence(format!("failed to read {}: {}", self.path.display(), e)))?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Persistence(format!("corrupt history file {}: {}", self.path.display(), e)))
    }

    fn save(&self, entries: &[HistoryEntry]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| Error::Persistence(format!("failed to create {}: {}", parent.display(), e)))?;
        }
        let content = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, content)
            .map_err(|e| Error::Persistence(format!("failed to write {}: {}", self.path.display(), e)))
    }

    fn describe(&self) -> String {
        format!("file:{}", self.path.display())
    }
}

/// In-memory backing for tests and ephemeral use.
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<Vec<HistoryEntry>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryBackend for MemoryBackend {
    fn load(&self) -> Result<Vec<HistoryEntry>> {
        Ok(self.entries.lock().expect("backend lock poisoned").clone())
    }

    fn save(&self, entries: &[HistoryEntry]) -> Result<()> {
        *self.entries.lock().expect("backend lock poisoned") = entries.to_vec();
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
