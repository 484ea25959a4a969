//! Rolling store of past analyses, newest first, capped at a fixed size

use crate::analysis::AnalysisResult;
use crate::error::{Error, Result};
use crate::history::backend::HistoryBackend;
use chrono::{DateTime, Utc};
use log::warn;
use rand::Rng;
use serde::{Deserialize, Serialize};

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_SUFFIX_LEN: usize = 9;

/// One recorded analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub role_id: String,
    pub role_name: String,
    pub resume_name: String,
    pub result: AnalysisResult,
}

/// Keeps the most recent analyses in memory and writes the full list through
/// to its backend after every mutation. A mirror backend, when configured,
/// receives the same writes but its failures are logged and dropped.
pub struct HistoryStore {
    backend: Box<dyn HistoryBackend>,
    mirror: Option<Box<dyn HistoryBackend>>,
    entries: Vec<HistoryEntry>,
    max_entries: usize,
}

impl std::fmt::Debug for HistoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryStore")
            .field("entries", &self.entries)
            .field("max_entries", &self.max_entries)
            .finish_non_exhaustive()
    }
}

impl HistoryStore {
    /// Opens the store, loading whatever the backend currently holds.
    pub fn open(backend: Box<dyn HistoryBackend>, max_entries: usize) -> Result<Self> {
        if max_entries == 0 {
            return Err(Error::InvalidInput(
                "history capacity must be at least 1".to_string(),
            ));
        }
        let mut entries = backend.load()?;
        entries.truncate(max_entries);
        Ok(Self {
            backend,
            mirror: None,
            entries,
            max_entries,
        })
    }

    pub fn with_mirror(mut self, mirror: Box<dyn HistoryBackend>) -> Self {
        self.mirror = Some(mirror);
        self
    }

    /// Records a new analysis at the front of the list, evicting the oldest
    /// entry once the store is at capacity. Returns the stored entry.
    pub fn append(
        &mut self,
        role_id: &str,
        role_name: &str,
        resume_name: &str,
        result: AnalysisResult,
    ) -> Result<HistoryEntry> {
        let entry = HistoryEntry {
            id: generate_id(Utc::now()),
            timestamp: Utc::now(),
            role_id: role_id.to_string(),
            role_name: role_name.to_string(),
            resume_name: resume_name.to_string(),
            result,
        };
        self.entries.insert(0, entry.clone());
        self.entries.truncate(self.max_entries);
        self.persist()?;
        Ok(entry)
    }

    /// All entries, newest first.
    pub fn list(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Removes one entry by id. Returns true if it was present.
    pub fn remove(&mut self, id: &str) -> Result<bool> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.entries.clear();
        self.persist()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&self) -> Result<()> {
        self.backend.save(&self.entries)?;
        if let Some(mirror) = &self.mirror {
            if let Err(e) = mirror.save(&self.entries) {
                warn!("history mirror {} write failed: {}", mirror.describe(), e);
            }
        }
        Ok(())
    }
}

/// Ids look like `analysis_<millis>_<9 lowercase alphanumerics>`.
fn generate_id(now: DateTime<Utc>) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("analysis_{}_{}", now.timestamp_millis(), suffix)
}
