use std::cell::RefCell;
use std::fs;
use std::path::PathBuf;
use std::rc::Rc;

use log::{debug, warn};
use thiserror::Error;

use crate::session::stats::SessionStats;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed stats record: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Persistence collaborator for [`SessionStats`]
///
/// The session loads once at construction and saves after every stats
/// mutation. Implementations must not fail loudly: missing or corrupt
/// data is `None`, and a failed save is logged and swallowed, since the
/// in-memory stats remain the source of truth.
pub trait StatsStore {
    fn load(&mut self) -> Option<SessionStats>;
    fn save(&mut self, stats: &SessionStats);
}

/// In-memory store for tests and ephemeral sessions
///
/// Clones share the same record, so a test can keep a handle and inspect
/// what the session wrote through.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    record: Rc<RefCell<Option<SessionStats>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stats(stats: SessionStats) -> Self {
        Self {
            record: Rc::new(RefCell::new(Some(stats))),
        }
    }

    /// The last record written through, if any
    pub fn snapshot(&self) -> Option<SessionStats> {
        self.record.borrow().clone()
    }
}

impl StatsStore for MemoryStore {
    fn load(&mut self) -> Option<SessionStats> {
        self.record.borrow().clone()
    }

    fn save(&mut self, stats: &SessionStats) {
        *self.record.borrow_mut() = Some(stats.clone());
    }
}

/// Stats persisted as a single JSON document at a fixed path
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn try_load(&self) -> Result<SessionStats, StoreError> {
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn try_save(&self, stats: &SessionStats) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(stats)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl StatsStore for JsonFileStore {
    fn load(&mut self) -> Option<SessionStats> {
        match self.try_load() {
            Ok(stats) => {
                debug!("Loaded stats from {}", self.path.display());
                Some(stats)
            }
            Err(e) => {
                warn!(
                    "No usable stats at {} ({}); starting fresh",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }

    fn save(&mut self, stats: &SessionStats) {
        if let Err(e) = self.try_save(stats) {
            warn!("Failed to save stats to {}: {}", self.path.display(), e);
        }
    }
}
