//! Round orchestration, scoring, and persisted statistics

mod core;
mod feedback;
mod stats;
mod store;

pub use core::{GameSession, Phase};
pub use feedback::{Feedback, Severity};
pub use stats::SessionStats;
pub use store::{JsonFileStore, MemoryStore, StatsStore, StoreError};
