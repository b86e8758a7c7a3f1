pub mod catalog;
pub mod recommend;

pub use recommend::recommend;

use crate::types::report::Priority;
use serde::Serialize;

/// One curated catalog row. The same shape covers all five categories.
#[derive(Debug, Clone, Serialize)]
pub struct TrendEntry {
    pub name: String,
    pub summary: String,
    pub priority: Priority,
    pub note: String,
}

impl TrendEntry {
    fn new(name: &str, summary: &str, priority: Priority, note: &str) -> Self {
        Self {
            name: name.to_string(),
            summary: summary.to_string(),
            priority,
            note: note.to_string(),
        }
    }
}

/// The curated AI trend catalog. Static content versioned with the crate;
/// refreshing it from live sources is a concern of whoever ships updates.
#[derive(Debug, Clone, Serialize)]
pub struct TrendSet {
    pub models: Vec<TrendEntry>,
    pub frameworks: Vec<TrendEntry>,
    pub techniques: Vec<TrendEntry>,
    pub tools: Vec<TrendEntry>,
    pub use_cases: Vec<TrendEntry>,
}

impl TrendSet {
    pub fn latest() -> TrendSet {
        catalog::latest()
    }
}
