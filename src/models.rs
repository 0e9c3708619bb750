use crate::config::LEAF_LEVEL;
use serde::{Deserialize, Serialize};

/// One leaf-level task category from the catalog outline.
///
/// `parent` is the code with its last segment dropped; it names the level-3
/// section the task sits under. Entries are built once while scanning and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskEntry {
    pub code: String,
    pub name: String,
    pub level: usize,
    pub parent: String,
}

impl TaskEntry {
    /// Projects a classified `(code, name)` pair into a leaf entry.
    ///
    /// Codes with a segment count other than [`LEAF_LEVEL`] are section or
    /// subsection headers and yield `None`. No check is made that the parent
    /// code appears elsewhere in the document, and duplicate codes are all
    /// emitted independently.
    pub fn leaf(code: &str, name: &str) -> Option<TaskEntry> {
        let segments: Vec<&str> = code.split('.').collect();
        if segments.len() != LEAF_LEVEL {
            return None;
        }
        Some(TaskEntry {
            code: code.to_string(),
            name: name.to_string(),
            level: LEAF_LEVEL,
            parent: segments[..LEAF_LEVEL - 1].join("."),
        })
    }
}
