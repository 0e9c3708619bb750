use crate::classify::classify_line;
use crate::models::TaskEntry;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Runs the full conversion pass: read the outline at `source`, keep the
/// leaf-level entries, and overwrite `dest` with the pretty-printed JSON
/// array. Returns the number of entries written.
///
/// Either the whole document is processed and the whole output written, or
/// nothing is: the JSON is built in memory before the single write.
pub fn run_conversion(source: &Path, dest: &Path) -> Result<usize> {
    let content = fs::read_to_string(source)
        .with_context(|| format!("Failed to read catalog outline: {}", source.display()))?;

    let entries = collect_entries(&content);
    info!(count = entries.len(), "Collected leaf entries");

    let json = serde_json::to_string_pretty(&entries)
        .context("Failed to serialize task budget entries")?;
    fs::write(dest, json)
        .with_context(|| format!("Failed to write task budget JSON: {}", dest.display()))?;

    Ok(entries.len())
}

/// Scans the outline text and returns the leaf entries in source-line order.
///
/// Blank lines, prose, and codes at any level other than the leaf level are
/// routine non-entry content and are skipped without logging.
pub fn collect_entries(content: &str) -> Vec<TaskEntry> {
    content
        .lines()
        .filter_map(|line| {
            let (code, name) = classify_line(line.trim())?;
            TaskEntry::leaf(code, name)
        })
        .collect()
}
