//! The aggregate translation catalog.
//!
//! Entries accumulate in walk order across all files. Key collisions are
//! resolved last-write-wins with no validation: a later entry silently
//! overwrites an earlier one's text. Short texts self-key, so identical
//! strings in different files intentionally merge into one entry.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::{Map, Value};

/// Ordered key→text mapping, serialized once at the end of the run.
///
/// Backed by `serde_json::Map` with the `preserve_order` feature, so the
/// serialized document lists keys in first-insertion order.
#[derive(Default)]
pub struct Catalog {
    entries: Map<String, Value>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one file's entries. Later entries overwrite earlier ones on
    /// key collision (the overwritten key keeps its original position).
    pub fn merge(&mut self, entries: Vec<(String, String)>) {
        for (key, text) in entries {
            self.entries.insert(key, Value::String(text));
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    /// Serialize as a flat pretty-printed JSON object with a trailing
    /// newline. Written even when empty, so a run always produces a catalog.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(&Value::Object(self.entries.clone()))
            .context("Failed to serialize catalog")?;

        fs::write(path, format!("{}\n", content))
            .with_context(|| format!("Failed to write file: {}", path.display()))
    }
}
