//! Source tree walking.
//!
//! Enumerates extraction candidates under the source root. At every level
//! regular files sort before subdirectories (names ascending within each
//! group), so walk order — and therefore catalog merge order — is
//! deterministic across platforms. An unreadable subtree is recorded and
//! skipped; its siblings still process. An unreadable root fails the run.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use walkdir::WalkDir;

use crate::config::Config;

/// Result of walking the source tree.
pub struct WalkOutcome {
    /// Candidate files in walk order.
    pub files: Vec<PathBuf>,
    /// Unreadable subtrees: path → cause. The run continues past these.
    pub failures: BTreeMap<String, String>,
}

pub fn walk_source_tree(root: &Path, config: &Config, verbose: bool) -> Result<WalkOutcome> {
    if !root.is_dir() {
        return Err(anyhow!("Not a directory: {}", root.display()))
            .context("Failed to read source root");
    }

    let mut files = Vec::new();
    let mut failures = BTreeMap::new();

    let walker = WalkDir::new(root).sort_by(|a, b| {
        // files before subdirectories, then by name
        a.file_type()
            .is_dir()
            .cmp(&b.file_type().is_dir())
            .then_with(|| a.file_name().cmp(b.file_name()))
    });

    for entry in walker {
        match entry {
            Ok(entry) if entry.file_type().is_file() => {
                if is_candidate(entry.path(), config) {
                    files.push(entry.path().to_path_buf());
                }
            }
            Ok(_) => {}
            Err(err) => {
                // an error at depth 0 means the root itself is unreadable
                if err.depth() == 0 {
                    return Err(anyhow!(err))
                        .with_context(|| format!("Failed to read source root: {}", root.display()));
                }
                let path = err
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| root.display().to_string());
                if verbose {
                    eprintln!("{} Skipping {}: {}", "warning:".bold().yellow(), path, err);
                }
                failures.insert(path, err.to_string());
            }
        }
    }

    Ok(WalkOutcome { files, failures })
}

/// A file qualifies iff its name ends in a configured extension and its
/// path contains none of the configured exclusion markers.
fn is_candidate(path: &Path, config: &Config) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if !config.extensions.iter().any(|ext| name.ends_with(ext)) {
        return false;
    }
    let full_path = path.to_string_lossy();
    !config.excludes.iter().any(|marker| full_path.contains(marker))
}
