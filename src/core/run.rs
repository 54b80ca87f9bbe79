//! Extraction run orchestration.
//!
//! Walk order is computed up front; per-file pipelines then run in
//! parallel, and their results are collected positionally and merged into
//! the catalog in a single sequential pass. The catalog is never mutated
//! concurrently — collision policy (last-write-wins) stays deterministic.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;
use rayon::prelude::*;

use crate::config::{CATALOG_FILE_NAME, Config};
use crate::core::catalog::Catalog;
use crate::core::extract::process_file;
use crate::core::scaffold::write_runtime_module;
use crate::core::walker::walk_source_tree;

pub struct ExtractionOptions {
    pub source_root: PathBuf,
    pub output_root: PathBuf,
    pub namespace: String,
    pub config: Config,
    pub verbose: bool,
}

/// What one extraction run did; the CLI report prints this.
pub struct ExtractionSummary {
    pub files_seen: usize,
    pub files_rewritten: usize,
    pub files_copied: usize,
    pub entry_count: usize,
    /// Subtrees and files that failed: path → cause. Non-empty failures
    /// yield a failure exit status, but every successful output is still
    /// written.
    pub failures: BTreeMap<String, String>,
}

pub fn run_extraction(opts: &ExtractionOptions) -> Result<ExtractionSummary> {
    let walk = walk_source_tree(&opts.source_root, &opts.config, opts.verbose)?;
    let mut failures = walk.failures;

    fs::create_dir_all(&opts.output_root).with_context(|| {
        format!(
            "Failed to create output root: {}",
            opts.output_root.display()
        )
    })?;

    // parallel per-file pipelines; results stay in walk order
    let results: Vec<_> = walk
        .files
        .par_iter()
        .map(|path| {
            (
                path.clone(),
                process_file(&opts.source_root, &opts.output_root, path),
            )
        })
        .collect();

    let mut catalog = Catalog::new();
    let mut files_rewritten = 0;
    let mut files_copied = 0;

    for (path, result) in results {
        match result {
            Ok(report) => {
                if report.rewritten {
                    files_rewritten += 1;
                } else {
                    files_copied += 1;
                }
                catalog.merge(report.entries);
            }
            Err(err) => {
                if opts.verbose {
                    eprintln!(
                        "{} Skipping {}: {:#}",
                        "warning:".bold().yellow(),
                        path.display(),
                        err
                    );
                }
                failures.insert(path.display().to_string(), format!("{err:#}"));
            }
        }
    }

    catalog.save(&opts.output_root.join(CATALOG_FILE_NAME))?;
    write_runtime_module(&opts.output_root, &opts.namespace)?;

    Ok(ExtractionSummary {
        files_seen: walk.files.len(),
        files_rewritten,
        files_copied,
        entry_count: catalog.len(),
        failures,
    })
}
