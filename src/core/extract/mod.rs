//! Per-file extraction pipeline: read → parse → rewrite → emit.
//!
//! Each call owns its file's parsed tree and per-file counters; nothing
//! outlives the call, which keeps files independently processable (the
//! caller runs these in parallel and merges results in walk order).

pub mod keygen;
pub mod rewriter;
pub mod template;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use swc_common::SourceMap;

use crate::core::emit::{copy_verbatim, print_module, runtime_import, write_transformed};
use crate::core::parsers::jsx::parse_jsx_source;

pub use rewriter::{FileExtraction, rewrite_module};

/// Outcome of processing one file.
pub struct FileReport {
    /// Path relative to the source root (mirrored under the output root).
    pub relative_path: PathBuf,
    /// Key→text pairs in encounter order.
    pub entries: Vec<(String, String)>,
    /// True if the file was rewritten, false if copied verbatim.
    pub rewritten: bool,
}

/// Run the whole pipeline for a single file.
///
/// A parse failure is fatal for this file only: the error propagates, no
/// output file is written, and the caller records it and moves on.
pub fn process_file(source_root: &Path, output_root: &Path, path: &Path) -> Result<FileReport> {
    let relative_path = path
        .strip_prefix(source_root)
        .unwrap_or(path)
        .to_path_buf();

    let code = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let file_name = path
        .to_str()
        .with_context(|| format!("Invalid path: {:?}", path))?;

    let source_map = Arc::new(SourceMap::default());
    let parsed = parse_jsx_source(code, file_name, source_map)?;

    let mut module = parsed.module;
    let extraction = rewrite_module(&mut module, &parsed.source_map, &relative_path);

    let out_path = output_root.join(&relative_path);
    if extraction.rewritten {
        let body = print_module(&module, parsed.source_map)?;
        let import = runtime_import(&relative_path);
        write_transformed(&out_path, &import, &body)?;
    } else {
        copy_verbatim(path, &out_path)?;
    }

    Ok(FileReport {
        relative_path,
        entries: extraction.entries,
        rewritten: extraction.rewritten,
    })
}
