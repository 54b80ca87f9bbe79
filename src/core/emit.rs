//! Output emission.
//!
//! A file with at least one replacement is re-printed from its mutated AST
//! with the runtime import prepended; a file with none is copied
//! byte-for-byte so untouched sources never pick up formatting drift. The
//! printer runs with `ascii_only` off, so Vietnamese text reaches the
//! output verbatim rather than as escape sequences.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use swc_common::SourceMap;
use swc_ecma_ast::Module;
use swc_ecma_codegen::{Config, Emitter, text_writer::JsWriter};

use crate::config::{RUNTIME_MODULE, TRANSLATION_FN};

/// Re-print a (possibly mutated) module as source text.
pub fn print_module(module: &Module, source_map: Arc<SourceMap>) -> Result<String> {
    let mut buf = Vec::new();
    {
        let writer = JsWriter::new(source_map.clone(), "\n", &mut buf, None);
        let mut emitter = Emitter {
            cfg: Config::default(),
            cm: source_map,
            comments: None,
            wr: writer,
        };
        emitter
            .emit_module(module)
            .context("Failed to print module")?;
    }
    String::from_utf8(buf).context("Printer produced invalid UTF-8")
}

/// Import statement for the translation function, resolved relative to the
/// file's depth below the output root (where the runtime scaffold lives):
/// `./i18n` at the root, one `../` per directory level otherwise.
pub fn runtime_import(relative_path: &Path) -> String {
    let depth = relative_path
        .parent()
        .map(|parent| parent.components().count())
        .unwrap_or(0);
    let prefix = if depth == 0 {
        "./".to_string()
    } else {
        "../".repeat(depth)
    };
    format!("import {{ {TRANSLATION_FN} }} from '{prefix}{RUNTIME_MODULE}';")
}

/// Write a rewritten file: runtime import, then the re-printed body.
pub fn write_transformed(out_path: &Path, import: &str, body: &str) -> Result<()> {
    create_parent_dirs(out_path)?;
    fs::write(out_path, format!("{import}\n{body}"))
        .with_context(|| format!("Failed to write file: {}", out_path.display()))
}

/// Mirror an untouched file into the output tree without reparsing it.
pub fn copy_verbatim(source: &Path, out_path: &Path) -> Result<()> {
    create_parent_dirs(out_path)?;
    fs::copy(source, out_path)
        .with_context(|| format!("Failed to copy file to: {}", out_path.display()))?;
    Ok(())
}

fn create_parent_dirs(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    Ok(())
}
