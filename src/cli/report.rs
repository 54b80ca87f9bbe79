//! Report formatting and printing utilities.
//!
//! This module is separate from the core library logic so trich can be
//! used as a library without printing side effects.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::ExtractionSummary;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the run summary to stdout and the failure map to stderr.
pub fn print(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Extract(summary) => {
            print_extract_to(summary, &mut io::stdout().lock());
            print_failures(summary);
        }
        CommandSummary::Init(summary) => print_init(summary),
    }
}

fn print_extract_to<W: Write>(summary: &ExtractionSummary, writer: &mut W) {
    let mark = if summary.failures.is_empty() {
        SUCCESS_MARK.green()
    } else {
        FAILURE_MARK.red()
    };
    let _ = writeln!(
        writer,
        "{} Extracted {} into {} ({} rewritten, {} copied)",
        mark,
        count(summary.entry_count, "entry", "entries"),
        count(summary.files_seen, "file", "files"),
        summary.files_rewritten,
        summary.files_copied,
    );
}

/// The per-subtree/per-file failure map. Every successfully produced
/// output was still written; these are the units that contributed nothing.
fn print_failures(summary: &ExtractionSummary) {
    if summary.failures.is_empty() {
        return;
    }

    eprintln!(
        "{} {} failed:",
        "warning:".bold().yellow(),
        count(summary.failures.len(), "path", "paths"),
    );
    for (path, cause) in &summary.failures {
        eprintln!("  {}: {}", path.bold(), cause);
    }
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

fn count(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, plural)
    }
}
