//! Core extraction engine.
//!
//! One run flows walker → per-file pipeline (parse → rewrite → emit) →
//! catalog merge. `run::run_extraction` is the entry point; everything
//! else is a stage.

pub mod catalog;
pub mod emit;
pub mod extract;
pub mod parsers;
pub mod run;
pub mod scaffold;
pub mod walker;

pub use run::{ExtractionOptions, ExtractionSummary, run_extraction};
