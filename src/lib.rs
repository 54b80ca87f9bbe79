//! Trich - Vietnamese text extractor for Next.js codebases
//!
//! Trich is a CLI tool and library that scans a TypeScript/TSX source tree
//! for hardcoded Vietnamese text, extracts every occurrence into an
//! i18next translation catalog, and rewrites the sources to call a
//! generated `t()` runtime instead. Files without Vietnamese text are
//! mirrored byte-for-byte.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Core extraction engine (walk, parse, rewrite, emit, catalog)
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod utils;
