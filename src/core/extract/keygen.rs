//! Text normalization and catalog key synthesis.
//!
//! Short texts key by their own content so identical strings across files
//! merge into one catalog entry. Long texts get a synthetic positional key
//! derived from the file path, with a counter scoped to that file.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::SELF_KEY_WORD_LIMIT;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("whitespace pattern is valid")
});

/// Normalize raw source text into catalog form: collapse whitespace runs to
/// a single space, strip one pair of wrapping quotes, delete backticks, trim.
pub fn normalize_text(value: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(value, " ");
    let unquoted = strip_wrapping_quote(&collapsed, '"');
    let unquoted = strip_wrapping_quote(unquoted, '\'');
    unquoted.replace('`', "").trim().to_string()
}

fn strip_wrapping_quote(text: &str, quote: char) -> &str {
    text.strip_prefix(quote)
        .and_then(|rest| rest.strip_suffix(quote))
        .unwrap_or(text)
}

/// Derives catalog keys for the plain literals of one file.
///
/// The synthetic-key counter lives here so it is scoped to a single file's
/// pipeline call, keeping files independently processable.
pub struct KeyGenerator {
    prefix: String,
    next_index: usize,
}

impl KeyGenerator {
    /// `relative_path` is the file's path under the source root; it becomes
    /// the dotted key prefix with the extension stripped, e.g.
    /// `pages/home.tsx` → `pages.home`.
    pub fn new(relative_path: &Path) -> Self {
        let mut segments: Vec<String> = relative_path
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        if let Some(last) = segments.last_mut() {
            let stem = Path::new(last.as_str())
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned());
            if let Some(stem) = stem {
                *last = stem;
            }
        }

        Self {
            prefix: segments.join("."),
            next_index: 0,
        }
    }

    /// Key for a normalized plain-literal text: the text itself when short
    /// enough, otherwise `<prefix>.<index>` with a per-file counter.
    /// Template texts never come through here; they are always self-keyed.
    pub fn key_for(&mut self, text: &str) -> String {
        if text.split(' ').count() > SELF_KEY_WORD_LIMIT {
            let key = format!("{}.{}", self.prefix, self.next_index);
            self.next_index += 1;
            key
        } else {
            text.to_string()
        }
    }
}
