//! Common utility functions shared across the codebase.

use std::sync::LazyLock;

use regex::Regex;

/// Character class covering every Vietnamese letter that carries a diacritic
/// (plus đ/Đ). A text node is an extraction candidate iff it contains at
/// least one of these characters.
static VIETNAMESE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        "[àáảãạăằắẳẵặâầấẩẫậèéẻẽẹêềếểễệìíỉĩịùúủũụưừứửữựòóỏõọôồốổỗộơờớởỡợỳýỷỹỵđ\
         ÀÁẢÃẠĂẰẮẲẴẶÂẦẤẨẪẬÈÉẺẼẸÊỀẾỂỄỆÌÍỈĨỊÙÚỦŨỤƯỪỨỬỮỰÒÓỎÕỌÔỒỐỔỖỘƠỜỚỞỠỢỲÝỶỸỴĐ]",
    )
    .expect("Vietnamese marker pattern is valid")
});

/// Checks if the text contains at least one Vietnamese diacritic character.
///
/// Plain ASCII text, numbers, and symbols are not candidates; neither are
/// other scripts — the tool only extracts Vietnamese.
///
/// # Examples
///
/// ```
/// use trich::utils::contains_vietnamese;
///
/// assert!(contains_vietnamese("Xin chào"));
/// assert!(contains_vietnamese("Đăng nhập"));
/// assert!(!contains_vietnamese("Hello"));
/// assert!(!contains_vietnamese("123"));
/// assert!(!contains_vietnamese(""));
/// ```
pub fn contains_vietnamese(text: &str) -> bool {
    VIETNAMESE_MARKER.is_match(text)
}
