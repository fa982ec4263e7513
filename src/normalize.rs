//! Canonical comparison forms for ticker symbols and free text.
//!
//! Policy (both forms):
//! - NFKD decomposition, which also folds many compatibility variants.
//! - Drop combining marks.
//! - Drop whitespace, control characters and zero-width characters.
//! - Replace homoglyphs via [`crate::confusables`].
//! - Unicode-aware lowercasing (`char::to_lowercase`).
//! - NFC recomposition.
//!
//! Symbols additionally drop punctuation and are transliterated to ASCII.
//!
//! Keep this logic single-sourced: registry keys and rule inputs must agree on it.

use unicode_normalization::UnicodeNormalization;
use unidecode::unidecode;

use crate::charset::{is_mark, is_punctuation, is_zero_width};
use crate::confusables::map_confusable;

fn fold(s: &str, drop_punctuation: bool) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.nfkd() {
        if is_mark(ch) || ch.is_whitespace() || ch.is_control() || is_zero_width(ch) {
            continue;
        }
        for lc in map_confusable(ch).to_lowercase() {
            if drop_punctuation && is_punctuation(lc) {
                continue;
            }
            out.push(lc);
        }
    }
    out.nfc().collect()
}

/// Canonical key used for registry matching.
///
/// Transliteration can emit capitals, spaces or digits (`"人"` becomes `"Ren "`), so its output
/// is folded once more; the result is ASCII and stable under repeated application.
pub fn canonical_symbol(s: &str) -> String {
    let folded = fold(s, true);
    if folded.is_ascii() {
        return folded;
    }
    fold(&unidecode(&folded), true)
}

/// Canonical text used for comment validation and rule matching. Punctuation is kept.
pub fn canonical_comment(s: &str) -> String {
    fold(s, false)
}
