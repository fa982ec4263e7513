//! Comment validation.
//!
//! After canonicalization letters and digits are comparatively safe; stray symbols are what
//! remains for disguising text. Every symbol must be an emoji or one of a few benign
//! currency/math characters, otherwise the whole comment is rejected.

use crate::charset::is_symbol;
use crate::emoji::is_emoji;
use crate::error::InvalidCharacter;
use crate::normalize::canonical_comment;

pub const WHITE_SYMBOLS: &[char] = &['№', '+', '=', '±', '$', '|', '^', '<', '>', '~', '`'];

/// Canonicalize `text` and reject it if it carries a disallowed symbol.
pub fn validate(text: &str) -> Result<String, InvalidCharacter> {
    let canonical = canonical_comment(text);
    for (offset, ch) in canonical.char_indices() {
        if !is_symbol(ch) || is_emoji(ch) || WHITE_SYMBOLS.contains(&ch) {
            continue;
        }
        tracing::debug!(character = %ch.escape_unicode(), offset, "comment rejected");
        return Err(InvalidCharacter { ch, offset });
    }
    Ok(canonical)
}
