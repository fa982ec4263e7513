//! Character classes shared by the normalizer, the symbol policy and the comment validator.
//!
//! Symbol policy: a ticker may only contain graphic characters from Latin, Cyrillic, Telugu,
//! Devanagari or Katakana, plus hex digits, whitespace, marks, dashes, a narrow punctuation
//! set and a few hand-picked symbols. Anything else is treated as a spoofing attempt.

use std::cmp::Ordering;

use unicode_general_category::{GeneralCategory, get_general_category};
use unicode_script::{Script, UnicodeScript};

/// ASCII punctuation plus typographic quotes.
const SIMPLE_PUNCT: &[(char, char)] = &[
    ('!', '#'),
    ('%', '*'),
    (',', '/'),
    (':', ';'),
    ('?', '@'),
    ('[', ']'),
    ('_', '_'),
    ('{', '{'),
    ('}', '}'),
    ('\u{A1}', '\u{A1}'),
    ('\u{2018}', '\u{201F}'),
];

/// Union of the Unicode `Dash` and `Hyphen` properties.
const DASHES: &[(char, char)] = &[
    ('\u{2D}', '\u{2D}'),
    ('\u{AD}', '\u{AD}'),
    ('\u{58A}', '\u{58A}'),
    ('\u{5BE}', '\u{5BE}'),
    ('\u{1400}', '\u{1400}'),
    ('\u{1806}', '\u{1806}'),
    ('\u{2010}', '\u{2015}'),
    ('\u{2053}', '\u{2053}'),
    ('\u{207B}', '\u{207B}'),
    ('\u{208B}', '\u{208B}'),
    ('\u{2212}', '\u{2212}'),
    ('\u{2E17}', '\u{2E17}'),
    ('\u{2E1A}', '\u{2E1A}'),
    ('\u{2E3A}', '\u{2E3B}'),
    ('\u{2E40}', '\u{2E40}'),
    ('\u{2E5D}', '\u{2E5D}'),
    ('\u{301C}', '\u{301C}'),
    ('\u{3030}', '\u{3030}'),
    ('\u{30A0}', '\u{30A0}'),
    ('\u{30FB}', '\u{30FB}'),
    ('\u{FE31}', '\u{FE32}'),
    ('\u{FE58}', '\u{FE58}'),
    ('\u{FE63}', '\u{FE63}'),
    ('\u{FF0D}', '\u{FF0D}'),
    ('\u{FF65}', '\u{FF65}'),
    ('\u{10EAD}', '\u{10EAD}'),
];

const MANUALLY_WHITELISTED: &[(char, char)] = &[
    ('$', '$'),
    ('+', '+'),
    ('=', '='),
    ('~', '~'),
    ('₮', '₮'),
    ('❤', '❤'),
    ('人', '人'),
    ('国', '国'),
    ('币', '币'),
    ('龱', '龱'),
    ('💎', '💎'),
];

/// Binary search over sorted, non-overlapping inclusive ranges.
pub(crate) fn in_ranges(table: &[(char, char)], ch: char) -> bool {
    table
        .binary_search_by(|&(lo, hi)| {
            if hi < ch {
                Ordering::Less
            } else if lo > ch {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

pub fn is_mark(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::NonspacingMark | GeneralCategory::SpacingMark | GeneralCategory::EnclosingMark
    )
}

pub fn is_punctuation(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}

/// Math, currency, modifier and other symbols.
pub fn is_symbol(ch: char) -> bool {
    matches!(
        get_general_category(ch),
        GeneralCategory::MathSymbol
            | GeneralCategory::CurrencySymbol
            | GeneralCategory::ModifierSymbol
            | GeneralCategory::OtherSymbol
    )
}

/// Letters, marks, numbers, punctuation, symbols and spaces. Formats, controls and unassigned
/// code points are not graphic.
pub fn is_graphic(ch: char) -> bool {
    !matches!(
        get_general_category(ch),
        GeneralCategory::Control
            | GeneralCategory::Format
            | GeneralCategory::Surrogate
            | GeneralCategory::PrivateUse
            | GeneralCategory::Unassigned
            | GeneralCategory::LineSeparator
            | GeneralCategory::ParagraphSeparator
    )
}

/// Zero-width characters that survive NFKD (ZWS/ZWNJ/ZWJ/WJ/BOM).
pub fn is_zero_width(ch: char) -> bool {
    matches!(ch, '\u{200B}' | '\u{200C}' | '\u{200D}' | '\u{2060}' | '\u{FEFF}')
}

/// Whether `ch` may appear in a ticker symbol at all.
pub fn is_allowed_in_symbol(ch: char) -> bool {
    matches!(
        ch.script(),
        Script::Latin | Script::Cyrillic | Script::Telugu | Script::Devanagari | Script::Katakana
    ) || ch.is_ascii_hexdigit()
        || ch.is_whitespace()
        || is_mark(ch)
        || in_ranges(DASHES, ch)
        || in_ranges(SIMPLE_PUNCT, ch)
        || in_ranges(MANUALLY_WHITELISTED, ch)
}

/// First character that disqualifies `symbol` outright, if any.
pub fn first_disallowed(symbol: &str) -> Option<char> {
    symbol
        .chars()
        .find(|&ch| !is_graphic(ch) || !is_allowed_in_symbol(ch))
}
