//! Curated homoglyph table.
//!
//! Each entry maps a single code point that renders (nearly) identically to a Latin letter,
//! digit or full stop onto that ASCII character. The source side is case-sensitive and the
//! table is applied before lowercasing, so capital look-alikes map to capitals.
//!
//! Several precomposed Cyrillic letters (Ѐ, Ё, Ї, Ќ, Ў, Ӑ, Ӓ, Ӗ, ӗ) are already split by NFKD
//! before the table runs; they stay listed so the table is also correct on its own.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// `(look-alike, replacement)` pairs.
pub const CONFUSABLES: &[(char, char)] = &[
    ('Н', 'H'),        // cyrillic
    ('₮', 'T'),        // tugrik sign
    ('с', 'c'),        // cyrillic
    ('р', 'p'),        // cyrillic
    ('0', 'O'),        // zero
    ('౸', 'Q'),        // telugu
    ('౦', 'O'),        // telugu
    ('\u{400}', 'E'),  // Ѐ
    ('\u{401}', 'E'),  // Ё
    ('\u{405}', 'S'),  // Ѕ
    ('\u{406}', 'I'),  // І
    ('\u{407}', 'I'),  // Ї
    ('\u{408}', 'J'),  // Ј
    ('\u{40C}', 'K'),  // Ќ
    ('\u{40E}', 'Y'),  // Ў
    ('\u{410}', 'A'),  // А
    ('\u{412}', 'B'),  // В
    ('\u{415}', 'E'),  // Е
    ('\u{41A}', 'K'),  // К
    ('\u{41C}', 'M'),  // М
    ('\u{41E}', 'O'),  // О
    ('\u{420}', 'P'),  // Р
    ('\u{421}', 'C'),  // С
    ('\u{422}', 'T'),  // Т
    ('\u{423}', 'Y'),  // У
    ('\u{425}', 'X'),  // Х
    ('\u{430}', 'a'),  // а
    ('\u{435}', 'e'),  // е
    ('\u{43E}', 'o'),  // о
    ('\u{445}', 'x'),  // х
    ('\u{450}', 'e'),  // ѐ
    ('\u{451}', 'e'),  // ё
    ('\u{455}', 's'),  // ѕ
    ('\u{456}', 'i'),  // і
    ('\u{457}', 'i'),  // ї
    ('\u{458}', 'j'),  // ј
    ('\u{49A}', 'K'),  // Қ
    ('\u{49B}', 'k'),  // қ
    ('\u{49C}', 'K'),  // Ҝ
    ('\u{49E}', 'K'),  // Ҟ
    ('\u{4A2}', 'H'),  // Ң
    ('\u{4A4}', 'H'),  // Ҥ
    ('\u{4AA}', 'C'),  // Ҫ
    ('\u{4AC}', 'T'),  // Ҭ
    ('\u{4B2}', 'X'),  // Ҳ
    ('\u{4C3}', 'K'),  // Ӄ
    ('\u{4C7}', 'H'),  // Ӈ
    ('\u{4D0}', 'A'),  // Ӑ
    ('\u{4D2}', 'A'),  // Ӓ
    ('\u{4D6}', 'E'),  // Ӗ
    ('\u{4D7}', 'e'),  // ӗ
    ('\u{51A}', 'Q'),  // Ԛ
    ('\u{51B}', 'q'),  // ԛ
    ('\u{51C}', 'W'),  // Ԝ
    ('\u{51D}', 'w'),  // ԝ
    ('\u{1C85}', 'm'), // ᲅ
    ('\u{6D4}', '.'),  // arabic full stop
];

static TABLE: Lazy<HashMap<char, char>> = Lazy::new(|| CONFUSABLES.iter().copied().collect());

/// Replace `ch` with its look-alike target, or return it unchanged.
pub fn map_confusable(ch: char) -> char {
    TABLE.get(&ch).copied().unwrap_or(ch)
}
