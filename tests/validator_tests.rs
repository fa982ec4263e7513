use spoofguard::{InvalidCharacter, validate};

#[test]
fn plain_text_passes_in_canonical_form() {
    assert_eq!(validate("Hello, World!").unwrap(), "hello,world!");
    assert_eq!(validate("").unwrap(), "");
}

#[test]
fn emoji_are_allowed() {
    assert_eq!(validate("hello 👋").unwrap(), "hello👋");
    assert_eq!(validate("gm 👋🏽").unwrap(), "gm👋🏽");
    assert_eq!(validate("❤ 💎 ⭐").unwrap(), "❤💎⭐");
    assert_eq!(validate("©").unwrap(), "©");
}

#[test]
fn whitelisted_symbols_are_allowed() {
    assert_eq!(validate("price $5 + 3 = 8").unwrap(), "price$5+3=8");
    assert!(validate("a < b > c | d ~ e ^ f ` g ± h").is_ok());
    // fullwidth dollar folds to '$'
    assert_eq!(validate("＄5").unwrap(), "$5");
}

#[test]
fn compatibility_symbols_fold_before_the_check() {
    assert_eq!(validate("Brand™").unwrap(), "brandtm");
    assert_eq!(validate("№1").unwrap(), "no1");
}

#[test]
fn foreign_symbols_are_rejected_with_position() {
    assert_eq!(validate("€100"), Err(InvalidCharacter { ch: '€', offset: 0 }));
    // offset points into the canonical text, where the space is gone
    assert_eq!(validate("go ↑"), Err(InvalidCharacter { ch: '↑', offset: 2 }));
    assert_eq!(validate("☭").unwrap_err().ch, '☭');
}

#[test]
fn regional_indicators_are_not_emoji() {
    assert_eq!(validate("\u{1F1FA}\u{1F1F8}").unwrap_err().ch, '\u{1F1FA}');
}

#[test]
fn letters_of_any_script_are_not_symbols() {
    assert!(validate("Привет").is_ok());
    assert!(validate("مرحبا").is_ok());
    assert!(validate("こんにちは").is_ok());
}
