use spoofguard::confusables::{CONFUSABLES, map_confusable};
use spoofguard::normalize::{canonical_comment, canonical_symbol};

#[test]
fn symbol_canonical_forms() {
    let cases = [
        ("USD₮", "usdt"),
        ("subbotin.ton", "subbotinton"),
        ("MAJOR", "major"),
        ("TON Believers Fund", "tonbelieversfund"),
        ("Tést.ton", "testton"),
        ("123USD", "123usd"),
        ("  special*chars! ", "specialchars"),
        ("Multiple   Spaces", "multiplespaces"),
    ];
    for (input, expected) in cases {
        assert_eq!(canonical_symbol(input), expected, "input {input:?}");
    }
}

#[test]
fn cyrillic_lookalikes_fold_to_latin() {
    // Т and О are Cyrillic
    assert_eq!(canonical_symbol("ТОN"), canonical_symbol("ton"));
    // Ѕ is Cyrillic
    assert_eq!(canonical_symbol("jUЅDT"), canonical_symbol("jUSDT"));
    assert_eq!(canonical_symbol("USD₮"), canonical_symbol("usdt"));
}

#[test]
fn symbol_form_is_transliterated_to_ascii() {
    assert_eq!(canonical_symbol("USĐC"), "usdc");
    assert_eq!(canonical_symbol("genießen"), "geniessen");
    for input in ["Токен", "టోకెన్", "टोकन", "人国", "💎 gem"] {
        let out = canonical_symbol(input);
        assert!(out.is_ascii(), "{input:?} -> {out:?}");
        assert!(!out.chars().any(|c| c.is_ascii_uppercase() || c.is_whitespace()));
    }
}

#[test]
fn zero_width_and_controls_are_dropped() {
    assert_eq!(canonical_symbol("jU\u{200B}SDT"), "jusdt");
    assert_eq!(canonical_comment("fr\u{200B}e\u{FEFF}e\u{7}"), "free");
}

#[test]
fn comment_form_keeps_punctuation() {
    assert_eq!(canonical_comment("Hello, World!"), "hello,world!");
    assert_eq!(canonical_comment("Tést.ton"), "test.ton");
    // arabic full stop reads as a dot
    assert_eq!(canonical_comment("a\u{6D4}b"), "a.b");
    // compatibility forms fold under NFKD
    assert_eq!(canonical_comment("ﬁnal ™"), "finaltm");
}

#[test]
fn digit_zero_reads_as_letter_o() {
    assert_eq!(canonical_comment("100 TON"), "1ooton");
    assert_eq!(canonical_symbol("T0N"), "ton");
}

#[test]
fn canonical_forms_are_idempotent() {
    let inputs = [
        "",
        "USD₮",
        "$U$DT",
        "  special*chars! ",
        "ТОN",
        "Токен",
        "genießen",
        "టోకెన్",
        "टोकन",
        "人国币",
        "한국",
        "Ǆemal ﬁ",
        "İstanbul",
        "ΩΣ",
        "hello 👋🏽 world",
        "pa\u{301}ss \u{200D}",
        "0x0000",
    ];
    for input in inputs {
        let symbol = canonical_symbol(input);
        assert_eq!(canonical_symbol(&symbol), symbol, "symbol form of {input:?}");
        let comment = canonical_comment(input);
        assert_eq!(canonical_comment(&comment), comment, "comment form of {input:?}");
    }
}

#[test]
fn confusable_table_is_consistent() {
    for &(from, to) in CONFUSABLES {
        assert_ne!(from, to);
        assert!(to.is_ascii(), "{from:?} maps outside ASCII");
        assert_eq!(map_confusable(from), to);
    }
    let mut sources: Vec<char> = CONFUSABLES.iter().map(|&(from, _)| from).collect();
    sources.sort_unstable();
    sources.dedup();
    assert_eq!(sources.len(), CONFUSABLES.len(), "duplicate source code point");
    assert_eq!(map_confusable('q'), 'q');
}
