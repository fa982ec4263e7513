use std::sync::atomic::{AtomicBool, Ordering};

use spoofguard::registry::{RawAsset, Registry, parse_asset_list};
use spoofguard::AccountId;

fn account(raw: &str) -> AccountId {
    raw.parse().unwrap()
}

const CFT: &str = "0:a6e0456ba1ca77e0915e94760f1b1fc3e292aa43e812ebfc45650cc8c3003e58";
const JUSDT: &str = "0:729c13b6df2c07cbf0a06ab63d34af454f3d320ec1bcd8fb5c6d24d0806a17c2";
const JUSDT_BRIDGED: &str = "-1:729c13b6df2c07cbf0a06ab63d34af454f3d320ec1bcd8fb5c6d24d0806a17c2";
const JUSDT_FAKE: &str = "0:729c13b6df2c07cbf0a06ab63d34af454f3d320ec1bcd8fb5c6d24d0806a1700";

fn asset(name: &str, symbol: &str, address: &str) -> RawAsset {
    RawAsset {
        name: name.to_string(),
        address: account(address),
        symbol: symbol.to_string(),
    }
}

fn known_assets() -> Vec<RawAsset> {
    vec![
        asset("Cock Fights Token", "CFT", CFT),
        asset("jUSDT", "jUSDT", JUSDT),
        asset("Valid duplicate of jUSDT", "jUSDT", JUSDT_BRIDGED),
        asset(
            "Ambra",
            "AMBR",
            "0:9c2c05b9dfb2a7460fda48fae7409a32623399933a98a7a15599152f37572b49",
        ),
        // placeholder entry that bans every other USDT
        asset(
            "Tether USD",
            "USDT",
            "0:ca9006bd3fb03d355daeeff93b24be90afaa6e3ca0073ff5720f8a852c933278",
        ),
    ]
}

fn loaded_registry() -> Registry {
    let registry = Registry::new();
    registry.replace_known_assets(known_assets());
    registry
}

#[test]
fn impersonation_table() {
    let registry = loaded_registry();
    let anyone = AccountId::default();
    let cases: &[(&str, &str, AccountId, bool)] = &[
        ("similar to TON", "ton", anyone, true),
        ("similar to TON", "$TON", anyone, true),
        ("similar to TON", "TON.", anyone, true),
        ("first letters cyrillic", "ТОN", anyone, true),
        ("fake usdt", "jUSDT ", anyone, true),
        ("fake usdt", "USD₮", anyone, true),
        ("fake usdt", "$USD₮", anyone, true),
        ("fake usdt", "USD₮$", anyone, true),
        ("fake usdt", "U$DT", anyone, true),
        ("fake usdt", "$U$DT", anyone, true),
        ("invisible separator", "jU\u{2063}SDT", anyone, true),
        ("fake usdc", "USĐC", anyone, true),
        ("last letter cyrillic", "jUSDТ", anyone, true),
        ("genuine jUSDC", "jUSDC", account("0:7e30fc2b7751ba58a3642f3fd59d5e96a810ddd78d8a310bfe8353bef10500df"), false),
        ("genuine jUSDT", "jUSDT", account(JUSDT), false),
        ("valid duplicate of jUSDT", "jUSDT", account(JUSDT_BRIDGED), false),
        ("jUSDT at another address", "jUSDT", account(JUSDT_FAKE), true),
        ("mixed script at another address", "jUЅDT", account(JUSDT_FAKE), true),
        ("genuine CFT", "CFT", account(CFT), false),
        ("CFT at another address", "CFT", anyone, true),
        ("unclaimed symbol", "Random Symbol", anyone, false),
        ("cyrillic", "Токен", anyone, false),
        ("german", "genießen", anyone, false),
        ("hindi", "टोकन", anyone, false),
        ("telugu", "టోకెన్", anyone, false),
        ("typographic apostrophe", "Juli\u{2019}s Cat", anyone, false),
        ("single quotes", "\u{2018}Token\u{2019}", anyone, false),
        ("double quotes", "\u{201C}Smart\u{201D}", anyone, false),
    ];
    for (name, symbol, address, want) in cases {
        assert_eq!(
            registry.is_impersonating(address, symbol),
            *want,
            "{name}: {symbol:?}"
        );
    }
}

#[test]
fn asset_name_can_give_a_scam_away() {
    let registry = loaded_registry();
    let anyone = AccountId::default();
    // symbol alone looks harmless
    assert!(!registry.is_impersonating(&anyone, "Teher USD"));
    assert!(registry.is_impersonating(&anyone, "$USDT"));
}

#[test]
fn sensitive_symbols_need_no_registry() {
    let registry: Registry = Registry::new();
    assert!(registry.is_empty());
    let anyone = AccountId::default();
    for symbol in ["ton", "$TON", "TON.", "Toncoin", "USDC$", "tether usd"] {
        assert!(registry.is_impersonating(&anyone, symbol), "{symbol}");
    }
    assert!(!registry.is_impersonating(&anyone, "jUSDT"));
}

#[test]
fn custom_sensitive_symbols_replace_the_defaults() {
    let registry: Registry = Registry::with_sensitive_symbols(["NOT", "$DOGS"]);
    let anyone = AccountId::default();
    assert!(registry.is_impersonating(&anyone, "not"));
    assert!(registry.is_impersonating(&anyone, "$dogs"));
    assert!(!registry.is_impersonating(&anyone, "ton"));
}

#[test]
fn disallowed_scripts_are_rejected_outright() {
    let registry: Registry = Registry::new();
    let anyone = AccountId::default();
    // Greek, Arabic, Han outside the whitelist, a control character, private use
    for symbol in ["ΤΟΝ", "تون", "代币", "TO\u{7}N", "\u{E000}coin"] {
        assert!(registry.is_impersonating(&anyone, symbol), "{symbol:?}");
    }
    // whitelisted CJK and emoji
    assert!(!registry.is_impersonating(&anyone, "人💎"));
}

#[test]
fn duplicates_share_one_canonical_symbol() {
    let registry = loaded_registry();
    let known = registry.known("jusdt");
    assert_eq!(known.len(), 2);
    assert!(known.iter().all(|a| a.canonical_symbol() == "jusdt"));
    assert!(known.iter().any(|a| a.address() == &account(JUSDT_BRIDGED)));
    assert_eq!(registry.len(), 5);
}

#[test]
fn replace_swaps_the_whole_snapshot() {
    let registry = loaded_registry();
    let anyone = AccountId::default();
    assert!(registry.is_impersonating(&anyone, "CFT"));

    registry.replace_known_assets(vec![asset("Ambra", "AMBR", CFT)]);
    assert!(!registry.is_impersonating(&anyone, "CFT"));
    assert!(registry.is_impersonating(&anyone, "AMBR"));
    assert!(!registry.is_impersonating(&account(CFT), "ambr"));
    assert_eq!(registry.len(), 1);
}

#[test]
fn symbols_without_canonical_form_are_not_indexed() {
    let registry: Registry = Registry::new();
    registry.replace_known_assets(vec![asset("Dots", "...", CFT)]);
    assert!(registry.is_empty());
    assert!(!registry.is_impersonating(&AccountId::default(), "!!!"));
}

#[test]
fn generic_addresses_are_supported() {
    let registry: Registry<u64> = Registry::new();
    registry.replace_known_assets(vec![RawAsset {
        name: "Gram".into(),
        address: 7,
        symbol: "GRAM".into(),
    }]);
    assert!(!registry.is_impersonating(&7, "gram"));
    assert!(registry.is_impersonating(&8, "GRАM"));
}

#[test]
fn readers_never_observe_a_partial_snapshot() {
    let registry = Registry::<u64>::new();
    let batch = |address: u64| -> Vec<RawAsset<u64>> {
        (0..64)
            .map(|i| RawAsset {
                name: format!("asset {i}"),
                address,
                symbol: format!("SYM{i}"),
            })
            .collect()
    };
    registry.replace_known_assets(batch(1));
    let done = AtomicBool::new(false);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                while !done.load(Ordering::Relaxed) {
                    assert_eq!(registry.len(), 64);
                    assert_eq!(registry.known("SYM63").len(), 1);
                }
            });
        }
        for round in 0..200u64 {
            registry.replace_known_assets(batch(round % 2));
        }
        done.store(true, Ordering::Relaxed);
    });
}

#[test]
fn asset_list_in_community_format_decodes() {
    let json = r#"[
        {"name": "Tether USD", "address": "0:729c13b6df2c07cbf0a06ab63d34af454f3d320ec1bcd8fb5c6d24d0806a17c2", "symbol": "USD₮", "decimals": 6},
        {"name": "Bridged", "address": "EQBynBO23ywHy_CgarY9NK9FTz0yDsG82PtcbSTQgGoXwiuA", "symbol": "jUSDT", "social": ["https://t.me/x"]}
    ]"#;
    let assets = parse_asset_list(json).unwrap();
    assert_eq!(assets.len(), 2);
    assert_eq!(assets[0].address, assets[1].address);

    let registry = Registry::new();
    registry.replace_known_assets(assets);
    assert!(!registry.is_impersonating(&account(JUSDT), "jUSDT"));
}

#[test]
fn asset_list_with_bad_address_is_rejected() {
    let json = r#"[{"name": "x", "address": "0:zz", "symbol": "X"}]"#;
    assert!(parse_asset_list(json).is_err());
}
