//! Known-asset registry and impersonation detection.
//!
//! The index is an immutable snapshot behind a read-write lock. Readers clone the `Arc` and
//! drop the lock before matching; a refresh builds the next index off-lock and only holds the
//! write lock for the pointer swap. A failed refresh never reaches this type, so the last good
//! snapshot stays authoritative.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::address::AccountId;
use crate::charset::first_disallowed;
use crate::normalize::canonical_symbol;

/// Symbols impersonated often enough to be protected without any registry entry.
/// Compared after canonicalization.
pub const SENSITIVE_SYMBOLS: &[&str] = &[
    "ton",
    "$ton",
    "toncoin",
    "usdt",
    "$usdt",
    "usdt$",
    "$usdt$",
    "usdc",
    "$usdc",
    "usdc$",
    "$usdc$",
    "usd",
    "$usd",
    "usd$",
    "tetherusd",
    "usdtether",
];

/// One record as published by the asset-list supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAsset<A = AccountId> {
    #[serde(default)]
    pub name: String,
    pub address: A,
    pub symbol: String,
}

/// Decode an asset list in the community `jettons.json` shape. Unknown fields are ignored.
pub fn parse_asset_list(json: &str) -> Result<Vec<RawAsset>, serde_json::Error> {
    serde_json::from_str(json)
}

/// A registry entry. The canonical symbol is always derived from `symbol`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnownAsset<A = AccountId> {
    name: String,
    address: A,
    symbol: String,
    canonical_symbol: String,
}

impl<A> KnownAsset<A> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &A {
        &self.address
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn canonical_symbol(&self) -> &str {
        &self.canonical_symbol
    }
}

impl<A> From<RawAsset<A>> for KnownAsset<A> {
    fn from(raw: RawAsset<A>) -> Self {
        let canonical_symbol = canonical_symbol(&raw.symbol);
        Self {
            name: raw.name,
            address: raw.address,
            symbol: raw.symbol,
            canonical_symbol,
        }
    }
}

/// canonical symbol -> address -> asset
type Index<A> = HashMap<String, HashMap<A, KnownAsset<A>>>;

#[derive(Debug)]
pub struct Registry<A = AccountId> {
    index: RwLock<Arc<Index<A>>>,
    sensitive: HashSet<String>,
}

impl<A: Eq + Hash + Clone> Default for Registry<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Eq + Hash + Clone> Registry<A> {
    /// Empty registry protecting [`SENSITIVE_SYMBOLS`].
    pub fn new() -> Self {
        Self::with_sensitive_symbols(SENSITIVE_SYMBOLS)
    }

    /// Empty registry protecting the given symbols instead of the built-in list.
    pub fn with_sensitive_symbols<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sensitive = symbols
            .into_iter()
            .map(|s| canonical_symbol(s.as_ref()))
            .filter(|s| !s.is_empty())
            .collect();
        Self {
            index: RwLock::new(Arc::new(HashMap::new())),
            sensitive,
        }
    }

    /// Build a fresh index from `assets` and swap it in.
    ///
    /// Assets sharing a canonical symbol are grouped; a repeated address under the same
    /// canonical symbol keeps the last record. Assets whose symbol canonicalizes to nothing
    /// are skipped, since they would otherwise claim every punctuation-only symbol.
    pub fn replace_known_assets(&self, assets: Vec<RawAsset<A>>) {
        let total = assets.len();
        let mut index: Index<A> = HashMap::with_capacity(total);
        for raw in assets {
            let asset = KnownAsset::from(raw);
            if asset.canonical_symbol.is_empty() {
                tracing::warn!(name = %asset.name, symbol = %asset.symbol, "asset symbol canonicalizes to an empty string; skipped");
                continue;
            }
            index
                .entry(asset.canonical_symbol.clone())
                .or_default()
                .insert(asset.address.clone(), asset);
        }
        let symbols = index.len();
        let next = Arc::new(index);

        let previous = {
            let mut current = self.index.write().unwrap_or_else(PoisonError::into_inner);
            std::mem::replace(&mut *current, next)
        };
        // last reader of the old snapshot may be us; free it outside the lock
        drop(previous);
        tracing::info!(assets = total, symbols, "known assets replaced");
    }

    fn snapshot(&self) -> Arc<Index<A>> {
        Arc::clone(&self.index.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Whether `symbol` at `address` looks like an impersonation of a known or sensitive asset.
    pub fn is_impersonating(&self, address: &A, symbol: &str) -> bool {
        if let Some(ch) = first_disallowed(symbol) {
            tracing::debug!(symbol, character = %ch.escape_unicode(), "symbol uses a disallowed character");
            return true;
        }
        let canonical = canonical_symbol(symbol);
        if self.is_sensitive(&canonical) {
            tracing::debug!(symbol, canonical = %canonical, "symbol matches a sensitive ticker");
            return true;
        }

        let index = self.snapshot();
        match index.get(&canonical) {
            // unclaimed symbol
            None => false,
            Some(assets) => {
                let known = assets.contains_key(address);
                if !known {
                    tracing::debug!(symbol, canonical = %canonical, "symbol claimed by a different address");
                }
                !known
            }
        }
    }

    /// `$` is a currency sign, not punctuation, so it survives canonicalization. Besides the
    /// exact form, also try the form with outer `$` trimmed and inner `$` read as `s`.
    fn is_sensitive(&self, canonical: &str) -> bool {
        if self.sensitive.contains(canonical) {
            return true;
        }
        if !canonical.contains('$') {
            return false;
        }
        let undecorated = canonical.trim_matches('$').replace('$', "s");
        self.sensitive.contains(&undecorated)
    }

    /// Assets registered under the canonical form of `symbol`.
    pub fn known(&self, symbol: &str) -> Vec<KnownAsset<A>> {
        self.snapshot()
            .get(&canonical_symbol(symbol))
            .map(|assets| assets.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of assets in the current snapshot.
    pub fn len(&self) -> usize {
        self.snapshot().values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }
}
