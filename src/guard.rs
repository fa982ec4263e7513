//! guard.rs
//! One-stop facade: ticker impersonation checks plus comment classification.

use anyhow::{Context, Result};

use crate::address::AccountId;
use crate::config::GuardConfig;
use crate::error::RuleConfigError;
use crate::evaluator::{RuleEngine, RuleFormat, RuleSet};
use crate::registry::{RawAsset, Registry};
use crate::types::Action;

/// Owns the live registry and rule snapshots.
///
/// Both halves are refreshed independently by their suppliers; every query reads whichever
/// snapshot is current at the time of the call.
#[derive(Debug, Default)]
pub struct Guard {
    registry: Registry,
    rules: RuleEngine,
}

impl Guard {
    pub fn new(registry: Registry, rules: RuleSet) -> Self {
        Self {
            registry,
            rules: RuleEngine::new(rules),
        }
    }

    /// Build from configuration.
    ///
    /// # Errors
    /// * The configured rules file cannot be read or its container cannot be parsed.
    ///   This is a deployment bug; callers decide whether to abort.
    pub fn from_config(cfg: &GuardConfig) -> Result<Self> {
        let registry = Registry::with_sensitive_symbols(&cfg.registry.sensitive_symbols);
        let rules = match &cfg.rules.path {
            Some(path) => RuleSet::load_file(path, cfg.rules.format)
                .with_context(|| format!("loading rules from {}", path.display()))?,
            None => {
                tracing::info!("No rules file configured. Starting with an empty rule set.");
                RuleSet::default()
            }
        };
        Ok(Self::new(registry, rules))
    }

    /// See [`Registry::is_impersonating`].
    pub fn is_impersonating(&self, address: &AccountId, symbol: &str) -> bool {
        self.registry.is_impersonating(address, symbol)
    }

    /// Classify a comment, NFT name or other short text for `category`.
    pub fn classify(&self, text: &str, category: &str) -> Action {
        self.rules.classify(text, category)
    }

    pub fn classify_any(&self, text: &str) -> Action {
        self.rules.classify_any(text)
    }

    pub fn replace_known_assets(&self, assets: Vec<RawAsset>) {
        self.registry.replace_known_assets(assets);
    }

    pub fn reload_rules(&self, text: &str, format: RuleFormat) -> Result<(), RuleConfigError> {
        self.rules.reload(text, format)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn rules(&self) -> &RuleEngine {
        &self.rules
    }
}
