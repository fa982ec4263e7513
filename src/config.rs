use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::evaluator::RuleFormat;
use crate::registry::SENSITIVE_SYMBOLS;

pub const CONFIG_FILE: &str = "spoofguard.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GuardConfig {
    #[serde(default)]
    pub registry: RegistryConfig,
    #[serde(default)]
    pub rules: RulesConfig,
}

impl GuardConfig {
    /// Load `<root>/spoofguard.toml`, falling back to defaults when the file is absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        let mut cfg = if path.exists() {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            Self::from_toml(&text)
                .with_context(|| format!("parsing config file {}", path.display()))?
        } else {
            tracing::info!(
                "No config file found at {}. Using GuardConfig::default().",
                path.display()
            );
            GuardConfig::default()
        };
        cfg.resolve_paths(root);
        Ok(cfg)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str::<GuardConfig>(text)?)
    }

    fn resolve_paths(&mut self, root: &Path) {
        if let Some(path) = self.rules.path.take() {
            self.rules.path = Some(absolutize(root, &path));
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    #[serde(default = "RegistryConfig::default_sensitive_symbols")]
    pub sensitive_symbols: Vec<String>,
}

impl RegistryConfig {
    fn default_sensitive_symbols() -> Vec<String> {
        SENSITIVE_SYMBOLS.iter().map(|s| s.to_string()).collect()
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            sensitive_symbols: Self::default_sensitive_symbols(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RulesConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
    // "toml" | "json"; the file extension decides when omitted
    #[serde(default)]
    pub format: Option<RuleFormat>,
}

fn absolutize(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
