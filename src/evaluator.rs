use crate::error::RuleConfigError;
use crate::types::{ALL_CATEGORIES, Action, RuleConfig, RuleRecord};
use crate::validator::validate;
use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};
use std::fs;

// ----------------- Rules -----------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleFormat {
    Toml,
    Json,
}

impl RuleFormat {
    /// Infer the container format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Some(RuleFormat::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Some(RuleFormat::Json),
            _ => None,
        }
    }
}

/// A compiled rule. Plain data: matching lives in [`evaluate`].
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Regex,
    action: Action,
    applicability: BTreeSet<String>,
}

impl Rule {
    pub fn compile(record: &RuleRecord) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(&record.pattern)?,
            action: record.action,
            applicability: record.applicability.iter().cloned().collect(),
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn applicability(&self) -> &BTreeSet<String> {
        &self.applicability
    }

    pub fn applies_to(&self, category: &str) -> bool {
        self.applicability.contains(category) || self.applicability.contains(ALL_CATEGORIES)
    }
}

/// The rule's action if its pattern matches `text`.
pub fn evaluate(rule: &Rule, text: &str) -> Option<Action> {
    rule.pattern.is_match(text).then_some(rule.action)
}

/// Ordered rules; the first match wins.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Compile every record, skipping (and logging) the ones whose pattern does not compile.
    pub fn from_config(config: RuleConfig) -> Self {
        let mut rules = Vec::with_capacity(config.rules.len());
        for record in &config.rules {
            match Rule::compile(record) {
                Ok(rule) => rules.push(rule),
                Err(err) => {
                    tracing::warn!(pattern = %record.pattern, error = %err, "failed to compile rule pattern; rule skipped");
                }
            }
        }
        Self { rules }
    }

    /// Parse and compile a rule container. Only a malformed container is an error.
    pub fn load(text: &str, format: RuleFormat) -> Result<Self, RuleConfigError> {
        let config: RuleConfig = match format {
            RuleFormat::Toml => toml::from_str(text)?,
            RuleFormat::Json => serde_json::from_str(text)?,
        };
        Ok(Self::from_config(config))
    }

    /// Read a rule container from disk. Without an explicit format the file extension decides.
    pub fn load_file(path: &Path, format: Option<RuleFormat>) -> Result<Self, RuleConfigError> {
        let format = format
            .or_else(|| RuleFormat::from_path(path))
            .ok_or_else(|| RuleConfigError::UnknownFormat(path.to_path_buf()))?;
        let text = fs::read_to_string(path).map_err(|source| RuleConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load(&text, format)
    }

    /// Classify `text` using only rules tagged with `category` (or the wildcard).
    pub fn classify(&self, text: &str, category: &str) -> Action {
        self.first_match(text, Some(category))
    }

    /// Classify `text` with every rule regardless of its tags.
    pub fn classify_any(&self, text: &str) -> Action {
        self.first_match(text, None)
    }

    fn first_match(&self, text: &str, category: Option<&str>) -> Action {
        // fail closed: disguised text is never classified
        let Ok(canonical) = validate(text) else {
            return Action::Drop;
        };
        self.rules
            .iter()
            .filter(|rule| category.is_none_or(|c| rule.applies_to(c)))
            .find_map(|rule| evaluate(rule, &canonical))
            .unwrap_or(Action::Unknown)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

pub fn load_rules(text: &str, format: RuleFormat) -> Result<RuleSet, RuleConfigError> {
    RuleSet::load(text, format)
}

pub fn classify(rule_set: &RuleSet, text: &str, category: &str) -> Action {
    rule_set.classify(text, category)
}

// ----------------- Runtime holder -----------------

/// Swappable [`RuleSet`] snapshot for rules reloaded at runtime.
#[derive(Debug, Default)]
pub struct RuleEngine {
    current: RwLock<Arc<RuleSet>>,
}

impl RuleEngine {
    pub fn new(rule_set: RuleSet) -> Self {
        Self {
            current: RwLock::new(Arc::new(rule_set)),
        }
    }

    pub fn snapshot(&self) -> Arc<RuleSet> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn replace(&self, rule_set: RuleSet) {
        let count = rule_set.len();
        let next = Arc::new(rule_set);
        let previous = {
            let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
            std::mem::replace(&mut *current, next)
        };
        drop(previous);
        tracing::info!(rules = count, "rule set replaced");
    }

    /// Compile a new container and swap it in. On error the current rules stay active.
    pub fn reload(&self, text: &str, format: RuleFormat) -> Result<(), RuleConfigError> {
        let rule_set = RuleSet::load(text, format)?;
        self.replace(rule_set);
        Ok(())
    }

    pub fn classify(&self, text: &str, category: &str) -> Action {
        self.snapshot().classify(text, category)
    }

    pub fn classify_any(&self, text: &str) -> Action {
        self.snapshot().classify_any(text)
    }
}
