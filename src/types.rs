use std::fmt;

use serde::{Deserialize, Serialize};

/// Wildcard applicability tag: the rule applies to every category.
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Accept,
    Drop,
    MarkScam,
    /// No rule had an opinion. Distinct from `Accept`.
    Unknown,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Accept => "accept",
            Action::Drop => "drop",
            Action::MarkScam => "mark_scam",
            Action::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule container as supplied by configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RuleConfig {
    #[serde(default)]
    pub rules: Vec<RuleRecord>,
}

/// One uncompiled rule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RuleRecord {
    pub pattern: String,
    pub action: Action,

    // Category tags; a rule without tags applies everywhere
    #[serde(rename = "type", default = "RuleRecord::default_applicability")]
    pub applicability: Vec<String>,
}

impl RuleRecord {
    fn default_applicability() -> Vec<String> {
        vec![ALL_CATEGORIES.to_string()]
    }
}
