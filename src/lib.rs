// Public modules so embedding services can reach the individual pieces
pub mod address;
pub mod charset;
pub mod config;
pub mod confusables;
pub mod emoji;
pub mod error;
pub mod evaluator;
pub mod guard;
pub mod normalize;
pub mod registry;
pub mod types;
pub mod validator;

pub use address::AccountId;
pub use config::GuardConfig;
pub use error::{AddressError, InvalidCharacter, RuleConfigError};
pub use evaluator::{RuleEngine, RuleFormat, RuleSet, classify, evaluate, load_rules};
pub use guard::Guard;
pub use normalize::{canonical_comment, canonical_symbol};
pub use registry::{KnownAsset, RawAsset, Registry, parse_asset_list};
pub use types::{Action, RuleConfig, RuleRecord};
pub use validator::validate;

/// --- Pure Rust API: classify with a one-off JSON rule container ---
pub fn classify_with_json_rules(
    json_rules: &str,
    text: &str,
    category: &str,
) -> Result<Action, RuleConfigError> {
    let rules = RuleSet::load(json_rules, RuleFormat::Json)?;
    Ok(rules.classify(text, category))
}
