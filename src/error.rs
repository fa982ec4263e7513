use std::path::PathBuf;

use thiserror::Error;

/// A comment contained a symbol that is neither emoji nor whitelisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid character {ch:?} at byte {offset} of canonical text")]
pub struct InvalidCharacter {
    pub ch: char,
    /// Byte offset into the canonical text, not the caller's input.
    pub offset: usize,
}

/// The rule-set container itself could not be read or parsed.
///
/// Individual rules with bad patterns are skipped during load and never surface here.
#[derive(Debug, Error)]
pub enum RuleConfigError {
    #[error("failed to parse toml rule set: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to parse json rule set: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read rule set {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot infer rule set format from {0}")]
    UnknownFormat(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("invalid workchain {0:?}")]
    Workchain(String),
    #[error("invalid account hash {0:?}")]
    Hash(String),
    #[error("account id has {0} bytes, expected {1}")]
    Length(usize, usize),
    #[error("account id is not valid base64")]
    Base64,
    #[error("account id checksum mismatch")]
    Checksum,
}
