//! Configuration for the amount extraction engine
//!
//! The default configuration is the canonical engine behavior: relevance
//! gate on, plausibility filter at 100,000,000 and the worded-amount
//! scanner enabled. [`ExtractorConfig::legacy`] reproduces the first
//! engine revision for callers that depend on the old unfiltered output.
//!
//! Configuration can be built in code or loaded from a YAML file:
//!
//! ```yaml
//! intent_keywords: ["limit", "transfer"]
//! max_plausible_base: "50000000"
//! worded_amounts: false
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors when loading engine configuration from a file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("configuration file not found at {0}: {1}")]
    FileNotFound(String, String),

    #[error("failed to parse configuration: {0}")]
    ParseError(String),
}

/// Tunables for the extraction engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Transaction-intent keywords consulted by the relevance gate.
    /// Matched case-insensitively as substrings anywhere in the text.
    #[serde(default = "default_intent_keywords")]
    pub intent_keywords: Vec<String>,

    /// Whether extraction requires a transaction-intent signal in the
    /// text. When off, every digit string in sight becomes a candidate.
    #[serde(default = "default_true")]
    pub require_intent_keyword: bool,

    /// Ceiling on the unscaled base value of a numeric literal. Literals
    /// above it are treated as account/CIF-style identifiers rather than
    /// amounts and dropped. `None` disables the filter. Worded amounts are
    /// never subject to the ceiling.
    #[serde(default = "default_max_plausible_base")]
    pub max_plausible_base: Option<Decimal>,

    /// Whether to run the worded-amount scanner ("two lakh").
    #[serde(default = "default_true")]
    pub worded_amounts: bool,
}

fn default_true() -> bool {
    true
}

fn default_intent_keywords() -> Vec<String> {
    [
        "limit",
        "transaction",
        "amount",
        "transfer",
        "allow",
        "approve",
        "upto",
        "increase",
        "set limit",
        "requesting",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_max_plausible_base() -> Option<Decimal> {
    Some(Decimal::from(100_000_000_i64))
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            intent_keywords: default_intent_keywords(),
            require_intent_keyword: true,
            max_plausible_base: default_max_plausible_base(),
            worded_amounts: true,
        }
    }
}

impl ExtractorConfig {
    /// First-revision engine behavior: no relevance gate, no plausibility
    /// filter, no worded-amount scanner. Kept for callers that consumed
    /// the unfiltered output of the original engine.
    pub fn legacy() -> Self {
        Self {
            require_intent_keyword: false,
            max_plausible_base: None,
            worded_amounts: false,
            ..Self::default()
        }
    }

    /// Load configuration from a YAML file. Missing fields fall back to
    /// their documented defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::FileNotFound(path.as_ref().display().to_string(), e.to_string())
        })?;

        serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}
