//! Normalized amount mention records.

use crate::{Currency, MagnitudeUnit};
use serde::{Deserialize, Serialize};

/// A single monetary-amount mention extracted from text.
///
/// `start`/`end` are 0-indexed character offsets into the source text
/// (half-open interval) and `text` is the exact matched substring, so
/// `text == source[start..end]` by character index. `value` is the
/// normalized integer amount: the unscaled base recorded in `raw_number`
/// times the unit multiplier, rounded half-up.
///
/// Every record is constructed fresh per extraction call and owned by the
/// caller; the engine keeps no state between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmountMention {
    /// Exact matched substring.
    pub text: String,
    /// Start character offset (inclusive).
    pub start: usize,
    /// End character offset (exclusive).
    pub end: usize,
    /// Canonicalized currency, `Currency::Unknown` when no marker matched.
    pub currency: Currency,
    /// Normalized integer amount.
    pub value: i64,
    /// Magnitude unit resolved from the suffix.
    #[serde(rename = "unit_multiplier")]
    pub unit: MagnitudeUnit,
    /// Decimal string of the unscaled base value.
    pub raw_number: String,
    /// Original suffix token, if one was matched.
    pub suffix: Option<String>,
}
