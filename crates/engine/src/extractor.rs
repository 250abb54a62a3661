//! Extraction orchestration: relevance gate, scanners, normalization.

use amount_extract_config::ExtractorConfig;
use amount_extract_core::{AmountMention, Currency, MagnitudeUnit};
use once_cell::sync::Lazy;
use regex::{Captures, Regex, RegexBuilder};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::scanner::{NUMERIC_PATTERN, WORDED_PATTERN};
use crate::{decimal, magnitude, words};

/// Explicit currency markers double as a transaction-intent signal for the
/// relevance gate: a currency-marked number is monetary on its face even
/// when no intent keyword appears ("Need ₹2.5 crore ASAP").
static CURRENCY_MARKER: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"[₹$]|\b(?:rs|inr|usd)\b")
        .case_insensitive(true)
        .build()
        .expect("currency marker pattern must compile")
});

/// Amount extraction engine.
///
/// Stateless between calls: every invocation scans the input text fresh
/// and the returned records are owned by the caller. Safe to share across
/// threads without locking.
#[derive(Debug, Clone, Default)]
pub struct AmountExtractor {
    config: ExtractorConfig,
}

impl AmountExtractor {
    /// Create an extractor with the given configuration.
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract every monetary-amount mention from `text`.
    ///
    /// Numeric-scanner results come first, then worded-scanner results,
    /// each in left-to-right span order. The two scanners run
    /// independently and their spans may overlap; overlaps are not
    /// reconciled. Total for any input: the worst case is an empty vector.
    pub fn extract(&self, text: &str) -> Vec<AmountMention> {
        if self.config.require_intent_keyword && !self.is_relevant(text) {
            tracing::debug!("no transaction-intent signal in text, skipping extraction");
            return Vec::new();
        }

        let mut mentions = self.scan_numeric(text);
        if self.config.worded_amounts {
            mentions.extend(self.scan_worded(text));
        }
        mentions
    }

    /// Relevance gate: at least one intent keyword (case-insensitive
    /// substring) or an explicit currency marker anywhere in the text.
    /// All-or-nothing for the whole call; this is what keeps account and
    /// CIF numbers in unrelated mail out of the results.
    fn is_relevant(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.config
            .intent_keywords
            .iter()
            .any(|keyword| lowered.contains(&keyword.to_lowercase()))
            || CURRENCY_MARKER.is_match(text)
    }

    fn scan_numeric(&self, text: &str) -> Vec<AmountMention> {
        NUMERIC_PATTERN
            .captures_iter(text)
            .filter_map(|caps| self.normalize_numeric(text, &caps))
            .collect()
    }

    fn normalize_numeric(&self, text: &str, caps: &Captures<'_>) -> Option<AmountMention> {
        let (number, currency, suffix) = match caps.name("number") {
            Some(num) => (num, caps.name("currency"), caps.name("suffix")),
            None => (caps.name("number2")?, caps.name("currency2"), None),
        };

        let base = decimal::parse_decimal(number.as_str());
        if let Some(ceiling) = self.config.max_plausible_base {
            if base > ceiling {
                tracing::debug!(
                    literal = number.as_str(),
                    "dropping identifier-like literal above plausibility ceiling"
                );
                return None;
            }
        }

        let unit = suffix
            .map(|s| magnitude::resolve_suffix(s.as_str()))
            .unwrap_or(MagnitudeUnit::None);
        let value = round_half_up_to_i64(base.checked_mul(unit.multiplier())?)?;

        let whole = caps.get(0)?;
        let (start, end) = char_span(text, whole.start(), whole.end());

        Some(AmountMention {
            text: whole.as_str().to_string(),
            start,
            end,
            currency: currency
                .map(|m| Currency::from_marker(m.as_str()))
                .unwrap_or(Currency::Unknown),
            value,
            unit,
            raw_number: base.to_string(),
            suffix: suffix.map(|m| m.as_str().to_string()),
        })
    }

    fn scan_worded(&self, text: &str) -> Vec<AmountMention> {
        WORDED_PATTERN
            .captures_iter(text)
            .filter_map(|caps| normalize_worded(text, &caps))
            .collect()
    }
}

/// Normalize a worded-scanner candidate. A run the converter cannot parse
/// discards the whole candidate; no plausibility ceiling applies, and the
/// currency of a word-form amount is fixed as INR.
fn normalize_worded(text: &str, caps: &Captures<'_>) -> Option<AmountMention> {
    let phrase = caps.name("phrase")?;
    let base = words::words_to_number(phrase.as_str())?;

    let suffix = caps.name("magnitude");
    let unit = suffix
        .map(|m| magnitude::resolve_suffix(m.as_str()))
        .unwrap_or(MagnitudeUnit::None);
    let value = round_half_up_to_i64(base.checked_mul(unit.multiplier())?)?;

    let whole = caps.get(0)?;
    let (start, end) = char_span(text, whole.start(), whole.end());

    Some(AmountMention {
        text: whole.as_str().to_string(),
        start,
        end,
        currency: Currency::Inr,
        value,
        unit,
        raw_number: base.to_string(),
        suffix: suffix.map(|m| m.as_str().to_string()),
    })
}

/// Round half-up (exact halves away from zero) to an integer `value`.
/// Amounts that do not fit `i64` are dropped rather than panicking.
fn round_half_up_to_i64(scaled: Decimal) -> Option<i64> {
    let rounded = scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let value = rounded.to_i64();
    if value.is_none() {
        tracing::warn!(%rounded, "normalized amount exceeds i64 range, dropping candidate");
    }
    value
}

/// Convert a byte span from the regex engine into character offsets, the
/// unit the output contract is defined in.
fn char_span(text: &str, byte_start: usize, byte_end: usize) -> (usize, usize) {
    let start = text[..byte_start].chars().count();
    let end = start + text[byte_start..byte_end].chars().count();
    (start, end)
}
