//! Token-scanning grammars for amount candidates.
//!
//! Two compiled patterns, shared process-wide and built once at first use:
//! a numeric grammar (optional currency marker, numeric literal, optional
//! magnitude suffix, plus a currency-anchored fallback branch) and a worded
//! grammar (a run of number words optionally followed by a magnitude word).
//! Both are scanned left-to-right, non-overlapping, in document order.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::words;

/// Numeric amount grammar.
///
/// Branch A: optional currency marker, optional whitespace, numeric literal
/// (digits with internal commas/periods, or a bare digit run), optional
/// whitespace, optional magnitude suffix (keyword forms, optionally
/// pluralized and/or with a trailing period). Branch B anchors a bare
/// currency+number pair with a mandatory marker. Suffix alternatives are
/// ordered longest first so "cr" cannot shadow "crore".
pub(crate) static NUMERIC_PATTERN: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(concat!(
        r"(?P<currency>₹|rs\.?|inr|usd|\$)?",
        r"\s*",
        r"(?P<number>\d[\d,.]*\d|\d+)",
        r"\s*",
        r"(?P<suffix>(?:thousand|thou|million|mn|billion|bn|crore|cr|lakhs?|lacs?|lk|k|m|l|b)s?\.?)?",
        r"|",
        r"(?P<currency2>₹|rs\.?|inr|usd|\$)\s*(?P<number2>\d[\d,.]*\d|\d+)",
    ))
    .case_insensitive(true)
    .build()
    .expect("numeric amount pattern must compile")
});

/// Worded amount grammar: a run of number words (whitespace- or
/// hyphen-separated) optionally followed by a magnitude word. Embedding the
/// converter's vocabulary in the run keeps surrounding prose from absorbing
/// it, so "limit two lakh" yields the candidate "two lakh". The run's first
/// word may not be the connective "and": such a run never converts, and
/// starting one there would swallow the number words after a prose "and"
/// ("transfer and two lakh").
pub(crate) static WORDED_PATTERN: Lazy<Regex> = Lazy::new(|| {
    let vocab = words::vocabulary_pattern();
    let leading = words::leading_vocabulary_pattern();
    let pattern = format!(
        r"\b(?P<phrase>(?:{lead})(?:[\s-]+(?:{v}))*)(?:\s+(?P<magnitude>lakhs?|lacs?|crores?|cr|millions?|m))?\b",
        lead = leading,
        v = vocab
    );
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .expect("worded amount pattern must compile")
});
