//! Suffix-to-magnitude resolution.
//!
//! Keyword families are tried as an explicit ordered rule list; order
//! encodes precedence ("lakh" must resolve as a keyword before the
//! trailing-"l" fallback gets a chance to misread it).

use amount_extract_core::MagnitudeUnit;
use once_cell::sync::Lazy;
use regex::Regex;

struct SuffixRule {
    /// Word-boundary keyword match over the lower-cased token. A trailing
    /// period or plural "s" sits outside the boundary and needs no special
    /// casing ("cr.", "lakhs").
    keywords: Regex,
    /// Terse forms matched exactly, with no word-boundary separation from
    /// the number ("2L", "5lk").
    bare: &'static [&'static str],
    unit: MagnitudeUnit,
}

static SUFFIX_RULES: Lazy<Vec<SuffixRule>> = Lazy::new(|| {
    vec![
        SuffixRule {
            keywords: Regex::new(r"\b(lakhs?|lacs?)\b").unwrap(),
            bare: &["l", "lk"],
            unit: MagnitudeUnit::Lakh,
        },
        SuffixRule {
            keywords: Regex::new(r"\b(crores?|cr)\b").unwrap(),
            bare: &[],
            unit: MagnitudeUnit::Crore,
        },
        SuffixRule {
            keywords: Regex::new(r"\b(k|thousand|thou)\b").unwrap(),
            bare: &[],
            unit: MagnitudeUnit::Thousand,
        },
        SuffixRule {
            keywords: Regex::new(r"\b(millions?|m|mn)\b").unwrap(),
            bare: &[],
            unit: MagnitudeUnit::Million,
        },
        SuffixRule {
            keywords: Regex::new(r"\b(billions?|bn|b)\b").unwrap(),
            bare: &[],
            unit: MagnitudeUnit::Billion,
        },
    ]
});

/// Resolve a suffix token to its magnitude unit.
///
/// The token is lower-cased and trimmed, then tested against the keyword
/// families in priority order (lakh, crore, thousand, million, billion).
/// When no keyword matches, a trailing-letter fallback catches terse forms
/// glued to the number: "k" for thousand, "m" for million, "l" for lakh.
/// Anything else resolves to no unit.
pub fn resolve_suffix(suffix: &str) -> MagnitudeUnit {
    let token = suffix.trim().to_lowercase();
    if token.is_empty() {
        return MagnitudeUnit::None;
    }

    for rule in SUFFIX_RULES.iter() {
        if rule.keywords.is_match(&token) || rule.bare.contains(&token.as_str()) {
            return rule.unit;
        }
    }

    match token.chars().last() {
        Some('k') => MagnitudeUnit::Thousand,
        Some('m') => MagnitudeUnit::Million,
        Some('l') => MagnitudeUnit::Lakh,
        _ => MagnitudeUnit::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lakh_family() {
        for token in ["lakh", "lakhs", "lac", "lacs", "l", "lk", "LAKH", "Lacs"] {
            assert_eq!(resolve_suffix(token), MagnitudeUnit::Lakh, "{token}");
        }
    }

    #[test]
    fn test_crore_family() {
        for token in ["crore", "crores", "cr", "cr.", "CR"] {
            assert_eq!(resolve_suffix(token), MagnitudeUnit::Crore, "{token}");
        }
    }

    #[test]
    fn test_thousand_family() {
        for token in ["k", "k.", "thousand", "thou"] {
            assert_eq!(resolve_suffix(token), MagnitudeUnit::Thousand, "{token}");
        }
    }

    #[test]
    fn test_million_family() {
        for token in ["million", "millions", "m", "mn", "m."] {
            assert_eq!(resolve_suffix(token), MagnitudeUnit::Million, "{token}");
        }
    }

    #[test]
    fn test_billion_family() {
        for token in ["billion", "bn", "b"] {
            assert_eq!(resolve_suffix(token), MagnitudeUnit::Billion, "{token}");
        }
    }

    #[test]
    fn test_trailing_letter_fallback() {
        assert_eq!(resolve_suffix("5k"), MagnitudeUnit::Thousand);
        assert_eq!(resolve_suffix("2m"), MagnitudeUnit::Million);
        assert_eq!(resolve_suffix("10l"), MagnitudeUnit::Lakh);
    }

    #[test]
    fn test_keyword_wins_over_fallback() {
        // "lakh" ends with "h", but even "lakhs" must not fall through to
        // the trailing-letter branch.
        assert_eq!(resolve_suffix("lakhs"), MagnitudeUnit::Lakh);
        // "crores" ends with "s" and only the keyword rule catches it.
        assert_eq!(resolve_suffix("crores"), MagnitudeUnit::Crore);
    }

    #[test]
    fn test_unknown_suffix_has_no_unit() {
        assert_eq!(resolve_suffix(""), MagnitudeUnit::None);
        assert_eq!(resolve_suffix("now"), MagnitudeUnit::None);
        assert_eq!(resolve_suffix("ms"), MagnitudeUnit::None);
    }
}
