//! English word-to-number conversion.
//!
//! Converts phrases like "two", "twenty five" or "one hundred and five"
//! into exact decimal values. Conversion failure is an explicit absent
//! value consumed by the worded scanner, never an error.

use rust_decimal::Decimal;

const ONES: &[(&str, u64)] = &[
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
];

const TENS: &[(&str, u64)] = &[
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
];

fn lookup(table: &[(&str, u64)], word: &str) -> Option<u64> {
    table.iter().find(|(name, _)| *name == word).map(|(_, v)| *v)
}

/// Alternation of every word the converter understands, longest first so
/// the scanner's regex cannot stop at a prefix ("six" inside "sixty").
pub(crate) fn vocabulary_pattern() -> String {
    alternation(&["hundred", "thousand", "and"])
}

/// The same alternation without the connective "and". A run that begins
/// with "and" can never convert, and a scanner run started there swallows
/// the number words that follow ("transfer and two lakh").
pub(crate) fn leading_vocabulary_pattern() -> String {
    alternation(&["hundred", "thousand"])
}

fn alternation(scale_words: &[&'static str]) -> String {
    let mut words: Vec<&str> = ONES
        .iter()
        .chain(TENS.iter())
        .map(|(name, _)| *name)
        .collect();
    words.extend_from_slice(scale_words);
    words.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    words.join("|")
}

/// Convert an English number phrase to a decimal value.
///
/// Supports units and teens, tens, hyphenated compounds ("twenty-five"),
/// the scale words "hundred" and "thousand", and connective "and" between
/// groups. Returns `None` when the phrase is not a well-formed number: an
/// unknown word, a scale word with nothing before it, or two unit words in
/// a row all disqualify the whole phrase.
pub fn words_to_number(phrase: &str) -> Option<Decimal> {
    #[derive(PartialEq)]
    enum Small {
        Empty,
        Tens,
        Done,
    }

    // completed "thousand" groups / group under construction
    let mut total: u64 = 0;
    let mut current: u64 = 0;
    let mut small = Small::Empty;
    let mut matched_any = false;

    let tokens = phrase
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|t| !t.is_empty());

    for token in tokens {
        let word = token.to_lowercase();
        match word.as_str() {
            "and" => {
                if !matched_any {
                    return None;
                }
            }
            "hundred" => {
                if current == 0 || small == Small::Empty {
                    return None;
                }
                current = current.checked_mul(100)?;
                small = Small::Empty;
            }
            "thousand" => {
                if current == 0 {
                    return None;
                }
                total = total.checked_add(current.checked_mul(1_000)?)?;
                current = 0;
                small = Small::Empty;
            }
            w => {
                if let Some(tens) = lookup(TENS, w) {
                    if small != Small::Empty {
                        return None;
                    }
                    current += tens;
                    small = Small::Tens;
                } else if let Some(ones) = lookup(ONES, w) {
                    match small {
                        Small::Empty => {}
                        Small::Tens if (1..=9).contains(&ones) => {}
                        _ => return None,
                    }
                    current += ones;
                    small = Small::Done;
                } else {
                    return None;
                }
                matched_any = true;
            }
        }
    }

    if !matched_any {
        return None;
    }
    Some(Decimal::from(total + current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_single_words() {
        assert_eq!(words_to_number("two"), Some(dec!(2)));
        assert_eq!(words_to_number("ten"), Some(dec!(10)));
        assert_eq!(words_to_number("nineteen"), Some(dec!(19)));
        assert_eq!(words_to_number("ninety"), Some(dec!(90)));
        assert_eq!(words_to_number("zero"), Some(dec!(0)));
    }

    #[test]
    fn test_compounds() {
        assert_eq!(words_to_number("twenty five"), Some(dec!(25)));
        assert_eq!(words_to_number("twenty-five"), Some(dec!(25)));
        assert_eq!(words_to_number("Sixty Seven"), Some(dec!(67)));
    }

    #[test]
    fn test_scales() {
        assert_eq!(words_to_number("one hundred"), Some(dec!(100)));
        assert_eq!(words_to_number("one hundred and five"), Some(dec!(105)));
        assert_eq!(words_to_number("two hundred fifty"), Some(dec!(250)));
        assert_eq!(words_to_number("two thousand"), Some(dec!(2000)));
        assert_eq!(
            words_to_number("two thousand five hundred"),
            Some(dec!(2500))
        );
        assert_eq!(
            words_to_number("three hundred and forty two thousand five hundred"),
            Some(dec!(342500))
        );
    }

    #[test]
    fn test_invalid_phrases() {
        assert_eq!(words_to_number("enhancement of limit two"), None);
        assert_eq!(words_to_number("five five"), None);
        assert_eq!(words_to_number("twenty thirty"), None);
        assert_eq!(words_to_number("hundred"), None);
        assert_eq!(words_to_number("and"), None);
        assert_eq!(words_to_number(""), None);
    }

    #[test]
    fn test_leading_vocabulary_excludes_connective() {
        assert!(vocabulary_pattern().split('|').any(|w| w == "and"));
        assert!(!leading_vocabulary_pattern().split('|').any(|w| w == "and"));
    }

    #[test]
    fn test_vocabulary_orders_longest_first() {
        let pattern = vocabulary_pattern();
        let sixty = pattern.find("sixty").unwrap();
        let six = pattern.find("six|").unwrap_or(pattern.len());
        assert!(sixty < six, "longer words must come first: {pattern}");
    }
}
