//! Lenient decimal parsing for matched numeric literals.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a raw numeric substring into an exact decimal value.
///
/// Commas and whitespace are thousands-separator noise and are stripped
/// before the first parse attempt. If that fails, every character that is
/// not an ASCII digit or a decimal point is dropped and the parse retried;
/// an empty or still-malformed cleaned string yields zero. Total: never
/// fails, and fractional precision is preserved exactly ("2.5" parses to
/// 2.5, not a float approximation).
pub fn parse_decimal(raw: &str) -> Decimal {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    if let Ok(value) = Decimal::from_str(&cleaned) {
        return value;
    }

    let stripped: String = cleaned
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if stripped.is_empty() {
        return Decimal::ZERO;
    }
    match Decimal::from_str(&stripped) {
        Ok(value) => value,
        // A pure digit run can only fail by exceeding Decimal's 96-bit
        // range; saturate so the plausibility ceiling still rejects it.
        Err(_) if stripped.bytes().all(|b| b.is_ascii_digit()) => Decimal::MAX,
        Err(_) => Decimal::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_plain_integer() {
        assert_eq!(parse_decimal("100000"), dec!(100000));
    }

    #[test]
    fn test_comma_separators_stripped() {
        assert_eq!(parse_decimal("5,00,000"), dec!(500000));
        assert_eq!(parse_decimal("20,00000"), dec!(2000000));
        assert_eq!(parse_decimal("1,234,567"), dec!(1234567));
    }

    #[test]
    fn test_fraction_is_exact() {
        assert_eq!(parse_decimal("2.5"), dec!(2.5));
        assert_eq!(parse_decimal("1.2"), dec!(1.2));
    }

    #[test]
    fn test_internal_whitespace_stripped() {
        assert_eq!(parse_decimal("20 000"), dec!(20000));
    }

    #[test]
    fn test_garbage_characters_stripped() {
        assert_eq!(parse_decimal("Rs500"), dec!(500));
        assert_eq!(parse_decimal("~1.5x"), dec!(1.5));
    }

    #[test]
    fn test_unusable_input_is_zero() {
        assert_eq!(parse_decimal(""), Decimal::ZERO);
        assert_eq!(parse_decimal("abc"), Decimal::ZERO);
        assert_eq!(parse_decimal("1.2.3"), Decimal::ZERO);
    }

    #[test]
    fn test_oversized_digit_run_saturates() {
        let huge = "9".repeat(40);
        assert_eq!(parse_decimal(&huge), Decimal::MAX);
    }
}
