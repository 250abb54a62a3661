//! Magnitude units and their multipliers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named magnitude unit attached to a numeric literal ("20 lakh", "5k").
///
/// Each unit maps to an exact integer multiplier. The table is fixed for
/// the life of the process; `None` is the unit of a bare number and
/// multiplies by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MagnitudeUnit {
    Thousand,
    Lakh,
    Million,
    Crore,
    Billion,
    /// No named unit; serialized as the literal multiplier "1".
    #[serde(rename = "1")]
    None,
}

impl MagnitudeUnit {
    /// Exact integer multiplier for this unit.
    pub fn multiplier(&self) -> Decimal {
        match self {
            Self::Thousand => Decimal::from(1_000),
            Self::Lakh => Decimal::from(100_000),
            Self::Million => Decimal::from(1_000_000),
            Self::Crore => Decimal::from(10_000_000),
            Self::Billion => Decimal::from(1_000_000_000),
            Self::None => Decimal::ONE,
        }
    }

    /// Canonical unit name, or the literal "1" when no named unit applies.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Thousand => "thousand",
            Self::Lakh => "lakh",
            Self::Million => "million",
            Self::Crore => "crore",
            Self::Billion => "billion",
            Self::None => "1",
        }
    }
}

impl fmt::Display for MagnitudeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_multipliers_exact() {
        assert_eq!(MagnitudeUnit::Thousand.multiplier(), dec!(1000));
        assert_eq!(MagnitudeUnit::Lakh.multiplier(), dec!(100000));
        assert_eq!(MagnitudeUnit::Million.multiplier(), dec!(1000000));
        assert_eq!(MagnitudeUnit::Crore.multiplier(), dec!(10000000));
        assert_eq!(MagnitudeUnit::Billion.multiplier(), dec!(1000000000));
        assert_eq!(MagnitudeUnit::None.multiplier(), dec!(1));
    }

    #[test]
    fn test_serializes_as_label() {
        assert_eq!(
            serde_json::to_string(&MagnitudeUnit::Lakh).unwrap(),
            "\"lakh\""
        );
        assert_eq!(serde_json::to_string(&MagnitudeUnit::None).unwrap(), "\"1\"");
    }

    #[test]
    fn test_deserializes_from_label() {
        let unit: MagnitudeUnit = serde_json::from_str("\"crore\"").unwrap();
        assert_eq!(unit, MagnitudeUnit::Crore);
        let unit: MagnitudeUnit = serde_json::from_str("\"1\"").unwrap();
        assert_eq!(unit, MagnitudeUnit::None);
    }
}
