//! Currency canonicalization.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Currency attached to an amount mention.
///
/// Not a closed set: markers the engine does not recognize surface to the
/// caller as their literal text instead of being swallowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Currency {
    Inr,
    Usd,
    /// Unrecognized marker, passed through as its trimmed literal text.
    Other(String),
    /// No currency marker was present.
    Unknown,
}

impl Currency {
    /// Canonicalize a matched currency marker.
    ///
    /// The marker is compared lower-cased with periods stripped: "$" and
    /// "usd" map to USD; "₹", "rs" and "inr" map to INR; anything else
    /// passes through as its trimmed literal text.
    pub fn from_marker(marker: &str) -> Self {
        let canonical = marker.to_lowercase().replace('.', "");
        match canonical.trim() {
            "$" | "usd" => Self::Usd,
            "₹" | "rs" | "inr" => Self::Inr,
            _ => Self::Other(marker.trim().to_string()),
        }
    }

    /// Canonical code ("INR"/"USD"), the literal marker text, or "unknown".
    pub fn code(&self) -> &str {
        match self {
            Self::Inr => "INR",
            Self::Usd => "USD",
            Self::Other(literal) => literal,
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(match code.as_str() {
            "INR" => Self::Inr,
            "USD" => Self::Usd,
            "unknown" => Self::Unknown,
            _ => Self::Other(code),
        })
    }
}
