//! Amount recognition and normalization
//!
//! Extracts monetary-amount mentions from free-form banking text (emails
//! requesting transaction-limit changes and the like) and normalizes each
//! into a structured record: exact span, canonical currency, magnitude
//! unit and the scaled integer value.
//!
//! The engine recognizes plain digits ("100000"), digits with regional or
//! international magnitude suffixes ("20lakh", "2.5 cr", "1.2 million",
//! "5k", "2L"), optional currency markers ("₹", "Rs.", "$", "inr", "usd")
//! and amounts spelled out in words ("two lakh"). A relevance gate and a
//! plausibility ceiling keep account and CIF numbers out of the results.
//!
//! # Example
//!
//! ```
//! use amount_extract_engine::AmountExtractor;
//!
//! let extractor = AmountExtractor::default();
//! let mentions = extractor.extract("Please set limit to 20lakh");
//!
//! assert_eq!(mentions.len(), 1);
//! assert_eq!(mentions[0].value, 2_000_000);
//! assert_eq!(mentions[0].raw_number, "20");
//! ```

pub mod decimal;
pub mod extractor;
pub mod magnitude;
pub mod scanner;
pub mod words;

pub use extractor::AmountExtractor;

// Re-export the data model and config so callers need only this crate.
pub use amount_extract_config::ExtractorConfig;
pub use amount_extract_core::{AmountMention, Currency, MagnitudeUnit};
