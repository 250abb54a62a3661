//! Core types for the amount extraction engine
//!
//! This crate provides the data model shared by the extraction crates:
//! - Magnitude units (lakh, crore, thousand, ...) and their exact multipliers
//! - Currency canonicalization (INR/USD plus literal passthrough)
//! - The `AmountMention` output record

pub mod currency;
pub mod magnitude;
pub mod mention;

pub use currency::Currency;
pub use magnitude::MagnitudeUnit;
pub use mention::AmountMention;
