//! vCard reading for the CSV converter.
//!
//! Provides the soft line-break repair pass and a lenient parser for the
//! vCard 2.1, 3.0 and 4.0 dialects found in phone and mail client exports.

pub mod error;
pub mod rfc;
