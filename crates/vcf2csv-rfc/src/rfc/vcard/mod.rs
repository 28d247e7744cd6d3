//! vCard implementation (RFC 2425/2426, RFC 6350, vCard 2.1).
//!
//! This module provides types and parsing for vCard data as exported by
//! phones and mail clients.
//!
//! ## Overview
//!
//! vCard is a standard format for contact information. The parser accepts
//! vCard 2.1, 3.0 (RFC 2426) and 4.0 (RFC 6350). It is lenient: it does not
//! validate conformance, it only builds the component/property tree.
//!
//! ## Usage
//!
//! ### Repairing soft line breaks
//!
//! ```rust
//! use vcf2csv_rfc::rfc::vcard::unfold_soft_breaks;
//!
//! let fixed = unfold_soft_breaks("NOTE;ENCODING=QUOTED-PRINTABLE:Hello=\nWorld\n");
//! assert_eq!(fixed, "NOTE;ENCODING=QUOTED-PRINTABLE:Hello=\n World\n");
//! ```
//!
//! ### Parsing
//!
//! ```rust
//! use vcf2csv_rfc::rfc::vcard::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:4.0\r\n\
//! FN:John Doe\r\n\
//! EMAIL:john@example.com\r\n\
//! END:VCARD\r\n";
//!
//! let cards = parse(input).unwrap();
//! assert_eq!(cards[0].formatted_name(), Some("John Doe"));
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Core types (`VCard`, `VCardProperty`, `VCardValue`, etc.)
//! - [`parse`] - Parsing functions, soft-break repair and error types

pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use core::{
    Address, Gender, Organization, StructuredName, VCard, VCardParameter, VCardProperty,
    VCardValue, VCardVersion,
};
pub use parse::{ParseError, ParseResult, parse, parse_bytes, parse_single, unfold_soft_breaks};
