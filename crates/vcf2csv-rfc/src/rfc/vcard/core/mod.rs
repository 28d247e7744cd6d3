//! vCard core types.
//!
//! - [`VCard`] - Complete vCard representation
//! - [`VCardProperty`] - Individual property with parameters and value
//! - [`VCardParameter`] - Property parameters
//! - [`VCardValue`] - Property value variants
//!
//! ## Structured Types
//!
//! - [`StructuredName`] - N property (family, given, etc.)
//! - [`Address`] - ADR property
//! - [`Organization`] - ORG property
//! - [`Gender`] - GENDER property
//!
//! Structured values expose their parts through `components()`, an ordered
//! list of named components in declaration order.
//!
//! ## Example
//!
//! ```rust
//! use vcf2csv_rfc::rfc::vcard::core::{VCard, VCardProperty};
//!
//! let mut card = VCard::new();
//! card.add_property(VCardProperty::text("FN", "John Doe"));
//! card.add_property(VCardProperty::text("EMAIL", "john@example.com"));
//! assert_eq!(card.formatted_name(), Some("John Doe"));
//! ```

mod parameter;
mod property;
mod structured;
mod value;
mod vcard;

pub use parameter::VCardParameter;
pub use property::{VCardProperty, names};
pub use structured::{Address, Component, Gender, Organization, Sex, StructuredName};
pub use value::VCardValue;
pub use vcard::{VCard, VCardVersion};
