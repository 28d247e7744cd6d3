//! vCard value types.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::structured::{Address, Component, Gender, Organization, StructuredName};

/// A vCard property value.
///
/// Simple variants carry a single string, structured variants an ordered
/// set of named components (see [`VCardValue::components`]).
#[derive(Debug, Clone, PartialEq)]
pub enum VCardValue {
    /// Text value (RFC 6350 §4.1).
    Text(String),

    /// Multi-valued text (comma-separated in source).
    TextList(Vec<String>),

    /// URI value (RFC 6350 §4.2).
    Uri(String),

    /// Structured name (N property).
    StructuredName(StructuredName),

    /// Address (ADR property).
    Address(Address),

    /// Organization (ORG property).
    Organization(Organization),

    /// Gender (GENDER property).
    Gender(Gender),

    /// Boolean value (RFC 6350 §4.4).
    Boolean(bool),

    /// Integer value (RFC 6350 §4.5).
    Integer(i64),

    /// Float value (RFC 6350 §4.6).
    Float(f64),

    /// Language tag value (RFC 6350 §4.8).
    LanguageTag(String),

    /// Binary data from `ENCODING=B` / `ENCODING=BASE64`.
    Binary(Vec<u8>),

    /// Unknown/extension value (preserved as text).
    Unknown(String),
}

impl VCardValue {
    /// Returns the value as text if applicable.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::Unknown(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as a URI if applicable.
    #[must_use]
    pub fn as_uri(&self) -> Option<&str> {
        match self {
            Self::Uri(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as a structured name if applicable.
    #[must_use]
    pub fn as_structured_name(&self) -> Option<&StructuredName> {
        match self {
            Self::StructuredName(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the value as an organization if applicable.
    #[must_use]
    pub fn as_organization(&self) -> Option<&Organization> {
        match self {
            Self::Organization(o) => Some(o),
            _ => None,
        }
    }

    /// Returns the value as a boolean if applicable.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the value as an integer if applicable.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the named components of a structured value.
    #[must_use]
    pub fn components(&self) -> Option<Vec<Component>> {
        match self {
            Self::StructuredName(n) => Some(n.components()),
            Self::Address(a) => Some(a.components()),
            Self::Organization(o) => Some(o.components()),
            Self::Gender(g) => Some(g.components()),
            _ => None,
        }
    }

    /// ## Summary
    /// Collapses the value into a single string.
    ///
    /// Simple values are returned verbatim. Structured values join their
    /// components with one space, in declaration order, empty components
    /// included: `N:Doe;John;;;` flattens to `"Doe John   "`. Text lists are
    /// joined with `,`, scalars use their display form and binary data is
    /// re-encoded as base64.
    #[must_use]
    pub fn flatten(&self) -> String {
        if let Some(components) = self.components() {
            return components
                .into_iter()
                .map(|c| c.value)
                .collect::<Vec<_>>()
                .join(" ");
        }

        match self {
            Self::Text(s) | Self::Uri(s) | Self::LanguageTag(s) | Self::Unknown(s) => s.clone(),
            Self::TextList(values) => values.join(","),
            Self::Boolean(b) => b.to_string(),
            Self::Integer(i) => i.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Binary(bytes) => STANDARD.encode(bytes),
            Self::StructuredName(_) | Self::Address(_) | Self::Organization(_) | Self::Gender(_) => {
                String::new()
            }
        }
    }
}

impl From<String> for VCardValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for VCardValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<StructuredName> for VCardValue {
    fn from(n: StructuredName) -> Self {
        Self::StructuredName(n)
    }
}

impl From<Address> for VCardValue {
    fn from(a: Address) -> Self {
        Self::Address(a)
    }
}

impl From<Organization> for VCardValue {
    fn from(o: Organization) -> Self {
        Self::Organization(o)
    }
}

impl From<Gender> for VCardValue {
    fn from(g: Gender) -> Self {
        Self::Gender(g)
    }
}

impl From<bool> for VCardValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i64> for VCardValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}
