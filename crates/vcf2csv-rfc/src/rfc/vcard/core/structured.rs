//! Structured vCard types.
//!
//! These types represent structured property values like N, ADR, and ORG.
//! Each exposes [`components`](StructuredName::components): its parts as an
//! ordered list of named components, in the declaration order of the type.

/// One named part of a structured value.
///
/// Multi-valued parts (`N:Doe;John,Paul`) are re-joined with `,`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub name: &'static str,
    pub value: String,
}

impl Component {
    fn joined(name: &'static str, values: &[String]) -> Self {
        Self {
            name,
            value: values.join(","),
        }
    }
}

/// Structured name (N property, RFC 6350 §6.2.2).
///
/// All components are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuredName {
    /// Family names (surnames).
    pub family: Vec<String>,
    /// Given names (first names).
    pub given: Vec<String>,
    /// Additional names (middle names).
    pub additional: Vec<String>,
    /// Honorific prefixes (e.g., "Mr.", "Dr.").
    pub prefixes: Vec<String>,
    /// Honorific suffixes (e.g., "Jr.", "M.D.").
    pub suffixes: Vec<String>,
}

impl StructuredName {
    /// Creates a structured name with family and given names.
    #[must_use]
    pub fn simple(family: impl Into<String>, given: impl Into<String>) -> Self {
        Self {
            family: vec![family.into()],
            given: vec![given.into()],
            ..Self::default()
        }
    }

    /// Returns whether the name is empty (all components are empty).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components().iter().all(|c| c.value.is_empty())
    }

    /// Family, given, additional, prefix, suffix.
    #[must_use]
    pub fn components(&self) -> Vec<Component> {
        vec![
            Component::joined("family", &self.family),
            Component::joined("given", &self.given),
            Component::joined("additional", &self.additional),
            Component::joined("prefix", &self.prefixes),
            Component::joined("suffix", &self.suffixes),
        ]
    }
}

/// Address (ADR property, RFC 6350 §6.3.1).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Address {
    /// Post office box.
    pub po_box: Vec<String>,
    /// Extended address (e.g., apartment or suite number).
    pub extended: Vec<String>,
    /// Street address.
    pub street: Vec<String>,
    /// Locality (city).
    pub locality: Vec<String>,
    /// Region (state or province).
    pub region: Vec<String>,
    /// Postal code.
    pub postal_code: Vec<String>,
    /// Country name.
    pub country: Vec<String>,
}

impl Address {
    #[must_use]
    pub fn components(&self) -> Vec<Component> {
        vec![
            Component::joined("po_box", &self.po_box),
            Component::joined("extended", &self.extended),
            Component::joined("street", &self.street),
            Component::joined("locality", &self.locality),
            Component::joined("region", &self.region),
            Component::joined("postal_code", &self.postal_code),
            Component::joined("country", &self.country),
        ]
    }
}

/// Organization (ORG property, RFC 6350 §6.6.4).
///
/// First value is the organizational name, subsequent values are
/// organizational units in order of decreasing specificity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Organization {
    /// Organization name.
    pub name: String,
    /// Organizational units (department, division, etc.).
    pub units: Vec<String>,
}

impl Organization {
    #[must_use]
    pub fn components(&self) -> Vec<Component> {
        std::iter::once(Component {
            name: "name",
            value: self.name.clone(),
        })
        .chain(self.units.iter().map(|unit| Component {
            name: "unit",
            value: unit.clone(),
        }))
        .collect()
    }
}

/// Gender (GENDER property, RFC 6350 §6.2.7).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Gender {
    /// Sex component: M, F, O, N, or U.
    pub sex: Option<Sex>,
    /// Gender identity text (free-form).
    pub identity: Option<String>,
}

impl Gender {
    #[must_use]
    pub fn components(&self) -> Vec<Component> {
        vec![
            Component {
                name: "sex",
                value: self.sex.map(|s| s.as_char().to_string()).unwrap_or_default(),
            },
            Component {
                name: "identity",
                value: self.identity.clone().unwrap_or_default(),
            },
        ]
    }
}

/// Sex component of GENDER property (RFC 6350 §6.2.7).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sex {
    Male,
    Female,
    Other,
    None,
    Unknown,
}

impl Sex {
    /// Parses from single character.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'M' | 'm' => Some(Self::Male),
            'F' | 'f' => Some(Self::Female),
            'O' | 'o' => Some(Self::Other),
            'N' | 'n' => Some(Self::None),
            'U' | 'u' => Some(Self::Unknown),
            _ => Option::None,
        }
    }

    /// Returns the single-character representation.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Male => 'M',
            Self::Female => 'F',
            Self::Other => 'O',
            Self::None => 'N',
            Self::Unknown => 'U',
        }
    }
}
