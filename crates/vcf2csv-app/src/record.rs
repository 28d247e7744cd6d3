//! Per-contact field extraction.

use vcf2csv_rfc::rfc::vcard::VCard;
use vcf2csv_rfc::rfc::vcard::core::names;

/// A contact field that becomes a CSV column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    /// Structured name (`N`).
    Name,
    /// Formatted name (`FN`).
    FormattedName,
    Email,
    Telephone,
}

impl ContactField {
    pub const ALL: [Self; 4] = [
        Self::Name,
        Self::FormattedName,
        Self::Email,
        Self::Telephone,
    ];

    /// vCard property name this field is read from.
    #[must_use]
    pub const fn property_name(self) -> &'static str {
        match self {
            Self::Name => names::N,
            Self::FormattedName => names::FN,
            Self::Email => names::EMAIL,
            Self::Telephone => names::TEL,
        }
    }

    /// CSV column name.
    #[must_use]
    pub const fn column_name(self) -> &'static str {
        match self {
            Self::Name => "n",
            Self::FormattedName => "fn",
            Self::Email => "email",
            Self::Telephone => "tel",
        }
    }

    /// Matches a property name case-insensitively.
    #[must_use]
    pub fn from_property_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.property_name().eq_ignore_ascii_case(name))
    }
}

/// Extracted values of one contact, keyed by field in order of first
/// appearance in the source card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedRow {
    entries: Vec<(ContactField, String)>,
}

impl NormalizedRow {
    /// ## Summary
    /// Builds the row for one vCard.
    ///
    /// `PHOTO` is skipped, every recognized property contributes its first
    /// value flattened to text, and all other properties are ignored.
    #[must_use]
    pub fn from_card(card: &VCard) -> Self {
        let mut row = Self::default();

        for prop in &card.properties {
            if prop.name.eq_ignore_ascii_case(names::PHOTO) {
                continue;
            }
            let Some(field) = ContactField::from_property_name(&prop.name) else {
                continue;
            };
            if row.insert(field, prop.value.flatten()) {
                tracing::trace!(column = field.column_name(), "Extracted field");
            }
        }

        row
    }

    /// Inserts a value unless the field is already present. Returns whether
    /// the value was stored.
    pub fn insert(&mut self, field: ContactField, value: impl Into<String>) -> bool {
        if self.contains(field) {
            return false;
        }
        self.entries.push((field, value.into()));
        true
    }

    #[must_use]
    pub fn contains(&self, field: ContactField) -> bool {
        self.entries.iter().any(|(f, _)| *f == field)
    }

    #[must_use]
    pub fn get(&self, field: ContactField) -> Option<&str> {
        self.entries
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
    }

    /// Fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = ContactField> + '_ {
        self.entries.iter().map(|(f, _)| *f)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Extracts one row per card, preserving card order.
#[tracing::instrument(skip(cards), fields(count = cards.len()))]
#[must_use]
pub fn extract_rows(cards: &[VCard]) -> Vec<NormalizedRow> {
    let rows: Vec<_> = cards.iter().map(NormalizedRow::from_card).collect();
    tracing::debug!(rows = rows.len(), "Extracted rows");
    rows
}
