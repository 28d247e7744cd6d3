//! CSV header derivation and serialization.

use std::io::Write;

use vcf2csv_core::codec::TextCodec;
use vcf2csv_core::config::HeaderMode;

use crate::error::AppResult;
use crate::record::{ContactField, NormalizedRow};

const CRLF: &[u8] = b"\r\n";

/// Ordered CSV columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvHeader {
    columns: Vec<ContactField>,
}

impl CsvHeader {
    /// ## Summary
    /// Derives the header from extracted rows.
    ///
    /// [`HeaderMode::FirstRecord`] takes the fields of the first row.
    /// [`HeaderMode::Union`] takes every field of every row in order of first
    /// appearance. Returns `None` when there are no rows.
    #[must_use]
    pub fn derive(rows: &[NormalizedRow], mode: HeaderMode) -> Option<Self> {
        let first = rows.first()?;

        let columns = match mode {
            HeaderMode::FirstRecord => first.fields().collect(),
            HeaderMode::Union => {
                let mut columns: Vec<ContactField> = Vec::new();
                for field in rows.iter().flat_map(NormalizedRow::fields) {
                    if !columns.contains(&field) {
                        columns.push(field);
                    }
                }
                columns
            }
        };

        Some(Self { columns })
    }

    #[must_use]
    pub fn columns(&self) -> &[ContactField] {
        &self.columns
    }

    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.columns
            .iter()
            .copied()
            .map(ContactField::column_name)
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Values of `row` in header order. Missing fields are empty and fields
    /// outside the header are dropped.
    #[must_use]
    pub fn align<'a>(&self, row: &'a NormalizedRow) -> Vec<&'a str> {
        self.columns
            .iter()
            .map(|c| row.get(*c).unwrap_or_default())
            .collect()
    }
}

/// ## Summary
/// Writes the header line and one line per row to `writer`, every field
/// encoded with `codec`.
///
/// Quoting is minimal and records end with `\r\n`. A header without columns
/// produces empty lines only.
///
/// ## Errors
/// Returns [`AppError::Encoding`](crate::error::AppError::Encoding) if a
/// value cannot be represented in the codec's encoding and
/// [`AppError::Csv`](crate::error::AppError::Csv) if writing fails.
pub fn write_csv<W: Write>(
    mut writer: W,
    header: &CsvHeader,
    rows: &[NormalizedRow],
    codec: TextCodec,
) -> AppResult<()> {
    if header.is_empty() {
        tracing::warn!("Header has no columns, writing empty lines");
        for _ in 0..=rows.len() {
            writer.write_all(CRLF).map_err(csv::Error::from)?;
        }
        writer.flush().map_err(csv::Error::from)?;
        return Ok(());
    }

    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer);

    csv_writer.write_record(header.names())?;

    for row in rows {
        let record = header
            .align(row)
            .into_iter()
            .map(|value| codec.encode(value))
            .collect::<Result<Vec<_>, _>>()?;
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
