//! File-level conversion passes.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use vcf2csv_core::codec::TextCodec;
use vcf2csv_core::config::HeaderMode;
use vcf2csv_core::constants::FIXED_FILE_SUFFIX;
use vcf2csv_rfc::rfc::vcard::{parse_bytes, unfold_soft_breaks};

use crate::error::{AppError, AppResult};
use crate::record::extract_rows;
use crate::sheet::{CsvHeader, write_csv};

/// Options for a full conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Intermediate fixed file. Defaults to [`default_fixed_path`].
    pub fixed: Option<PathBuf>,
    pub codec: TextCodec,
    pub header_mode: HeaderMode,
}

impl ConvertOptions {
    #[must_use]
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            fixed: None,
            codec: TextCodec::default(),
            header_mode: HeaderMode::default(),
        }
    }

    /// Fixed file path actually used by [`run`].
    #[must_use]
    pub fn fixed_path(&self) -> PathBuf {
        self.fixed
            .clone()
            .unwrap_or_else(|| default_fixed_path(&self.input))
    }
}

/// What a conversion produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub fixed_path: PathBuf,
    pub output_path: PathBuf,
    /// Parsed vCard records, equal to the number of CSV rows.
    pub records: usize,
    /// Header column names.
    pub columns: Vec<&'static str>,
}

/// ## Summary
/// `<input-stem>_fixed.vcf` next to the input file.
///
/// Only the last extension is replaced, so `contacts.vcf` becomes
/// `contacts_fixed.vcf` and a file without extension just gains the suffix.
#[must_use]
pub fn default_fixed_path(input: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or(input.as_os_str());
    let mut name = stem.to_os_string();
    name.push(FIXED_FILE_SUFFIX);
    input.with_file_name(name)
}

/// ## Summary
/// Reads `input`, repairs soft line breaks and writes the result to `fixed`.
///
/// Line terminators in the fixed file are `\n`.
///
/// ## Errors
/// Returns [`AppError::FileNotFound`] if `input` does not exist,
/// [`AppError::Encoding`] if the text cannot be decoded or re-encoded and
/// [`AppError::Io`] for any other read or write failure.
#[tracing::instrument(skip(codec), fields(encoding = codec.name()))]
pub fn fix_file(input: &Path, fixed: &Path, codec: TextCodec) -> AppResult<()> {
    let bytes = read_input(input)?;
    let text = codec.decode(&bytes)?;

    let repaired = unfold_soft_breaks(&text);
    tracing::debug!(
        input_len = text.len(),
        output_len = repaired.len(),
        "Repaired soft line breaks"
    );

    write_atomically(fixed, &codec.encode(&repaired)?)
}

/// ## Summary
/// Parses `fixed` and writes the extracted contacts to `output` as CSV.
///
/// Nothing is written when parsing fails or no record is found.
///
/// ## Errors
/// Returns [`AppError::FileNotFound`] if `fixed` does not exist,
/// [`AppError::Parse`] if the vCard content is rejected,
/// [`AppError::EmptyInput`] if it holds no record,
/// [`AppError::Encoding`] for undecodable input or unmappable output and
/// [`AppError::Io`] or [`AppError::Csv`] if writing fails.
#[tracing::instrument(skip(codec), fields(encoding = codec.name()))]
pub fn convert_file(
    fixed: &Path,
    output: &Path,
    codec: TextCodec,
    header_mode: HeaderMode,
) -> AppResult<ConversionSummary> {
    let bytes = read_input(fixed)?;
    let cards = parse_bytes(&bytes, codec)?;
    let rows = extract_rows(&cards);

    let header = CsvHeader::derive(&rows, header_mode).ok_or_else(|| AppError::EmptyInput {
        path: fixed.to_path_buf(),
    })?;

    let mut buffer = Vec::new();
    write_csv(&mut buffer, &header, &rows, codec)?;
    write_atomically(output, &buffer)?;

    tracing::info!(
        records = rows.len(),
        columns = header.len(),
        output = %output.display(),
        "CSV written"
    );

    Ok(ConversionSummary {
        fixed_path: fixed.to_path_buf(),
        output_path: output.to_path_buf(),
        records: rows.len(),
        columns: header.names(),
    })
}

/// ## Summary
/// Runs both passes: repair into the fixed file, then convert it to CSV.
///
/// ## Errors
/// Returns the first error of either pass.
#[tracing::instrument(skip_all, fields(input = %options.input.display()))]
pub fn run(options: &ConvertOptions) -> AppResult<ConversionSummary> {
    let fixed = options.fixed_path();

    fix_file(&options.input, &fixed, options.codec)?;
    convert_file(&fixed, &options.output, options.codec, options.header_mode)
}

fn read_input(path: &Path) -> AppResult<Vec<u8>> {
    std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            AppError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            AppError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Writes into a temporary file beside `path` and renames it into place.
fn write_atomically(path: &Path, bytes: &[u8]) -> AppResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir).map_err(AppError::io(path))?;
    file.write_all(bytes).map_err(AppError::io(path))?;
    file.as_file().sync_all().map_err(AppError::io(path))?;
    file.persist(path)
        .map_err(|e| AppError::io(path)(e.error))?;

    tracing::trace!(path = %path.display(), len = bytes.len(), "File written");
    Ok(())
}
