use std::path::PathBuf;

use thiserror::Error;
use vcf2csv_core::error::CoreError;
use vcf2csv_rfc::error::RfcError;
use vcf2csv_rfc::rfc::vcard::ParseError;

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Encoding error: {0}")]
    Encoding(#[source] CoreError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("No vCard records found in {}", path.display())]
    EmptyInput { path: PathBuf },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

impl AppError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidInput(msg) => Self::InvalidOption(msg),
            other => Self::Encoding(other),
        }
    }
}

impl From<RfcError> for AppError {
    fn from(err: RfcError) -> Self {
        match err {
            RfcError::VCard(e) => Self::Parse(e),
            RfcError::CoreError(e) => e.into(),
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
