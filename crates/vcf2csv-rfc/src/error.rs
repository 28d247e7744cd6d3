use thiserror::Error;

use crate::rfc::vcard::ParseError;

/// RFC parsing errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("vCard parse error: {0}")]
    VCard(#[from] ParseError),

    #[error(transparent)]
    CoreError(#[from] vcf2csv_core::error::CoreError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
