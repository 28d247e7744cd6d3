use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unknown encoding label: {0}")]
    UnknownEncoding(String),

    #[error("Input is not valid {encoding}")]
    Undecodable { encoding: &'static str },

    #[error("Text contains characters not representable in {encoding}")]
    Unmappable { encoding: &'static str },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
