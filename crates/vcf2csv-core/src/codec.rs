//! Single-encoding text codec used for every file of a conversion run.
//!
//! The whole pipeline reads and writes through one [`TextCodec`]; nothing is
//! transcoded per record.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};

use crate::constants::DEFAULT_ENCODING_LABEL;
use crate::error::{CoreError, CoreResult};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A resolved character encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextCodec {
    encoding: &'static Encoding,
}

impl TextCodec {
    /// ## Summary
    /// Resolves a WHATWG encoding label such as `ISO-8859-9` or `utf-8`.
    ///
    /// ## Errors
    /// Returns [`CoreError::UnknownEncoding`] for labels that do not name an
    /// encoding, and [`CoreError::InvalidInput`] for encodings that cannot be
    /// written back (UTF-16 and the replacement encoding).
    pub fn for_label(label: &str) -> CoreResult<Self> {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| CoreError::UnknownEncoding(label.to_string()))?;

        if encoding.output_encoding() != encoding {
            return Err(CoreError::InvalidInput(format!(
                "encoding {} can be read but not written",
                encoding.name()
            )));
        }

        Ok(Self { encoding })
    }

    /// UTF-8, the fallback for values that carry no `CHARSET`.
    #[must_use]
    pub const fn utf8() -> Self {
        Self { encoding: UTF_8 }
    }

    /// Canonical name of the encoding.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.encoding.name()
    }

    /// ## Summary
    /// Decodes raw file bytes without substituting replacement characters.
    ///
    /// A leading UTF-8 byte order mark is dropped when the codec is UTF-8.
    ///
    /// ## Errors
    /// Returns [`CoreError::Undecodable`] if any byte sequence is malformed
    /// for this encoding.
    pub fn decode(self, bytes: &[u8]) -> CoreResult<String> {
        let bytes = if self.encoding == UTF_8 {
            bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
        } else {
            bytes
        };

        self.encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(Cow::into_owned)
            .ok_or(CoreError::Undecodable {
                encoding: self.name(),
            })
    }

    /// ## Summary
    /// Encodes text for writing.
    ///
    /// ## Errors
    /// Returns [`CoreError::Unmappable`] if the text holds characters the
    /// encoding cannot represent.
    pub fn encode(self, text: &str) -> CoreResult<Vec<u8>> {
        let (bytes, _, had_unmappable) = self.encoding.encode(text);
        if had_unmappable {
            return Err(CoreError::Unmappable {
                encoding: self.name(),
            });
        }
        Ok(bytes.into_owned())
    }
}

impl Default for TextCodec {
    fn default() -> Self {
        Self::for_label(DEFAULT_ENCODING_LABEL).unwrap_or_else(|_| Self::utf8())
    }
}
