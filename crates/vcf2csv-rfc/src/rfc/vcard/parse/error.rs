//! Errors raised while reading vCard documents.
//!
//! Line numbers count logical lines: folds are already joined and blank
//! lines are skipped, so they can differ from the physical line in the file.

use std::fmt;

pub type ParseResult<T> = Result<T, ParseError>;

/// A rejected document, with the logical line that caused it.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// 1-based logical line.
    pub line: usize,
    /// Offending text or decoder detail. May be empty.
    pub message: String,
}

impl ParseError {
    #[must_use]
    pub fn new(kind: ParseErrorKind, line: usize, message: impl Into<String>) -> Self {
        Self {
            kind,
            line,
            message: message.into(),
        }
    }

    /// `BEGIN:VCARD` seen while the card opened at an earlier line is still
    /// open.
    #[must_use]
    pub fn nested_card(line: usize, opened_at: usize) -> Self {
        Self::new(
            ParseErrorKind::NestedCard,
            line,
            format!("card opened at logical line {opened_at} has no END:VCARD"),
        )
    }

    /// The card opened at `line` runs to the end of the input.
    #[must_use]
    pub fn unclosed_card(line: usize) -> Self {
        Self::new(ParseErrorKind::UnclosedCard, line, "")
    }

    #[must_use]
    pub fn invalid_value(line: usize, message: impl Into<String>) -> Self {
        Self::new(ParseErrorKind::InvalidValue, line, message)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (logical line {})", self.kind, self.line)?;
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Why a document was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The input holds no `BEGIN:VCARD` at all.
    NoCard,
    /// A card reaches the end of input without `END:VCARD`.
    UnclosedCard,
    /// `BEGIN:VCARD` inside an open card.
    NestedCard,
    /// Content line without the `:` that starts the value.
    MissingColon,
    InvalidPropertyName,
    InvalidParameter,
    /// A typed value (`VALUE=integer`, ...) that does not parse.
    InvalidValue,
    /// `VERSION` other than 2.1, 3.0 or 4.0.
    UnsupportedVersion,
    /// Unknown `CHARSET` or quoted-printable bytes invalid in it.
    Charset,
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NoCard => "no vCard in input",
            Self::UnclosedCard => "vCard not closed by END:VCARD",
            Self::NestedCard => "BEGIN:VCARD inside an open vCard",
            Self::MissingColon => "content line has no ':'",
            Self::InvalidPropertyName => "bad property name",
            Self::InvalidParameter => "bad parameter",
            Self::InvalidValue => "bad typed value",
            Self::UnsupportedVersion => "unsupported vCard version",
            Self::Charset => "undecodable text",
        })
    }
}
