//! vCard value parsers.

use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use vcf2csv_core::codec::TextCodec;

use super::error::{ParseError, ParseErrorKind, ParseResult};
use crate::rfc::vcard::core::{Address, Gender, Organization, Sex, StructuredName};

/// Base64 with optional padding; exporters disagree on it.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Unescapes a vCard text value.
///
/// vCard escapes: \n, \N (newline), \, (comma), \; (semicolon), \\ (backslash)
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('n' | 'N') => {
                    chars.next();
                    result.push('\n');
                }
                Some(&escaped @ (',' | ';' | '\\')) => {
                    chars.next();
                    result.push(escaped);
                }
                _ => result.push(c),
            }
        } else {
            result.push(c);
        }
    }

    result
}

/// Splits a structured value on unescaped semicolons.
#[must_use]
pub fn split_structured(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            ';' => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    parts.push(&s[start..]);
    parts
}

/// Splits a component value on unescaped commas, unescaping each part.
#[must_use]
pub fn split_component(s: &str) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }

    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some(&escaped @ (',' | ';' | '\\')) => {
                    chars.next();
                    current.push(escaped);
                }
                Some('n' | 'N') => {
                    chars.next();
                    current.push('\n');
                }
                _ => current.push(c),
            }
        } else if c == ',' {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    parts.push(current);
    parts
}

/// Returns the `i`-th structured part split into its comma values.
fn component_at(parts: &[&str], i: usize) -> Vec<String> {
    parts.get(i).map(|s| split_component(s)).unwrap_or_default()
}

/// Parses a structured name (N property).
///
/// N has 5 components: family;given;additional;prefixes;suffixes. Missing
/// trailing components are empty.
///
/// ## Errors
/// Never fails today; the signature matches the other value parsers.
pub fn parse_structured_name(value: &str, _line_num: usize) -> ParseResult<StructuredName> {
    let parts = split_structured(value);

    Ok(StructuredName {
        family: component_at(&parts, 0),
        given: component_at(&parts, 1),
        additional: component_at(&parts, 2),
        prefixes: component_at(&parts, 3),
        suffixes: component_at(&parts, 4),
    })
}

/// Parses an address (ADR property).
///
/// ADR has 7 components: PO Box;Extended;Street;Locality;Region;PostalCode;Country
///
/// ## Errors
/// Never fails today; the signature matches the other value parsers.
pub fn parse_address(value: &str, _line_num: usize) -> ParseResult<Address> {
    let parts = split_structured(value);

    Ok(Address {
        po_box: component_at(&parts, 0),
        extended: component_at(&parts, 1),
        street: component_at(&parts, 2),
        locality: component_at(&parts, 3),
        region: component_at(&parts, 4),
        postal_code: component_at(&parts, 5),
        country: component_at(&parts, 6),
    })
}

/// Parses an organization (ORG property).
///
/// ## Errors
/// Never fails today; the signature matches the other value parsers.
pub fn parse_organization(value: &str, _line_num: usize) -> ParseResult<Organization> {
    let parts = split_structured(value);

    let name = parts.first().map(|s| unescape_text(s)).unwrap_or_default();
    let units = parts.iter().skip(1).map(|s| unescape_text(s)).collect();

    Ok(Organization { name, units })
}

/// Parses a gender (GENDER property).
///
/// ## Errors
/// Never fails today; the signature matches the other value parsers.
pub fn parse_gender(value: &str, _line_num: usize) -> ParseResult<Gender> {
    let parts = split_structured(value);

    let sex = parts
        .first()
        .filter(|s| !s.is_empty())
        .and_then(|s| s.chars().next())
        .and_then(Sex::from_char);

    let identity = parts
        .get(1)
        .filter(|s| !s.is_empty())
        .map(|s| unescape_text(s));

    Ok(Gender { sex, identity })
}

/// Decodes a `QUOTED-PRINTABLE` value.
///
/// Escaped byte runs (`=C4=B0`) are decoded with `charset` (UTF-8 when the
/// property has no `CHARSET`); literal characters pass through. A soft break
/// repaired into a folded line shows up here as `"= "` and is dropped. Any
/// other `=` that does not start a hex pair is kept literally.
///
/// ## Errors
/// Returns an [`ParseErrorKind::Charset`] if the charset label is
/// unknown or the escaped bytes are not valid in that charset.
pub fn decode_quoted_printable(
    value: &str,
    charset: Option<&str>,
    line_num: usize,
) -> ParseResult<String> {
    let codec = match charset {
        Some(label) => TextCodec::for_label(label)
            .map_err(|e| ParseError::new(ParseErrorKind::Charset, line_num, e.to_string()))?,
        None => TextCodec::utf8(),
    };

    let bytes = value.as_bytes();
    let mut result = String::with_capacity(value.len());
    let mut pending: Vec<u8> = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'=' {
            if let Some(byte) = bytes.get(i + 1..i + 3).and_then(decode_hex_pair) {
                pending.push(byte);
                i += 3;
                continue;
            }
            if bytes.get(i + 1) == Some(&b' ') {
                i += 2;
                continue;
            }
        }

        flush_pending(&mut pending, &mut result, codec, line_num)?;

        let Some(c) = value[i..].chars().next() else {
            break;
        };
        result.push(c);
        i += c.len_utf8();
    }

    flush_pending(&mut pending, &mut result, codec, line_num)?;
    Ok(result)
}

fn decode_hex_pair(pair: &[u8]) -> Option<u8> {
    let hex = std::str::from_utf8(pair).ok()?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(hex, 16).ok()
}

fn flush_pending(
    pending: &mut Vec<u8>,
    result: &mut String,
    codec: TextCodec,
    line_num: usize,
) -> ParseResult<()> {
    if pending.is_empty() {
        return Ok(());
    }
    let decoded = codec
        .decode(pending)
        .map_err(|e| ParseError::new(ParseErrorKind::Charset, line_num, e.to_string()))?;
    result.push_str(&decoded);
    pending.clear();
    Ok(())
}

/// Decodes an inline `ENCODING=B` / `ENCODING=BASE64` value.
///
/// Whitespace left over from folding is ignored. Returns `None` if the data
/// is not base64.
#[must_use]
pub fn decode_base64(value: &str) -> Option<Vec<u8>> {
    let compact: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    LENIENT_BASE64.decode(compact).ok()
}
