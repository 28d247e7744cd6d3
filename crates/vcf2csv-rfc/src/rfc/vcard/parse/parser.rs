//! vCard document parser.

use vcf2csv_core::codec::TextCodec;

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::lexer::{ContentLine, parse_content_line, split_lines, unfold};
use super::values::{
    decode_base64, decode_quoted_printable, parse_address, parse_gender, parse_organization,
    parse_structured_name, split_component, unescape_text,
};
use crate::error::RfcResult;
use crate::rfc::vcard::core::{VCard, VCardProperty, VCardValue, VCardVersion, names};

/// Parses a vCard document into one or more vCards.
///
/// ## Summary
/// Parses the input string as a vCard document and returns all vCards found.
/// Content outside `BEGIN:VCARD` / `END:VCARD` is skipped.
///
/// ## Errors
/// Returns a parse error if the document is malformed or contains
/// invalid property values.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse(input: &str) -> ParseResult<Vec<VCard>> {
    tracing::debug!("Parsing vCard document");

    let unfolded = unfold(input);
    let lines = split_lines(&unfolded);

    tracing::trace!(count = lines.len(), "Split lines");

    let mut parser = Parser::new(lines);
    let result = parser.parse_document()?;

    tracing::debug!(count = result.len(), "Parsed vCards");

    Ok(result)
}

/// Parses a single vCard from input.
///
/// ## Summary
/// Convenience function for parsing a document with exactly one vCard.
///
/// ## Errors
/// Returns an error if the document contains no vCards or is malformed.
#[tracing::instrument(skip(input), fields(input_len = input.len()))]
pub fn parse_single(input: &str) -> ParseResult<VCard> {
    tracing::debug!("Parsing single vCard");

    let cards = parse(input)?;
    cards.into_iter().next().ok_or_else(|| {
        tracing::warn!("No vCard found in document");
        ParseError::new(ParseErrorKind::NoCard, 1, "")
    })
}

/// Decodes raw file bytes with `codec` and parses the result.
///
/// ## Errors
/// Returns [`RfcError::CoreError`](crate::error::RfcError::CoreError) if the
/// bytes are not valid in the codec's encoding and
/// [`RfcError::VCard`](crate::error::RfcError::VCard) if parsing fails.
#[tracing::instrument(skip(bytes), fields(input_len = bytes.len(), encoding = codec.name()))]
pub fn parse_bytes(bytes: &[u8], codec: TextCodec) -> RfcResult<Vec<VCard>> {
    let text = codec.decode(bytes)?;
    Ok(parse(&text)?)
}

struct Parser {
    lines: Vec<String>,
    pos: usize,
}

impl Parser {
    fn new(lines: Vec<String>) -> Self {
        Self { lines, pos: 0 }
    }

    fn current_line(&self) -> usize {
        self.pos + 1
    }

    fn parse_document(&mut self) -> ParseResult<Vec<VCard>> {
        let mut cards = Vec::new();

        while self.pos < self.lines.len() {
            let line = &self.lines[self.pos];
            self.pos += 1;

            if is_marker(line, names::BEGIN) {
                let card = self.parse_vcard()?;
                cards.push(card);
            } else if !line.trim().is_empty() {
                tracing::trace!(line = self.pos, "Skipping content outside vCard");
            }
        }

        Ok(cards)
    }

    fn parse_vcard(&mut self) -> ParseResult<VCard> {
        let mut card = VCard::new();
        let start_line = self.pos;

        while self.pos < self.lines.len() {
            let line_num = self.current_line();
            let line = &self.lines[self.pos];
            self.pos += 1;

            if line.trim().is_empty() {
                continue;
            }

            if is_marker(line, names::END) {
                return Ok(card);
            }

            if is_marker(line, names::BEGIN) {
                return Err(ParseError::nested_card(line_num, start_line));
            }

            let content_line = parse_content_line(line, line_num)?;

            if content_line.name == names::VERSION {
                card.version = VCardVersion::from_str(&content_line.value).ok_or_else(|| {
                    ParseError::new(
                        ParseErrorKind::UnsupportedVersion,
                        line_num,
                        content_line.value.clone(),
                    )
                })?;
            } else {
                let prop = convert_to_property(content_line, line_num)?;
                card.add_property(prop);
            }
        }

        Err(ParseError::unclosed_card(start_line))
    }
}

/// Matches `BEGIN:VCARD` / `END:VCARD`, ignoring case and surrounding blanks.
fn is_marker(line: &str, keyword: &str) -> bool {
    line.trim()
        .split_once(':')
        .is_some_and(|(name, value)| {
            name.trim().eq_ignore_ascii_case(keyword) && value.trim().eq_ignore_ascii_case("VCARD")
        })
}

fn convert_to_property(line: ContentLine, line_num: usize) -> ParseResult<VCardProperty> {
    let encoding = line.param_value("ENCODING").map(str::to_ascii_uppercase);
    let value_type = line.param_value("VALUE");

    let value = match encoding.as_deref() {
        Some("QUOTED-PRINTABLE") => {
            let decoded =
                decode_quoted_printable(&line.value, line.param_value("CHARSET"), line_num)?;
            parse_property_value(&line.name, &decoded, value_type, line_num)?
        }
        Some("B" | "BASE64") => decode_base64(&line.value).map_or_else(
            || {
                tracing::warn!(
                    line = line_num,
                    property = %line.name,
                    "Inline binary value is not valid base64, keeping raw text"
                );
                VCardValue::Unknown(line.value.clone())
            },
            VCardValue::Binary,
        ),
        _ => parse_property_value(&line.name, &line.value, value_type, line_num)?,
    };

    Ok(VCardProperty {
        group: line.group,
        name: line.name,
        params: line.params,
        value,
        raw_value: line.value,
    })
}

fn parse_property_value(
    name: &str,
    raw_value: &str,
    value_type: Option<&str>,
    line_num: usize,
) -> ParseResult<VCardValue> {
    if let Some(vt) = value_type {
        return parse_typed_value(name, raw_value, vt, line_num);
    }

    match name {
        "N" => Ok(VCardValue::StructuredName(parse_structured_name(
            raw_value, line_num,
        )?)),
        "ADR" => Ok(VCardValue::Address(parse_address(raw_value, line_num)?)),
        "ORG" => Ok(VCardValue::Organization(parse_organization(
            raw_value, line_num,
        )?)),
        "GENDER" => Ok(VCardValue::Gender(parse_gender(raw_value, line_num)?)),
        "URL" | "PHOTO" | "LOGO" | "SOUND" | "KEY" | "FBURL" | "CALADRURI" | "CALURI"
        | "SOURCE" | "MEMBER" | "IMPP" => Ok(VCardValue::Uri(raw_value.to_string())),
        "NICKNAME" | "CATEGORIES" => Ok(VCardValue::TextList(split_component(raw_value))),
        _ => Ok(VCardValue::Text(unescape_text(raw_value))),
    }
}

fn parse_typed_value(
    name: &str,
    raw_value: &str,
    value_type: &str,
    line_num: usize,
) -> ParseResult<VCardValue> {
    match value_type.to_ascii_lowercase().as_str() {
        // Structured properties keep their shape when typed as text.
        "text" if matches!(name, "N" | "ADR" | "ORG" | "GENDER") => {
            parse_property_value(name, raw_value, None, line_num)
        }
        "text" => Ok(VCardValue::Text(unescape_text(raw_value))),
        "uri" | "url" => Ok(VCardValue::Uri(raw_value.to_string())),
        "boolean" => {
            let b = raw_value.eq_ignore_ascii_case("true")
                || raw_value.eq_ignore_ascii_case("yes")
                || raw_value == "1";
            Ok(VCardValue::Boolean(b))
        }
        "integer" => raw_value
            .trim()
            .parse()
            .map(VCardValue::Integer)
            .map_err(|e| ParseError::invalid_value(line_num, format!("invalid integer: {e}"))),
        "float" => raw_value
            .trim()
            .parse()
            .map(VCardValue::Float)
            .map_err(|e| ParseError::invalid_value(line_num, format!("invalid float: {e}"))),
        "language-tag" => Ok(VCardValue::LanguageTag(raw_value.to_string())),
        _ => Ok(VCardValue::Unknown(raw_value.to_string())),
    }
}
