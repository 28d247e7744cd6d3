//! vCard lexer for line unfolding and content line parsing.
//!
//! vCard uses the same folding rules as iCalendar (RFC 5545 §3.1).

use super::error::{ParseError, ParseErrorKind, ParseResult};
use super::soft_break::{CONTINUATION_INDENT, SOFT_BREAK_MARKER};
use crate::rfc::vcard::core::VCardParameter;

/// Unfolds lines per RFC 6350 §3.2.
///
/// A fold is CRLF (or bare LF, for lenient parsing) followed by one space or
/// tab. The line break and that whitespace are removed. A fold right after a
/// `=` soft break marker keeps one space instead, so a repaired
/// `Street=` / ` Name` pair reads as `Street= Name`.
#[must_use]
pub fn unfold(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        let line_break = match c {
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                true
            }
            '\n' => true,
            _ => false,
        };

        if !line_break {
            result.push(c);
        } else if matches!(chars.peek(), Some(' ' | '\t')) {
            chars.next();
            if result.ends_with(SOFT_BREAK_MARKER) {
                result.push(CONTINUATION_INDENT);
            }
        } else {
            result.push('\n');
        }
    }

    result
}

/// Splits unfolded input into logical lines, merging folded continuations.
#[must_use]
pub fn split_lines(input: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.is_empty() {
            continue;
        }

        if line.starts_with([' ', '\t']) {
            let continuation = line.trim_start_matches([' ', '\t']);
            if let Some(prev) = lines.last_mut() {
                if prev.ends_with(SOFT_BREAK_MARKER) {
                    prev.push(CONTINUATION_INDENT);
                }
                prev.push_str(continuation);
            } else {
                lines.push(continuation.to_string());
            }
        } else {
            lines.push(line.to_string());
        }
    }

    lines
}

/// A parsed content line before value interpretation.
#[derive(Debug, Clone)]
pub struct ContentLine {
    /// Property group (e.g., "item1" in "item1.TEL").
    pub group: Option<String>,
    /// Property name (uppercase).
    pub name: String,
    /// Parameters.
    pub params: Vec<VCardParameter>,
    /// Raw value string.
    pub value: String,
}

impl ContentLine {
    /// Returns the first value of the named parameter.
    #[must_use]
    pub fn param_value(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .and_then(VCardParameter::value)
    }
}

/// Parses a single content line into its components.
///
/// Format: `[group.]name[;param[=value]]*:value`
///
/// ## Errors
/// Returns an error if the line is malformed or missing the colon separator.
pub fn parse_content_line(line: &str, line_num: usize) -> ParseResult<ContentLine> {
    let colon_pos = find_value_separator(line).ok_or_else(|| {
        ParseError::new(ParseErrorKind::MissingColon, line_num, line)
    })?;

    let (name_params, value) = line.split_at(colon_pos);
    let value = &value[1..];

    let (group, name_params) = parse_group(name_params);

    let (name, params_str) = match name_params.split_once(';') {
        Some((name, params)) => (name, Some(params)),
        None => (name_params, None),
    };

    if name.is_empty()
        || !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ParseError::new(
            ParseErrorKind::InvalidPropertyName,
            line_num,
            name,
        ));
    }

    let params = if let Some(params_str) = params_str {
        parse_parameters(params_str, line_num)?
    } else {
        Vec::new()
    };

    Ok(ContentLine {
        group: group.map(String::from),
        name: name.to_ascii_uppercase(),
        params,
        value: value.to_string(),
    })
}

/// Finds the colon that separates name/params from value.
///
/// Must handle quoted parameter values that may contain colons.
fn find_value_separator(line: &str) -> Option<usize> {
    let mut in_quotes = false;

    for (i, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ':' if !in_quotes => return Some(i),
            _ => {}
        }
    }

    None
}

/// Parses optional group prefix.
fn parse_group(s: &str) -> (Option<&str>, &str) {
    let name_end = s.find(';').unwrap_or(s.len());
    if let Some(dot_pos) = s[..name_end].find('.') {
        let potential_group = &s[..dot_pos];
        if !potential_group.is_empty()
            && potential_group
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return (Some(potential_group), &s[dot_pos + 1..]);
        }
    }
    (None, s)
}

/// Parses parameter string into parameters.
fn parse_parameters(s: &str, line_num: usize) -> ParseResult<Vec<VCardParameter>> {
    let mut params = Vec::new();
    let mut remaining = s;

    while !remaining.is_empty() {
        let (param, rest) = parse_single_parameter(remaining, line_num)?;
        params.push(param);
        remaining = rest;
    }

    Ok(params)
}

/// Parses a single parameter and returns remaining string.
///
/// vCard 2.1 allows bare parameters without `=` (`TEL;CELL;PREF:...`).
fn parse_single_parameter(s: &str, line_num: usize) -> ParseResult<(VCardParameter, &str)> {
    let name_end = s.find(['=', ';']).unwrap_or(s.len());
    let name = &s[..name_end];

    if name.is_empty() {
        return Err(ParseError::new(
            ParseErrorKind::InvalidParameter,
            line_num,
            "empty name",
        ));
    }

    if s[name_end..].starts_with('=') {
        let (values, remaining) = parse_param_values(&s[name_end + 1..]);
        Ok((VCardParameter::multi(name, values), remaining))
    } else {
        let remaining = s.get(name_end + 1..).unwrap_or("");
        Ok((VCardParameter::bare(name), remaining))
    }
}

/// Parses parameter values (comma-separated, possibly quoted).
fn parse_param_values(s: &str) -> (Vec<String>, &str) {
    let mut values = Vec::new();
    let mut chars = s.chars().peekable();
    let mut current_value = String::new();
    let mut in_quotes = false;
    let mut consumed = 0;

    while let Some(&c) = chars.peek() {
        consumed += c.len_utf8();

        match c {
            '"' => {
                chars.next();
                in_quotes = !in_quotes;
            }
            ',' if !in_quotes => {
                chars.next();
                values.push(std::mem::take(&mut current_value));
            }
            ';' if !in_quotes => {
                chars.next();
                if !current_value.is_empty() || !values.is_empty() {
                    values.push(current_value);
                }
                return (values, &s[consumed..]);
            }
            '^' if !in_quotes => {
                // RFC 6868 caret encoding
                chars.next();
                if let Some(&next) = chars.peek() {
                    consumed += next.len_utf8();
                    chars.next();
                    match next {
                        'n' => current_value.push('\n'),
                        '\'' => current_value.push('"'),
                        '^' => current_value.push('^'),
                        _ => {
                            current_value.push('^');
                            current_value.push(next);
                        }
                    }
                } else {
                    current_value.push('^');
                }
            }
            _ => {
                chars.next();
                current_value.push(c);
            }
        }
    }

    if !current_value.is_empty() || !values.is_empty() {
        values.push(current_value);
    }

    (values, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfold_crlf_removes_fold() {
        assert_eq!(unfold("FN:Jonathan Smi\r\n th"), "FN:Jonathan Smith");
        assert_eq!(unfold("FN:John\r\n  Doe"), "FN:John Doe");
    }

    #[test]
    fn unfold_bare_lf() {
        let input = "EMAIL:jonathan.smith@exa\n mple.com";
        assert_eq!(unfold(input), "EMAIL:jonathan.smith@example.com");
    }

    #[test]
    fn unfold_tab() {
        let input = "FN:John\r\n\tDoe";
        assert_eq!(unfold(input), "FN:JohnDoe");
    }

    #[test]
    fn unfold_repaired_soft_break() {
        let input = "ADR;TYPE=WORK:Street=\n Name\n";
        assert_eq!(unfold(input), "ADR;TYPE=WORK:Street= Name\n");
    }

    #[test]
    fn unfold_normalizes_crlf() {
        assert_eq!(unfold("A:1\r\nB:2\r\n"), "A:1\nB:2\n");
    }

    #[test]
    fn split_lines_joins_leftover_continuations() {
        assert_eq!(split_lines("FN:Jo\n\thn\n"), vec!["FN:John"]);
        assert_eq!(split_lines("NOTE:a=\n b\n"), vec!["NOTE:a= b"]);
    }

    #[test]
    fn split_lines_filters_empty() {
        let input = "LINE1\n\nLINE2\n";
        let lines = split_lines(input);
        assert_eq!(lines, vec!["LINE1", "LINE2"]);
    }

    #[test]
    fn parse_simple_line() {
        let line = parse_content_line("FN:John Doe", 1).unwrap();
        assert!(line.group.is_none());
        assert_eq!(line.name, "FN");
        assert!(line.params.is_empty());
        assert_eq!(line.value, "John Doe");
    }

    #[test]
    fn parse_lowercase_name() {
        let line = parse_content_line("email:a@example.com", 1).unwrap();
        assert_eq!(line.name, "EMAIL");
    }

    #[test]
    fn parse_grouped_line() {
        let line = parse_content_line("item1.TEL:+1-555-555-5555", 1).unwrap();
        assert_eq!(line.group, Some("item1".to_string()));
        assert_eq!(line.name, "TEL");
    }

    #[test]
    fn dot_in_parameter_is_not_a_group() {
        let line = parse_content_line("EMAIL;X-LABEL=a.b:x@example.com", 1).unwrap();
        assert!(line.group.is_none());
        assert_eq!(line.name, "EMAIL");
        assert_eq!(line.param_value("x-label"), Some("a.b"));
    }

    #[test]
    fn parse_with_parameters() {
        let line = parse_content_line("TEL;TYPE=home,voice;PREF=1:+1-555-555-5555", 1).unwrap();
        assert_eq!(line.name, "TEL");
        assert_eq!(line.params.len(), 2);

        let type_param = &line.params[0];
        assert_eq!(type_param.name, "TYPE");
        assert_eq!(type_param.values, vec!["home", "voice"]);

        let pref_param = &line.params[1];
        assert_eq!(pref_param.name, "PREF");
        assert_eq!(pref_param.value(), Some("1"));
    }

    #[test]
    fn parse_bare_parameters() {
        let line = parse_content_line("TEL;CELL;ENCODING=QUOTED-PRINTABLE:555", 1).unwrap();
        assert_eq!(line.params.len(), 2);
        assert_eq!(line.params[0].name, "TYPE");
        assert_eq!(line.params[0].value(), Some("CELL"));
        assert_eq!(line.param_value("ENCODING"), Some("QUOTED-PRINTABLE"));
    }

    #[test]
    fn parse_trailing_bare_parameter() {
        let line = parse_content_line("NOTE;QUOTED-PRINTABLE:a=3Db", 1).unwrap();
        assert_eq!(line.param_value("ENCODING"), Some("QUOTED-PRINTABLE"));
        assert_eq!(line.value, "a=3Db");
    }

    #[test]
    fn parse_quoted_param() {
        let line =
            parse_content_line("ADR;LABEL=\"123 Main St\\nAnytown\":;;123 Main St", 1).unwrap();
        assert_eq!(line.params.len(), 1);
        assert_eq!(line.value, ";;123 Main St");
    }

    #[test]
    fn parse_colon_in_value() {
        let line = parse_content_line("URL:https://example.com:8080/path", 1).unwrap();
        assert_eq!(line.value, "https://example.com:8080/path");
    }

    #[test]
    fn missing_colon_is_an_error() {
        let err = parse_content_line("JUST SOME TEXT", 3).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::MissingColon);
        assert_eq!(err.message, "JUST SOME TEXT");
        assert_eq!(err.line, 3);
    }

    #[test]
    fn empty_parameter_is_an_error() {
        let err = parse_content_line("TEL;;X=1:555", 1).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::InvalidParameter);
    }
}
