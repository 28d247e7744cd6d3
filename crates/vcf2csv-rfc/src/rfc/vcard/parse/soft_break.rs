//! Repair of `=`-terminated soft line breaks.
//!
//! Some exporters (vCard 2.1, quoted-printable values) split a long line by
//! ending it with `=` and continuing at column zero of the next line. Such a
//! continuation is indistinguishable from a new property. This pass turns it
//! into a regular folded line by indenting the continuation with one space,
//! which the lexer then unfolds.

/// Marker that ends a physical line continued on the next one.
pub const SOFT_BREAK_MARKER: char = '=';

/// Leading character of an already folded continuation line.
pub const CONTINUATION_INDENT: char = ' ';

/// ## Summary
/// Rewrites soft line breaks as folded lines.
///
/// For every physical line: if the previous physical line (as read) ended
/// with [`SOFT_BREAK_MARKER`] right before its terminator and this line does
/// not already start with [`CONTINUATION_INDENT`], a single space is emitted
/// before it. All other lines pass through unchanged. The marker itself and
/// the line terminator are kept.
///
/// Terminators are normalized: `\r\n` is read as `\n` and every emitted
/// line ends in `\n`. A last line without a terminator stays without one.
///
/// The transformation is idempotent.
#[must_use]
pub fn unfold_soft_breaks(input: &str) -> String {
    let mut output = String::with_capacity(input.len() + input.len() / 64);
    let mut previous_marked = false;

    for raw in input.split_inclusive('\n') {
        let (content, terminated) = match raw.strip_suffix('\n') {
            Some(line) => (line.strip_suffix('\r').unwrap_or(line), true),
            None => (raw, false),
        };

        if previous_marked && !content.starts_with(CONTINUATION_INDENT) {
            output.push(CONTINUATION_INDENT);
        }
        output.push_str(content);
        if terminated {
            output.push('\n');
        }

        previous_marked = terminated && content.ends_with(SOFT_BREAK_MARKER);
    }

    output
}
