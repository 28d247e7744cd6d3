//! vCard parsing.
//!
//! ## Usage
//!
//! ```rust
//! use vcf2csv_rfc::rfc::vcard::parse;
//!
//! let input = "\
//! BEGIN:VCARD\r\n\
//! VERSION:2.1\r\n\
//! N:Doe;John;;;\r\n\
//! TEL;CELL:555-1234\r\n\
//! END:VCARD\r\n";
//!
//! let cards = parse::parse(input).unwrap();
//! assert_eq!(cards[0].telephones(), vec!["555-1234"]);
//! ```
//!
//! ## Features
//!
//! - Supports vCard 2.1, 3.0 and 4.0
//! - Repairs `=` soft line breaks ([`unfold_soft_breaks`])
//! - Handles line folding/unfolding
//! - Parses property groups (item1.TEL) and bare 2.1 parameters (TEL;CELL)
//! - Parses structured values (N, ADR, ORG, GENDER)
//! - Decodes QUOTED-PRINTABLE and inline base64 values
//! - RFC 6868 caret encoding for parameters

mod error;
mod lexer;
mod parser;
mod soft_break;
mod values;


pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use lexer::{ContentLine, parse_content_line, split_lines, unfold};
pub use parser::{parse, parse_bytes, parse_single};
pub use soft_break::{CONTINUATION_INDENT, SOFT_BREAK_MARKER, unfold_soft_breaks};
pub use values::{
    decode_base64, decode_quoted_printable, parse_address, parse_gender, parse_organization,
    parse_structured_name, split_component, split_structured, unescape_text,
};
