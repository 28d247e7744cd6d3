//! vCard to CSV conversion.
//!
//! The conversion runs two passes over files:
//!
//! 1. [`pipeline::fix_file`] repairs `=` soft line breaks and writes the
//!    intermediate fixed vCard file.
//! 2. [`pipeline::convert_file`] parses the fixed file, extracts one
//!    [`record::NormalizedRow`] per contact and writes them as CSV.
//!
//! [`pipeline::run`] chains both.

pub mod cli;
pub mod error;
pub mod pipeline;
pub mod record;
pub mod sheet;
