//! Conversions that must fail without leaving a CSV behind.

use vcf2csv_app::error::AppError;
use vcf2csv_app::pipeline::{convert_file, run};
use vcf2csv_core::codec::TextCodec;
use vcf2csv_core::config::HeaderMode;

use super::helpers::*;

#[test_log::test]
fn missing_input_is_reported() {
    let ws = Workspace::new();

    let err = run(&ws.options("absent.vcf", "out.csv")).expect_err("must fail");

    assert!(matches!(err, AppError::FileNotFound { ref path } if *path == ws.path("absent.vcf")));
    assert!(!ws.exists("out.csv"));
    assert!(!ws.exists("absent_fixed.vcf"));
}

/// ## Summary
/// An empty file parses to zero records.
#[test_log::test]
fn empty_input_creates_no_csv() {
    let ws = Workspace::new();
    ws.write("empty.vcf", "");

    let err = run(&ws.options("empty.vcf", "empty.csv")).expect_err("must fail");

    assert!(matches!(err, AppError::EmptyInput { .. }));
    assert!(!ws.exists("empty.csv"));
}

#[test_log::test]
fn text_without_cards_is_empty_input() {
    let ws = Workspace::new();
    ws.write("notes.vcf", "just some notes\nnothing else\n");

    let err = run(&ws.options("notes.vcf", "notes.csv")).expect_err("must fail");

    assert!(matches!(err, AppError::EmptyInput { .. }));
    assert!(!ws.exists("notes.csv"));
}

/// ## Summary
/// A card that is never closed is rejected by the parser.
#[test_log::test]
fn malformed_card_creates_no_csv() {
    let ws = Workspace::new();
    ws.write("broken.vcf", "BEGIN:VCARD\nVERSION:3.0\nFN:Broken\n");

    let err = run(&ws.options("broken.vcf", "broken.csv")).expect_err("must fail");

    assert!(matches!(err, AppError::Parse(_)));
    assert!(!ws.exists("broken.csv"));
}

/// ## Summary
/// A failed conversion leaves a previous CSV untouched.
#[test_log::test]
fn failure_keeps_previous_output() {
    let ws = Workspace::new();
    ws.write("broken.vcf", "BEGIN:VCARD\nVERSION:3.0\nFN:Broken\n");
    ws.write("broken.csv", "previous");

    run(&ws.options("broken.vcf", "broken.csv")).expect_err("must fail");

    assert_eq!(ws.read_string("broken.csv"), "previous");
}

#[test_log::test]
fn undecodable_bytes_are_an_encoding_error() {
    let ws = Workspace::new();
    ws.write("bad.vcf", b"BEGIN:VCARD\nVERSION:3.0\nFN:\xFF\xFE\nEND:VCARD\n");

    let err = run(&ws.options("bad.vcf", "bad.csv")).expect_err("must fail");

    assert!(matches!(err, AppError::Encoding(_)));
    assert!(!ws.exists("bad_fixed.vcf"));
    assert!(!ws.exists("bad.csv"));
}

#[test_log::test]
fn unsupported_version_is_a_parse_error() {
    let ws = Workspace::new();
    let fixed = ws.write("v5.vcf", "BEGIN:VCARD\nVERSION:5.0\nFN:X\nEND:VCARD\n");

    let err = convert_file(
        &fixed,
        &ws.path("v5.csv"),
        TextCodec::utf8(),
        HeaderMode::FirstRecord,
    )
    .expect_err("must fail");

    assert!(matches!(err, AppError::Parse(_)));
    assert!(!ws.exists("v5.csv"));
}
