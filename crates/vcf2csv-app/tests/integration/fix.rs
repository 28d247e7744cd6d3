//! Soft-break repair pass.

use vcf2csv_app::pipeline::{fix_file, run};
use vcf2csv_core::codec::TextCodec;
use vcf2csv_rfc::rfc::vcard::parse;

use super::helpers::*;

/// ## Summary
/// The unindented continuation after a trailing `=` gets a leading space and
/// the parser joins it back as `Street= Name`.
#[test_log::test]
fn marked_continuation_is_indented() {
    let ws = Workspace::new();
    let input = ws.write("office.vcf", ADR_SOFT_BREAK);
    let fixed = ws.path("office_fixed.vcf");

    fix_file(&input, &fixed, TextCodec::utf8()).expect("repair");

    let repaired = ws.read_string("office_fixed.vcf");
    assert!(repaired.contains("ADR;TYPE=WORK:Street=\n Name\n"));

    let cards = parse(&repaired).expect("repaired file parses");
    let adr = cards[0].get_property("ADR").expect("ADR present");
    assert_eq!(adr.raw_value, "Street= Name");
}

/// ## Summary
/// Without `--fixed` the intermediate file lands beside the input.
#[test_log::test]
fn default_fixed_file_beside_input() {
    let ws = Workspace::new();
    ws.write("office.vcf", ADR_SOFT_BREAK);

    let summary = run(&ws.options("office.vcf", "office.csv")).expect("conversion");

    assert_eq!(summary.fixed_path, ws.path("office_fixed.vcf"));
    assert!(ws.exists("office_fixed.vcf"));
    assert_eq!(ws.read_string("office.csv"), "fn\r\nOffice\r\n");
}

/// ## Summary
/// An explicit fixed path is honoured.
#[test_log::test]
fn explicit_fixed_path() {
    let ws = Workspace::new();
    ws.write("office.vcf", ADR_SOFT_BREAK);

    let mut options = ws.options("office.vcf", "office.csv");
    options.fixed = Some(ws.path("repaired.vcf"));
    run(&options).expect("conversion");

    assert!(ws.exists("repaired.vcf"));
    assert!(!ws.exists("office_fixed.vcf"));
}

/// ## Summary
/// Repairing an already repaired file changes nothing.
#[test_log::test]
fn repair_is_idempotent() {
    let ws = Workspace::new();
    let input = ws.write("office.vcf", ADR_SOFT_BREAK);
    let once = ws.path("once.vcf");
    let twice = ws.path("twice.vcf");

    fix_file(&input, &once, TextCodec::utf8()).expect("first repair");
    fix_file(&once, &twice, TextCodec::utf8()).expect("second repair");

    assert_eq!(ws.read("once.vcf"), ws.read("twice.vcf"));
}

/// ## Summary
/// CRLF input is written back with `\n` terminators, otherwise unchanged.
#[test_log::test]
fn crlf_is_normalized() {
    let ws = Workspace::new();
    let input = ws.write("crlf.vcf", JANE_AND_BOB.replace('\n', "\r\n"));
    let fixed = ws.path("crlf_fixed.vcf");

    fix_file(&input, &fixed, TextCodec::utf8()).expect("repair");

    assert_eq!(ws.read_string("crlf_fixed.vcf"), JANE_AND_BOB);
}
