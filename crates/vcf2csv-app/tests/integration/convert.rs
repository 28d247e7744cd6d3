//! Successful conversions.

use vcf2csv_app::pipeline::{ConvertOptions, run};

use super::helpers::*;

/// ## Summary
/// The header comes from the first contact; later fields outside it are
/// dropped and missing ones are empty.
#[test_log::test]
fn first_record_header_drops_unknown_columns() {
    let ws = Workspace::new();
    ws.write("contacts.vcf", JANE_AND_BOB);

    let summary = run(&ws.options("contacts.vcf", "contacts.csv")).expect("conversion");

    assert_eq!(summary.records, 2);
    assert_eq!(summary.columns, ["fn", "email"]);
    assert_eq!(
        ws.read_string("contacts.csv"),
        "fn,email\r\nJane Doe,jane@x.com\r\nBob,\r\n"
    );
}

/// ## Summary
/// Union mode keeps every column in order of first appearance.
#[test_log::test]
fn union_header_keeps_all_columns() {
    let ws = Workspace::new();
    ws.write("contacts.vcf", JANE_AND_BOB);

    let summary = run(&ws.union_options("contacts.vcf", "contacts.csv")).expect("conversion");

    assert_eq!(summary.columns, ["fn", "email", "tel"]);
    assert_eq!(
        ws.read_string("contacts.csv"),
        "fn,email,tel\r\nJane Doe,jane@x.com,\r\nBob,,555\r\n"
    );
}

/// ## Summary
/// Structured names are flattened with one space per component.
#[test_log::test]
fn structured_name_is_flattened() {
    let ws = Workspace::new();
    ws.write(
        "john.vcf",
        "BEGIN:VCARD\nVERSION:3.0\nN:Doe;John;;;\nFN:John Doe\nEND:VCARD\n",
    );

    run(&ws.options("john.vcf", "john.csv")).expect("conversion");

    assert_eq!(ws.read_string("john.csv"), "n,fn\r\nDoe John   ,John Doe\r\n");
}

/// ## Summary
/// Soft-broken quoted-printable values survive the pipeline and `PHOTO`
/// never reaches the CSV.
#[test_log::test]
fn android_export_is_repaired_and_converted() {
    let ws = Workspace::new();
    ws.write("android.vcf", ANDROID_EXPORT);

    let summary = run(&ws.options("android.vcf", "android.csv")).expect("conversion");

    assert_eq!(summary.columns, ["n", "fn", "tel"]);
    assert_eq!(
        ws.read_string("android.csv"),
        "n,fn,tel\r\nŞahin Mehmet   ,Mehmet Şahin,+905551234567\r\n"
    );
}

/// ## Summary
/// Turkish letters are read and written in ISO-8859-9 by default.
#[test_log::test]
fn turkish_round_trip_in_default_encoding() {
    let ws = Workspace::new();
    ws.write(
        "tr.vcf",
        b"BEGIN:VCARD\r\nVERSION:3.0\r\nFN:\xDD\xFE \xF0\r\nEND:VCARD\r\n",
    );

    let options = ConvertOptions::new(ws.path("tr.vcf"), ws.path("tr.csv"));
    run(&options).expect("conversion");

    assert_eq!(ws.read("tr.csv"), b"fn\r\n\xDD\xFE \xF0\r\n");
    assert_eq!(
        ws.read("tr_fixed.vcf"),
        b"BEGIN:VCARD\nVERSION:3.0\nFN:\xDD\xFE \xF0\nEND:VCARD\n"
    );
}

/// ## Summary
/// A contact with none of the extracted fields still produces a row.
#[test_log::test]
fn contact_without_columns_gives_empty_cells() {
    let ws = Workspace::new();
    ws.write(
        "mixed.vcf",
        "BEGIN:VCARD\nVERSION:3.0\nFN:A\nEND:VCARD\n\
         BEGIN:VCARD\nVERSION:3.0\nNOTE:nothing useful\nEND:VCARD\n",
    );

    let summary = run(&ws.options("mixed.vcf", "mixed.csv")).expect("conversion");

    assert_eq!(summary.records, 2);
    assert_eq!(ws.read_string("mixed.csv"), "fn\r\nA\r\n\"\"\r\n");
}

/// ## Summary
/// An existing CSV is replaced and no temporary file is left behind.
#[test_log::test]
fn existing_output_is_replaced() {
    let ws = Workspace::new();
    ws.write("contacts.vcf", JANE_AND_BOB);
    ws.write("contacts.csv", "stale");

    run(&ws.options("contacts.vcf", "contacts.csv")).expect("conversion");

    assert!(ws.read_string("contacts.csv").starts_with("fn,email\r\n"));
    // input, fixed file and output
    assert_eq!(ws.file_count(), 3);
}
