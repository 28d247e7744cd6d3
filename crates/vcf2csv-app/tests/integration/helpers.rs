#![allow(
    dead_code,
    clippy::must_use_candidate,
    clippy::missing_panics_doc,
    clippy::new_without_default
)]
//! Test helpers for integration tests.

use std::path::PathBuf;

use tempfile::TempDir;
use vcf2csv_app::pipeline::ConvertOptions;
use vcf2csv_core::codec::TextCodec;
use vcf2csv_core::config::HeaderMode;

/// Two contacts with different field sets.
pub const JANE_AND_BOB: &str = "\
BEGIN:VCARD
VERSION:3.0
FN:Jane Doe
EMAIL:jane@x.com
END:VCARD
BEGIN:VCARD
VERSION:3.0
FN:Bob
TEL:555
END:VCARD
";

/// An address whose value was broken with a trailing `=` and an unindented
/// continuation.
pub const ADR_SOFT_BREAK: &str = "\
BEGIN:VCARD
VERSION:2.1
FN:Office
ADR;TYPE=WORK:Street=
Name
END:VCARD
";

/// Android-style export with quoted-printable values split across lines.
pub const ANDROID_EXPORT: &str = "\
BEGIN:VCARD
VERSION:2.1
N;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:=C5=9Eahin;Mehmet;;;
FN;CHARSET=UTF-8;ENCODING=QUOTED-PRINTABLE:Mehmet =C5=9E=
ahin
TEL;CELL:+905551234567
PHOTO;ENCODING=BASE64;JPEG:aGVsbG8gd29ybGQh
END:VCARD
";

/// A scratch directory holding the files of one test.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    pub fn read(&self, name: &str) -> Vec<u8> {
        std::fs::read(self.path(name)).expect("Failed to read test file")
    }

    pub fn read_string(&self, name: &str) -> String {
        String::from_utf8(self.read(name)).expect("Test file is not UTF-8")
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path(name).exists()
    }

    /// Number of entries in the directory.
    pub fn file_count(&self) -> usize {
        std::fs::read_dir(self.dir.path())
            .expect("Failed to list temp dir")
            .count()
    }

    /// UTF-8 options for `input` -> `output` inside this workspace.
    pub fn options(&self, input: &str, output: &str) -> ConvertOptions {
        ConvertOptions {
            codec: TextCodec::utf8(),
            ..ConvertOptions::new(self.path(input), self.path(output))
        }
    }

    pub fn union_options(&self, input: &str, output: &str) -> ConvertOptions {
        ConvertOptions {
            header_mode: HeaderMode::Union,
            ..self.options(input, output)
        }
    }
}
