//! Snapshot comparison for byte output
//!
//! Snapshots store an escaped rendering of the surviving bytes so that
//! whitespace is visible and survives editors: a space is `·`, a tab is `→`,
//! a carriage return is `␍` and a newline is `⏎` followed by a real line
//! break. Other non-printable bytes are written as `\xNN`. The escaped text
//! is compared exactly.

use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

const UPDATE_VAR: &str = "SEQVIEW_UPDATE_SNAPSHOTS";

pub fn escape_whitespace(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &byte in bytes {
        match byte {
            b' ' => out.push('·'),
            b'\t' => out.push('→'),
            b'\r' => out.push('␍'),
            b'\n' => out.push_str("⏎\n"),
            b'\\' => out.push_str("\\\\"),
            0x21..=0x7e => out.push(char::from(byte)),
            _ => {
                let _ = write!(out, "\\x{byte:02x}");
            }
        }
    }
    out
}

pub fn assert_snapshot(name: &str, surviving: &[u8]) {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/snapshots")
        .join(name);
    let actual = escape_whitespace(surviving);

    if std::env::var_os(UPDATE_VAR).is_some() {
        fs::write(&path, &actual).expect("write snapshot");
        return;
    }

    let expected = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("cannot read snapshot {}: {err}", path.display()));
    if expected == actual {
        return;
    }

    let line = expected
        .lines()
        .zip(actual.lines())
        .position(|(e, a)| e != a)
        .unwrap_or_else(|| expected.lines().count().min(actual.lines().count()));
    panic!(
        "snapshot {} differs from line {} (set {UPDATE_VAR}=1 to regenerate)\n--- expected\n{expected}\n--- actual\n{actual}",
        path.display(),
        line + 1,
    );
}

#[test]
fn escapes_whitespace_and_control_bytes() {
    assert_eq!(escape_whitespace(b"a b\tc\r\n"), "a·b→c␍⏎\n");
    assert_eq!(escape_whitespace(b"\\\x00\xff"), "\\\\\\x00\\xff");
}
