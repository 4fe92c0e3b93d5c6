mod common;

use common::assert_snapshot;
use seqview::matcher::{delimited, run_of};
use seqview::{remove_when, Cursor, Matcher, RemoveWhen, Sentinel, Subrange, View};

const SOURCE: &str = "int x = 1; /* one */\nint y = 2; /* two\n   lines */\nint z = 3;\n/* unterminated";

fn surviving<'a, V>(view: &V) -> Vec<u8>
where
    V: View,
    V::Cursor: Cursor<Item = &'a u8>,
{
    view.iter().copied().collect()
}

#[test]
fn strips_block_comments() {
    let view = RemoveWhen::new(Subrange::from_slice(SOURCE.as_bytes()), delimited(b"/*", b"*/"));
    assert_snapshot("strip_block_comments.txt", &surviving(&view));
}

#[test]
fn strips_comments_then_trailing_blanks() {
    let comments = RemoveWhen::new(Subrange::from_slice(SOURCE.as_bytes()), delimited(b"/*", b"*/"));
    let blanks = run_of(|b: &u8| *b == b' ');
    // Elide spaces only when they run up to a newline or the end.
    let view = remove_when(&comments, |at, end| {
        let to = blanks.find_match(at, end)?;
        (end.is_end(&to) || *to.get() == b'\n').then_some(to)
    });
    assert_snapshot("strip_trailing_blanks.txt", &surviving(&view));
}
