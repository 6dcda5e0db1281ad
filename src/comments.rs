// hdrsync/src/comments.rs
//! Block-comment anchors.
//!
//! A `/* ... */` span anchors a declaration only when it owns its lines:
//! nothing but blanks between the start of line and `/*`, and nothing but
//! blanks from `*/` to the end of line. Comments trailing code on the same
//! line never anchor anything.

use memchr::{memchr, memmem};

use crate::matching::skip_ws;

/// Byte range of an anchoring comment: `start` is the `/*`, `end` is one
/// past the `*/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentSpan {
    pub start: usize,
    pub end: usize,
}

/// Find the next anchoring comment at or after `from`.
///
/// The opener must be the first non-blank text after a line start. The span
/// then runs to the first `*/` (with at least one byte of body) that leaves
/// the rest of its line blank; closers that don't are skipped and the span
/// grows. An opener whose every closer fails that rule ends the whole
/// search: any later opener would retry a subset of the same closers.
pub fn next_comment(code: &str, from: usize) -> Option<CommentSpan> {
    let bytes = code.as_bytes();
    let mut line = line_start_at_or_after(bytes, from)?;

    loop {
        let open = skip_ws(bytes, line);
        if open + 1 >= bytes.len() {
            return None;
        }
        if !(bytes[open] == b'/' && bytes[open + 1] == b'*') {
            // not a comment line; hop to the next line start
            line = memchr(b'\n', &bytes[open..]).map(|off| open + off + 1)?;
            continue;
        }

        let mut search = open + 3; // at least one byte between /* and */
        loop {
            let tail = bytes.get(search..)?;
            let off = memmem::find(tail, b"*/")?;
            let end = search + off + 2;
            if rest_of_line_blank(bytes, end) {
                return Some(CommentSpan { start: open, end });
            }
            search = end;
        }
    }
}

fn line_start_at_or_after(bytes: &[u8], i: usize) -> Option<usize> {
    if i == 0 || bytes.get(i - 1) == Some(&b'\n') {
        return Some(i);
    }
    let tail = bytes.get(i..)?;
    memchr(b'\n', tail).map(|off| i + off + 1)
}

fn rest_of_line_blank(bytes: &[u8], mut i: usize) -> bool {
    while i < bytes.len() {
        if bytes[i] == b'\n' {
            return true;
        }
        if !bytes[i].is_ascii_whitespace() {
            return false;
        }
        i += 1;
    }
    true
}
