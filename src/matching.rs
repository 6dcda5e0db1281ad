// hdrsync/src/matching.rs

use thiserror::Error;

/// Failures surfaced by the byte-level scanners.
///
/// `NoOpening` is a soft signal: callers treat the surrounding text as
/// "not a function" and keep scanning. `Unbalanced` is fatal for the file
/// being scanned and propagates up to the driver.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// An opening delimiter was found but its pair never closes.
    #[error("unbalanced `{open}`: opener at byte {at} is never closed by `{close}`")]
    Unbalanced { open: char, close: char, at: usize },

    /// No opening delimiter exists at or after the scan position.
    #[error("no `{open}` at or after the scan position")]
    NoOpening { open: char },
}

/// Find the first `open` at or after `from` and the index of its matching
/// `close`, tracking nesting depth. Returns `(open_idx, close_idx)`.
///
/// String and char literals are not special: a delimiter inside quotes
/// counts toward the depth like any other byte.
pub fn find_matching(
    bytes: &[u8],
    from: usize,
    open: u8,
    close: u8,
) -> Result<(usize, usize), ScanError> {
    let tail = bytes.get(from..).unwrap_or(&[]);
    let start = match memchr::memchr(open, tail) {
        Some(off) => from + off,
        None => return Err(ScanError::NoOpening { open: open as char }),
    };

    let mut depth: i32 = 0;
    let mut i = start;
    while i < bytes.len() {
        let c = bytes[i];
        if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return Ok((start, i));
            }
        }
        i += 1;
    }

    Err(ScanError::Unbalanced {
        open: open as char,
        close: close as char,
        at: start,
    })
}

/// Advance `i` past ASCII whitespace.
pub fn skip_ws(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}
