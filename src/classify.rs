// hdrsync/src/classify.rs

use memchr::memchr;

use crate::{
    func_record::FuncRecord,
    matching::{find_matching, skip_ws, ScanError},
};

/// What the text at the scan position is expected to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// A prototype ending in `;`, as found in header files.
    Declaration,
    /// A full definition with a `{ ... }` body, as found in sources.
    Definition,
}

/// Try to read a function starting at `i`, skipping leading whitespace.
///
/// Returns `Ok(None)` when the text is anything other than a function in
/// the requested mode: control flow (`if`, `while`, ...), a struct or
/// macro, a prototype where a definition was expected, or a declaration
/// that never reaches its `;`. The only hard failure is an opening
/// delimiter that never closes.
///
/// The header of a match is the text from `i` through the closing paren,
/// trimmed. The name is the last whitespace-separated token before the
/// open paren, with any leading `*` stripped off the pointer spelling.
pub fn func_at(code: &str, i: usize, mode: Mode) -> Result<Option<FuncRecord>, ScanError> {
    let bytes = code.as_bytes();

    let (paren_open, paren_close) = match find_matching(bytes, i, b'(', b')') {
        Ok(pair) => pair,
        Err(ScanError::NoOpening { .. }) => return Ok(None),
        Err(e) => return Err(e),
    };

    let header = code[i..=paren_close].trim();

    // a function header leads with a type name, not `#`, `*`, digits, ...
    if !header.chars().next().map(char::is_alphabetic).unwrap_or(false) {
        return Ok(None);
    }

    // braces before the paren mean struct/union/enum, not a function
    if header.contains('{') || header.contains('}') {
        return Ok(None);
    }

    // a lone token before `(` is control flow or a bare call
    let before = &code[i..paren_open];
    if before.split_whitespace().count() <= 1 {
        return Ok(None);
    }

    let name = before
        .split_whitespace()
        .last()
        .unwrap_or_default()
        .trim_start_matches('*');
    if name.is_empty() {
        return Ok(None);
    }

    let end = match mode {
        Mode::Declaration => {
            // one past the `;`; a declaration that never ends is skipped
            let tail = bytes.get(paren_close + 1..).unwrap_or(&[]);
            match memchr(b';', tail) {
                Some(off) => paren_close + 1 + off + 1,
                None => return Ok(None),
            }
        }
        Mode::Definition => {
            // the body must open right after the parameter list
            let next = skip_ws(bytes, paren_close + 1);
            if next >= bytes.len() || bytes[next] != b'{' {
                return Ok(None);
            }
            let (_, body_close) = match find_matching(bytes, next, b'{', b'}') {
                Ok(pair) => pair,
                Err(ScanError::NoOpening { .. }) => return Ok(None),
                Err(e) => return Err(e),
            };
            body_close + 1
        }
    };

    Ok(Some(FuncRecord {
        name: name.to_string(),
        header: header.to_string(),
        end,
        comment: None,
    }))
}
