// hdrsync/src/extract.rs
//! Source-side scan: documented function definitions.
//!
//! Walks a C source buffer comment by comment. Each anchoring block comment
//! is tried as the doc of a function definition starting right after it;
//! matches carry the comment along verbatim. The scan resumes past the body
//! of every match, so nothing inside a function is ever looked at twice.

use crate::{
    classify::{func_at, Mode},
    comments::next_comment,
    func_record::FuncRecord,
    matching::ScanError,
};

/// Collect every public, documented function definition in `code`, in
/// source order.
///
/// Names starting with `_` and headers starting with `static` are dropped:
/// both spellings mark a function as file-local.
pub fn extract_definitions(code: &str) -> Result<Vec<FuncRecord>, ScanError> {
    let mut defs = Vec::new();
    let mut scan = 0usize;

    while let Some(cmt) = next_comment(code, scan) {
        match func_at(code, cmt.end, Mode::Definition)? {
            Some(mut f) => {
                f.comment = Some(code[cmt.start..cmt.end].to_string());
                scan = f.end;
                defs.push(f);
            }
            None => scan = cmt.end,
        }
    }

    defs.retain(|d| !d.name.starts_with('_') && !d.header.starts_with("static"));
    Ok(defs)
}
