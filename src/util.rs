// hdrsync/src/util.rs

use std::path::{Path, PathBuf};

/// Companion header path: same location, extension swapped for `h`.
/// A source with no extension still gains one (`foo` -> `foo.h`).
pub fn header_path_for(source: &Path) -> PathBuf {
    source.with_extension("h")
}

/// True for `.c` files, case-insensitive on the extension.
pub fn is_c_source(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("c"))
        .unwrap_or(false)
}

/// Current UTC time, RFC3339 (sortable), for report stamps.
pub fn now_rfc3339() -> String {
    use chrono::Utc;
    Utc::now().to_rfc3339()
}
