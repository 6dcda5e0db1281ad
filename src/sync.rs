// hdrsync/src/sync.rs

use anyhow::{Context, Result};
use ignore::WalkBuilder;
use sha1::{Digest, Sha1};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    extract,
    reconcile::{self, Action},
    util,
};

/// Seed content for headers that do not exist yet.
const HEADER_SEED: &str = "#pragma once\n";

/// Driver-side knobs. The scanners themselves take none.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Report what would change, write nothing.
    pub check: bool,
}

/// What happened to one source file's header.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub source: PathBuf,
    pub header: PathBuf,
    pub header_existed: bool,
    pub definitions: usize,
    pub changed: bool,
    pub written: bool,
    pub actions: Vec<Action>,
    pub sha1_before: Option<String>,
    pub sha1_after: String,
}

/// Sync one source file's companion header: read, extract, reconcile, and
/// write back only when something actually changed (and we're not in check
/// mode). A header that had to be seeded counts as changed even when no
/// declaration landed in it.
pub fn sync_file(source: &Path, opts: SyncOptions) -> Result<FileOutcome> {
    let code = fs::read_to_string(source)
        .with_context(|| format!("reading {}", source.display()))?;

    let defs = extract::extract_definitions(&code)
        .with_context(|| format!("scanning {}", source.display()))?;

    let header = util::header_path_for(source);
    let (header_existed, head) = if header.is_file() {
        let text = fs::read_to_string(&header)
            .with_context(|| format!("reading {}", header.display()))?;
        (true, text)
    } else {
        (false, HEADER_SEED.to_string())
    };

    let rec = reconcile::reconcile(&head, &defs)
        .with_context(|| format!("reconciling {}", header.display()))?;

    let changed = rec.changed || !header_existed;
    let written = changed && !opts.check;
    if written {
        fs::write(&header, &rec.text)
            .with_context(|| format!("writing {}", header.display()))?;
    }

    Ok(FileOutcome {
        source: source.to_path_buf(),
        header,
        header_existed,
        definitions: defs.len(),
        changed,
        written,
        actions: rec.actions,
        sha1_before: if header_existed { Some(sha1_hex(&head)) } else { None },
        sha1_after: sha1_hex(&rec.text),
    })
}

/// All `.c` files under `root`, walked with the standard ignore filters
/// (`.git`, hidden files, ignore rules), sorted for a deterministic
/// processing order.
pub fn collect_c_sources(root: &Path) -> Vec<PathBuf> {
    let walker = WalkBuilder::new(root).standard_filters(true).build();
    let mut files: Vec<PathBuf> = walker
        .filter_map(|e| e.ok())
        .map(ignore::DirEntry::into_path)
        .filter(|p| p.is_file() && util::is_c_source(p))
        .collect();
    files.sort();
    files
}

fn sha1_hex(text: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}
