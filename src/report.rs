// hdrsync/src/report.rs

use serde::Serialize;
use serde_json::{json, Value};
use std::path::PathBuf;

use crate::{reconcile::Action, sync::FileOutcome, util};

/// Per-file slice of the run report.
#[derive(Serialize)]
struct FileReport<'a> {
    source: String,
    header: String,
    header_existed: bool,
    definitions: usize,
    changed: bool,
    written: bool,
    added: Vec<&'a str>,
    updated: Vec<&'a str>,
    removed: Vec<&'a str>,
    sha1_before: Option<&'a str>,
    sha1_after: &'a str,
}

/// Build the JSON run report: a summary block up front, then per-file
/// records and failures. File order follows the driver's (sorted) inputs.
pub fn run_report(outcomes: &[FileOutcome], failures: &[(PathBuf, String)]) -> Value {
    let files: Vec<FileReport<'_>> = outcomes.iter().map(file_report).collect();

    let changed = outcomes.iter().filter(|o| o.changed).count();
    let (mut added, mut updated, mut removed) = (0usize, 0usize, 0usize);
    for o in outcomes {
        for a in &o.actions {
            match a {
                Action::Added(_) => added += 1,
                Action::Updated(_) => updated += 1,
                Action::Removed(_) => removed += 1,
            }
        }
    }

    let summary = json!({
        "files": outcomes.len() + failures.len(),
        "changed": changed,
        "unchanged": outcomes.len() - changed,
        "failed": failures.len(),
        "added": added,
        "updated": updated,
        "removed": removed
    });

    let failed: Vec<Value> = failures
        .iter()
        .map(|(path, err)| json!({ "path": path.display().to_string(), "error": err }))
        .collect();

    json!({
        "version": 1,
        "generated": util::now_rfc3339(),
        "summary": summary,
        "files": files,
        "failures": failed
    })
}

fn file_report(o: &FileOutcome) -> FileReport<'_> {
    let mut added = Vec::new();
    let mut updated = Vec::new();
    let mut removed = Vec::new();
    for a in &o.actions {
        match a {
            Action::Added(n) => added.push(n.as_str()),
            Action::Updated(n) => updated.push(n.as_str()),
            Action::Removed(n) => removed.push(n.as_str()),
        }
    }
    FileReport {
        source: o.source.display().to_string(),
        header: o.header.display().to_string(),
        header_existed: o.header_existed,
        definitions: o.definitions,
        changed: o.changed,
        written: o.written,
        added,
        updated,
        removed,
        sha1_before: o.sha1_before.as_deref(),
        sha1_after: &o.sha1_after,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(changed: bool, actions: Vec<Action>) -> FileOutcome {
        FileOutcome {
            source: PathBuf::from("add.c"),
            header: PathBuf::from("add.h"),
            header_existed: true,
            definitions: actions.len(),
            changed,
            written: changed,
            actions,
            sha1_before: Some("aa".into()),
            sha1_after: "bb".into(),
        }
    }

    #[test]
    fn summary_counts_actions() {
        let outcomes = vec![
            outcome(true, vec![Action::Added("a".into()), Action::Updated("b".into())]),
            outcome(false, vec![]),
        ];
        let failures = vec![(PathBuf::from("bad.c"), "unbalanced `{`".to_string())];

        let v = run_report(&outcomes, &failures);
        assert_eq!(v["version"], 1);
        assert_eq!(v["summary"]["files"], 3);
        assert_eq!(v["summary"]["changed"], 1);
        assert_eq!(v["summary"]["unchanged"], 1);
        assert_eq!(v["summary"]["failed"], 1);
        assert_eq!(v["summary"]["added"], 1);
        assert_eq!(v["summary"]["updated"], 1);
        assert_eq!(v["summary"]["removed"], 0);
        assert_eq!(v["failures"][0]["path"], "bad.c");
    }

    #[test]
    fn file_entries_carry_names_and_digests() {
        let outcomes = vec![outcome(true, vec![Action::Removed("gone".into())])];
        let v = run_report(&outcomes, &[]);
        assert_eq!(v["files"][0]["source"], "add.c");
        assert_eq!(v["files"][0]["removed"][0], "gone");
        assert_eq!(v["files"][0]["sha1_before"], "aa");
        assert_eq!(v["files"][0]["sha1_after"], "bb");
    }
}
