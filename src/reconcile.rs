// hdrsync/src/reconcile.rs
//! Header-side merge: bring a declaration file up to date with the
//! definitions extracted from its source, touching only the blocks it
//! recognizes as managed declarations.

use std::collections::{HashMap, HashSet};

use crate::{
    classify::{func_at, Mode},
    comments::next_comment,
    func_record::FuncRecord,
    matching::ScanError,
};

/// One reconciliation step, named by the function it touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Added(String),
    Updated(String),
    Removed(String),
}

/// Result of a reconcile pass. `changed` mirrors whether any action was
/// taken; an untouched buffer comes back byte-identical.
#[derive(Debug, Clone)]
pub struct Reconciled {
    pub text: String,
    pub changed: bool,
    pub actions: Vec<Action>,
}

/// Replacement for `[start, end)` of the original buffer. Empty text
/// deletes the span.
#[derive(Debug)]
struct Edit {
    start: usize,
    end: usize,
    text: String,
}

/// Merge `defs` into `head`.
///
/// Declarations already present keep their place: changed ones are
/// rewritten in span, stale ones are deleted along with their doc comment,
/// and definitions with no declaration yet are appended at the end in
/// source order. Everything between managed blocks is left untouched.
/// Duplicate names collapse: the last definition wins a name, and only the
/// first declaration carrying that name survives.
pub fn reconcile(head: &str, defs: &[FuncRecord]) -> Result<Reconciled, ScanError> {
    // last definition wins a name
    let mut winner: HashMap<&str, usize> = HashMap::new();
    for (idx, d) in defs.iter().enumerate() {
        winner.insert(d.name.as_str(), idx);
    }

    let mut edits: Vec<Edit> = Vec::new();
    let mut actions: Vec<Action> = Vec::new();
    let mut retired: HashSet<&str> = HashSet::new();

    // one pass over the original buffer; edit spans stay in its
    // coordinates and never overlap because the scan resumes past each
    // declaration's end
    let mut scan = 0usize;
    while let Some(cmt) = next_comment(head, scan) {
        let Some(mut decl) = func_at(head, cmt.end, Mode::Declaration)? else {
            scan = cmt.end;
            continue;
        };
        decl.comment = Some(head[cmt.start..cmt.end].to_string());

        match winner.get(decl.name.as_str()) {
            Some(&idx) if !retired.contains(decl.name.as_str()) => {
                let defn = &defs[idx];
                if !decl.same_decl(defn) {
                    edits.push(Edit {
                        start: cmt.start,
                        end: decl.end,
                        text: defn.decl(),
                    });
                    actions.push(Action::Updated(defn.name.clone()));
                }
                retired.insert(defn.name.as_str());
            }
            _ => {
                edits.push(Edit {
                    start: cmt.start,
                    end: decl.end,
                    text: String::new(),
                });
                actions.push(Action::Removed(decl.name.clone()));
            }
        }
        scan = decl.end;
    }

    let mut text = apply_edits(head, &edits);

    // never-matched definitions go to the end, in extraction order
    for (idx, defn) in defs.iter().enumerate() {
        if winner.get(defn.name.as_str()) == Some(&idx) && !retired.contains(defn.name.as_str()) {
            text.push('\n');
            text.push_str(&defn.decl());
            text.push('\n');
            actions.push(Action::Added(defn.name.clone()));
        }
    }

    let changed = !actions.is_empty();
    Ok(Reconciled { text, changed, actions })
}

/// Apply ordered, non-overlapping edits to `original` in one pass.
fn apply_edits(original: &str, edits: &[Edit]) -> String {
    let mut out = String::with_capacity(original.len());
    let mut last = 0usize;
    for e in edits {
        out.push_str(&original[last..e.start]);
        out.push_str(&e.text);
        last = e.end;
    }
    out.push_str(&original[last..]);
    out
}
