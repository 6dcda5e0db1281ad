// hdrsync/src/commands.rs

use anyhow::{
    Result,
    Context,
    anyhow
};
use std::{
    env,
    path::PathBuf
};
use crate::{
    reconcile::Action,
    report,
    sync::{self, SyncOptions, FileOutcome}
};


pub fn run_cli() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "sync"  => run_sync(&args[2..], false)?,
        "check" => run_sync(&args[2..], true)?,
        "help" | _ => print_help(),
    }
    Ok(())
}

fn run_sync(args: &[String], check: bool) -> Result<()> {
    let quiet = args.iter().any(|a| a == "-q" || a == "--quiet");
    let json = args.iter().any(|a| a == "--json");
    let patterns: Vec<&str> = args
        .iter()
        .map(|s| s.as_str())
        .filter(|a| !a.starts_with('-'))
        .collect();
    if patterns.is_empty() {
        return Err(anyhow!("no input patterns; see `hdrsync help`"));
    }

    let files = expand_patterns(&patterns)?;
    if files.is_empty() {
        eprintln!("[sync] warn: no files matched");
        return Ok(());
    }

    let opts = SyncOptions { check };
    let mut outcomes: Vec<FileOutcome> = Vec::new();
    let mut failures: Vec<(PathBuf, String)> = Vec::new();

    for path in &files {
        match sync::sync_file(path, opts) {
            Ok(out) => {
                if !quiet {
                    narrate(&out);
                }
                if check && out.changed {
                    println!("stale {}", out.header.display());
                }
                outcomes.push(out);
            }
            Err(e) => {
                eprintln!("[sync] warn: {}: {:#}", path.display(), e);
                failures.push((path.clone(), format!("{e:#}")));
            }
        }
    }

    if json {
        let report = report::run_report(&outcomes, &failures);
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    let changed = outcomes.iter().filter(|o| o.changed).count();
    if !quiet {
        println!("{} file(s), {} changed, {} failed", files.len(), changed, failures.len());
    }

    if !failures.is_empty() {
        return Err(anyhow!("{} file(s) failed", failures.len()));
    }
    if check && changed > 0 {
        println!("{changed} header(s) out of date");
        std::process::exit(1);
    }
    Ok(())
}

/// Expand each pattern into concrete source files: literal paths pass
/// through, directories are walked, anything else is tried as a glob.
fn expand_patterns(patterns: &[&str]) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();
    for pat in patterns {
        let p = PathBuf::from(pat);
        if p.is_file() {
            files.push(p);
        } else if p.is_dir() {
            files.extend(sync::collect_c_sources(&p));
        } else {
            let matches = glob::glob(pat).with_context(|| format!("bad pattern {pat}"))?;
            for entry in matches {
                match entry {
                    Ok(path) if path.is_file() => files.push(path),
                    Ok(_) => {}
                    Err(e) => eprintln!("[sync] warn: {e}"),
                }
            }
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

fn narrate(out: &FileOutcome) {
    println!("opened {}", out.source.display());
    println!("read {} function definitions", out.definitions);
    if out.header_existed {
        println!("opened {}", out.header.display());
    }
    for action in &out.actions {
        match action {
            Action::Updated(name) => println!("updating {name}"),
            Action::Removed(name) => {
                println!("{} not found in {}, deleting", name, out.source.display());
            }
            Action::Added(name) => println!("adding {name}"),
        }
    }
    if out.written {
        println!("wrote {}", out.header.display());
    } else if !out.changed {
        println!("nothing changed");
    }
}

fn print_help() {
    println!(
r#"
hdrsync - keep C headers in lockstep with their sources

USAGE:
    hdrsync sync <PATTERN...>    # Rewrite each source's header to match its documented functions
    hdrsync check <PATTERN...>   # Report stale headers without writing; exit 1 if any
    hdrsync help                 # Show this message

PATTERN is a .c file, a directory (walked recursively), or a glob like src/*.c.

OPTIONS:
    -q, --quiet    Suppress per-file narration
    --json         Print a machine-readable run report to stdout
"#    );
}
