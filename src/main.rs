// src/main.rs

pub mod classify;
pub mod commands;
pub mod comments;
pub mod extract;
pub mod func_record;
pub mod matching;
pub mod reconcile;
pub mod report;
pub mod sync;
pub mod util;

use anyhow::Result;

fn main() -> Result<()> {
    commands::run_cli()
}
