// src/lib.rs
#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod util;
pub mod func_record;

pub mod matching;
pub mod comments;
pub mod classify;
pub mod extract;
pub mod reconcile;

pub mod sync;
pub mod report;

pub mod commands;
