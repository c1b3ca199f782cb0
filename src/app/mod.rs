//! Binary-local application orchestration helpers.
//!
//! `main.rs` only parses arguments; this module wires settings discovery,
//! the catalog, the store, and the selector, then dispatches subcommands.

pub(crate) mod commands;
mod entry;

pub(crate) use entry::{init_tracing, run};
