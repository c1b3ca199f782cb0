//! Subcommand handlers.

pub(crate) mod profile;
