//! Agent profiles: pick a preset model + thinking-level bundle and persist
//! the choice.
//!
//! The crate is split along the collaborators of the selection flow:
//! a read-only [`catalog`] of profiles and label tables, a [`settings`]
//! store with merge-writes, the [`selector`] that ties them together, and
//! [`tui`] rendering for terminals.
//!
//! # Quick start
//!
//! ```no_run
//! use std::sync::Arc;
//! use agent_profiles::catalog::Catalog;
//! use agent_profiles::selector::ProfileSelector;
//! use agent_profiles::settings::MemorySettingsStore;
//!
//! # async fn example() {
//! let selector = ProfileSelector::new(
//!     Arc::new(Catalog::builtin()),
//!     Arc::new(MemorySettingsStore::default()),
//! );
//! selector.select("quick").wait().await.unwrap();
//! assert_eq!(selector.current_selection(), "quick");
//! # }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod icons;
pub mod selector;
pub mod settings;
#[cfg(test)]
pub mod testsupport;
pub mod tui;
