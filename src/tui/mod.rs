//! Terminal user-interface building blocks.
//!
//! Card rendering, the interactive picker, and shared text/layout helpers.
//! Rendering writes through generic `Write` sinks; only the picker touches
//! the real terminal.

pub mod cards;
pub mod picker;
pub mod settings;
pub mod text;

pub use cards::{picker_option_label, write_card, write_profile_section, write_warning};
pub use picker::pick_profile;
