//! Centralized, hardcoded UI settings for profile rendering.
//!
//! This is the single place to tweak section text, glyphs, colors, and
//! indentation.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Layout / indentation
// ---------------------------------------------------------------------------

pub const INDENT_1: &str = "  ";
pub const INDENT_2: &str = "    ";
pub const DESCRIPTION_MAX_LINES: usize = 2;
pub const BLOCK_FALLBACK_COLUMNS: usize = 80;
pub const BLOCK_RIGHT_MARGIN: usize = 2;
pub const BLOCK_MIN_COLUMNS: usize = 20;

// ---------------------------------------------------------------------------
// Sections / labels
// ---------------------------------------------------------------------------

pub const SECTION_TITLE: &str = "Default Agent Profile";
pub const SECTION_DESCRIPTION: &str =
    "Select a preset configuration for model and thinking level";
pub const SECTION_NOTE: &str = "Agent profiles provide preset model and thinking level defaults for new tasks. You can always override them per task.";
pub const PICKER_HELP: &str = "Use ↑/↓ to pick, Enter to confirm, Esc to cancel.";
pub const LABEL_WARNING: &str = "warning:";

pub const GLYPH_SECTION_BULLET: &str = "•";
pub const GLYPH_SELECTED: &str = "✓";
pub const GLYPH_UNSELECTED: &str = " ";
pub const GLYPH_SELECTED_PLAIN: &str = "[x]";
pub const GLYPH_UNSELECTED_PLAIN: &str = "[ ]";
pub const GLYPH_ELLIPSIS: &str = "…";
pub const GLYPH_ELLIPSIS_PLAIN: &str = "...";

pub const PICKER_ACTIVE: &str = "▶";
pub const PICKER_INACTIVE: &str = "·";

pub const PICKER_EVENT_POLL_MS: u64 = 80;

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_SECTION_BULLET: Color = Color::DarkGrey;
pub const COLOR_SECTION_TITLE: Color = Color::Cyan;
pub const COLOR_SECTION_DESCRIPTION: Color = Color::DarkGrey;

pub const COLOR_CARD_NAME: Color = Color::White;
pub const COLOR_CARD_NAME_SELECTED: Color = Color::Cyan;
pub const COLOR_CARD_DESCRIPTION: Color = Color::DarkGrey;
pub const COLOR_CARD_ICON: Color = Color::DarkGrey;
pub const COLOR_CARD_ICON_SELECTED: Color = Color::Cyan;
pub const COLOR_SELECTED_MARK: Color = Color::Green;

pub const COLOR_BADGE_TEXT: Color = Color::Grey;
pub const COLOR_BADGE_BG: Color = Color::Rgb {
    r: 44,
    g: 48,
    b: 56,
};

pub const COLOR_PICKER_ACTIVE: Color = Color::DarkYellow;
pub const COLOR_PICKER_INACTIVE: Color = Color::DarkGrey;
pub const COLOR_PICKER_ACTIVE_TEXT: Color = Color::Yellow;
pub const COLOR_PICKER_TEXT: Color = Color::White;
pub const COLOR_PICKER_HELP: Color = Color::DarkGrey;

pub const COLOR_WARNING: Color = Color::Yellow;

// ---------------------------------------------------------------------------
// Small helpers
// ---------------------------------------------------------------------------

pub fn selection_marker(selected: bool, color: bool) -> &'static str {
    match (selected, color) {
        (true, true) => GLYPH_SELECTED,
        (false, true) => GLYPH_UNSELECTED,
        (true, false) => GLYPH_SELECTED_PLAIN,
        (false, false) => GLYPH_UNSELECTED_PLAIN,
    }
}

pub fn ellipsis(color: bool) -> &'static str {
    if color {
        GLYPH_ELLIPSIS
    } else {
        GLYPH_ELLIPSIS_PLAIN
    }
}
