//! Finite icon registry for profile cards.
//!
//! Profiles carry a raw icon key string. Rendering resolves it through
//! [`IconKey::resolve`], which never fails: absent or unknown keys map to
//! [`IconKey::FALLBACK`].

use serde::Serialize;

/// Icons a profile card can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IconKey {
    Brain,
    Scale,
    Zap,
    Sparkles,
}

impl IconKey {
    /// Icon used when a profile names no icon or an unknown one.
    pub const FALLBACK: IconKey = IconKey::Brain;

    /// Every registered icon, in registry order.
    pub const ALL: [IconKey; 4] = [
        IconKey::Brain,
        IconKey::Scale,
        IconKey::Zap,
        IconKey::Sparkles,
    ];

    /// Resolve a raw registry key. Matching is exact on the registry name.
    pub fn resolve(key: Option<&str>) -> IconKey {
        key.and_then(Self::lookup).unwrap_or(Self::FALLBACK)
    }

    fn lookup(key: &str) -> Option<IconKey> {
        Self::ALL.into_iter().find(|icon| icon.name() == key)
    }

    /// Registry name, as written in catalog definitions.
    pub fn name(self) -> &'static str {
        match self {
            IconKey::Brain => "Brain",
            IconKey::Scale => "Scale",
            IconKey::Zap => "Zap",
            IconKey::Sparkles => "Sparkles",
        }
    }

    /// Terminal glyph for this icon.
    ///
    /// Plain mode sticks to ASCII so piped output stays greppable.
    pub fn glyph(self, color: bool) -> &'static str {
        match (self, color) {
            (IconKey::Brain, true) => "◉",
            (IconKey::Scale, true) => "⚖",
            (IconKey::Zap, true) => "⚡",
            (IconKey::Sparkles, true) => "✦",
            (IconKey::Brain, false) => "(B)",
            (IconKey::Scale, false) => "(S)",
            (IconKey::Zap, false) => "(Z)",
            (IconKey::Sparkles, false) => "(*)",
        }
    }
}
