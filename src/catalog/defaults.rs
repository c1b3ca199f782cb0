//! Built-in catalog shipped with the binary.

use super::{AgentProfile, LabelTable};

/// Built-in model ids and their display labels.
pub(super) const DEFAULT_MODELS: &[(&str, &str)] = &[
    ("opus", "Claude Opus 4.5"),
    ("sonnet", "Claude Sonnet 4.5"),
    ("haiku", "Claude Haiku 4.5"),
];

/// Built-in thinking levels, lowest effort first.
pub(super) const DEFAULT_THINKING_LEVELS: &[(&str, &str)] = &[
    ("none", "None"),
    ("low", "Low"),
    ("medium", "Medium"),
    ("high", "High"),
    ("ultrathink", "Ultra Think"),
];

struct ProfileSeed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    icon: &'static str,
    model: &'static str,
    thinking_level: &'static str,
}

const DEFAULT_PROFILES: &[ProfileSeed] = &[
    ProfileSeed {
        id: "auto",
        name: "Auto (Optimized)",
        description: "Uses Opus across all phases with optimized thinking levels",
        icon: "Sparkles",
        model: "opus",
        thinking_level: "high",
    },
    ProfileSeed {
        id: "complex",
        name: "Complex Tasks",
        description: "For intricate, multi-step implementations requiring deep analysis",
        icon: "Brain",
        model: "opus",
        thinking_level: "ultrathink",
    },
    ProfileSeed {
        id: "balanced",
        name: "Balanced",
        description: "Good balance of speed and quality for most tasks",
        icon: "Scale",
        model: "sonnet",
        thinking_level: "medium",
    },
    ProfileSeed {
        id: "quick",
        name: "Quick Edits",
        description: "Fast iterations for simple changes and quick fixes",
        icon: "Zap",
        model: "haiku",
        thinking_level: "low",
    },
];

pub(super) fn default_models() -> LabelTable {
    DEFAULT_MODELS.iter().copied().collect()
}

pub(super) fn default_thinking_levels() -> LabelTable {
    DEFAULT_THINKING_LEVELS.iter().copied().collect()
}

pub(super) fn default_profiles() -> Vec<AgentProfile> {
    DEFAULT_PROFILES
        .iter()
        .map(|seed| AgentProfile {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            icon: Some(seed.icon.to_string()),
            model: seed.model.to_string(),
            thinking_level: seed.thinking_level.to_string(),
        })
        .collect()
}
