//! On-disk settings file model.
//!
//! Every section is optional so a missing or empty file parses to defaults.
//! Unknown keys are ignored on read and left untouched on write.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::catalog::{AgentProfile, CatalogOverlay};

/// Parsed contents of the settings file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SettingsFile {
    pub agent: AgentSection,
    pub display: DisplaySection,
    /// Extra model labels (`[models]`).
    pub models: BTreeMap<String, String>,
    /// Extra thinking-level labels (`[thinking_levels]`).
    pub thinking_levels: BTreeMap<String, String>,
    /// Extra profiles (`[[profiles]]`).
    pub profiles: Vec<AgentProfile>,
}

/// `[agent]` section.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AgentSection {
    /// Persisted profile selection.
    pub selected_profile: Option<String>,
}

/// `[display]` section.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplaySection {
    pub color: Option<bool>,
}

impl SettingsFile {
    /// Catalog additions declared in this file.
    pub fn catalog_overlay(&self) -> CatalogOverlay {
        CatalogOverlay {
            models: self.models.clone(),
            thinking_levels: self.thinking_levels.clone(),
            profiles: self.profiles.clone(),
        }
    }
}
