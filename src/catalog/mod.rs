//! Profile catalog: the static source of profiles, model labels, and
//! thinking-level labels.
//!
//! The catalog is built once at startup (built-in defaults, optionally
//! extended by the settings file) and is read-only afterwards. Profile ids
//! are unique; construction rejects duplicates so selection highlighting can
//! never match two cards.

use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use crate::error::ConfigError;

mod defaults;
mod types;

pub use types::{AgentProfile, LabelTable};

/// Read access to profile definitions and label tables.
pub trait CatalogProvider: Send + Sync {
    /// Profiles in catalog order.
    fn profiles(&self) -> &[AgentProfile];
    /// Model id → display label.
    fn models(&self) -> &LabelTable;
    /// Thinking-level id → display label.
    fn thinking_levels(&self) -> &LabelTable;

    /// Find a profile by exact id.
    fn profile(&self, id: &str) -> Option<&AgentProfile> {
        self.profiles().iter().find(|profile| profile.id == id)
    }
}

/// In-memory catalog with validated, unique profile ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    profiles: Vec<AgentProfile>,
    models: LabelTable,
    thinking_levels: LabelTable,
}

/// User-supplied catalog additions read from the settings file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogOverlay {
    /// Extra or replacement model labels.
    pub models: BTreeMap<String, String>,
    /// Extra or replacement thinking-level labels.
    pub thinking_levels: BTreeMap<String, String>,
    /// Profiles appended after the built-in ones.
    pub profiles: Vec<AgentProfile>,
}

impl CatalogOverlay {
    pub fn is_empty(&self) -> bool {
        self.models.is_empty() && self.thinking_levels.is_empty() && self.profiles.is_empty()
    }
}

impl Catalog {
    /// Build a catalog, validating profile ids.
    pub fn new(
        profiles: Vec<AgentProfile>,
        models: LabelTable,
        thinking_levels: LabelTable,
    ) -> Result<Self, ConfigError> {
        validate_profile_ids(&profiles)?;
        Ok(Self {
            profiles,
            models,
            thinking_levels,
        })
    }

    /// The catalog bundled with the binary.
    pub fn builtin() -> Self {
        Self {
            profiles: defaults::default_profiles(),
            models: defaults::default_models(),
            thinking_levels: defaults::default_thinking_levels(),
        }
    }

    /// Apply user additions on top of this catalog.
    ///
    /// Labels are inserted or replaced. Profiles are appended in overlay
    /// order; an overlay profile reusing an existing id is an error.
    pub fn with_overlay(mut self, overlay: CatalogOverlay) -> Result<Self, ConfigError> {
        if overlay.is_empty() {
            return Ok(self);
        }
        for (id, label) in overlay.models {
            self.models.insert(id, label);
        }
        for (id, label) in overlay.thinking_levels {
            self.thinking_levels.insert(id, label);
        }
        let added = overlay.profiles.len();
        self.profiles.extend(overlay.profiles);
        validate_profile_ids(&self.profiles)?;
        debug!(
            added_profiles = added,
            total_profiles = self.profiles.len(),
            "applied catalog overlay"
        );
        Ok(self)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CatalogProvider for Catalog {
    fn profiles(&self) -> &[AgentProfile] {
        &self.profiles
    }

    fn models(&self) -> &LabelTable {
        &self.models
    }

    fn thinking_levels(&self) -> &LabelTable {
        &self.thinking_levels
    }
}

fn validate_profile_ids(profiles: &[AgentProfile]) -> Result<(), ConfigError> {
    let mut seen = HashSet::with_capacity(profiles.len());
    for profile in profiles {
        let id = profile.id.trim();
        if id.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "profile `{}` has an empty id",
                profile.name
            )));
        }
        if id != profile.id {
            return Err(ConfigError::Invalid(format!(
                "profile id `{}` has surrounding whitespace",
                profile.id
            )));
        }
        if !seen.insert(id) {
            return Err(ConfigError::Invalid(format!("duplicate profile id `{id}`")));
        }
    }
    Ok(())
}
