//! Settings store: persisted user configuration mutated via merge-writes.
//!
//! Stores expose a synchronous snapshot read, an asynchronous partial-update
//! write, and a `watch` subscription that publishes every new snapshot.
//! Callers receive the store as an injected `Arc<dyn SettingsStore>`.

use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::watch;

use crate::config::SettingsFile;
use crate::error::StoreError;

mod file;
mod memory;

pub use file::FileSettingsStore;
pub use memory::MemorySettingsStore;

/// Snapshot of the persisted settings the selector cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsState {
    /// Raw stored selection; `None` when never set.
    pub selected_agent_profile: Option<String>,
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplaySettings {
    pub color: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            selected_agent_profile: None,
            display: DisplaySettings::default(),
        }
    }
}

impl SettingsState {
    /// Project the parsed settings file onto a snapshot.
    pub fn from_file(file: &SettingsFile) -> Self {
        Self {
            selected_agent_profile: file.agent.selected_profile.clone(),
            display: DisplaySettings {
                color: file.display.color.unwrap_or(true),
            },
        }
    }

    /// Apply a partial update; `None` fields keep their current value.
    pub fn merged(&self, patch: &SettingsPatch) -> Self {
        let mut next = self.clone();
        if let Some(profile) = &patch.selected_agent_profile {
            next.selected_agent_profile = Some(profile.clone());
        }
        if let Some(color) = patch.color {
            next.display.color = color;
        }
        next
    }
}

/// Partial settings update with merge semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SettingsPatch {
    pub selected_agent_profile: Option<String>,
    pub color: Option<bool>,
}

impl SettingsPatch {
    /// Patch that only changes the selected profile.
    pub fn select_profile(profile_id: impl Into<String>) -> Self {
        Self {
            selected_agent_profile: Some(profile_id.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.selected_agent_profile.is_none() && self.color.is_none()
    }

    /// Reject values a store must never persist.
    ///
    /// Profile ids are stored byte for byte, so blank ids and ids with
    /// surrounding whitespace are refused rather than normalized.
    pub(crate) fn validate(&self) -> Result<(), StoreError> {
        if let Some(profile) = &self.selected_agent_profile {
            if profile.trim().is_empty() {
                return Err(StoreError::Invalid(
                    "selected agent profile cannot be empty".to_string(),
                ));
            }
            if profile.trim() != profile.as_str() {
                return Err(StoreError::Invalid(format!(
                    "selected agent profile `{profile}` has surrounding whitespace"
                )));
            }
        }
        Ok(())
    }
}

/// Persistent holder of user settings.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Current snapshot. Never blocks on in-flight writes.
    fn current(&self) -> SettingsState;

    /// Merge `patch` into the stored settings and return the new snapshot.
    ///
    /// Fields absent from the patch are left untouched. On success the new
    /// snapshot is also published to subscribers.
    async fn write(&self, patch: SettingsPatch) -> Result<SettingsState, StoreError>;

    /// Receiver that observes every published snapshot.
    fn subscribe(&self) -> watch::Receiver<SettingsState>;
}
