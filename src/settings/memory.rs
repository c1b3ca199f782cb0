//! In-process settings store.

use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::watch;
use tracing::debug;

use crate::error::StoreError;

use super::{SettingsPatch, SettingsState, SettingsStore};

/// Settings store that keeps state in memory and records every patch.
///
/// Useful for embedding without a writable filesystem and for observing
/// exactly which writes a front end issued.
#[derive(Debug)]
pub struct MemorySettingsStore {
    state: watch::Sender<SettingsState>,
    writes: Mutex<Vec<SettingsPatch>>,
}

impl MemorySettingsStore {
    pub fn new(initial: SettingsState) -> Self {
        let (state, _) = watch::channel(initial);
        Self {
            state,
            writes: Mutex::new(Vec::new()),
        }
    }

    /// Every patch received so far, in arrival order.
    pub fn writes(&self) -> Vec<SettingsPatch> {
        self.writes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Default for MemorySettingsStore {
    fn default() -> Self {
        Self::new(SettingsState::default())
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    fn current(&self) -> SettingsState {
        self.state.borrow().clone()
    }

    async fn write(&self, patch: SettingsPatch) -> Result<SettingsState, StoreError> {
        patch.validate()?;
        let mut writes = self
            .writes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        writes.push(patch.clone());
        let mut next = SettingsState::default();
        self.state.send_modify(|state| {
            *state = state.merged(&patch);
            next = state.clone();
        });
        drop(writes);
        debug!(?patch, "memory settings updated");
        Ok(next)
    }

    fn subscribe(&self) -> watch::Receiver<SettingsState> {
        self.state.subscribe()
    }
}
