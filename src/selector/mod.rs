//! Profile selector: keeps the front end's notion of "selected" in sync with
//! the settings store.
//!
//! Reading is synchronous ([`ProfileSelector::cards`] reads the store's
//! current snapshot). Selecting spawns the store write on the current tokio
//! runtime and returns immediately with a [`PendingWrite`]; dropping that
//! handle leaves the write running in the background.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::catalog::CatalogProvider;
use crate::error::StoreError;
use crate::settings::{SettingsPatch, SettingsState, SettingsStore};

mod cards;

pub use cards::{
    build_card, build_cards, resolve_current_selection, resolve_display_label, LabelKind,
    ProfileCard, FALLBACK_PROFILE_ID, THINKING_BADGE_SUFFIX,
};

/// Presents catalog profiles as cards and persists selections.
pub struct ProfileSelector {
    catalog: Arc<dyn CatalogProvider>,
    store: Arc<dyn SettingsStore>,
    updates: watch::Receiver<SettingsState>,
}

impl ProfileSelector {
    pub fn new(catalog: Arc<dyn CatalogProvider>, store: Arc<dyn SettingsStore>) -> Self {
        let updates = store.subscribe();
        Self {
            catalog,
            store,
            updates,
        }
    }

    pub fn catalog(&self) -> &dyn CatalogProvider {
        self.catalog.as_ref()
    }

    /// Effective selected profile id for the current snapshot.
    pub fn current_selection(&self) -> String {
        resolve_current_selection(&self.store.current()).to_string()
    }

    /// Cards for the current snapshot, in catalog order.
    pub fn cards(&self) -> Vec<ProfileCard> {
        build_cards(self.catalog.as_ref(), &self.store.current())
    }

    /// Resolve a raw model or thinking-level id to its display label.
    pub fn label<'a>(&'a self, kind: LabelKind, value: &'a str) -> &'a str {
        resolve_display_label(self.catalog.as_ref(), kind, value)
    }

    /// Persist `profile_id` as the selection without waiting for the write.
    ///
    /// Issues exactly one store write with only the selection patched. The
    /// id is not checked against the catalog. Outside a tokio runtime no
    /// write is issued and the returned handle resolves to
    /// [`StoreError::TaskFailed`].
    pub fn select(&self, profile_id: &str) -> PendingWrite {
        let id = profile_id.to_string();
        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(err) => {
                warn!(profile = %id, error = %err, "cannot persist agent profile selection");
                return PendingWrite {
                    profile_id: id,
                    task: WriteTask::NotStarted(StoreError::TaskFailed(err.to_string())),
                };
            }
        };

        let store = Arc::clone(&self.store);
        let patch = SettingsPatch::select_profile(id.clone());
        debug!(profile = %id, "selecting agent profile");
        let task_id = id.clone();
        let handle = runtime.spawn(async move {
            let result = store.write(patch).await;
            if let Err(err) = &result {
                warn!(profile = %task_id, error = %err, "failed to persist agent profile selection");
            }
            result
        });
        PendingWrite {
            profile_id: id,
            task: WriteTask::Spawned(handle),
        }
    }

    /// Wait until the store publishes a new snapshot.
    ///
    /// Returns `false` once the store has been dropped.
    pub async fn changed(&mut self) -> bool {
        self.updates.changed().await.is_ok()
    }
}

/// Handle for a selection write running in the background.
#[derive(Debug)]
pub struct PendingWrite {
    profile_id: String,
    task: WriteTask,
}

#[derive(Debug)]
enum WriteTask {
    Spawned(JoinHandle<Result<SettingsState, StoreError>>),
    NotStarted(StoreError),
}

impl PendingWrite {
    /// Profile id this write persists.
    pub fn profile_id(&self) -> &str {
        &self.profile_id
    }

    /// Wait for the write and surface its outcome.
    pub async fn wait(self) -> Result<SettingsState, StoreError> {
        match self.task {
            WriteTask::Spawned(handle) => match handle.await {
                Ok(result) => result,
                Err(err) => Err(StoreError::TaskFailed(err.to_string())),
            },
            WriteTask::NotStarted(err) => Err(err),
        }
    }
}
