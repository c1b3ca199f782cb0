//! TOML-file-backed settings store.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::{watch, Mutex};
use tracing::{debug, info};

use crate::config::{
    parse_settings_text, read_settings_file, toml_string_literal, upsert_section_key,
    SettingsFile,
};
use crate::error::{ConfigError, StoreError};

use super::{SettingsPatch, SettingsState, SettingsStore};

/// Settings store persisting to a single TOML file.
///
/// Writes are serialized behind an async mutex: each one re-reads the file,
/// upserts only the patched keys, validates the result, and writes it back.
/// Concurrent writers therefore apply in lock order (last writer wins).
#[derive(Debug)]
pub struct FileSettingsStore {
    path: PathBuf,
    state: watch::Sender<SettingsState>,
    write_lock: Mutex<()>,
}

impl FileSettingsStore {
    /// Open the store at `path`, loading the initial snapshot.
    ///
    /// A missing file is fine; it is created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let file = read_settings_file(&path)?;
        let (state, _) = watch::channel(SettingsState::from_file(&file));
        Ok(Self {
            path,
            state,
            write_lock: Mutex::new(()),
        })
    }

    /// Path this store reads from and writes to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_existing(&self) -> Result<String, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(StoreError::Io(e)),
        }
    }
}

/// Rewrite settings text with the patch applied, touching only patched keys.
pub(crate) fn apply_patch_to_text(
    input: &str,
    patch: &SettingsPatch,
) -> Result<String, ConfigError> {
    let mut text = input.to_string();
    if let Some(profile) = &patch.selected_agent_profile {
        text = upsert_section_key(
            &text,
            "agent",
            "selected_profile",
            &toml_string_literal(profile),
        )?;
    }
    if let Some(color) = patch.color {
        let literal = if color { "true" } else { "false" };
        text = upsert_section_key(&text, "display", "color", literal)?;
    }
    Ok(text)
}

/// Check that every patched field reads back from the rewritten file.
fn verify_patch_applied(parsed: &SettingsFile, patch: &SettingsPatch) -> Result<(), StoreError> {
    if let Some(profile) = &patch.selected_agent_profile {
        if parsed.agent.selected_profile.as_ref() != Some(profile) {
            return Err(StoreError::Invalid(format!(
                "`[agent] selected_profile` did not read back as `{profile}` after the write"
            )));
        }
    }
    if let Some(color) = patch.color {
        if parsed.display.color != Some(color) {
            return Err(StoreError::Invalid(format!(
                "`[display] color` did not read back as `{color}` after the write"
            )));
        }
    }
    Ok(())
}

#[async_trait]
impl SettingsStore for FileSettingsStore {
    fn current(&self) -> SettingsState {
        self.state.borrow().clone()
    }

    async fn write(&self, patch: SettingsPatch) -> Result<SettingsState, StoreError> {
        patch.validate()?;
        if patch.is_empty() {
            return Ok(self.current());
        }

        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let existing = self.read_existing().await?;
        let updated = apply_patch_to_text(&existing, &patch)?;
        // Never persist text that would fail to load next time.
        let parsed = parse_settings_text(&updated)?;
        verify_patch_applied(&parsed, &patch)?;
        tokio::fs::write(&self.path, &updated).await?;

        let next = SettingsState::from_file(&parsed);
        self.state.send_replace(next.clone());
        info!(
            path = %self.path.display(),
            selected = next.selected_agent_profile.as_deref().unwrap_or(""),
            "settings written"
        );
        debug!(?patch, "applied settings patch");
        Ok(next)
    }

    fn subscribe(&self) -> watch::Receiver<SettingsState> {
        self.state.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::TestTempDir;

    #[test]
    fn apply_patch_touches_only_patched_keys() {
        let input = "# keep me\n[agent]\nselected_profile = \"auto\"\nextra = 1\n";
        let out = apply_patch_to_text(input, &SettingsPatch::select_profile("quick")).unwrap();
        assert_eq!(
            out,
            "# keep me\n[agent]\nselected_profile = \"quick\"\nextra = 1\n"
        );

        let out = apply_patch_to_text(
            input,
            &SettingsPatch {
                color: Some(false),
                ..SettingsPatch::default()
            },
        )
        .unwrap();
        assert_eq!(
            out,
            "# keep me\n[agent]\nselected_profile = \"auto\"\nextra = 1\n\n[display]\ncolor = false\n"
        );
    }

    #[test]
    fn open_reads_existing_selection() {
        let tmp = TestTempDir::new("file-store-open");
        let path = tmp.write_text("settings.toml", "[agent]\nselected_profile = \"balanced\"\n");
        let store = FileSettingsStore::open(&path).unwrap();
        assert_eq!(
            store.current().selected_agent_profile.as_deref(),
            Some("balanced")
        );
        assert_eq!(store.path(), path.as_path());
    }

    #[test]
    fn open_rejects_malformed_file() {
        let tmp = TestTempDir::new("file-store-bad");
        let path = tmp.write_text("settings.toml", "[agent\n");
        assert!(FileSettingsStore::open(&path).is_err());
    }

    #[tokio::test]
    async fn write_creates_missing_file_and_parents() {
        let tmp = TestTempDir::new("file-store-create");
        let path = tmp.child("nested/dir/settings.toml");
        let store = FileSettingsStore::open(&path).unwrap();
        assert_eq!(store.current(), SettingsState::default());

        let state = store
            .write(SettingsPatch::select_profile("quick"))
            .await
            .unwrap();
        assert_eq!(state.selected_agent_profile.as_deref(), Some("quick"));
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "[agent]\nselected_profile = \"quick\"\n");
    }

    #[tokio::test]
    async fn write_preserves_unrelated_content() {
        let tmp = TestTempDir::new("file-store-merge");
        let original = "# personal notes\n[display]\ncolor = false\n\n[models]\nopus = \"Opus\"\n";
        let path = tmp.write_text("settings.toml", original);
        let store = FileSettingsStore::open(&path).unwrap();

        let state = store
            .write(SettingsPatch::select_profile("complex"))
            .await
            .unwrap();
        assert!(!state.display.color);

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with(original), "{text}");
        assert!(text.ends_with("[agent]\nselected_profile = \"complex\"\n"));
    }

    #[tokio::test]
    async fn write_publishes_snapshot_to_subscribers() {
        let tmp = TestTempDir::new("file-store-watch");
        let store = FileSettingsStore::open(tmp.child("settings.toml")).unwrap();
        let mut rx = store.subscribe();

        store
            .write(SettingsPatch::select_profile("balanced"))
            .await
            .unwrap();
        rx.changed().await.unwrap();
        assert_eq!(
            rx.borrow().selected_agent_profile.as_deref(),
            Some("balanced")
        );
    }

    #[tokio::test]
    async fn write_refuses_to_corrupt_malformed_file() {
        let tmp = TestTempDir::new("file-store-corrupt");
        let path = tmp.child("settings.toml");
        let store = FileSettingsStore::open(&path).unwrap();
        std::fs::write(&path, "[agent\n").unwrap();

        let err = store
            .write(SettingsPatch::select_profile("quick"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Toml(_)), "{err}");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[agent\n");
        assert_eq!(store.current(), SettingsState::default());
    }

    #[tokio::test]
    async fn write_fails_when_parent_is_a_file() {
        let tmp = TestTempDir::new("file-store-io");
        let store = FileSettingsStore::open(tmp.child("sub/settings.toml")).unwrap();
        tmp.write_text("sub", "not a directory");

        let err = store
            .write(SettingsPatch::select_profile("quick"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Io(_)), "{err}");
    }

    #[tokio::test]
    async fn blank_selection_is_rejected_before_touching_disk() {
        let tmp = TestTempDir::new("file-store-blank");
        let path = tmp.child("settings.toml");
        let store = FileSettingsStore::open(&path).unwrap();

        assert!(store.write(SettingsPatch::select_profile(" ")).await.is_err());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn write_to_uppercase_section_persists_lowercase_table() {
        let tmp = TestTempDir::new("file-store-case");
        let path = tmp.write_text("settings.toml", "[AGENT]\nnote = 1\n");
        let store = FileSettingsStore::open(&path).unwrap();

        let state = store
            .write(SettingsPatch::select_profile("quick"))
            .await
            .unwrap();
        assert_eq!(state.selected_agent_profile.as_deref(), Some("quick"));
        assert_eq!(
            store.current().selected_agent_profile.as_deref(),
            Some("quick")
        );
        let reloaded = read_settings_file(&path).unwrap();
        assert_eq!(reloaded.agent.selected_profile.as_deref(), Some("quick"));
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("[AGENT]\nnote = 1\n"), "{text}");
    }

    #[tokio::test]
    async fn write_updates_section_with_commented_header() {
        let tmp = TestTempDir::new("file-store-comment");
        let path = tmp.write_text(
            "settings.toml",
            "[agent] # mine\nselected_profile = \"auto\"\n",
        );
        let store = FileSettingsStore::open(&path).unwrap();
        assert_eq!(store.current().selected_agent_profile.as_deref(), Some("auto"));

        store
            .write(SettingsPatch::select_profile("balanced"))
            .await
            .unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[agent] # mine\nselected_profile = \"balanced\"\n"
        );
    }

    #[tokio::test]
    async fn write_rejects_dotted_agent_keys_without_touching_disk() {
        let tmp = TestTempDir::new("file-store-dotted");
        let original = "agent.selected_profile = \"auto\"\n";
        let path = tmp.write_text("settings.toml", original);
        let store = FileSettingsStore::open(&path).unwrap();
        assert_eq!(store.current().selected_agent_profile.as_deref(), Some("auto"));

        let err = store
            .write(SettingsPatch::select_profile("quick"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Invalid(_)), "{err}");
        assert!(err.to_string().contains("dotted keys"), "{err}");
        assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
        assert_eq!(store.current().selected_agent_profile.as_deref(), Some("auto"));
    }

    #[test]
    fn verify_reports_fields_that_did_not_stick() {
        let parsed = parse_settings_text("[AGENT]\nselected_profile = \"quick\"\n").unwrap();
        let err = verify_patch_applied(&parsed, &SettingsPatch::select_profile("quick"))
            .unwrap_err();
        assert!(matches!(err, StoreError::Invalid(_)), "{err}");

        let parsed = parse_settings_text("[display]\ncolor = true\n").unwrap();
        let patch = SettingsPatch {
            color: Some(false),
            ..SettingsPatch::default()
        };
        assert!(verify_patch_applied(&parsed, &patch).is_err());
    }

    #[tokio::test]
    async fn file_and_memory_stores_agree_on_stored_value() {
        let tmp = TestTempDir::new("file-store-agree");
        let file_store = FileSettingsStore::open(tmp.child("settings.toml")).unwrap();
        let memory_store = crate::settings::MemorySettingsStore::default();

        for id in ["fast", "Quick-2", "with space"] {
            let patch = SettingsPatch::select_profile(id);
            let from_file = file_store.write(patch.clone()).await.unwrap();
            let from_memory = memory_store.write(patch).await.unwrap();
            assert_eq!(from_file.selected_agent_profile.as_deref(), Some(id));
            assert_eq!(from_file, from_memory);
        }

        for padded in [" fast ", "fast\n"] {
            let patch = SettingsPatch::select_profile(padded);
            assert!(file_store.write(patch.clone()).await.is_err());
            assert!(memory_store.write(patch).await.is_err());
        }
    }
}
