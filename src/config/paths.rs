//! Settings-file discovery.
//!
//! Precedence (highest wins):
//! explicit `--config` path > `AGENT_PROFILES_CONFIG` > `./agent-profiles.toml`
//! (when present) > `$XDG_CONFIG_HOME/agent-profiles/settings.toml`.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Environment variable naming an explicit settings file.
pub const CONFIG_PATH_ENV: &str = "AGENT_PROFILES_CONFIG";
/// Project-local settings file name, checked in the working directory.
pub const LOCAL_SETTINGS_FILE: &str = "agent-profiles.toml";
/// Per-user config directory name.
pub const APP_DIR_NAME: &str = "agent-profiles";
/// Per-user settings file name inside [`APP_DIR_NAME`].
pub const GLOBAL_SETTINGS_FILE: &str = "settings.toml";

/// Where the effective settings path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsSource {
    /// `--config` flag.
    Explicit,
    /// [`CONFIG_PATH_ENV`].
    Env,
    /// `./agent-profiles.toml`.
    Local,
    /// Per-user config directory.
    Global,
}

/// Effective settings file path plus its origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsLocation {
    pub path: PathBuf,
    pub source: SettingsSource,
}

/// Resolve the settings file to read from and persist into.
///
/// The returned path need not exist yet; stores create it on first write.
pub fn resolve_settings_location(
    path_override: Option<&str>,
) -> Result<SettingsLocation, ConfigError> {
    resolve_settings_location_with(
        path_override,
        |name| std::env::var(name).ok(),
        |path| path.exists(),
        config_root_dir,
    )
}

pub(super) fn resolve_settings_location_with<FEnv, FExists, FRoot>(
    path_override: Option<&str>,
    env_lookup: FEnv,
    exists: FExists,
    config_root: FRoot,
) -> Result<SettingsLocation, ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
    FExists: Fn(&Path) -> bool,
    FRoot: Fn() -> Option<PathBuf>,
{
    if let Some(path) = non_empty(path_override) {
        return Ok(SettingsLocation {
            path: PathBuf::from(path),
            source: SettingsSource::Explicit,
        });
    }

    if let Some(path) = env_lookup(CONFIG_PATH_ENV) {
        if let Some(path) = non_empty(Some(&path)) {
            return Ok(SettingsLocation {
                path: PathBuf::from(path),
                source: SettingsSource::Env,
            });
        }
    }

    let local = Path::new(LOCAL_SETTINGS_FILE);
    if exists(local) {
        return Ok(SettingsLocation {
            path: local.to_path_buf(),
            source: SettingsSource::Local,
        });
    }

    default_global_settings_path_with(config_root)
        .map(|path| SettingsLocation {
            path,
            source: SettingsSource::Global,
        })
        .ok_or_else(|| {
            ConfigError::Invalid(
                "unable to resolve a settings path; pass --config or set AGENT_PROFILES_CONFIG"
                    .to_string(),
            )
        })
}

/// Return the per-user settings path (`~/.config/agent-profiles/settings.toml`).
pub fn default_global_settings_path() -> Option<PathBuf> {
    default_global_settings_path_with(config_root_dir)
}

fn default_global_settings_path_with<FRoot>(config_root: FRoot) -> Option<PathBuf>
where
    FRoot: Fn() -> Option<PathBuf>,
{
    config_root().map(|dir| dir.join(APP_DIR_NAME).join(GLOBAL_SETTINGS_FILE))
}

/// Resolve the base config directory from env/home conventions.
pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
