//! Settings-file discovery, parsing, and catalog loading.
//!
//! One TOML file carries both the persisted selection and optional catalog
//! additions. See [`paths`] for discovery precedence.

use std::path::Path;

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::ConfigError;

mod paths;
mod persist;
mod types;

pub use paths::{
    config_root_dir, default_global_settings_path, resolve_settings_location, SettingsLocation,
    SettingsSource, APP_DIR_NAME, CONFIG_PATH_ENV, GLOBAL_SETTINGS_FILE, LOCAL_SETTINGS_FILE,
};
pub(crate) use persist::{toml_string_literal, upsert_section_key};
pub use types::{AgentSection, DisplaySection, SettingsFile};

/// Parse settings text. Empty text yields defaults.
pub fn parse_settings_text(text: &str) -> Result<SettingsFile, ConfigError> {
    Ok(toml::from_str(text)?)
}

/// Read and parse a settings file; a missing file yields defaults.
pub fn read_settings_file(path: &Path) -> Result<SettingsFile, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(text) => parse_settings_text(&text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "settings file missing, using defaults");
            Ok(SettingsFile::default())
        }
        Err(e) => Err(ConfigError::Io(e)),
    }
}

/// Build the effective catalog: built-in profiles plus file additions.
pub fn load_catalog(file: &SettingsFile) -> Result<Catalog, ConfigError> {
    Catalog::builtin().with_overlay(file.catalog_overlay())
}
