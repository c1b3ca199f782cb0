//! Application entry orchestration for the agent-profiles CLI.

use std::io::{self, IsTerminal};
use std::sync::Arc;

use agent_profiles::config::{
    load_catalog, read_settings_file, resolve_settings_location, SettingsSource,
};
use agent_profiles::selector::ProfileSelector;
use agent_profiles::settings::{FileSettingsStore, SettingsState};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::app::commands::profile::{handle_list, handle_pick, handle_select, handle_show};
use crate::cli::{Args, Command};

/// Environment variable holding the tracing filter directive.
pub(crate) const LOG_ENV: &str = "AGENT_PROFILES_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the stderr tracing subscriber.
pub(crate) fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Run one CLI invocation.
pub(crate) async fn run(args: Args) -> Result<(), String> {
    let location = resolve_settings_location(args.config.as_deref()).map_err(|e| e.to_string())?;
    debug!(path = %location.path.display(), source = ?location.source, "resolved settings path");
    let command = args.command();

    if command == Command::Path {
        println!(
            "{} ({})",
            location.path.display(),
            source_label(location.source)
        );
        return Ok(());
    }

    let file = read_settings_file(&location.path)
        .map_err(|e| format!("failed to read `{}`: {e}", location.path.display()))?;
    let catalog = load_catalog(&file)
        .map_err(|e| format!("failed to load profiles from `{}`: {e}", location.path.display()))?;
    let store = FileSettingsStore::open(&location.path)
        .map_err(|e| format!("failed to open `{}`: {e}", location.path.display()))?;
    let color = !args.no_color && SettingsState::from_file(&file).display.color;
    let selector = ProfileSelector::new(Arc::new(catalog), Arc::new(store));

    let mut stdout = io::stdout();
    match command {
        Command::List { json } => {
            let color = color && stdout.is_terminal();
            handle_list(&mut stdout, &selector, color, json)
        }
        Command::Show => handle_show(&mut stdout, &selector),
        Command::Select { profile } => handle_select(&mut stdout, &selector, &profile).await,
        Command::Pick => handle_pick(&mut stdout, &selector, color).await,
        Command::Path => Ok(()),
    }
}

fn source_label(source: SettingsSource) -> &'static str {
    match source {
        SettingsSource::Explicit => "--config",
        SettingsSource::Env => "AGENT_PROFILES_CONFIG",
        SettingsSource::Local => "local",
        SettingsSource::Global => "global",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_labels_are_distinct() {
        let labels = [
            source_label(SettingsSource::Explicit),
            source_label(SettingsSource::Env),
            source_label(SettingsSource::Local),
            source_label(SettingsSource::Global),
        ];
        for (idx, label) in labels.iter().enumerate() {
            assert!(!labels[idx + 1..].contains(label));
        }
    }
}
