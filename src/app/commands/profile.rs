//! Profile command helpers.
//!
//! This module owns `list`/`show`/`select`/`pick` behavior and selector
//! parsing so CLI wiring stays in `entry.rs`.

use std::io::{self, Write};

use agent_profiles::catalog::CatalogProvider;
use agent_profiles::selector::{LabelKind, ProfileSelector};
use agent_profiles::tui::text::terminal_columns;
use agent_profiles::tui::{pick_profile, write_profile_section, write_warning};

/// Render every card, or the card list as JSON.
pub(crate) fn handle_list<W: Write>(
    out: &mut W,
    selector: &ProfileSelector,
    color: bool,
    json: bool,
) -> Result<(), String> {
    let cards = selector.cards();
    if json {
        let text = serde_json::to_string_pretty(&cards)
            .map_err(|e| format!("failed to encode profiles: {e}"))?;
        writeln!(out, "{text}").map_err(write_failed)?;
        return Ok(());
    }
    write_profile_section(out, &cards, color, terminal_columns()).map_err(write_failed)?;
    if !cards.iter().any(|card| card.selected) {
        let message = format!(
            "selected profile `{}` is not in the catalog",
            selector.current_selection()
        );
        write_warning(out, &message, color).map_err(write_failed)?;
    }
    Ok(())
}

/// Print the effective selection with resolved labels.
pub(crate) fn handle_show<W: Write>(out: &mut W, selector: &ProfileSelector) -> Result<(), String> {
    let selected = selector.current_selection();
    let Some(profile) = selector.catalog().profile(&selected) else {
        writeln!(out, "{selected}: not in the profile catalog").map_err(write_failed)?;
        return Ok(());
    };
    writeln!(
        out,
        "{selected}: {}\n  model: {}\n  thinking: {}",
        profile.name,
        selector.label(LabelKind::Model, &profile.model),
        selector.label(LabelKind::ThinkingLevel, &profile.thinking_level),
    )
    .map_err(write_failed)
}

/// Persist a selection given as id or 1-based index.
pub(crate) async fn handle_select<W: Write>(
    out: &mut W,
    selector: &ProfileSelector,
    input: &str,
) -> Result<(), String> {
    let id = resolve_profile_selector(selector.catalog(), input)?;
    persist_selection(out, selector, &id).await
}

/// Let the user choose a card interactively, then persist it.
pub(crate) async fn handle_pick<W: Write>(
    out: &mut W,
    selector: &ProfileSelector,
    color: bool,
) -> Result<(), String> {
    let cards = selector.cards();
    if cards.is_empty() {
        return Err("no profiles are configured".to_string());
    }
    let picked = pick_profile(color, &cards)
        .map_err(|e| format!("failed to read profile selection: {e}"))?;
    let Some(index) = picked else {
        return Ok(());
    };
    persist_selection(out, selector, &cards[index].id).await
}

async fn persist_selection<W: Write>(
    out: &mut W,
    selector: &ProfileSelector,
    id: &str,
) -> Result<(), String> {
    if selector.current_selection() == id {
        writeln!(out, "profile already active: {id}").map_err(write_failed)?;
        return Ok(());
    }

    let state = selector
        .select(id)
        .wait()
        .await
        .map_err(|e| format!("failed to save profile `{id}`: {e}"))?;
    confirm_persisted(out, selector, id, state.selected_agent_profile.as_deref())
}

fn confirm_persisted<W: Write>(
    out: &mut W,
    selector: &ProfileSelector,
    id: &str,
    persisted: Option<&str>,
) -> Result<(), String> {
    if persisted != Some(id) {
        return Err(format!(
            "profile `{id}` was not saved; the settings file now holds `{}`",
            persisted.unwrap_or("(none)")
        ));
    }
    let name = selector
        .catalog()
        .profile(id)
        .map(|profile| profile.name.as_str())
        .unwrap_or(id);
    writeln!(out, "selected profile: {id} ({name})").map_err(write_failed)
}

/// Resolve selector input into a catalog profile id.
///
/// Accepts an exact id, a case-insensitive id, or a 1-based list index.
pub(crate) fn resolve_profile_selector(
    catalog: &dyn CatalogProvider,
    selector: &str,
) -> Result<String, String> {
    let trimmed = selector.trim();
    if trimmed.is_empty() {
        return Err("Usage: agent-profiles select <id|index>".to_string());
    }
    if catalog.profile(trimmed).is_some() {
        return Ok(trimmed.to_string());
    }

    let profiles = catalog.profiles();
    if let Ok(index) = trimmed.parse::<usize>() {
        if index == 0 || index > profiles.len() {
            return Err(format!(
                "Profile index out of range: {index}. Choose 1-{}.",
                profiles.len()
            ));
        }
        return Ok(profiles[index - 1].id.clone());
    }

    let normalized = trimmed.to_ascii_lowercase();
    let mut matches = profiles
        .iter()
        .filter(|profile| profile.id.to_ascii_lowercase() == normalized)
        .map(|profile| profile.id.clone())
        .collect::<Vec<_>>();
    if matches.len() == 1 {
        return Ok(matches.remove(0));
    }

    let available = profiles
        .iter()
        .map(|profile| profile.id.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    Err(format!("Unknown profile `{trimmed}`. Available: {available}."))
}

fn write_failed(e: io::Error) -> String {
    format!("failed to write output: {e}")
}
