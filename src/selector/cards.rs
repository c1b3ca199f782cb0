//! Pure card-model building: selection and label resolution.

use serde::Serialize;

use crate::catalog::{AgentProfile, CatalogProvider};
use crate::icons::IconKey;
use crate::settings::SettingsState;

/// Effective selection when the store holds none.
pub const FALLBACK_PROFILE_ID: &str = "auto";

/// Suffix appended to the thinking-level badge.
pub const THINKING_BADGE_SUFFIX: &str = " Thinking";

/// Which label table a lookup targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelKind {
    Model,
    ThinkingLevel,
}

/// Render model for one profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileCard {
    pub id: String,
    pub name: String,
    /// Full description; front ends clamp it to two lines.
    pub description: String,
    pub icon: IconKey,
    /// Resolved model badge text.
    pub model_label: String,
    /// Resolved thinking badge text, e.g. `High Thinking`.
    pub thinking_label: String,
    pub selected: bool,
}

/// Profile id used for highlight comparison.
///
/// Returns the stored selection verbatim when present and non-empty,
/// otherwise [`FALLBACK_PROFILE_ID`].
pub fn resolve_current_selection(state: &SettingsState) -> &str {
    state
        .selected_agent_profile
        .as_deref()
        .filter(|id| !id.is_empty())
        .unwrap_or(FALLBACK_PROFILE_ID)
}

/// Display label for `value`, or `value` itself when the table has no entry.
pub fn resolve_display_label<'a>(
    catalog: &'a dyn CatalogProvider,
    kind: LabelKind,
    value: &'a str,
) -> &'a str {
    let table = match kind {
        LabelKind::Model => catalog.models(),
        LabelKind::ThinkingLevel => catalog.thinking_levels(),
    };
    table.get(value).unwrap_or(value)
}

/// Build the card for one profile.
pub fn build_card(
    catalog: &dyn CatalogProvider,
    profile: &AgentProfile,
    selected_id: &str,
) -> ProfileCard {
    let thinking =
        resolve_display_label(catalog, LabelKind::ThinkingLevel, &profile.thinking_level);
    ProfileCard {
        id: profile.id.clone(),
        name: profile.name.clone(),
        description: profile.description.clone(),
        icon: IconKey::resolve(profile.icon.as_deref()),
        model_label: resolve_display_label(catalog, LabelKind::Model, &profile.model).to_string(),
        thinking_label: format!("{thinking}{THINKING_BADGE_SUFFIX}"),
        selected: profile.id == selected_id,
    }
}

/// One card per catalog profile, in catalog order.
pub fn build_cards(catalog: &dyn CatalogProvider, state: &SettingsState) -> Vec<ProfileCard> {
    let selected_id = resolve_current_selection(state);
    catalog
        .profiles()
        .iter()
        .map(|profile| build_card(catalog, profile, selected_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, LabelTable};

    fn profile(id: &str, model: &str, thinking: &str) -> AgentProfile {
        AgentProfile {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            icon: None,
            model: model.to_string(),
            thinking_level: thinking.to_string(),
        }
    }

    fn two_profile_catalog() -> Catalog {
        Catalog::new(
            vec![profile("auto", "opus", "high"), profile("fast", "haiku", "low")],
            [("opus", "Opus"), ("haiku", "Haiku")].into_iter().collect(),
            [("high", "High"), ("low", "Low")].into_iter().collect(),
        )
        .unwrap()
    }

    fn state_with(selected: Option<&str>) -> SettingsState {
        SettingsState {
            selected_agent_profile: selected.map(str::to_string),
            ..SettingsState::default()
        }
    }

    #[test]
    fn selection_falls_back_to_auto() {
        assert_eq!(resolve_current_selection(&state_with(None)), "auto");
        assert_eq!(resolve_current_selection(&state_with(Some(""))), "auto");
        assert_eq!(resolve_current_selection(&state_with(Some("  "))), "  ");
        assert_eq!(resolve_current_selection(&state_with(Some("fast"))), "fast");
    }

    #[test]
    fn padded_stored_selection_matches_no_card() {
        let catalog = two_profile_catalog();
        let cards = build_cards(&catalog, &state_with(Some(" fast ")));
        assert!(cards.iter().all(|c| !c.selected));
    }

    #[test]
    fn unset_selection_highlights_auto_with_resolved_badges() {
        let catalog = two_profile_catalog();
        let cards = build_cards(&catalog, &state_with(None));

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id, "auto");
        assert_eq!(cards[0].model_label, "Opus");
        assert_eq!(cards[0].thinking_label, "High Thinking");
        assert!(cards[0].selected);
        assert_eq!(cards[1].id, "fast");
        assert_eq!(cards[1].model_label, "Haiku");
        assert_eq!(cards[1].thinking_label, "Low Thinking");
        assert!(!cards[1].selected);
    }

    #[test]
    fn exactly_the_matching_card_is_selected() {
        let catalog = Catalog::builtin();
        for profile in catalog.profiles() {
            let cards = build_cards(&catalog, &state_with(Some(&profile.id)));
            let selected: Vec<_> = cards.iter().filter(|c| c.selected).map(|c| &c.id).collect();
            assert_eq!(selected, vec![&profile.id]);
        }
    }

    #[test]
    fn unknown_selection_highlights_nothing() {
        let cards = build_cards(&Catalog::builtin(), &state_with(Some("gone")));
        assert!(cards.iter().all(|c| !c.selected));
    }

    #[test]
    fn missing_auto_profile_means_no_highlight() {
        let catalog = Catalog::new(
            vec![profile("fast", "haiku", "low")],
            LabelTable::new(),
            LabelTable::new(),
        )
        .unwrap();
        let cards = build_cards(&catalog, &state_with(None));
        assert!(!cards[0].selected);
    }

    #[test]
    fn unknown_ids_render_literally() {
        let catalog = Catalog::new(
            vec![profile("odd", "unknown-model", "deep")],
            LabelTable::new(),
            LabelTable::new(),
        )
        .unwrap();
        let cards = build_cards(&catalog, &state_with(None));
        assert_eq!(cards[0].model_label, "unknown-model");
        assert_eq!(cards[0].thinking_label, "deep Thinking");
    }

    #[test]
    fn label_resolution_is_idempotent_on_unknown_input() {
        let catalog = two_profile_catalog();
        for kind in [LabelKind::Model, LabelKind::ThinkingLevel] {
            let once = resolve_display_label(&catalog, kind, "mystery");
            assert_eq!(once, "mystery");
            assert_eq!(resolve_display_label(&catalog, kind, once), once);
        }
        assert_eq!(resolve_display_label(&catalog, LabelKind::Model, "opus"), "Opus");
        assert_eq!(resolve_display_label(&catalog, LabelKind::ThinkingLevel, "opus"), "opus");
    }

    #[test]
    fn cards_keep_catalog_order_and_resolve_icons() {
        let cards = build_cards(&Catalog::builtin(), &state_with(None));
        let ids: Vec<_> = cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["auto", "complex", "balanced", "quick"]);
        assert_eq!(cards[0].icon, IconKey::Sparkles);
        assert_eq!(cards[3].icon, IconKey::Zap);

        let catalog = two_profile_catalog();
        let cards = build_cards(&catalog, &state_with(None));
        assert_eq!(cards[0].icon, IconKey::FALLBACK);
    }

    #[cfg(feature = "fuzz-tests")]
    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn unknown_labels_echo_input(value in "[a-z0-9-]{0,16}") {
                let catalog = two_profile_catalog();
                prop_assume!(!catalog.models().contains(&value));
                prop_assert_eq!(resolve_display_label(&catalog, LabelKind::Model, &value), value.as_str());
            }

            #[test]
            fn one_card_per_profile(selected in proptest::option::of("[a-z]{0,6}")) {
                let catalog = Catalog::builtin();
                let cards = build_cards(&catalog, &state_with(selected.as_deref()));
                prop_assert_eq!(cards.len(), catalog.profiles().len());
                prop_assert!(cards.iter().filter(|c| c.selected).count() <= 1);
            }
        }
    }
}
