use serde::{Deserialize, Serialize};

use crate::db::models::{ButtonKey, CustomButton, Settings};
use crate::db::repos::settings as repo;
use crate::error::AppError;
use crate::validation::{strip_at_prefix, validate_custom_buttons};
use crate::AppState;

/// Post types the host never offers as share-button targets.
pub const EXCLUDED_POST_TYPES: &[&str] = &[
    "attachment",
    "saswp",
    "saswp_reviews",
    "saswp-collections",
    "nav_menu_item",
    "revision",
    "custom_css",
    "customize_changeset",
    "oembed_cache",
    "user_request",
    "wp_block",
];

/// Types that count as content even when not flagged publicly queryable.
const ALWAYS_QUERYABLE: &[&str] = &["post", "page"];

/// A post type registered with the host platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostTypeInfo {
    pub name: String,
    pub label: String,
    pub public: bool,
    pub publicly_queryable: bool,
}

/// One admin checkbox for a standard button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonToggle {
    pub key: ButtonKey,
    pub label: &'static str,
    pub checked: bool,
}

pub fn get_settings(state: &AppState) -> Result<Settings, AppError> {
    repo::load(&state.db)
}

/// Validate and persist a settings submission.
///
/// Any invalid custom-button URL rejects the whole submission with one error
/// per row and leaves the stored settings untouched. Accepted submissions are
/// stored with leading `@` stripped from URLs, fully blank custom rows
/// removed, and blank post-type entries dropped.
pub fn save_settings(state: &AppState, input: Settings) -> Result<Settings, AppError> {
    if let Err(e) = validate_custom_buttons(&input.custom_buttons) {
        tracing::info!(error = %e, "Settings save rejected");
        return Err(e);
    }

    let settings = normalize(input);
    repo::store(&state.db, &settings)?;

    tracing::info!(
        post_types = settings.enabled_post_types.len(),
        custom_buttons = settings.custom_buttons.len(),
        show_on_all = settings.show_on_all_by_default,
        "Settings saved"
    );
    Ok(settings)
}

fn normalize(mut input: Settings) -> Settings {
    input.custom_buttons = input
        .custom_buttons
        .into_iter()
        .filter(|b| !b.is_blank())
        .map(|b| CustomButton {
            url_template: strip_at_prefix(&b.url_template).to_string(),
            label: b.label,
        })
        .collect();
    input.enabled_post_types.retain(|t| !t.trim().is_empty());
    input
}

/// Checkbox state for each standard button. An empty mapping shows every
/// box checked, mirroring how rendering treats it.
pub fn standard_button_states(settings: &Settings) -> Vec<ButtonToggle> {
    ButtonKey::ALL
        .into_iter()
        .map(|key| ButtonToggle {
            key,
            label: key.label(),
            checked: settings.is_standard_button_enabled(key),
        })
        .collect()
}

/// Filter the host's registered post types down to the ones an administrator
/// may enable: public, not a system type, and publicly queryable (post and
/// page are always allowed).
pub fn selectable_post_types(registered: &[PostTypeInfo]) -> Vec<PostTypeInfo> {
    registered
        .iter()
        .filter(|t| t.public)
        .filter(|t| !EXCLUDED_POST_TYPES.contains(&t.name.as_str()))
        .filter(|t| t.publicly_queryable || ALWAYS_QUERYABLE.contains(&t.name.as_str()))
        .cloned()
        .collect()
}

/// Post types whose editor offers the per-item show/hide override.
pub fn meta_box_post_types(settings: &Settings) -> Vec<String> {
    settings
        .effective_post_types()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_test_db;
    use crate::db::settings_keys::OPTIONS_KEY;
    use std::collections::{BTreeMap, BTreeSet};

    fn state() -> AppState {
        AppState::with_pool(init_test_db().unwrap())
    }

    fn post_type(name: &str, public: bool, queryable: bool) -> PostTypeInfo {
        PostTypeInfo {
            name: name.into(),
            label: name.to_uppercase(),
            public,
            publicly_queryable: queryable,
        }
    }

    #[test]
    fn rejected_save_keeps_stored_bytes() {
        let state = state();
        save_settings(
            &state,
            Settings {
                title: "Original".into(),
                ..Settings::default()
            },
        )
        .unwrap();
        let before = repo::get(&state.db, OPTIONS_KEY).unwrap();

        for bad in ["ftp://x.com", "not a url"] {
            let err = save_settings(
                &state,
                Settings {
                    title: "Changed".into(),
                    custom_buttons: vec![CustomButton::new("Bad", bad)],
                    ..Settings::default()
                },
            )
            .unwrap_err();
            assert!(matches!(err, AppError::InvalidSettings(ref rows) if rows.len() == 1));
            assert_eq!(repo::get(&state.db, OPTIONS_KEY).unwrap(), before);
        }
    }

    #[test]
    fn rejected_first_save_writes_nothing() {
        let state = state();
        let result = save_settings(
            &state,
            Settings {
                custom_buttons: vec![CustomButton::new("Bad", "ftp://x.com")],
                ..Settings::default()
            },
        );
        assert!(result.is_err());
        assert_eq!(repo::get(&state.db, OPTIONS_KEY).unwrap(), None);
    }

    #[test]
    fn at_prefix_is_stripped_on_save() {
        let state = state();
        let saved = save_settings(
            &state,
            Settings {
                custom_buttons: vec![CustomButton::new("At", "@@https://example.com?q={prompt}")],
                ..Settings::default()
            },
        )
        .unwrap();
        assert_eq!(saved.custom_buttons[0].url_template, "https://example.com?q={prompt}");
        assert_eq!(get_settings(&state).unwrap(), saved);
    }

    #[test]
    fn blank_rows_and_post_types_are_dropped() {
        let state = state();
        let saved = save_settings(
            &state,
            Settings {
                enabled_post_types: BTreeSet::from(["".to_string(), "page".to_string()]),
                custom_buttons: vec![
                    CustomButton::new("", ""),
                    CustomButton::new("Label only", ""),
                ],
                ..Settings::default()
            },
        )
        .unwrap();
        assert_eq!(saved.enabled_post_types, BTreeSet::from(["page".to_string()]));
        assert_eq!(saved.custom_buttons, vec![CustomButton::new("Label only", "")]);
    }

    #[test]
    fn empty_button_map_checks_every_box() {
        let states = standard_button_states(&Settings::default());
        assert_eq!(states.len(), 6);
        assert!(states.iter().all(|s| s.checked));

        let settings = Settings {
            standard_buttons: BTreeMap::from([(ButtonKey::Perplexity, true)]),
            ..Settings::default()
        };
        let checked: Vec<ButtonKey> = standard_button_states(&settings)
            .into_iter()
            .filter(|s| s.checked)
            .map(|s| s.key)
            .collect();
        assert_eq!(checked, vec![ButtonKey::Perplexity]);
    }

    #[test]
    fn selectable_types_skip_system_and_private() {
        let registered = vec![
            post_type("post", true, false),
            post_type("page", true, false),
            post_type("attachment", true, true),
            post_type("product", true, true),
            post_type("internal", true, false),
            post_type("draft_thing", false, true),
            post_type("wp_block", true, true),
        ];
        let names: Vec<String> = selectable_post_types(&registered)
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["post", "page", "product"]);
    }

    #[test]
    fn meta_box_types_follow_effective_set() {
        assert_eq!(meta_box_post_types(&Settings::default()), vec!["post"]);
        let settings = Settings {
            enabled_post_types: BTreeSet::from(["".to_string()]),
            ..Settings::default()
        };
        assert_eq!(meta_box_post_types(&settings), vec!["post"]);
    }
}
