//! Decides whether share buttons appear on a content item.
//!
//! The same function backs both the content filter and the stylesheet
//! hook, so the two always agree for the same inputs.

use crate::db::models::{ContentOverride, Settings};

/// Strict precedence, first match wins:
/// 1. item type not enabled -> hidden
/// 2. per-item hide -> hidden
/// 3. per-item show -> shown
/// 4. global show-on-all -> shown
/// 5. otherwise hidden
pub fn should_show(settings: &Settings, item_type: &str, item_override: &ContentOverride) -> bool {
    if !settings.is_post_type_enabled(item_type) {
        return false;
    }
    if item_override.hide {
        return false;
    }
    if item_override.show {
        return true;
    }
    settings.show_on_all_by_default
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn settings(show_all: bool, types: &[&str]) -> Settings {
        Settings {
            show_on_all_by_default: show_all,
            enabled_post_types: types.iter().map(|t| t.to_string()).collect::<BTreeSet<_>>(),
            ..Settings::default()
        }
    }

    const NONE: ContentOverride = ContentOverride { show: false, hide: false };
    const SHOW: ContentOverride = ContentOverride { show: true, hide: false };
    const HIDE: ContentOverride = ContentOverride { show: false, hide: true };
    const BOTH: ContentOverride = ContentOverride { show: true, hide: true };

    #[test]
    fn disabled_type_beats_every_override() {
        let s = settings(true, &["post"]);
        for o in [NONE, SHOW, HIDE, BOTH] {
            assert!(!should_show(&s, "page", &o));
        }
    }

    #[test]
    fn hide_dominates_show() {
        let s = settings(true, &["post"]);
        assert!(!should_show(&s, "post", &HIDE));
        assert!(!should_show(&s, "post", &BOTH));
    }

    #[test]
    fn show_wins_without_global_default() {
        let s = settings(false, &["post"]);
        assert!(should_show(&s, "post", &SHOW));
    }

    #[test]
    fn global_default_decides_when_no_override() {
        assert!(should_show(&settings(true, &["post"]), "post", &NONE));
        assert!(!should_show(&settings(false, &["post"]), "post", &NONE));
    }

    #[test]
    fn empty_type_set_means_post_only() {
        let s = settings(true, &[""]);
        assert!(should_show(&s, "post", &NONE));
        assert!(!should_show(&s, "page", &NONE));
    }
}
