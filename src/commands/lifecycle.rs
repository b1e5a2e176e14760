use serde::Serialize;

use crate::db::repos::{item_meta, settings};
use crate::db::settings_keys::{META_HIDE, META_SHOW, OPTIONS_KEY};
use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UninstallReport {
    pub options_removed: bool,
    pub overrides_removed: usize,
}

/// Remove every trace of the plugin from the host stores: the settings
/// document and all per-item show/hide flags.
pub fn uninstall(state: &AppState) -> Result<UninstallReport, AppError> {
    let options_removed = settings::delete(&state.db, OPTIONS_KEY)?;
    let overrides_removed = item_meta::delete_by_key(&state.db, META_HIDE)?
        + item_meta::delete_by_key(&state.db, META_SHOW)?;

    tracing::info!(options_removed, overrides_removed, "Plugin data removed");
    Ok(UninstallReport {
        options_removed,
        overrides_removed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_test_db;
    use crate::db::models::{ContentOverride, Settings};

    #[test]
    fn uninstall_clears_settings_and_overrides() {
        let state = AppState::with_pool(init_test_db().unwrap());
        settings::store(&state.db, &Settings::default()).unwrap();
        item_meta::store_override(&state.db, 1, true, false).unwrap();
        item_meta::store_override(&state.db, 2, false, true).unwrap();
        item_meta::set(&state.db, 2, "_unrelated", "keep").unwrap();

        let report = uninstall(&state).unwrap();
        assert_eq!(
            report,
            UninstallReport {
                options_removed: true,
                overrides_removed: 4
            }
        );
        assert_eq!(settings::get(&state.db, OPTIONS_KEY).unwrap(), None);
        assert_eq!(
            item_meta::load_override(&state.db, 2).unwrap(),
            ContentOverride::default()
        );
        assert_eq!(
            item_meta::get(&state.db, 2, "_unrelated").unwrap(),
            Some("keep".into())
        );
    }

    #[test]
    fn uninstall_on_empty_store_is_a_no_op() {
        let state = AppState::with_pool(init_test_db().unwrap());
        let report = uninstall(&state).unwrap();
        assert!(!report.options_removed);
        assert_eq!(report.overrides_removed, 0);
    }
}
