use rusqlite::params;

use crate::db::models::Settings;
use crate::db::settings_keys::OPTIONS_KEY;
use crate::db::DbPool;
use crate::error::AppError;

/// Get a setting value by key. Returns None if not found.
pub fn get(pool: &DbPool, key: &str) -> Result<Option<String>, AppError> {
    let conn = pool.get()?;
    let result = conn.query_row(
        "SELECT value FROM app_settings WHERE key = ?1",
        params![key],
        |row| row.get::<_, String>(0),
    );

    match result {
        Ok(val) => Ok(Some(val)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(AppError::Database(e)),
    }
}

/// Set a setting value. Creates or updates the key.
pub fn set(pool: &DbPool, key: &str, value: &str) -> Result<(), AppError> {
    let conn = pool.get()?;
    let now = chrono::Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO app_settings (key, value, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = ?3",
        params![key, value, now],
    )?;
    Ok(())
}

/// Delete a setting by key. Returns true if a row was deleted.
pub fn delete(pool: &DbPool, key: &str) -> Result<bool, AppError> {
    let conn = pool.get()?;
    let rows = conn.execute("DELETE FROM app_settings WHERE key = ?1", params![key])?;
    Ok(rows > 0)
}

/// Load the plugin settings document. A missing key yields defaults; a
/// document that no longer parses is logged and also yields defaults.
pub fn load(pool: &DbPool) -> Result<Settings, AppError> {
    let Some(raw) = get(pool, OPTIONS_KEY)? else {
        return Ok(Settings::default());
    };

    match serde_json::from_str::<Settings>(&raw) {
        Ok(settings) => Ok(settings),
        Err(e) => {
            tracing::warn!(error = %e, "Stored settings are unreadable, using defaults");
            Ok(Settings::default())
        }
    }
}

/// Persist the plugin settings document. Callers validate first.
pub fn store(pool: &DbPool, settings: &Settings) -> Result<(), AppError> {
    let json = serde_json::to_string(settings)?;
    set(pool, OPTIONS_KEY, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_test_db;
    use crate::db::models::{ButtonKey, CustomButton};

    #[test]
    fn test_get_set_delete() {
        let pool = init_test_db().unwrap();

        // Get non-existent
        assert_eq!(get(&pool, "foo").unwrap(), None);

        set(&pool, "foo", "bar").unwrap();
        assert_eq!(get(&pool, "foo").unwrap(), Some("bar".into()));

        // Overwrite
        set(&pool, "foo", "baz").unwrap();
        assert_eq!(get(&pool, "foo").unwrap(), Some("baz".into()));

        assert!(delete(&pool, "foo").unwrap());
        assert_eq!(get(&pool, "foo").unwrap(), None);

        // Delete non-existent
        assert!(!delete(&pool, "foo").unwrap());
    }

    #[test]
    fn load_defaults_when_missing() {
        let pool = init_test_db().unwrap();
        assert_eq!(load(&pool).unwrap(), Settings::default());
    }

    #[test]
    fn store_then_load() {
        let pool = init_test_db().unwrap();
        let settings = Settings {
            show_on_all_by_default: true,
            title: "Ask an assistant".into(),
            custom_buttons: vec![CustomButton::new("Kagi", "https://kagi.com/search?q={prompt}")],
            ..Settings::default()
        };
        store(&pool, &settings).unwrap();
        assert_eq!(load(&pool).unwrap(), settings);
    }

    #[test]
    fn corrupt_document_falls_back_to_defaults() {
        let pool = init_test_db().unwrap();
        set(&pool, OPTIONS_KEY, "{not json").unwrap();
        assert_eq!(load(&pool).unwrap(), Settings::default());
    }

    #[test]
    fn unknown_button_key_keeps_rest_of_document() {
        let pool = init_test_db().unwrap();
        set(
            &pool,
            OPTIONS_KEY,
            r#"{"show_on_all_posts":true,"title":"Mine","buttons":{"claude":true,"copilot":true}}"#,
        )
        .unwrap();
        let loaded = load(&pool).unwrap();
        assert!(loaded.show_on_all_by_default);
        assert_eq!(loaded.title, "Mine");
        assert_eq!(loaded.enabled_standard_buttons(), vec![ButtonKey::Claude]);
    }
}
