use rusqlite::params;

use crate::db::models::ContentOverride;
use crate::db::settings_keys::{META_HIDE, META_SHOW};
use crate::db::DbPool;
use crate::error::AppError;

/// Get one attribute of a content item. Returns None if not set.
pub fn get(pool: &DbPool, item_id: i64, key: &str) -> Result<Option<String>, AppError> {
    let conn = pool.get()?;
    let result = conn.query_row(
        "SELECT meta_value FROM item_meta WHERE item_id = ?1 AND meta_key = ?2",
        params![item_id, key],
        |row| row.get::<_, String>(0),
    );

    match result {
        Ok(val) => Ok(Some(val)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(AppError::Database(e)),
    }
}

/// Set one attribute of a content item. Creates or updates it.
pub fn set(pool: &DbPool, item_id: i64, key: &str, value: &str) -> Result<(), AppError> {
    let conn = pool.get()?;
    let now = chrono::Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO item_meta (item_id, meta_key, meta_value, updated_at)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(item_id, meta_key) DO UPDATE SET meta_value = ?3, updated_at = ?4",
        params![item_id, key, value, now],
    )?;
    Ok(())
}

/// Delete an attribute key across every item. Returns the number of rows removed.
pub fn delete_by_key(pool: &DbPool, key: &str) -> Result<usize, AppError> {
    let conn = pool.get()?;
    let rows = conn.execute("DELETE FROM item_meta WHERE meta_key = ?1", params![key])?;
    Ok(rows)
}

/// Stored flags are "1"/"0"; anything else non-empty and not "0" counts as set.
fn is_truthy(value: Option<String>) -> bool {
    match value.as_deref().map(str::trim) {
        None | Some("") | Some("0") => false,
        Some(_) => true,
    }
}

/// Load the show/hide override for an item. Missing flags read as false.
pub fn load_override(pool: &DbPool, item_id: i64) -> Result<ContentOverride, AppError> {
    Ok(ContentOverride {
        show: is_truthy(get(pool, item_id, META_SHOW)?),
        hide: is_truthy(get(pool, item_id, META_HIDE)?),
    })
}

/// Write both override flags in one transaction, normalizing so hide wins.
pub fn store_override(
    pool: &DbPool,
    item_id: i64,
    show: bool,
    hide: bool,
) -> Result<ContentOverride, AppError> {
    let normalized = ContentOverride::normalized(show, hide);
    let flag = |b: bool| if b { "1" } else { "0" };

    let mut conn = pool.get()?;
    let tx = conn.transaction()?;
    let now = chrono::Utc::now().to_rfc3339();
    for (key, value) in [(META_SHOW, normalized.show), (META_HIDE, normalized.hide)] {
        tx.execute(
            "INSERT INTO item_meta (item_id, meta_key, meta_value, updated_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(item_id, meta_key) DO UPDATE SET meta_value = ?3, updated_at = ?4",
            params![item_id, key, flag(value), now],
        )?;
    }
    tx.commit()?;

    Ok(normalized)
}
