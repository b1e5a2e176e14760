use rusqlite::Connection;

use crate::error::AppError;

/// Run the schema migration. Idempotent.
pub fn run(conn: &Connection) -> Result<(), AppError> {
    tracing::debug!("Running database migrations");

    conn.execute_batch(SCHEMA)?;

    tracing::info!("Database migrations complete");
    Ok(())
}

const SCHEMA: &str = r#"

-- ============================================================================
-- Options store (process-wide key/value)
-- ============================================================================

CREATE TABLE IF NOT EXISTS app_settings (
    key         TEXT PRIMARY KEY,
    value       TEXT NOT NULL,
    updated_at  TEXT NOT NULL
);

-- ============================================================================
-- Per-item attribute store
-- ============================================================================

CREATE TABLE IF NOT EXISTS item_meta (
    item_id     INTEGER NOT NULL,
    meta_key    TEXT NOT NULL,
    meta_value  TEXT NOT NULL,
    updated_at  TEXT NOT NULL,
    PRIMARY KEY (item_id, meta_key)
);
CREATE INDEX IF NOT EXISTS idx_item_meta_key ON item_meta(meta_key);
"#;
