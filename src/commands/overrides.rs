use serde::{Deserialize, Serialize};

use crate::db::models::ContentOverride;
use crate::db::repos::item_meta as repo;
use crate::error::AppError;
use crate::AppState;

/// Checkbox values posted from the item editor's meta box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverrideSubmission {
    pub show: bool,
    pub hide: bool,
}

/// Request facts the host has already established before a meta-box save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveGuard {
    pub nonce_verified: bool,
    pub is_autosave: bool,
    pub can_edit: bool,
}

impl SaveGuard {
    pub fn permits_write(&self) -> bool {
        self.nonce_verified && !self.is_autosave && self.can_edit
    }
}

pub fn get_override(state: &AppState, item_id: i64) -> Result<ContentOverride, AppError> {
    repo::load_override(&state.db, item_id)
}

/// Persist a meta-box submission. Returns `false` without writing when the
/// guard refuses the request. Hide wins when both boxes are checked.
pub fn save_override(
    state: &AppState,
    item_id: i64,
    submission: OverrideSubmission,
    guard: SaveGuard,
) -> Result<bool, AppError> {
    if !guard.permits_write() {
        tracing::debug!(item_id, ?guard, "Override save skipped");
        return Ok(false);
    }

    let stored = repo::store_override(&state.db, item_id, submission.show, submission.hide)?;
    tracing::info!(item_id, state = ?stored.state(), "Override saved");
    Ok(true)
}
