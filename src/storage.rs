//! Persisted State
//!
//! Local-storage access for the serialized session record and the theme
//! preference. All reads are best-effort: a missing or malformed record is
//! an error for the caller to log, never a crash.

use thiserror::Error;

use crate::state::session::UserRecord;

/// Fixed key for the serialized session record.
pub const SESSION_KEY: &str = "nutriplan.session";

/// Fixed key for the light/dark theme preference.
pub const THEME_KEY: &str = "nutriplan.theme";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,

    #[error("failed to access key '{0}'")]
    Access(String),

    #[error("malformed session record: {0}")]
    Malformed(#[from] serde_json::Error),
}

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

/// Read the persisted session record. `Ok(None)` means no record exists.
pub fn load_session() -> Result<Option<UserRecord>, StorageError> {
    let storage = local_storage()?;
    let raw = storage
        .get_item(SESSION_KEY)
        .map_err(|_| StorageError::Access(SESSION_KEY.to_string()))?;

    match raw {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

/// Write the session record, replacing any previous one.
pub fn save_session(user: &UserRecord) -> Result<(), StorageError> {
    let storage = local_storage()?;
    let json = serde_json::to_string(user)?;
    storage
        .set_item(SESSION_KEY, &json)
        .map_err(|_| StorageError::Access(SESSION_KEY.to_string()))
}

/// Remove the session record (logout).
pub fn clear_session() {
    if let Ok(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}

/// Read the persisted theme preference ("dark" / "light").
pub fn load_theme() -> Option<String> {
    local_storage().ok()?.get_item(THEME_KEY).ok()?
}

/// Persist the theme preference.
pub fn save_theme(theme: &str) {
    if let Ok(storage) = local_storage() {
        let _ = storage.set_item(THEME_KEY, theme);
    }
}
