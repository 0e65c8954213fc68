//! Remembered session in localStorage.
//!
//! Only the WebID and pod URL the user typed are stored, JSON-encoded, so
//! the connect form can be pre-filled and the explorer restored on reload.

use podview_core::Session;

use crate::config::SESSION_KEY;
use crate::core::error::StorageError;
use crate::utils::dom;

/// Load the remembered session, if any.
pub fn load() -> Option<Session> {
    let storage = dom::local_storage()?;
    let json = storage.get_item(SESSION_KEY).ok()??;
    match serde_json::from_str::<Session>(&json) {
        Ok(session) => Some(session),
        Err(err) => {
            tracing::warn!(error = %err, "discarding unreadable stored session");
            let _ = storage.remove_item(SESSION_KEY);
            None
        }
    }
}

/// Remember a session for the next visit.
pub fn save(session: &Session) -> Result<(), StorageError> {
    let storage = dom::local_storage().ok_or(StorageError::StorageUnavailable)?;
    let json = serde_json::to_string(session).map_err(|_| StorageError::SerializationFailed)?;
    storage
        .set_item(SESSION_KEY, &json)
        .map_err(|_| StorageError::SaveFailed)
}

/// Forget the remembered session.
pub fn clear() -> Result<(), StorageError> {
    let storage = dom::local_storage().ok_or(StorageError::StorageUnavailable)?;
    storage
        .remove_item(SESSION_KEY)
        .map_err(|_| StorageError::RemoveFailed)
}
