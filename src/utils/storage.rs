use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

/// The logged-in user survives a reload but not a closed tab, so the
/// session-scoped store is used rather than localStorage.
pub const STORAGE_KEY_CURRENT_USER: &str = "transitTracker_currentUser";

pub fn get_session_storage() -> Option<Storage> {
    window()?.session_storage().ok()?
}

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let storage = get_session_storage().ok_or("Could not access sessionStorage")?;
    let json = serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))?;
    storage
        .set_item(key, &json)
        .map_err(|_| "Error writing to sessionStorage".to_string())?;
    Ok(())
}

pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = get_session_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

pub fn remove_from_storage(key: &str) -> Result<(), String> {
    let storage = get_session_storage().ok_or("Could not access sessionStorage")?;
    storage
        .remove_item(key)
        .map_err(|_| "Error removing from sessionStorage".to_string())?;
    Ok(())
}
