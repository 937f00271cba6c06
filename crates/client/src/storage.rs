//! Cross-platform read access to persisted client state.
//!
//! - Web: `localStorage`
//! - Desktop: one file per key in the platform config directory
//!   (`~/.config/chatdesk/` on Linux, `~/Library/Application Support/chatdesk/`
//!   on macOS, `%APPDATA%\chatdesk\` on Windows)
//!
//! Values are read as stored. Keys written by other libraries (the i18n
//! layer keeps a bare `pt-BR`) are not JSON, so [`load_string`] does no
//! decoding; [`load`] is for keys this app serializes itself.

use serde::de::DeserializeOwned;

/// Load a JSON value. `None` if the key is absent or does not decode.
pub fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    let json = load_string(key)?;
    serde_json::from_str(&json).ok()
}

/// Load the raw stored string.
#[cfg(target_arch = "wasm32")]
pub fn load_string(key: &str) -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage.get_item(key).ok()?
}

#[cfg(not(target_arch = "wasm32"))]
fn get_file_path(key: &str) -> Option<std::path::PathBuf> {
    let app_dir = dirs::config_dir()?.join("chatdesk");
    // Sanitize key to be a valid filename
    let safe_key = key.replace(['/', '\\', ':', '*', '?', '"', '<', '>', '|'], "_");
    Some(app_dir.join(safe_key))
}

/// Load the raw stored string.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_string(key: &str) -> Option<String> {
    let path = get_file_path(key)?;
    let value = std::fs::read_to_string(path).ok()?;
    Some(value.trim_end().to_string())
}
