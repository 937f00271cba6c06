//! The two independent routines the shell runs once after mounting.
//!
//! They write disjoint signals, so neither cares which finishes first.

use chatdesk_shared::{detect_locale, resolve_preference, LANGUAGE_STORAGE_KEY};
use dioxus::prelude::*;

use crate::api_client::ApiClient;
use crate::storage;
use crate::theme::ThemeContext;
use crate::toast::use_toasts;

/// Load the `darkMode` setting from the backend and apply it.
///
/// A failed request falls back to the light theme and raises a toast. The
/// task belongs to the calling scope, so unmounting cancels it.
pub fn use_dark_mode_preference(ctx: ThemeContext) {
    let mut toasts = use_toasts();

    // No signal is read here, so this runs exactly once.
    use_effect(move || {
        let mut state = ctx.state;
        spawn(async move {
            let client = ApiClient::from_environment();
            let outcome = resolve_preference(client.fetch_settings().await);

            match outcome.error() {
                Some(err) => crate::log_error!("Failed to load settings: {}", err),
                None => crate::log_debug!("darkMode preference: {:?}", outcome),
            }

            let toast = state.write().settle(&outcome);
            if let Some(message) = toast {
                toasts.push_error(message);
            }
        });
    });
}

/// Pick a localized bundle from the persisted UI language.
pub fn use_locale_detection(ctx: ThemeContext) {
    use_effect(move || {
        let mut locale = ctx.locale;
        let stored = storage::load_string(LANGUAGE_STORAGE_KEY).or_else(platform_language);
        let detected = detect_locale(stored.as_deref());

        crate::log_debug!("UI language {:?} -> locale {:?}", stored, detected.map(|l| l.id));
        if detected.is_some() {
            locale.set(detected);
        }
    });
}

/// The browser's preferred language, for sessions that never stored one.
#[cfg(target_arch = "wasm32")]
fn platform_language() -> Option<String> {
    web_sys::window()?.navigator().language()
}

#[cfg(not(target_arch = "wasm32"))]
fn platform_language() -> Option<String> {
    std::env::var("LANG").ok()
}
