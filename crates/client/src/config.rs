//! Embedded `config.json` and backend address resolution.

use anyhow::Context;
use chatdesk_shared::AppConfig;
use once_cell::sync::Lazy;

const CONFIG_JSON: &str = include_str!("../assets/config.json");

/// Build-time override for the backend base URL.
const BACKEND_URL_ENV: Option<&str> = option_env!("CHATDESK_BACKEND_URL");

static APP_CONFIG: Lazy<AppConfig> = Lazy::new(|| match parse_config(CONFIG_JSON) {
    Ok(config) => config,
    Err(e) => {
        crate::log_warn!("{:#}; using built-in theme colors", e);
        AppConfig::default()
    }
});

fn parse_config(raw: &str) -> anyhow::Result<AppConfig> {
    AppConfig::from_json(raw).context("config.json is not valid")
}

/// The static application configuration.
pub fn app_config() -> &'static AppConfig {
    &APP_CONFIG
}

/// Base URL for API requests.
///
/// The build-time variable wins over `config.json`. With neither set, web
/// builds talk to the page's own origin and desktop builds to a local
/// backend.
pub fn backend_url() -> String {
    let configured = BACKEND_URL_ENV
        .or(app_config().backend_url.as_deref())
        .map(str::trim)
        .filter(|url| !url.is_empty());

    match configured {
        Some(url) => url.trim_end_matches('/').to_string(),
        None => default_origin(),
    }
}

#[cfg(target_arch = "wasm32")]
fn default_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn default_origin() -> String {
    "http://localhost:8080".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = parse_config(CONFIG_JSON).unwrap();
        let light = &config.system.color.light_theme;
        assert_eq!(light.palette.primary.as_deref(), Some("#6B62FE"));
        let dark = &config.system.color.dark_theme;
        assert_eq!(dark.palette.background.paper.as_deref(), Some("#181d22"));
    }

    #[test]
    fn invalid_config_reports_context() {
        let err = parse_config("{ not json").unwrap_err();
        assert!(format!("{err:#}").starts_with("config.json is not valid"));
    }
}
