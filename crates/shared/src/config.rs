//! Static application configuration (`config.json`).
//!
//! Every leaf is optional: a missing or empty color means "use the
//! built-in fallback", so a partial document is always valid.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// Base URL of the backend API, e.g. `http://localhost:8080`.
    pub backend_url: Option<String>,
    pub system: SystemConfig,
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemConfig {
    pub color: ColorConfig,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorConfig {
    pub light_theme: ThemeColors,
    pub dark_theme: ThemeColors,
}

/// Configured colors for one mode, keyed the way `config.json` spells them.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeColors {
    pub palette: PaletteColors,
    pub toolbar: ToolbarColors,
    pub menu_itens: Option<String>,
    pub sub: Option<String>,
    pub toolbar_icon: Option<String>,
    pub divide: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct PaletteColors {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub background: BackgroundColors,
    pub text: TextColors,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ToolbarColors {
    pub background: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BackgroundColors {
    pub default: Option<String>,
    pub paper: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TextColors {
    pub primary: Option<String>,
    pub secondary: Option<String>,
}
