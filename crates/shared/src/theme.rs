//! Light and dark theme descriptors built from [`AppConfig`] colors.

use std::fmt::Write as _;

use crate::config::{AppConfig, ThemeColors};
use crate::locale::Locale;
use crate::theme_state::ThemeMode;

pub const LIGHT_BACKGROUND_IMAGE: &str = "/assets/wa-background-light.svg";
pub const DARK_BACKGROUND_IMAGE: &str = "/assets/wa-background-dark.svg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceColors {
    pub default: String,
    pub paper: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPalette {
    pub primary: String,
    pub secondary: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub toolbar: String,
    pub menu_items: String,
    pub sub: String,
    pub toolbar_icon: String,
    pub divider: String,
    /// Dark mode only.
    pub background: Option<SurfaceColors>,
    /// Dark mode only.
    pub text: Option<TextPalette>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeDescriptor {
    pub mode: ThemeMode,
    pub palette: Palette,
    pub background_image: String,
    pub scrollbar_thumb: String,
    pub body_background: Option<String>,
    pub locale: Option<Locale>,
}

impl ThemeDescriptor {
    /// Render as CSS custom properties for the provider's root element.
    pub fn css_variables(&self) -> String {
        let p = &self.palette;
        let mut vars = vec![
            ("--color-primary", p.primary.as_str()),
            ("--color-secondary", p.secondary.as_str()),
            ("--color-toolbar", p.toolbar.as_str()),
            ("--color-menu-items", p.menu_items.as_str()),
            ("--color-sub", p.sub.as_str()),
            ("--color-toolbar-icon", p.toolbar_icon.as_str()),
            ("--color-divider", p.divider.as_str()),
            ("--scrollbar-thumb", self.scrollbar_thumb.as_str()),
        ];
        if let Some(bg) = &p.background {
            vars.push(("--background-default", bg.default.as_str()));
            vars.push(("--background-paper", bg.paper.as_str()));
        }
        if let Some(text) = &p.text {
            vars.push(("--text-primary", text.primary.as_str()));
            vars.push(("--text-secondary", text.secondary.as_str()));
        }
        if let Some(body) = &self.body_background {
            vars.push(("--body-background", body.as_str()));
        }

        let mut css = String::new();
        for (name, value) in vars {
            let _ = write!(css, "{name}: {value}; ");
        }
        let _ = write!(css, "--background-image: url({});", self.background_image);
        css
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Themes {
    pub light: ThemeDescriptor,
    pub dark: ThemeDescriptor,
}

impl Themes {
    pub fn select(&self, mode: ThemeMode) -> &ThemeDescriptor {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

/// Configured value unless absent or empty. Not validated as a color.
fn pick(value: &Option<String>, fallback: &str) -> String {
    match value.as_deref() {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

pub fn build_light_theme(colors: &ThemeColors, locale: Option<&Locale>) -> ThemeDescriptor {
    ThemeDescriptor {
        mode: ThemeMode::Light,
        palette: Palette {
            primary: pick(&colors.palette.primary, "#6B62FE"),
            secondary: pick(&colors.palette.secondary, "#F50057"),
            toolbar: pick(&colors.toolbar.background, "#6B62FE"),
            menu_items: pick(&colors.menu_itens, "#ffffff"),
            sub: pick(&colors.sub, "#ffffff"),
            toolbar_icon: pick(&colors.toolbar_icon, "#ffffff"),
            divider: pick(&colors.divide, "#E0E0E0"),
            background: None,
            text: None,
        },
        background_image: LIGHT_BACKGROUND_IMAGE.to_string(),
        scrollbar_thumb: "#e8e8e8".to_string(),
        body_background: None,
        locale: locale.copied(),
    }
}

pub fn build_dark_theme(colors: &ThemeColors, locale: Option<&Locale>) -> ThemeDescriptor {
    ThemeDescriptor {
        mode: ThemeMode::Dark,
        palette: Palette {
            primary: pick(&colors.palette.primary, "#52d869"),
            secondary: pick(&colors.palette.secondary, "#ff9100"),
            toolbar: pick(&colors.toolbar.background, "#52d869"),
            menu_items: pick(&colors.menu_itens, "#181d22"),
            sub: pick(&colors.sub, "#181d22"),
            toolbar_icon: pick(&colors.toolbar_icon, "#181d22"),
            divider: pick(&colors.divide, "#080d14"),
            background: Some(SurfaceColors {
                default: pick(&colors.palette.background.default, "#080d14"),
                paper: pick(&colors.palette.background.paper, "#181d22"),
            }),
            text: Some(TextPalette {
                primary: pick(&colors.palette.text.primary, "#52d869"),
                secondary: pick(&colors.palette.text.secondary, "#ffffff"),
            }),
        },
        background_image: DARK_BACKGROUND_IMAGE.to_string(),
        scrollbar_thumb: "#ffffff".to_string(),
        body_background: Some("#080d14".to_string()),
        locale: locale.copied(),
    }
}

pub fn build_themes(config: &AppConfig, locale: Option<&Locale>) -> Themes {
    let colors = &config.system.color;
    Themes {
        light: build_light_theme(&colors.light_theme, locale),
        dark: build_dark_theme(&colors.dark_theme, locale),
    }
}
