//! Theme context and the provider that applies the active theme.

use chatdesk_shared::{build_themes, Locale, ThemeState};
use dioxus::prelude::*;

use crate::hooks::{use_dark_mode_preference, use_locale_detection};

/// Theme state shared with the tree. Each mount-time routine owns one of
/// the two signals: the settings fetch writes `state`, the locale lookup
/// writes `locale`.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub state: Signal<ThemeState>,
    pub locale: Signal<Option<Locale>>,
}

impl ThemeContext {
    pub fn checked(&self) -> bool {
        self.state.read().checked()
    }

    /// Follow the switch position.
    pub fn set_checked(&mut self, checked: bool) {
        self.state.write().set_checked(checked);
    }

    pub fn locale(&self) -> Option<Locale> {
        *self.locale.read()
    }
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

/// Owns the theme state, kicks off the mount-time routines and exposes the
/// selected theme to its children as CSS variables.
#[component]
pub fn ThemeProvider(children: Element) -> Element {
    let state = use_signal(ThemeState::default);
    let locale = use_signal(|| None::<Locale>);
    let ctx = use_context_provider(|| ThemeContext { state, locale });

    use_dark_mode_preference(ctx);
    use_locale_detection(ctx);

    // Rebuilt only when the locale changes.
    let built = use_memo(move || build_themes(crate::config::app_config(), locale.read().as_ref()));
    let mode = state.read().mode();
    let themes = built.read();
    let theme = themes.select(mode);
    let style = theme.css_variables();
    let lang = theme.locale.map(|l| l.tag).unwrap_or("en");

    rsx! {
        div {
            class: "theme-root",
            "data-theme": mode.as_str(),
            lang,
            style,
            {children}
        }
    }
}
