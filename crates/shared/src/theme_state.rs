//! Active theme mode and the transitions that change it.

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// What the mount-time `/settings` lookup produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreferenceOutcome {
    /// `darkMode` is `"enabled"`.
    Enabled,
    /// `darkMode` exists with any other value.
    Disabled,
    /// The settings list has no `darkMode` record.
    Missing,
    /// The request itself failed.
    Failed(ApiError),
}

impl PreferenceOutcome {
    /// The error to report to the user, if any.
    pub fn error(&self) -> Option<&ApiError> {
        match self {
            PreferenceOutcome::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Single source of truth for the theme. The switch's checked position is
/// derived from the mode rather than tracked next to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeState {
    mode: ThemeMode,
}

impl ThemeState {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn checked(&self) -> bool {
        self.mode.is_dark()
    }

    /// Apply the switch's new position in one step.
    pub fn set_checked(&mut self, checked: bool) {
        self.mode = ThemeMode::from_dark(checked);
    }

    /// Fold the settled `/settings` lookup in and return the text of the
    /// error toast to show, if any.
    ///
    /// Only an enabled preference or a failed request changes the mode; a
    /// disabled or missing record leaves whatever the user may already have
    /// picked while the request was in flight.
    pub fn settle(&mut self, outcome: &PreferenceOutcome) -> Option<String> {
        match outcome {
            PreferenceOutcome::Enabled => {
                self.mode = ThemeMode::Dark;
                None
            }
            PreferenceOutcome::Failed(err) => {
                self.mode = ThemeMode::Light;
                Some(err.user_message())
            }
            PreferenceOutcome::Disabled | PreferenceOutcome::Missing => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_light_and_unchecked() {
        let state = ThemeState::default();
        assert_eq!(state.mode(), ThemeMode::Light);
        assert!(!state.checked());
    }

    fn flipped(mode: ThemeMode) -> ThemeMode {
        ThemeMode::from_dark(!mode.is_dark())
    }

    #[test]
    fn toggle_parity() {
        for start in [ThemeMode::Light, ThemeMode::Dark] {
            for n in 0..7 {
                let mut state = ThemeState::new(start);
                for _ in 0..n {
                    state.set_checked(!state.checked());
                }
                let expected = if n % 2 == 0 { start } else { flipped(start) };
                assert_eq!(state.mode(), expected, "start={start:?} toggles={n}");
                assert_eq!(state.checked(), expected.is_dark());
            }
        }
    }

    #[test]
    fn switch_events_track_the_mode() {
        let mut state = ThemeState::default();
        let mut position = false;
        for _ in 0..5 {
            position = !position;
            state.set_checked(position);
            assert_eq!(state.checked(), position);
            assert_eq!(state.mode().is_dark(), position);
        }
    }

    #[test]
    fn enabled_preference_checks_the_switch() {
        let mut state = ThemeState::default();
        assert_eq!(state.settle(&PreferenceOutcome::Enabled), None);
        assert_eq!(state.mode(), ThemeMode::Dark);
        assert!(state.checked());
    }

    #[test]
    fn failure_forces_light_and_returns_toast_text() {
        let mut state = ThemeState::new(ThemeMode::Dark);
        let outcome = PreferenceOutcome::Failed(ApiError::Network("offline".into()));
        assert_eq!(state.settle(&outcome).as_deref(), Some("An error occurred!"));
        assert_eq!(state.mode(), ThemeMode::Light);
    }

    #[test]
    fn failure_toast_carries_server_explanation() {
        let mut state = ThemeState::default();
        let outcome = PreferenceOutcome::Failed(ApiError::Http {
            status: 401,
            body: r#"{"error":"ERR_SESSION_EXPIRED"}"#.into(),
        });
        assert_eq!(
            state.settle(&outcome).as_deref(),
            Some("Session expired. Please login.")
        );
    }

    #[test]
    fn disabled_or_missing_keeps_user_choice_silently() {
        for outcome in [PreferenceOutcome::Disabled, PreferenceOutcome::Missing] {
            let mut state = ThemeState::default();
            state.set_checked(true);
            assert_eq!(state.settle(&outcome), None);
            assert_eq!(state.mode(), ThemeMode::Dark);
        }
    }
}
