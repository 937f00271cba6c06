//! Backend settings records and the dark-mode lookup.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::theme_state::PreferenceOutcome;

/// Key of the dark-mode record in `GET /settings`.
pub const DARK_MODE_KEY: &str = "darkMode";
/// Value that turns dark mode on. Anything else means off.
pub const DARK_MODE_ENABLED: &str = "enabled";

/// One persisted preference. Extra columns the backend sends (ids,
/// timestamps) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Setting {
    pub key: String,
    pub value: String,
}

impl Setting {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// First record with the given key.
pub fn find_setting<'a>(settings: &'a [Setting], key: &str) -> Option<&'a Setting> {
    settings.iter().find(|s| s.key == key)
}

/// Classify a settings list by its `darkMode` record.
pub fn dark_mode_outcome(settings: &[Setting]) -> PreferenceOutcome {
    match find_setting(settings, DARK_MODE_KEY) {
        Some(s) if s.value == DARK_MODE_ENABLED => PreferenceOutcome::Enabled,
        Some(_) => PreferenceOutcome::Disabled,
        None => PreferenceOutcome::Missing,
    }
}

/// Classify the result of the settings request.
pub fn resolve_preference(result: Result<Vec<Setting>, ApiError>) -> PreferenceOutcome {
    match result {
        Ok(settings) => dark_mode_outcome(&settings),
        Err(err) => PreferenceOutcome::Failed(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(json: &str) -> Vec<Setting> {
        serde_json::from_str(json).expect("fixture parses")
    }

    #[test]
    fn enabled_record_means_dark() {
        let settings = list(
            r#"[
                {"key":"userCreation","value":"enabled"},
                {"key":"darkMode","value":"enabled","createdAt":"2024-01-01T00:00:00Z"}
            ]"#,
        );
        assert_eq!(dark_mode_outcome(&settings), PreferenceOutcome::Enabled);
    }

    #[test]
    fn any_other_value_means_disabled() {
        for value in ["disabled", "Enabled", "", "true", "enabled "] {
            let settings = vec![Setting::new(DARK_MODE_KEY, value)];
            assert_eq!(
                dark_mode_outcome(&settings),
                PreferenceOutcome::Disabled,
                "value {value:?}"
            );
        }
    }

    #[test]
    fn first_matching_record_wins() {
        let settings = vec![
            Setting::new(DARK_MODE_KEY, "disabled"),
            Setting::new(DARK_MODE_KEY, "enabled"),
        ];
        assert_eq!(find_setting(&settings, DARK_MODE_KEY).map(|s| s.value.as_str()), Some("disabled"));
        assert_eq!(dark_mode_outcome(&settings), PreferenceOutcome::Disabled);
    }

    #[test]
    fn absent_record_is_missing_not_an_error() {
        let settings = list(r#"[{"key":"userCreation","value":"enabled"}]"#);
        let outcome = dark_mode_outcome(&settings);
        assert_eq!(outcome, PreferenceOutcome::Missing);
        assert!(outcome.error().is_none());
        assert_eq!(dark_mode_outcome(&[]), PreferenceOutcome::Missing);
    }

    #[test]
    fn request_failure_is_carried() {
        let err = ApiError::Http {
            status: 500,
            body: String::new(),
        };
        assert_eq!(
            resolve_preference(Err(err.clone())),
            PreferenceOutcome::Failed(err)
        );
    }
}
