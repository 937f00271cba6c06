//! Client-side API errors and their user-facing messages.

use serde::Deserialize;

/// Message shown when a failure carries nothing more specific.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred!";

/// RFC7807 Problem Details (application/problem+json)
///
/// Only the fields the client surfaces are modelled; the rest of the
/// envelope is ignored on decode.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ProblemDetails {
    #[serde(rename = "type", default)]
    pub type_url: Option<String>,
    pub title: String,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub detail: Option<String>,
}

/// Attempt to parse an RFC7807 (or RFC7807-ish) JSON body into a user-facing message.
/// Prefers `detail`, falls back to `title`.
pub fn try_problem_detail(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<ProblemDetails>(body).ok()?;
    if let Some(detail) = parsed.detail {
        if !detail.trim().is_empty() {
            return Some(detail);
        }
    }
    if !parsed.title.trim().is_empty() {
        return Some(parsed.title);
    }
    None
}

/// Legacy backend error envelope: `{"error": "ERR_..."}` or `{"message": "..."}`.
#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Pull the backend error code or message out of a response body.
pub fn try_backend_error(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<BackendErrorBody>(body).ok()?;
    parsed
        .message
        .into_iter()
        .chain(parsed.error)
        .find(|msg| !msg.trim().is_empty())
}

/// Readable text for the backend error codes the shell can run into.
pub fn describe_backend_error(code: &str) -> Option<&'static str> {
    let text = match code {
        "ERR_SESSION_EXPIRED" => "Session expired. Please login.",
        "ERR_NO_PERMISSION" => "You don't have permission to access this resource.",
        "ERR_INVALID_CREDENTIALS" => "Authentication error. Please try again.",
        "ERR_NO_SETTING_FOUND" => "No setting found with this ID.",
        "ERR_INTERNAL_SERVER_ERROR" => "Internal server error. Please try again later.",
        _ => return None,
    };
    Some(text)
}

/// API error type for client-side use
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Deserialization error: {0}")]
    Deserialize(String),
}

impl ApiError {
    /// Text suitable for an error toast.
    ///
    /// HTTP failures surface the server's own explanation when it sent one:
    /// problem details first, then the legacy `error`/`message` envelope,
    /// with known error codes translated. Everything else gets the generic
    /// message.
    pub fn user_message(&self) -> String {
        let ApiError::Http { body, .. } = self else {
            return GENERIC_ERROR_MESSAGE.to_string();
        };

        if let Some(detail) = try_problem_detail(body) {
            return detail;
        }

        match try_backend_error(body) {
            Some(code) => describe_backend_error(&code)
                .map(str::to_string)
                .unwrap_or(code),
            None => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_errors_use_generic_message() {
        let err = ApiError::Network("connection refused".into());
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn problem_detail_wins_over_title() {
        let err = ApiError::Http {
            status: 403,
            body: r#"{"type":"about:blank","title":"Forbidden","status":403,"detail":"Admins only"}"#
                .into(),
        };
        assert_eq!(err.user_message(), "Admins only");
    }

    #[test]
    fn problem_title_used_when_detail_blank() {
        let err = ApiError::Http {
            status: 404,
            body: r#"{"title":"Not Found","detail":"  "}"#.into(),
        };
        assert_eq!(err.user_message(), "Not Found");
    }

    #[test]
    fn known_backend_codes_are_translated() {
        let err = ApiError::Http {
            status: 401,
            body: r#"{"error":"ERR_SESSION_EXPIRED"}"#.into(),
        };
        assert_eq!(err.user_message(), "Session expired. Please login.");
    }

    #[test]
    fn unknown_backend_messages_pass_through() {
        let err = ApiError::Http {
            status: 400,
            body: r#"{"message":"Queue is full"}"#.into(),
        };
        assert_eq!(err.user_message(), "Queue is full");
    }

    #[test]
    fn unparseable_body_falls_back_to_generic() {
        let err = ApiError::Http {
            status: 502,
            body: "<html>Bad Gateway</html>".into(),
        };
        assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
    }
}
