//! Vote response classification
//!
//! [`classify`] maps a finished HTTP exchange to exactly one [`VoteOutcome`].
//! It performs no I/O, so every response class can be exercised without a
//! network or a document.

use crate::reaction::Counters;
use serde_json::Value;

/// Marker the server uses for an expired or missing session
pub const UNAUTHORIZED: &str = "Unauthorized";

const JSON_CONTENT_TYPE: &str = "application/json";

/// Result of one vote request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteOutcome {
    /// Server accepted the vote and reported the new totals
    Success { counters: Counters },
    /// Session is not valid; the user has to log in again
    Unauthorized,
    /// The vote failed with a user-visible message
    Failure(VoteFailure),
    /// Success status without a usable payload
    Empty,
}

/// Failures surfaced to the user
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VoteFailure {
    /// Success status, but the payload reports `success: false`
    #[error("Error: {0}")]
    Rejected(String),

    /// Non-success status carrying a message
    #[error("An error occurred: {0}")]
    RequestFailed(String),

    /// The request never produced a response
    #[error("An error occurred: {0}")]
    Transport(String),

    /// The body could not be read as the expected payload
    #[error("An error occurred: {0}")]
    Malformed(String),
}

impl VoteFailure {
    pub fn message(&self) -> &str {
        match self {
            Self::Rejected(message)
            | Self::RequestFailed(message)
            | Self::Transport(message)
            | Self::Malformed(message) => message,
        }
    }

    /// Whether the failure should be shown to the user.
    ///
    /// Errors that merely echo an authentication failure accompany a redirect
    /// to the login page and are not shown a second time.
    pub fn should_notify(&self) -> bool {
        match self {
            Self::Rejected(_) => true,
            Self::RequestFailed(message) | Self::Transport(message) | Self::Malformed(message) => {
                message != UNAUTHORIZED && !message.contains("401")
            }
        }
    }
}

/// Classify a completed response.
///
/// Rules are applied in order:
/// 1. `401` is unauthorized regardless of the body.
/// 2. Other non-2xx with a JSON body: `error == "Unauthorized"` is
///    unauthorized, anything else fails with `error` or `Request failed`.
/// 3. Other non-2xx without a JSON body: fails with the body text or
///    `Request failed with status <code>`.
/// 4. 2xx with an empty body or a falsy payload (`null`, `false`, `0`,
///    `""`) is [`VoteOutcome::Empty`].
/// 5. 2xx payload: `success: true` yields the counters verbatim,
///    `error == "Unauthorized"` is unauthorized, otherwise fails with
///    `error` or `Unknown error`.
pub fn classify(status: u16, content_type: Option<&str>, body: &str) -> VoteOutcome {
    if status == 401 {
        return VoteOutcome::Unauthorized;
    }

    if !(200..300).contains(&status) {
        return classify_error_status(status, content_type, body);
    }

    if body.trim().is_empty() {
        return VoteOutcome::Empty;
    }

    let payload: Value = match serde_json::from_str(body) {
        Ok(payload) => payload,
        Err(e) => return VoteOutcome::Failure(VoteFailure::Malformed(e.to_string())),
    };

    // `null`, `false`, `0` and `""` carry nothing to act on
    if !is_truthy(Some(&payload)) {
        return VoteOutcome::Empty;
    }

    if is_truthy(payload.get("success")) {
        return match (counter(&payload, "likes"), counter(&payload, "dislikes")) {
            (Some(likes), Some(dislikes)) => VoteOutcome::Success {
                counters: Counters::new(likes, dislikes),
            },
            _ => VoteOutcome::Failure(VoteFailure::Malformed(
                "Response is missing reaction counts".to_string(),
            )),
        };
    }

    match error_message(&payload) {
        Some(UNAUTHORIZED) => VoteOutcome::Unauthorized,
        Some(message) => VoteOutcome::Failure(VoteFailure::Rejected(message.to_string())),
        None => VoteOutcome::Failure(VoteFailure::Rejected("Unknown error".to_string())),
    }
}

fn classify_error_status(status: u16, content_type: Option<&str>, body: &str) -> VoteOutcome {
    let declared_json = content_type.is_some_and(|ct| ct.contains(JSON_CONTENT_TYPE));

    if !declared_json {
        let message = if body.is_empty() {
            format!("Request failed with status {status}")
        } else {
            body.to_string()
        };
        return VoteOutcome::Failure(VoteFailure::RequestFailed(message));
    }

    let payload: Value = match serde_json::from_str(body) {
        Ok(payload) => payload,
        Err(e) => return VoteOutcome::Failure(VoteFailure::Malformed(e.to_string())),
    };

    match error_message(&payload) {
        Some(UNAUTHORIZED) => VoteOutcome::Unauthorized,
        Some(message) => VoteOutcome::Failure(VoteFailure::RequestFailed(message.to_string())),
        None => VoteOutcome::Failure(VoteFailure::RequestFailed("Request failed".to_string())),
    }
}

/// Non-empty `error` string of a payload
fn error_message(payload: &Value) -> Option<&str> {
    payload
        .get("error")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
}

fn counter(payload: &Value, field: &str) -> Option<i64> {
    payload.get(field).and_then(Value::as_i64)
}

fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
        Some(Value::Null) | None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: Option<&str> = Some("application/json; charset=utf-8");

    #[test]
    fn test_success_copies_counters_verbatim() {
        let outcome = classify(200, JSON, r#"{"success":true,"likes":4,"dislikes":1}"#);
        assert_eq!(
            outcome,
            VoteOutcome::Success {
                counters: Counters::new(4, 1)
            }
        );
    }

    #[test]
    fn test_status_401_ignores_body() {
        assert_eq!(
            classify(401, JSON, r#"{"success":true,"likes":4,"dislikes":1}"#),
            VoteOutcome::Unauthorized
        );
        assert_eq!(classify(401, None, "not json"), VoteOutcome::Unauthorized);
    }

    #[test]
    fn test_json_unauthorized_error_at_any_status() {
        let body = r#"{"success":false,"error":"Unauthorized"}"#;
        assert_eq!(classify(403, JSON, body), VoteOutcome::Unauthorized);
        assert_eq!(classify(500, JSON, body), VoteOutcome::Unauthorized);
        assert_eq!(classify(200, JSON, body), VoteOutcome::Unauthorized);
    }

    #[test]
    fn test_json_error_body_on_failure_status() {
        assert_eq!(
            classify(400, JSON, r#"{"success":false,"error":"Invalid ID"}"#),
            VoteOutcome::Failure(VoteFailure::RequestFailed("Invalid ID".to_string()))
        );
        assert_eq!(
            classify(500, JSON, r#"{"success":false}"#),
            VoteOutcome::Failure(VoteFailure::RequestFailed("Request failed".to_string()))
        );
        assert_eq!(
            classify(500, JSON, r#"{"error":""}"#),
            VoteOutcome::Failure(VoteFailure::RequestFailed("Request failed".to_string()))
        );
    }

    #[test]
    fn test_plain_text_failure_uses_body_or_status() {
        assert_eq!(
            classify(405, Some("text/plain; charset=utf-8"), "Method not allowed\n"),
            VoteOutcome::Failure(VoteFailure::RequestFailed(
                "Method not allowed\n".to_string()
            ))
        );
        assert_eq!(
            classify(502, None, ""),
            VoteOutcome::Failure(VoteFailure::RequestFailed(
                "Request failed with status 502".to_string()
            ))
        );
    }

    #[test]
    fn test_declared_json_that_does_not_parse() {
        let outcome = classify(500, JSON, "<html>oops</html>");
        assert!(matches!(
            outcome,
            VoteOutcome::Failure(VoteFailure::Malformed(_))
        ));
    }

    #[test]
    fn test_empty_success_payload() {
        assert_eq!(classify(200, JSON, ""), VoteOutcome::Empty);
        assert_eq!(classify(200, JSON, "  \n"), VoteOutcome::Empty);
        assert_eq!(classify(204, None, "null"), VoteOutcome::Empty);
    }

    #[test]
    fn test_falsy_success_payload_is_empty() {
        assert_eq!(classify(200, JSON, "false"), VoteOutcome::Empty);
        assert_eq!(classify(200, JSON, "0"), VoteOutcome::Empty);
        assert_eq!(classify(200, JSON, r#""""#), VoteOutcome::Empty);
        assert_eq!(
            classify(200, JSON, "true"),
            VoteOutcome::Failure(VoteFailure::Rejected("Unknown error".to_string()))
        );
    }

    #[test]
    fn test_success_status_with_rejected_payload() {
        assert_eq!(
            classify(200, JSON, r#"{"success":false,"error":"Post not found"}"#),
            VoteOutcome::Failure(VoteFailure::Rejected("Post not found".to_string()))
        );
        assert_eq!(
            classify(200, JSON, r#"{"success":false}"#),
            VoteOutcome::Failure(VoteFailure::Rejected("Unknown error".to_string()))
        );
    }

    #[test]
    fn test_success_without_counts_is_malformed() {
        let outcome = classify(200, JSON, r#"{"success":true,"likes":"four"}"#);
        assert!(matches!(
            outcome,
            VoteOutcome::Failure(VoteFailure::Malformed(_))
        ));
    }

    #[test]
    fn test_notification_suppression() {
        assert!(!VoteFailure::RequestFailed("Unauthorized".into()).should_notify());
        assert!(!VoteFailure::Transport("HTTP 401 from proxy".into()).should_notify());
        assert!(VoteFailure::RequestFailed("Invalid ID".into()).should_notify());
        assert!(VoteFailure::Rejected("error 401".into()).should_notify());
        assert!(VoteFailure::Transport("Failed to fetch".into()).should_notify());
    }

    #[test]
    fn test_notification_text() {
        assert_eq!(
            VoteFailure::Rejected("Post not found".into()).to_string(),
            "Error: Post not found"
        );
        assert_eq!(
            VoteFailure::Transport("Failed to fetch".into()).to_string(),
            "An error occurred: Failed to fetch"
        );
    }
}
