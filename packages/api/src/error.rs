//! # API failure types
//!
//! Two failure families matter to the UI: transport failures (the request
//! never got an HTTP response) and rejections (it did, with a non-success
//! status). Rejection bodies carry the backend's validation messages, which
//! the views surface verbatim rather than paraphrase.

use serde::Deserialize;
use thiserror::Error;

/// Fallback line for failures with no usable server message.
pub const GENERIC_ERROR: &str = "An error occurred. Please try again.";

/// A validation message as the backend renders it: a bare string for
/// hand-written errors, a list of strings for per-field validation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Message {
    One(String),
    Many(Vec<String>),
}

impl Message {
    pub fn join(&self) -> String {
        match self {
            Message::One(text) => text.clone(),
            Message::Many(list) => list.join(", "),
        }
    }
}

/// Fields a rejection body may carry. The auth endpoints use `error`, DRF
/// generics use `detail`, and serializer validation keys messages by field
/// name. Unknown keys are ignored so any response shape parses to at worst
/// an empty body.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub error: Option<Message>,
    pub username: Option<Message>,
    pub email: Option<Message>,
    pub password: Option<Message>,
    pub title: Option<Message>,
    pub description: Option<Message>,
    pub detail: Option<Message>,
}

/// Keys of [`ErrorBody`], used by callers to rank which message to show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Error,
    Username,
    Email,
    Password,
    Title,
    Description,
    Detail,
}

impl Field {
    /// Display prefix. `error` and `detail` already read as sentences.
    fn label(self) -> Option<&'static str> {
        match self {
            Field::Error | Field::Detail => None,
            Field::Username => Some("Username"),
            Field::Email => Some("Email"),
            Field::Password => Some("Password"),
            Field::Title => Some("Title"),
            Field::Description => Some("Description"),
        }
    }
}

impl ErrorBody {
    fn get(&self, field: Field) -> Option<&Message> {
        match field {
            Field::Error => self.error.as_ref(),
            Field::Username => self.username.as_ref(),
            Field::Email => self.email.as_ref(),
            Field::Password => self.password.as_ref(),
            Field::Title => self.title.as_ref(),
            Field::Description => self.description.as_ref(),
            Field::Detail => self.detail.as_ref(),
        }
    }

    /// First populated field in the caller's priority order, rendered for
    /// display. Field-keyed messages get a `Field: ` prefix.
    pub fn first_message(&self, priority: &[Field]) -> Option<String> {
        priority.iter().find_map(|&field| {
            self.get(field).map(|message| match field.label() {
                Some(label) => format!("{label}: {}", message.join()),
                None => message.join(),
            })
        })
    }
}

/// Any failure an API call can produce.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The backend answered with a non-success status.
    #[error("rejected with status {status}")]
    Rejected {
        status: u16,
        /// Parsed rejection body, when the response carried parseable JSON.
        body: Option<ErrorBody>,
    },
    /// Browser-only call made off-browser (native builds and unit tests).
    #[error("not available outside the browser")]
    Unsupported,
}

impl ApiError {
    /// Display text for a failed call. Rejection bodies are searched in the
    /// caller's priority order, then `fallback`; transport failures always
    /// get the generic line.
    pub fn message_or(&self, priority: &[Field], fallback: &str) -> String {
        match self {
            ApiError::Rejected { body, .. } => body
                .as_ref()
                .and_then(|body| body.first_message(priority))
                .unwrap_or_else(|| fallback.to_string()),
            _ => GENERIC_ERROR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_string_errors() {
        let body: ErrorBody = serde_json::from_str(r#"{"error": "Invalid credentials"}"#).unwrap();
        assert_eq!(
            body.first_message(&[Field::Error]),
            Some("Invalid credentials".to_string())
        );
    }

    #[test]
    fn parses_field_error_lists_with_prefix() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"username": ["A user with that username already exists."]}"#)
                .unwrap();
        assert_eq!(
            body.first_message(&[Field::Username, Field::Email]),
            Some("Username: A user with that username already exists.".to_string())
        );
    }

    #[test]
    fn joins_multiple_messages_for_one_field() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"password": ["Too short.", "Too common."]}"#).unwrap();
        assert_eq!(
            body.first_message(&[Field::Password]),
            Some("Password: Too short., Too common.".to_string())
        );
    }

    #[test]
    fn priority_order_decides_which_message_wins() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"email": ["Enter a valid email address."], "username": ["Taken."]}"#)
                .unwrap();
        assert_eq!(
            body.first_message(&[Field::Username, Field::Email]),
            Some("Username: Taken.".to_string())
        );
        assert_eq!(
            body.first_message(&[Field::Email, Field::Username]),
            Some("Email: Enter a valid email address.".to_string())
        );
    }

    #[test]
    fn detail_renders_without_prefix() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": "User not found."}"#).unwrap();
        assert_eq!(
            body.first_message(&[Field::Detail]),
            Some("User not found.".to_string())
        );
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"non_field_errors": ["nope"], "code": 123}"#).unwrap();
        assert_eq!(body, ErrorBody::default());
        assert_eq!(body.first_message(&[Field::Error, Field::Detail]), None);
    }

    #[test]
    fn non_json_bodies_do_not_parse() {
        assert!(serde_json::from_str::<ErrorBody>("<html>Server Error</html>").is_err());
    }

    #[test]
    fn message_or_prefers_body_then_fallback_then_generic() {
        let rejected = ApiError::Rejected {
            status: 400,
            body: serde_json::from_str(r#"{"detail": "User is already in the project."}"#).ok(),
        };
        assert_eq!(
            rejected.message_or(&[Field::Detail], "Failed to add user. Please try again."),
            "User is already in the project."
        );

        let empty = ApiError::Rejected { status: 500, body: None };
        assert_eq!(
            empty.message_or(&[Field::Detail], "Failed to add user. Please try again."),
            "Failed to add user. Please try again."
        );

        let network = ApiError::Network("connection refused".to_string());
        assert_eq!(network.message_or(&[Field::Detail], "unused"), GENERIC_ERROR);
    }
}
