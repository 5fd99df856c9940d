//! Delivery of contact-form submissions.
//!
//! The form posts URL-encoded fields to an HTTP endpoint and treats any 2xx
//! answer as delivered. `reqwest` rides the browser's `fetch` on wasm and
//! its own connector on native builds, so the same call works in both shells.

use serde::Serialize;
use thiserror::Error;

/// Where submissions go unless the embedding view overrides it.
pub const DEFAULT_ENDPOINT: &str = "https://avelle.studio/api/contact";

/// The three fields a visitor fills in, in wire order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormPayload {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormPayload {
    /// Copy of the payload with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> FormPayload {
        FormPayload {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// True when every field carries something other than whitespace.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.message.trim().is_empty()
    }
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("failed to reach the contact service: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("contact service answered with status {0}")]
    Status(reqwest::StatusCode),
}

/// Post `payload` to `endpoint` and report whether it was accepted.
///
/// Anything other than a 2xx status is an error; callers fold both error
/// variants into the same visitor-facing message.
pub async fn submit(endpoint: &str, payload: &FormPayload) -> Result<(), SubmitError> {
    let response = reqwest::Client::new()
        .post(endpoint)
        .header(reqwest::header::ACCEPT, "application/json")
        .form(payload)
        .send()
        .await?;

    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(SubmitError::Status(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormPayload {
        FormPayload {
            name: "  Olena K.  ".to_string(),
            email: "olena@example.com".to_string(),
            message: "\tLooking for a wedding shoot in June.\n".to_string(),
        }
    }

    #[test]
    fn trimming_strips_surrounding_whitespace_only() {
        let tidy = filled().trimmed();
        assert_eq!(tidy.name, "Olena K.");
        assert_eq!(tidy.message, "Looking for a wedding shoot in June.");
    }

    #[test]
    fn payload_with_all_fields_is_complete() {
        assert!(filled().is_complete());
    }

    #[test]
    fn whitespace_only_field_is_not_complete() {
        let mut payload = filled();
        payload.email = "   ".to_string();
        assert!(!payload.is_complete());
    }

    #[test]
    fn empty_payload_is_not_complete() {
        assert!(!FormPayload::default().is_complete());
    }
}
