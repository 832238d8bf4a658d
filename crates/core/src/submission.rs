//! Contact-form submission input and presence validation.
//!
//! [`SubmissionForm`] is the raw request body with every field optional, so a
//! missing field is reported as a validation error instead of a
//! deserialization failure. [`SubmissionForm::validate`] turns it into a
//! [`NewSubmission`] ready to be persisted and mailed.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Message returned when any required field is absent.
pub const MISSING_FIELDS_MESSAGE: &str = "Name, email, and prompt are required.";

/// Body of `POST /submit` as sent by the browser.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmissionForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
}

/// A submission whose required fields are known to be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewSubmission {
    pub name: String,
    pub email: String,
    pub about: Option<String>,
    pub prompt: String,
}

impl SubmissionForm {
    /// Check that `name`, `email` and `prompt` are present and non-empty.
    ///
    /// Values are kept exactly as submitted.
    pub fn validate(self) -> Result<NewSubmission, CoreError> {
        match (
            present(self.name),
            present(self.email),
            present(self.prompt),
        ) {
            (Some(name), Some(email), Some(prompt)) => Ok(NewSubmission {
                name,
                email,
                about: self.about,
                prompt,
            }),
            _ => Err(CoreError::Validation(MISSING_FIELDS_MESSAGE.to_string())),
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn form(name: &str, email: &str, prompt: &str) -> SubmissionForm {
        SubmissionForm {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            about: Some("Hiring".to_string()),
            prompt: Some(prompt.to_string()),
        }
    }

    #[test]
    fn complete_form_validates() {
        let submission = form("Ada", "ada@x.com", "Let's talk\nThanks")
            .validate()
            .unwrap();

        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.email, "ada@x.com");
        assert_eq!(submission.about.as_deref(), Some("Hiring"));
        assert_eq!(submission.prompt, "Let's talk\nThanks");
    }

    #[test]
    fn about_is_optional() {
        let mut input = form("Ada", "ada@x.com", "hi");
        input.about = None;

        let submission = input.validate().unwrap();
        assert!(submission.about.is_none());
    }

    #[test]
    fn empty_name_is_rejected() {
        let err = form("", "ada@x.com", "hi").validate().unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg == MISSING_FIELDS_MESSAGE);
    }

    #[test]
    fn whitespace_only_values_are_accepted_unchanged() {
        let submission = form(" ", "ada@x.com", "  \n ").validate().unwrap();
        assert_eq!(submission.name, " ");
        assert_eq!(submission.prompt, "  \n ");
    }

    #[test]
    fn null_prompt_is_rejected() {
        let input: SubmissionForm =
            serde_json::from_str(r#"{"name": "Ada", "email": "ada@x.com", "prompt": null}"#)
                .unwrap();
        assert_matches!(input.validate(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn missing_email_is_rejected() {
        let input: SubmissionForm =
            serde_json::from_str(r#"{"name": "Ada", "prompt": "hi"}"#).unwrap();
        assert_matches!(input.validate(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn values_are_not_trimmed() {
        let submission = form(" Ada ", "ada@x.com", "hi").validate().unwrap();
        assert_eq!(submission.name, " Ada ");
    }
}
