//! Form submissions.
//!
//! Turns an `application/x-www-form-urlencoded` body into a calculation,
//! or into the message to show when the calculation is refused.

use mm2_core::{compute_fields, CalcError, Calculation};
use tracing::debug;
use url::form_urlencoded;

/// Name of the interarrival time field.
pub const INTERARRIVAL_FIELD: &str = "interarrival_min";

/// Name of the service time field.
pub const SERVICE_FIELD: &str = "service_min";

/// Message shown when input reaches the calculator that is not a usable number.
pub const UNEXPECTED_MESSAGE: &str = "Unexpected error; please enter valid numbers.";

/// The two raw fields of the input form, exactly as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub interarrival_min: Option<String>,
    pub service_min: Option<String>,
}

impl FormFields {
    /// Create fields from two values.
    pub fn new(interarrival_min: impl Into<String>, service_min: impl Into<String>) -> Self {
        Self {
            interarrival_min: Some(interarrival_min.into()),
            service_min: Some(service_min.into()),
        }
    }

    /// Decode a url-encoded form body. Unknown fields are ignored and the
    /// last occurrence of a repeated field wins.
    pub fn parse(body: &[u8]) -> Self {
        let mut fields = Self::default();
        for (key, value) in form_urlencoded::parse(body) {
            match key.as_ref() {
                INTERARRIVAL_FIELD => fields.interarrival_min = Some(value.into_owned()),
                SERVICE_FIELD => fields.service_min = Some(value.into_owned()),
                _ => {}
            }
        }
        fields
    }

    /// The interarrival field for re-display, empty if it was missing.
    pub fn interarrival_text(&self) -> &str {
        self.interarrival_min.as_deref().unwrap_or("")
    }

    /// The service field for re-display, empty if it was missing.
    pub fn service_text(&self) -> &str {
        self.service_min.as_deref().unwrap_or("")
    }
}

/// Outcome of submitting the form.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// The calculation succeeded.
    Calculated(Calculation),
    /// The calculation was refused; show the form again with `message`.
    Rejected { fields: FormFields, message: String },
}

/// Run the calculation for submitted fields.
pub fn submit(fields: FormFields) -> Submission {
    match compute_fields(
        fields.interarrival_min.as_deref(),
        fields.service_min.as_deref(),
    ) {
        Ok(calculation) => Submission::Calculated(calculation),
        Err(err) => {
            debug!(kind = err.kind(), error = ?err, "Rejected submission");
            Submission::Rejected {
                fields,
                message: user_message(&err),
            }
        }
    }
}

/// The message shown to the user for a refused calculation.
pub fn user_message(err: &CalcError) -> String {
    match err {
        CalcError::UnexpectedError(_) => UNEXPECTED_MESSAGE.to_string(),
        other => capitalize(&other.to_string()),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_form_body() {
        let fields = FormFields::parse(b"interarrival_min=2&service_min=3");
        assert_eq!(fields, FormFields::new("2", "3"));
    }

    #[test]
    fn test_parse_decodes_and_ignores_unknown() {
        let fields = FormFields::parse(b"service_min=+1.5+&other=x&interarrival_min=2%2E5");
        assert_eq!(fields.interarrival_min.as_deref(), Some("2.5"));
        assert_eq!(fields.service_min.as_deref(), Some(" 1.5 "));
    }

    #[test]
    fn test_parse_missing_field() {
        let fields = FormFields::parse(b"interarrival_min=4");
        assert_eq!(fields.service_min, None);
        assert_eq!(fields.service_text(), "");
        assert_eq!(fields.interarrival_text(), "4");
    }

    #[test]
    fn test_submit_success() {
        match submit(FormFields::new("2", "3")) {
            Submission::Calculated(calc) => assert_eq!(calc.steps.len(), 5),
            other => panic!("expected a calculation, got {:?}", other),
        }
    }

    #[test]
    fn test_submit_empty_keeps_values() {
        let fields = FormFields::new("2", "");
        match submit(fields.clone()) {
            Submission::Rejected {
                fields: kept,
                message,
            } => {
                assert_eq!(kept, fields);
                assert_eq!(message, "Input must not be empty");
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_submit_messages() {
        let message = |a: &str, b: &str| match submit(FormFields::new(a, b)) {
            Submission::Rejected { message, .. } => message,
            Submission::Calculated(_) => String::from("calculated"),
        };

        assert_eq!(message("-1", "2"), "Input must be positive");
        assert!(message("1", "3").starts_with("System is unstable"));
        assert_eq!(message("abc", "3"), UNEXPECTED_MESSAGE);
    }
}
