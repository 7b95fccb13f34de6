//! Field-level validation errors.
//!
//! `ValidationError` collects messages per request field so a single response can report
//! every problem with a payload. It is returned before anything is persisted.

use std::collections::BTreeMap;

use thiserror::Error;

/// Field name used for errors that are not tied to a single field.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

#[derive(Error, Debug, Default, Clone, PartialEq, Eq)]
#[error("Invalid fields: {}", .fields.keys().cloned().collect::<Vec<_>>().join(", "))]
pub struct ValidationError {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an error with a single message on one field.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut err = Self::new();
        err.add(field, message);
        err
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the messages recorded for `field`, if any.
    pub fn messages(&self, field: &str) -> Option<&[String]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    pub fn into_fields(self) -> BTreeMap<String, Vec<String>> {
        self.fields
    }

    /// `Ok(())` when no messages were collected, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Checks a required, length-limited text field and records any problem on `err`.
pub fn check_text(err: &mut ValidationError, field: &str, value: &str, max_len: usize) {
    if value.trim().is_empty() {
        err.add(field, "This field may not be blank.");
    } else if value.chars().count() > max_len {
        err.add(
            field,
            format!("Ensure this field has no more than {} characters.", max_len),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_messages_per_field() {
        let mut err = ValidationError::new();
        err.add("title", "first");
        err.add("title", "second");
        err.add("prompt", "third");

        assert_eq!(err.messages("title").map(|m| m.len()), Some(2));
        assert_eq!(err.messages("prompt").map(|m| m.len()), Some(1));
        assert!(err.messages("club").is_none());
    }

    #[test]
    fn empty_error_converts_to_ok() {
        assert!(ValidationError::new().into_result().is_ok());
        assert!(ValidationError::field("name", "bad").into_result().is_err());
    }

    #[test]
    fn check_text_rejects_blank_and_long_values() {
        let mut err = ValidationError::new();
        check_text(&mut err, "blank", "   ", 10);
        check_text(&mut err, "long", &"a".repeat(11), 10);
        check_text(&mut err, "fine", &"a".repeat(10), 10);

        assert!(err.messages("blank").is_some());
        assert!(err.messages("long").is_some());
        assert!(err.messages("fine").is_none());
    }

    #[test]
    fn check_text_counts_characters_not_bytes() {
        let mut err = ValidationError::new();
        check_text(&mut err, "name", &"é".repeat(100), 100);

        assert!(err.is_empty());
    }
}
