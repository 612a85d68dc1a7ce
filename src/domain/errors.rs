// src/domain/errors.rs
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("validation failed: {0}")]
    InvalidFields(FieldErrors),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("slug already taken: {0}")]
    SlugConflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("persistence error: {0}")]
    Persistence(String),
}

/// Per-field validation messages, keyed by the input field name.
///
/// Serialises as `{"field": ["message", ...]}` so callers can surface each
/// cause next to the offending input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Record the error of a value-object constructor under `field` and
    /// return the value when it succeeded.
    pub fn check<T>(&mut self, field: &str, result: DomainResult<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(DomainError::InvalidFields(nested)) => {
                self.merge(nested);
                None
            }
            Err(other) => {
                let message = match other {
                    DomainError::Validation(msg) => msg,
                    other => other.to_string(),
                };
                self.add(field, message);
                None
            }
        }
    }

    pub fn merge(&mut self, other: FieldErrors) {
        for (field, messages) in other.0 {
            self.0.entry(field).or_default().extend(messages);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn into_result(self) -> DomainResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(DomainError::InvalidFields(self))
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.0 {
            for message in messages {
                if !first {
                    f.write_str("; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_collects_validation_messages_by_field() {
        let mut errors = FieldErrors::new();
        let ok: Option<u8> = errors.check("title", Ok(1));
        let failed: Option<u8> =
            errors.check("content", Err(DomainError::Validation("content cannot be empty".into())));

        assert_eq!(ok, Some(1));
        assert!(failed.is_none());
        assert_eq!(
            errors.get("content"),
            Some(&["content cannot be empty".to_string()][..])
        );
        assert!(!errors.contains("title"));
    }

    #[test]
    fn serialises_as_field_map() {
        let mut errors = FieldErrors::single("scheduled_at", "must be in the future");
        errors.add("scheduled_at", "second");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "scheduled_at": ["must be in the future", "second"] })
        );
        assert_eq!(
            errors.to_string(),
            "scheduled_at: must be in the future; scheduled_at: second"
        );
    }

    #[test]
    fn empty_errors_are_ok() {
        assert!(FieldErrors::new().into_result().is_ok());
        assert!(matches!(
            FieldErrors::single("ids", "required").into_result(),
            Err(DomainError::InvalidFields(_))
        ));
    }
}
