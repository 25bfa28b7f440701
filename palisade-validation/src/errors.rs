//! Validation errors
//!
//! Two disjoint channels: [`FieldError`]s are expected, data-dependent
//! outcomes collected into the result list; [`ConfigError`]s are rule
//! bugs and abort the validation call. A misconfigured rule is never
//! reported as a field error.

use crate::Rule;
use std::fmt;
use thiserror::Error;

/// One failed check on one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field name that failed validation
    pub field: String,

    /// Localized (or custom) error message
    pub message: String,

    /// Message-key id of the constraint that failed
    pub constraint: String,
}

impl FieldError {
    /// Create a new field error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            constraint: "custom".to_string(),
        }
    }

    /// Set the constraint id.
    pub fn with_constraint(mut self, constraint: impl Into<String>) -> Self {
        self.constraint = constraint.into();
        self
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FieldError {}

/// Ordered collection of field errors from one validation call.
///
/// One entry per failed rule-target pair; several entries may name the
/// same field when several rules target it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether there are no errors.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Append an error.
    pub fn add(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Iterate the errors in collection order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Errors for a specific field.
    pub fn get_field_errors(&self, field: &str) -> Vec<&FieldError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// JSON representation.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "errors": self.errors.iter().map(|e| {
                serde_json::json!({
                    "field": e.field,
                    "message": e.message,
                    "constraint": e.constraint,
                })
            }).collect::<Vec<_>>()
        })
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for error in &self.errors {
            writeln!(f, "{error}")?;
        }
        Ok(())
    }
}

impl IntoIterator for FieldErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl From<Vec<FieldError>> for FieldErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}

/// A bug in a rule definition or in validator configuration.
///
/// These abort the validation call: the rule set needs fixing, the input
/// record is not at fault. Variants carry the offending rule so the
/// diagnostic names the exact directive that is wrong.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Rule has an empty checker kind
    #[error("rule {rule:?}: attribute 'kind' not specified")]
    MissingKind { rule: Rule },

    /// No checker registered under the rule's kind
    #[error("no checker registered for kind '{kind}' in rule {rule:?}")]
    UnknownChecker { kind: String, rule: Rule },

    /// Rule targets an empty field name or an empty field list
    #[error("rule {rule:?}: target not specified")]
    EmptyTarget { rule: Rule },

    /// A bound has the wrong form for the checker
    #[error("rule {rule:?}: attribute '{attr}' should be {expected}")]
    BoundType {
        rule: Rule,
        attr: &'static str,
        expected: &'static str,
    },

    /// A length bound is negative
    #[error("rule {rule:?}: attribute '{attr}' should not be negative")]
    NegativeBound { rule: Rule, attr: &'static str },

    /// min is greater than max
    #[error("rule {rule:?}: attribute 'max' should be greater than or equal to 'min'")]
    BoundOrder { rule: Rule },

    /// Rule requires a positive value but its max is not positive
    #[error("rule {rule:?}: attribute 'max' should be greater than 0 when 'sign' > 0")]
    SignMaxConflict { rule: Rule },

    /// Rule requires a negative value but its min is not negative
    #[error("rule {rule:?}: attribute 'min' should be less than 0 when 'sign' < 0")]
    SignMinConflict { rule: Rule },

    /// The "in" kind needs a non-empty value list
    #[error("rule {rule:?}: attribute 'one_of' not found or empty")]
    MissingEnum { rule: Rule },

    /// The "regex" kind needs a non-empty pattern
    #[error("rule {rule:?}: attribute 'pattern' not found or empty")]
    MissingPattern { rule: Rule },

    /// The rule's pattern does not compile
    #[error("rule {rule:?}: invalid pattern: {source}")]
    InvalidPattern { rule: Rule, source: regex::Error },

    /// The requested scenario is not in the rule set
    #[error("scenario '{0}' not defined")]
    UnknownScenario(String),

    /// A checker is already registered under the name
    #[error("checker '{0}' already exists")]
    DuplicateChecker(String),

    /// No message bundle for the requested language
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_error_display() {
        let error = FieldError::new("email", "must be a valid email address");
        assert_eq!(error.to_string(), "email: must be a valid email address");
        assert_eq!(error.constraint, "custom");
    }

    #[test]
    fn with_constraint_overrides_default() {
        let error = FieldError::new("age", "must be an integer").with_constraint("integer");
        assert_eq!(error.constraint, "integer");
    }

    #[test]
    fn collection_preserves_order() {
        let mut errors = FieldErrors::new();
        errors.add(FieldError::new("a", "first"));
        errors.add(FieldError::new("b", "second"));
        errors.add(FieldError::new("a", "third"));

        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["a", "b", "a"]);
        assert_eq!(errors.get_field_errors("a").len(), 2);
    }

    #[test]
    fn to_json_shape() {
        let mut errors = FieldErrors::new();
        errors.add(FieldError::new("f", "msg").with_constraint("required"));
        let json = errors.to_json();
        assert_eq!(json["errors"][0]["field"], "f");
        assert_eq!(json["errors"][0]["constraint"], "required");
    }

    #[test]
    fn config_error_names_the_rule() {
        let rule = Rule::new("age", "integer").max(10).min(20);
        let error = ConfigError::BoundOrder { rule };
        let text = error.to_string();
        assert!(text.contains("age"), "diagnostic should include the rule: {text}");
        assert!(text.contains("'max' should be greater than or equal to 'min'"));
    }
}
