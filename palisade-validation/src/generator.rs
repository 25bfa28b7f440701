//! Error-message generation
//!
//! Turns a message key plus the failing field into a [`FieldError`],
//! honoring the rule's custom-message override and the active locale's
//! bundle. A missing catalog entry falls back to a fixed literal rather
//! than failing the validation pass.

use crate::{FieldError, Rule};
use palisade_i18n::{MessageBundle, MessageKey, format};
use std::fmt;

/// Fallback text when the active bundle lacks a template.
const UNKNOWN_ERROR: &str = "unknown error";

/// Renders field errors against one locale's message bundle.
///
/// Checkers receive a generator per validation call; user-registered
/// checkers use the same one, so extensions localize like built-ins.
pub struct ErrorGenerator<'a> {
    bundle: &'a MessageBundle,
}

impl<'a> ErrorGenerator<'a> {
    /// Create a generator over a bundle.
    pub fn new(bundle: &'a MessageBundle) -> Self {
        Self { bundle }
    }

    /// Produce the error for `key` on `field`.
    ///
    /// A non-empty `rule.message` is returned verbatim. Otherwise the
    /// key's template is rendered with the field label and the positional
    /// values, in caller order.
    pub fn generate(
        &self,
        key: MessageKey,
        field: &str,
        rule: &Rule,
        args: &[&dyn fmt::Display],
    ) -> FieldError {
        if let Some(custom) = rule.message.as_deref().filter(|m| !m.is_empty()) {
            return FieldError::new(field, custom).with_constraint(key.as_str());
        }

        let message = match self.bundle.get(key) {
            Some(template) => format::render(template, field, args),
            None => UNKNOWN_ERROR.to_string(),
        };
        FieldError::new(field, message).with_constraint(key.as_str())
    }
}
