//! Built-in checkers
//!
//! One pure function per rule kind, all sharing the same contract, so
//! user-registered checkers are indistinguishable from built-ins. A
//! checker returns `Ok(Some(error))` for a failed check, `Ok(None)` for a
//! pass, and `Err` for a misconfigured rule.
//!
//! Rule configuration is validated before the record is consulted: a rule
//! with contradictory bounds aborts the call even when the field is
//! absent or of the wrong type.

mod basic;
mod enumeration;
mod numeric;
mod pattern;
mod string;

use crate::{ConfigError, ErrorGenerator, FieldError, Record, Rule, Value};
use palisade_i18n::MessageKey;
use std::collections::HashMap;
use std::sync::Arc;

/// Outcome of one checker evaluation.
pub type CheckResult = Result<Option<FieldError>, ConfigError>;

/// The checker contract shared by built-ins and user extensions.
pub type CheckerFn =
    Arc<dyn Fn(&str, &Rule, &Record, &ErrorGenerator<'_>) -> CheckResult + Send + Sync>;

/// Outcome of the shared presence gate.
pub(crate) enum Presence<'a> {
    /// Field is present; continue with its value
    Found(&'a Value),
    /// Field is absent and optional; the check passes
    Skip,
    /// Field is absent and required
    Missing(FieldError),
}

/// Presence/required handling common to every checker except "required".
pub(crate) fn presence<'a>(
    field: &str,
    rule: &Rule,
    record: &'a Record,
    messages: &ErrorGenerator<'_>,
) -> Presence<'a> {
    match record.get(field) {
        Some(value) => Presence::Found(value),
        None if rule.required => {
            Presence::Missing(messages.generate(MessageKey::Required, field, rule, &[]))
        }
        None => Presence::Skip,
    }
}

/// Resolve the presence gate inside a checker body.
macro_rules! gate {
    ($field:expr, $rule:expr, $record:expr, $messages:expr) => {
        match crate::checkers::presence($field, $rule, $record, $messages) {
            crate::checkers::Presence::Found(value) => value,
            crate::checkers::Presence::Skip => return Ok(None),
            crate::checkers::Presence::Missing(error) => return Ok(Some(error)),
        }
    };
}
pub(crate) use gate;

/// The built-in registry: canonical names plus their aliases.
pub(crate) fn builtins() -> HashMap<String, CheckerFn> {
    let mut checkers: HashMap<String, CheckerFn> = HashMap::new();

    checkers.insert("required".to_string(), Arc::new(basic::required));
    checkers.insert("in".to_string(), Arc::new(enumeration::one_of));
    checkers.insert("string".to_string(), Arc::new(string::string));
    checkers.insert("integer".to_string(), Arc::new(numeric::integer));
    checkers.insert("decimal".to_string(), Arc::new(numeric::decimal));
    checkers.insert("number".to_string(), Arc::new(numeric::number));
    checkers.insert("boolean".to_string(), Arc::new(basic::boolean));
    checkers.insert("ip".to_string(), Arc::new(basic::ip));
    checkers.insert("regex".to_string(), Arc::new(pattern::regex));
    checkers.insert("email".to_string(), Arc::new(pattern::email));
    checkers.insert("tel".to_string(), Arc::new(pattern::tel));
    checkers.insert("mobile".to_string(), Arc::new(pattern::mobile));
    checkers.insert("zipcode".to_string(), Arc::new(pattern::zipcode));
    // aliases
    checkers.insert("int".to_string(), Arc::new(numeric::integer));
    checkers.insert("float".to_string(), Arc::new(numeric::decimal));
    checkers.insert("bool".to_string(), Arc::new(basic::boolean));
    checkers.insert("phone".to_string(), Arc::new(pattern::mobile));

    checkers
}
