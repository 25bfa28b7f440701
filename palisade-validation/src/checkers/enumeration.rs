//! Enum membership checker
//!
//! Accepted values are canonicalized to strings before the membership
//! test, so `1`, `1.0` and `"1"` are three different members: integers
//! print in plain decimal, floats with the shortest decimal that
//! round-trips (`1.0` is `"1"`, so it does equal the integer form),
//! booleans as `true`/`false`.

use super::{CheckResult, gate};
use crate::{ConfigError, ErrorGenerator, Record, Rule, Value};
use palisade_i18n::MessageKey;

/// Value must canonicalize to one of `rule.one_of`.
pub(crate) fn one_of(
    field: &str,
    rule: &Rule,
    record: &Record,
    messages: &ErrorGenerator<'_>,
) -> CheckResult {
    if rule.one_of.is_empty() {
        return Err(ConfigError::MissingEnum { rule: rule.clone() });
    }

    let value = gate!(field, rule, record, messages);
    let canonical = match value {
        Value::I8(v) => v.to_string(),
        Value::I16(v) => v.to_string(),
        Value::I32(v) => v.to_string(),
        Value::I64(v) => v.to_string(),
        Value::F32(v) => v.to_string(),
        Value::F64(v) => v.to_string(),
        Value::Str(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Null => {
            return Ok(Some(messages.generate(MessageKey::InType, field, rule, &[])));
        }
    };

    if rule.one_of.iter().any(|allowed| *allowed == canonical) {
        Ok(None)
    } else {
        let joined = format!("[{}]", rule.one_of.join("、"));
        Ok(Some(messages.generate(MessageKey::In, field, rule, &[&joined])))
    }
}
