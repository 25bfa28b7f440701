//! String checker

use super::{CheckResult, gate};
use crate::{Bound, ConfigError, ErrorGenerator, Record, Rule, Value};
use palisade_i18n::MessageKey;

/// String type check plus optional length bounds.
///
/// Length is measured in Unicode code points. Bounds must be
/// non-negative integers with `min <= max`.
pub(crate) fn string(
    field: &str,
    rule: &Rule,
    record: &Record,
    messages: &ErrorGenerator<'_>,
) -> CheckResult {
    let (min, max) = length_bounds(rule)?;

    let value = gate!(field, rule, record, messages);
    let text = match value {
        Value::Str(s) => s,
        _ => return Ok(Some(messages.generate(MessageKey::String, field, rule, &[]))),
    };

    let length = text.chars().count() as i64;
    let error = match (min, max) {
        (None, Some(max)) if length > max => {
            Some(messages.generate(MessageKey::StringLengthMax, field, rule, &[&max]))
        }
        (Some(min), None) if length < min => {
            Some(messages.generate(MessageKey::StringLengthMin, field, rule, &[&min]))
        }
        (Some(min), Some(max)) if length < min || length > max => {
            if min == max {
                Some(messages.generate(MessageKey::StringLengthEqual, field, rule, &[&max]))
            } else {
                Some(messages.generate(MessageKey::StringLengthRange, field, rule, &[&min, &max]))
            }
        }
        _ => None,
    };
    Ok(error)
}

/// Validate the rule's length bounds: integer form, non-negative, ordered.
fn length_bounds(rule: &Rule) -> Result<(Option<i64>, Option<i64>), ConfigError> {
    let min = int_length(rule, rule.min, "min")?;
    let max = int_length(rule, rule.max, "max")?;
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(ConfigError::BoundOrder { rule: rule.clone() });
        }
    }
    Ok((min, max))
}

fn int_length(rule: &Rule, bound: Option<Bound>, attr: &'static str) -> Result<Option<i64>, ConfigError> {
    match bound {
        None => Ok(None),
        Some(bound) => match bound.as_int() {
            Some(v) if v >= 0 => Ok(Some(v)),
            Some(_) => Err(ConfigError::NegativeBound { rule: rule.clone(), attr }),
            None => Err(ConfigError::BoundType {
                rule: rule.clone(),
                attr,
                expected: "an integer",
            }),
        },
    }
}
