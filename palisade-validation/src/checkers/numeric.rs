//! Integer, decimal and number checkers
//!
//! All three coerce accepted representations to `f64` and compare in
//! that domain, the way JSON-decoded numbers arrive. They differ only in
//! which representations they accept: integer takes whole-valued numbers
//! and strings, decimal takes fractional ones, number takes both.

use super::{CheckResult, gate};
use crate::{Bound, ConfigError, ErrorGenerator, FieldError, Record, Rule, Value};
use palisade_i18n::{MessageKey, NumericFamily, RangeKind, SignContext};

/// Whole-valued numbers: native integers, floats and numeric strings
/// with no fractional part. Bounds must be integers.
pub(crate) fn integer(
    field: &str,
    rule: &Rule,
    record: &Record,
    messages: &ErrorGenerator<'_>,
) -> CheckResult {
    checked_bounds(rule, true)?;
    sign_conflicts(rule)?;

    let value = gate!(field, rule, record, messages);
    let type_error = || messages.generate(MessageKey::Integer, field, rule, &[]);
    let number = match value {
        Value::I8(v) => f64::from(*v),
        Value::I16(v) => f64::from(*v),
        Value::I32(v) => f64::from(*v),
        Value::I64(v) => *v as f64,
        Value::F64(v) if v.fract() == 0.0 => *v,
        Value::F32(v) if v.fract() == 0.0 => f64::from(*v),
        Value::Str(s) => match s.parse::<f64>() {
            Ok(parsed) if parsed.fract() == 0.0 => parsed,
            _ => return Ok(Some(type_error())),
        },
        _ => return Ok(Some(type_error())),
    };

    Ok(verdict(field, rule, messages, NumericFamily::Integer, number))
}

/// Fractional numbers: floats and numeric strings whose fractional part
/// is non-zero. A whole-valued float is a failure, not an integer in
/// disguise. Bounds may be integers or decimals.
pub(crate) fn decimal(
    field: &str,
    rule: &Rule,
    record: &Record,
    messages: &ErrorGenerator<'_>,
) -> CheckResult {
    checked_bounds(rule, false)?;
    sign_conflicts(rule)?;

    let value = gate!(field, rule, record, messages);
    let type_error = || messages.generate(MessageKey::Decimal, field, rule, &[]);
    let number = match value {
        Value::F64(v) => *v,
        Value::F32(v) => f64::from(*v),
        Value::Str(s) => match s.parse::<f64>() {
            Ok(parsed) => parsed,
            Err(_) => return Ok(Some(type_error())),
        },
        _ => return Ok(Some(type_error())),
    };
    if number.fract() == 0.0 {
        return Ok(Some(type_error()));
    }

    Ok(verdict(field, rule, messages, NumericFamily::Decimal, number))
}

/// Any numeric representation: integers, floats, numeric strings.
/// Bounds may be integers or decimals.
pub(crate) fn number(
    field: &str,
    rule: &Rule,
    record: &Record,
    messages: &ErrorGenerator<'_>,
) -> CheckResult {
    checked_bounds(rule, false)?;
    sign_conflicts(rule)?;

    let value = gate!(field, rule, record, messages);
    let type_error = || messages.generate(MessageKey::Number, field, rule, &[]);
    let parsed = match value {
        Value::I8(v) => f64::from(*v),
        Value::I16(v) => f64::from(*v),
        Value::I32(v) => f64::from(*v),
        Value::I64(v) => *v as f64,
        Value::F64(v) => *v,
        Value::F32(v) => f64::from(*v),
        Value::Str(s) => match s.parse::<f64>() {
            Ok(parsed) => parsed,
            Err(_) => return Ok(Some(type_error())),
        },
        _ => return Ok(Some(type_error())),
    };

    Ok(verdict(field, rule, messages, NumericFamily::Number, parsed))
}

/// Sign then range, in that order: a sign violation short-circuits the
/// range check.
fn verdict(
    field: &str,
    rule: &Rule,
    messages: &ErrorGenerator<'_>,
    family: NumericFamily,
    value: f64,
) -> Option<FieldError> {
    if (rule.sign > 0 && value <= 0.0) || (rule.sign < 0 && value >= 0.0) {
        let key = MessageKey::sign_error(family, rule.sign > 0);
        return Some(messages.generate(key, field, rule, &[]));
    }

    let sign = SignContext::from_sign(rule.sign);
    match (rule.min, rule.max) {
        (None, Some(max)) if value > max.as_f64() => Some(messages.generate(
            MessageKey::range_error(family, sign, RangeKind::Max),
            field,
            rule,
            &[&max],
        )),
        (Some(min), None) if value < min.as_f64() => Some(messages.generate(
            MessageKey::range_error(family, sign, RangeKind::Min),
            field,
            rule,
            &[&min],
        )),
        (Some(min), Some(max)) if value < min.as_f64() || value > max.as_f64() => {
            if min == max {
                Some(messages.generate(MessageKey::Equal, field, rule, &[&max]))
            } else {
                Some(messages.generate(
                    MessageKey::range_error(family, sign, RangeKind::Range),
                    field,
                    rule,
                    &[&min, &max],
                ))
            }
        }
        _ => None,
    }
}

/// Bound form and ordering checks, before the record is consulted.
fn checked_bounds(rule: &Rule, int_only: bool) -> Result<(), ConfigError> {
    if int_only {
        for (bound, attr) in [(rule.min, "min"), (rule.max, "max")] {
            if let Some(bound) = bound {
                if bound.as_int().is_none() {
                    return Err(ConfigError::BoundType {
                        rule: rule.clone(),
                        attr,
                        expected: "an integer",
                    });
                }
            }
        }
    }
    if let (Some(min), Some(max)) = (rule.min, rule.max) {
        let inverted = match (min, max) {
            (Bound::Int(min), Bound::Int(max)) => min > max,
            _ => min.as_f64() > max.as_f64(),
        };
        if inverted {
            return Err(ConfigError::BoundOrder { rule: rule.clone() });
        }
    }
    Ok(())
}

/// A bound on the wrong side of zero contradicts the sign constraint.
fn sign_conflicts(rule: &Rule) -> Result<(), ConfigError> {
    if rule.sign > 0 {
        if let Some(max) = rule.max {
            if max.as_f64() <= 0.0 {
                return Err(ConfigError::SignMaxConflict { rule: rule.clone() });
            }
        }
    }
    if rule.sign < 0 {
        if let Some(min) = rule.min {
            if min.as_f64() >= 0.0 {
                return Err(ConfigError::SignMinConflict { rule: rule.clone() });
            }
        }
    }
    Ok(())
}
