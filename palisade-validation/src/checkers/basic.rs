//! Required, boolean and ip checkers

use super::{CheckResult, gate};
use crate::{ErrorGenerator, Record, Rule, Value};
use palisade_i18n::MessageKey;
use std::net::IpAddr;

/// Field must be present; any present value passes, zero values included.
pub(crate) fn required(
    field: &str,
    rule: &Rule,
    record: &Record,
    messages: &ErrorGenerator<'_>,
) -> CheckResult {
    if record.contains(field) {
        Ok(None)
    } else {
        Ok(Some(messages.generate(MessageKey::Required, field, rule, &[])))
    }
}

/// Native boolean, or a string parsing as one (1/0/t/f/true/false,
/// case-insensitive).
pub(crate) fn boolean(
    field: &str,
    rule: &Rule,
    record: &Record,
    messages: &ErrorGenerator<'_>,
) -> CheckResult {
    let value = gate!(field, rule, record, messages);
    match value {
        Value::Bool(_) => Ok(None),
        Value::Str(s) if parses_as_bool(s) => Ok(None),
        _ => Ok(Some(messages.generate(MessageKey::Boolean, field, rule, &[]))),
    }
}

fn parses_as_bool(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "1" | "0" | "t" | "f" | "true" | "false"
    )
}

/// String holding an IPv4 or IPv6 literal.
pub(crate) fn ip(
    field: &str,
    rule: &Rule,
    record: &Record,
    messages: &ErrorGenerator<'_>,
) -> CheckResult {
    let value = gate!(field, rule, record, messages);
    match value {
        Value::Str(s) => {
            if s.parse::<IpAddr>().is_ok() {
                Ok(None)
            } else {
                Ok(Some(messages.generate(MessageKey::Ip, field, rule, &[])))
            }
        }
        _ => Ok(Some(messages.generate(MessageKey::String, field, rule, &[]))),
    }
}
