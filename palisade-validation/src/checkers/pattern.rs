//! Pattern checkers
//!
//! A generic regex checker plus four specializations that supply a fixed
//! built-in pattern and their own message key. All require a string
//! value; the built-in patterns are anchored, so they match the whole
//! string.

use super::{CheckResult, gate};
use crate::{ConfigError, ErrorGenerator, Record, Rule, Value};
use once_cell::sync::Lazy;
use palisade_i18n::MessageKey;
use regex::Regex;

// CN-centric built-ins: 6-digit postal codes, area-code landlines and
// 11-digit mobile numbers with an optional country prefix.
const PATTERN_ZIPCODE: &str = r"^[1-9]\d{5}$";
const PATTERN_TEL: &str = r"^(0\d{2,3}(\-)?)?\d{7,8}$";
const PATTERN_MOBILE: &str = r"^((\+86)|(86))?(1(([35][0-9])|[8][0-9]|[7][01356789]|[4][579]))\d{8}$";
const PATTERN_EMAIL: &str = r"^[\w!#$%&'*+/=?^_`{|}~-]+(?:\.[\w!#$%&'*+/=?^_`{|}~-]+)*@(?:[\w](?:[\w-]*[\w])?\.)+[a-zA-Z0-9](?:[\w-]*[\w])?$";

static ZIPCODE: Lazy<Regex> = Lazy::new(|| Regex::new(PATTERN_ZIPCODE).unwrap());
static TEL: Lazy<Regex> = Lazy::new(|| Regex::new(PATTERN_TEL).unwrap());
static MOBILE: Lazy<Regex> = Lazy::new(|| Regex::new(PATTERN_MOBILE).unwrap());
static EMAIL: Lazy<Regex> = Lazy::new(|| Regex::new(PATTERN_EMAIL).unwrap());

/// Match a string value against a compiled pattern.
fn matches(
    field: &str,
    rule: &Rule,
    record: &Record,
    messages: &ErrorGenerator<'_>,
    pattern: &Regex,
    key: MessageKey,
) -> CheckResult {
    let value = gate!(field, rule, record, messages);
    match value {
        Value::Str(s) => {
            if pattern.is_match(s) {
                Ok(None)
            } else {
                Ok(Some(messages.generate(key, field, rule, &[])))
            }
        }
        _ => Ok(Some(messages.generate(MessageKey::String, field, rule, &[]))),
    }
}

/// Value must match the rule's own pattern.
pub(crate) fn regex(
    field: &str,
    rule: &Rule,
    record: &Record,
    messages: &ErrorGenerator<'_>,
) -> CheckResult {
    let pattern = rule
        .pattern
        .as_deref()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ConfigError::MissingPattern { rule: rule.clone() })?;
    let compiled = Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
        rule: rule.clone(),
        source,
    })?;
    matches(field, rule, record, messages, &compiled, MessageKey::Regex)
}

/// Value must be an email address.
pub(crate) fn email(
    field: &str,
    rule: &Rule,
    record: &Record,
    messages: &ErrorGenerator<'_>,
) -> CheckResult {
    matches(field, rule, record, messages, &EMAIL, MessageKey::Email)
}

/// Value must be a landline number.
pub(crate) fn tel(
    field: &str,
    rule: &Rule,
    record: &Record,
    messages: &ErrorGenerator<'_>,
) -> CheckResult {
    matches(field, rule, record, messages, &TEL, MessageKey::Tel)
}

/// Value must be a mobile number.
pub(crate) fn mobile(
    field: &str,
    rule: &Rule,
    record: &Record,
    messages: &ErrorGenerator<'_>,
) -> CheckResult {
    matches(field, rule, record, messages, &MOBILE, MessageKey::Mobile)
}

/// Value must be a postal code.
pub(crate) fn zipcode(
    field: &str,
    rule: &Rule,
    record: &Record,
    messages: &ErrorGenerator<'_>,
) -> CheckResult {
    matches(field, rule, record, messages, &ZIPCODE, MessageKey::Zipcode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkers::testutil;

    fn messages() -> ErrorGenerator<'static> {
        ErrorGenerator::new(testutil::bundle())
    }

    fn record(value: impl Into<Value>) -> Record {
        Record::new().set("f", value)
    }

    #[test]
    fn regex_matches_rule_pattern() {
        let rule = Rule::new("f", "regex").pattern(r"^\d{4}-\d{2}$");
        assert_eq!(regex("f", &rule, &record("2026-08"), &messages()).unwrap(), None);
        let error = regex("f", &rule, &record("08-2026"), &messages()).unwrap().unwrap();
        assert_eq!(error.message, "must be in a valid format");
        assert_eq!(error.constraint, "regex");
    }

    #[test]
    fn regex_requires_a_string_value() {
        let rule = Rule::new("f", "regex").pattern(r"^\d+$");
        let error = regex("f", &rule, &record(1234), &messages()).unwrap().unwrap();
        assert_eq!(error.constraint, "string");
    }

    #[test]
    fn missing_pattern_is_a_config_error_before_the_record() {
        let rule = Rule::new("f", "regex");
        assert!(matches!(
            regex("f", &rule, &Record::new(), &messages()),
            Err(ConfigError::MissingPattern { .. })
        ));

        let rule = Rule::new("f", "regex").pattern("");
        assert!(matches!(
            regex("f", &rule, &record("x"), &messages()),
            Err(ConfigError::MissingPattern { .. })
        ));
    }

    #[test]
    fn malformed_pattern_is_a_config_error() {
        let rule = Rule::new("f", "regex").pattern("([unclosed");
        assert!(matches!(
            regex("f", &rule, &record("x"), &messages()),
            Err(ConfigError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn email_accepts_common_addresses() {
        let rule = Rule::new("f", "email");
        for s in ["user@example.com", "user.name+tag@example.co.uk", "a_b-c@mail.example.org"] {
            assert_eq!(email("f", &rule, &record(s), &messages()).unwrap(), None, "email {s:?}");
        }
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        let rule = Rule::new("f", "email");
        for s in ["plainaddress", "@example.com", "user@", "user@.com", "user@domain."] {
            let error = email("f", &rule, &record(s), &messages()).unwrap().unwrap();
            assert_eq!(error.constraint, "email", "email {s:?}");
            assert_eq!(error.message, "must be a valid email address");
        }
    }

    #[test]
    fn tel_accepts_landlines_with_optional_area_code() {
        let rule = Rule::new("f", "tel");
        for s in ["010-12345678", "02112345678", "0755-1234567", "12345678"] {
            assert_eq!(tel("f", &rule, &record(s), &messages()).unwrap(), None, "tel {s:?}");
        }
    }

    #[test]
    fn tel_rejects_short_numbers() {
        let rule = Rule::new("f", "tel");
        for s in ["123456", "010-123", "abcdefgh"] {
            assert!(tel("f", &rule, &record(s), &messages()).unwrap().is_some(), "tel {s:?}");
        }
    }

    #[test]
    fn mobile_accepts_cn_numbers_with_optional_prefix() {
        let rule = Rule::new("f", "mobile");
        for s in ["13800138000", "+8613800138000", "8613800138000", "17712345678", "14512345678"] {
            assert_eq!(mobile("f", &rule, &record(s), &messages()).unwrap(), None, "mobile {s:?}");
        }
    }

    #[test]
    fn mobile_rejects_invalid_numbers() {
        let rule = Rule::new("f", "mobile");
        for s in ["12345678901", "1380013800", "138001380000", "23800138000"] {
            let error = mobile("f", &rule, &record(s), &messages()).unwrap().unwrap();
            assert_eq!(error.constraint, "mobile", "mobile {s:?}");
        }
    }

    #[test]
    fn zipcode_is_six_digits_first_nonzero() {
        let rule = Rule::new("f", "zipcode");
        assert_eq!(zipcode("f", &rule, &record("100000"), &messages()).unwrap(), None);
        for s in ["012345", "10000", "1000000", "10000a"] {
            assert!(zipcode("f", &rule, &record(s), &messages()).unwrap().is_some(), "zipcode {s:?}");
        }
    }

    #[test]
    fn specializations_do_not_read_the_rule_pattern() {
        // a pattern set on the rule is ignored by the fixed-pattern kinds
        let rule = Rule::new("f", "email").pattern(r"^\d+$");
        assert_eq!(email("f", &rule, &record("user@example.com"), &messages()).unwrap(), None);
    }

    #[test]
    fn absent_field_behavior() {
        let optional = Rule::new("f", "email");
        assert_eq!(email("f", &optional, &Record::new(), &messages()).unwrap(), None);

        let mandatory = Rule::new("f", "zipcode").required(true);
        let error = zipcode("f", &mandatory, &Record::new(), &messages()).unwrap().unwrap();
        assert_eq!(error.constraint, "required");
    }
}
