//! Validator facade
//!
//! Owns the checker registry, the message catalog and the active locale,
//! and runs one scenario's rules over a record. The registry and catalog
//! are per-instance, so differently configured validators (one per
//! language, say) coexist without cross-talk.

use crate::checkers::{self, CheckResult, CheckerFn};
use crate::{ConfigError, ErrorGenerator, FieldErrors, Record, Rule, RuleSet, Target};
use log::{debug, trace};
use palisade_i18n::{Catalog, Locale, MessageBundle};
use std::collections::HashMap;
use std::sync::Arc;

/// Scenario-aware validator for loosely-typed records.
///
/// Configure once (language, extra checkers, extra bundles), then call
/// [`validate`](Validator::validate) freely; validation itself never
/// mutates the validator, so a configured instance can be shared across
/// threads.
///
/// ```
/// use palisade_validation::{Record, Rule, RuleSet, Validator};
///
/// let v = Validator::new().language("en-US").unwrap();
/// let rules = RuleSet::new().scenario("create", vec![
///     Rule::new("age", "integer").max(150),
/// ]);
/// let record = Record::new().set("age", 151);
///
/// let errors = v.validate(&rules, &record, "create").unwrap();
/// assert_eq!(errors.len(), 1);
/// ```
pub struct Validator {
    locale: Locale,
    catalog: Catalog,
    checkers: HashMap<String, CheckerFn>,
}

impl Validator {
    /// Create a validator with the built-in checkers and catalog.
    ///
    /// The default locale is `zh-CN`; switch with
    /// [`language`](Validator::language) or
    /// [`set_language`](Validator::set_language).
    pub fn new() -> Self {
        Self {
            locale: Locale::zh_cn(),
            catalog: Catalog::builtin(),
            checkers: checkers::builtins(),
        }
    }

    /// Switch the active language, builder style.
    pub fn language(mut self, tag: &str) -> Result<Self, ConfigError> {
        self.set_language(tag)?;
        Ok(self)
    }

    /// Switch the active language.
    ///
    /// The tag is normalized (`ZH_CN` and `zh-cn` both work); a language
    /// without a registered bundle is a configuration error. Call during
    /// setup, not concurrently with in-flight validation.
    pub fn set_language(&mut self, tag: &str) -> Result<(), ConfigError> {
        let locale =
            Locale::parse(tag).map_err(|_| ConfigError::UnsupportedLanguage(tag.to_string()))?;
        if !self.catalog.supports(&locale) {
            return Err(ConfigError::UnsupportedLanguage(tag.to_string()));
        }
        debug!("switching validator language to {locale}");
        self.locale = locale;
        Ok(())
    }

    /// The active locale.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Register a message bundle for an additional language.
    pub fn add_bundle(&mut self, locale: &Locale, bundle: MessageBundle) {
        self.catalog.add_bundle(locale, bundle);
    }

    /// Register a user checker under a new kind.
    ///
    /// The checker shares the built-in contract and the active message
    /// bundle. Re-registering an existing kind (built-in or not) is a
    /// configuration error.
    ///
    /// ```
    /// use palisade_validation::{ErrorGenerator, FieldError, Record, Rule, Validator, Value};
    ///
    /// let mut v = Validator::new();
    /// v.add_checker("even", |field: &str, _rule: &Rule, record: &Record, _messages: &ErrorGenerator<'_>| {
    ///     match record.get(field) {
    ///         Some(Value::I64(n)) if n % 2 == 0 => Ok(None),
    ///         None => Ok(None),
    ///         _ => Ok(Some(FieldError::new(field, "must be even"))),
    ///     }
    /// }).unwrap();
    /// ```
    pub fn add_checker<F>(&mut self, kind: impl Into<String>, checker: F) -> Result<(), ConfigError>
    where
        F: Fn(&str, &Rule, &Record, &ErrorGenerator<'_>) -> CheckResult + Send + Sync + 'static,
    {
        let kind = kind.into();
        if self.checkers.contains_key(&kind) {
            return Err(ConfigError::DuplicateChecker(kind));
        }
        debug!("registering checker '{kind}'");
        self.checkers.insert(kind, Arc::new(checker));
        Ok(())
    }

    /// Validate a record against one scenario of a rule set.
    ///
    /// Returns the ordered field errors (empty when the record passes) or
    /// a [`ConfigError`] when a rule is misconfigured. Each call uses its
    /// own accumulator; `&self` is never mutated.
    pub fn validate(
        &self,
        rules: &RuleSet,
        record: &Record,
        scenario: &str,
    ) -> Result<FieldErrors, ConfigError> {
        let scenario_rules = rules
            .get(scenario)
            .ok_or_else(|| ConfigError::UnknownScenario(scenario.to_string()))?;
        let bundle = self
            .catalog
            .bundle(&self.locale)
            .ok_or_else(|| ConfigError::UnsupportedLanguage(self.locale.tag()))?;
        let messages = ErrorGenerator::new(bundle);

        debug!("validating scenario '{scenario}' ({} rules)", scenario_rules.len());
        let mut errors = FieldErrors::new();
        for rule in scenario_rules {
            self.dispatch(rule, record, &messages, &mut errors)?;
        }
        Ok(errors)
    }

    /// Resolve a rule's checker and fan it out over the rule's targets.
    fn dispatch(
        &self,
        rule: &Rule,
        record: &Record,
        messages: &ErrorGenerator<'_>,
        errors: &mut FieldErrors,
    ) -> Result<(), ConfigError> {
        if rule.kind.is_empty() {
            return Err(ConfigError::MissingKind { rule: rule.clone() });
        }
        let checker = self.checkers.get(&rule.kind).ok_or_else(|| {
            ConfigError::UnknownChecker {
                kind: rule.kind.clone(),
                rule: rule.clone(),
            }
        })?;

        match &rule.target {
            Target::One(field) => self.check(checker, field, rule, record, messages, errors),
            Target::Many(fields) => {
                if fields.is_empty() {
                    return Err(ConfigError::EmptyTarget { rule: rule.clone() });
                }
                for field in fields {
                    self.check(checker, field, rule, record, messages, errors)?;
                }
                Ok(())
            }
        }
    }

    fn check(
        &self,
        checker: &CheckerFn,
        field: &str,
        rule: &Rule,
        record: &Record,
        messages: &ErrorGenerator<'_>,
        errors: &mut FieldErrors,
    ) -> Result<(), ConfigError> {
        if field.is_empty() {
            return Err(ConfigError::EmptyTarget { rule: rule.clone() });
        }
        trace!("checking field '{field}' with kind '{}'", rule.kind);
        if let Some(error) = checker(field, rule, record, messages)? {
            errors.add(error);
        }
        Ok(())
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldError, Value};
    use palisade_i18n::MessageKey;

    #[test]
    fn default_locale_is_zh_cn() {
        let v = Validator::new();
        assert_eq!(v.locale(), &Locale::zh_cn());
    }

    #[test]
    fn set_language_normalizes_the_tag() {
        let mut v = Validator::new();
        v.set_language("EN_US").unwrap();
        assert_eq!(v.locale(), &Locale::en_us());
    }

    #[test]
    fn unsupported_language_is_a_config_error() {
        let mut v = Validator::new();
        assert!(matches!(v.set_language("de-DE"), Err(ConfigError::UnsupportedLanguage(_))));
        assert!(matches!(v.set_language("!!"), Err(ConfigError::UnsupportedLanguage(_))));
        // failed switch leaves the active locale untouched
        assert_eq!(v.locale(), &Locale::zh_cn());
    }

    #[test]
    fn added_bundle_enables_its_language() {
        let mut v = Validator::new();
        let mut bundle = MessageBundle::new();
        bundle.add(MessageKey::Required, "{label} ne peut pas être vide");
        v.add_bundle(&Locale::new("fr", None::<&str>), bundle);
        v.set_language("fr-FR").unwrap();

        let rules = RuleSet::new().scenario("create", vec![Rule::new("nom", "required")]);
        let errors = v.validate(&rules, &Record::new(), "create").unwrap();
        assert_eq!(errors.iter().next().unwrap().message, "nom ne peut pas être vide");
    }

    #[test]
    fn duplicate_checker_registration_fails() {
        let mut v = Validator::new();
        let ok = v.add_checker("always", |_: &str, _: &Rule, _: &Record, _: &ErrorGenerator<'_>| Ok(None));
        assert!(ok.is_ok());

        let dup = v.add_checker("integer", |_: &str, _: &Rule, _: &Record, _: &ErrorGenerator<'_>| Ok(None));
        assert!(matches!(dup, Err(ConfigError::DuplicateChecker(name)) if name == "integer"));
    }

    #[test]
    fn user_checker_shares_the_contract() {
        let mut v = Validator::new().language("en-US").unwrap();
        v.add_checker("uppercase", |field: &str, _rule: &Rule, record: &Record, _: &ErrorGenerator<'_>| {
            match record.get(field) {
                Some(Value::Str(s)) if s.chars().all(|c| !c.is_lowercase()) => Ok(None),
                None => Ok(None),
                _ => Ok(Some(FieldError::new(field, "must be uppercase").with_constraint("uppercase"))),
            }
        })
        .unwrap();

        let rules = RuleSet::new().scenario("create", vec![Rule::new("code", "uppercase")]);
        let record = Record::new().set("code", "Ab");
        let errors = v.validate(&rules, &record, "create").unwrap();
        assert_eq!(errors.iter().next().unwrap().message, "must be uppercase");
    }

    #[test]
    fn unknown_scenario_aborts() {
        let v = Validator::new();
        let rules = RuleSet::new().scenario("create", vec![Rule::new("f", "required")]);
        let result = v.validate(&rules, &Record::new(), "delete");
        assert!(matches!(result, Err(ConfigError::UnknownScenario(name)) if name == "delete"));
    }

    #[test]
    fn empty_kind_aborts() {
        let v = Validator::new();
        let rules = RuleSet::new().scenario("create", vec![Rule::new("f", "")]);
        assert!(matches!(
            v.validate(&rules, &Record::new(), "create"),
            Err(ConfigError::MissingKind { .. })
        ));
    }

    #[test]
    fn unknown_kind_aborts() {
        let v = Validator::new();
        let rules = RuleSet::new().scenario("create", vec![Rule::new("f", "uuid")]);
        assert!(matches!(
            v.validate(&rules, &Record::new(), "create"),
            Err(ConfigError::UnknownChecker { kind, .. }) if kind == "uuid"
        ));
    }

    #[test]
    fn empty_targets_abort() {
        let v = Validator::new();

        let rules = RuleSet::new().scenario("create", vec![Rule::new("", "required")]);
        assert!(matches!(
            v.validate(&rules, &Record::new(), "create"),
            Err(ConfigError::EmptyTarget { .. })
        ));

        let rules = RuleSet::new().scenario("create", vec![Rule::new(Vec::<String>::new(), "required")]);
        assert!(matches!(
            v.validate(&rules, &Record::new(), "create"),
            Err(ConfigError::EmptyTarget { .. })
        ));
    }

    #[test]
    fn multi_target_rules_fan_out_in_order() {
        let v = Validator::new().language("en-US").unwrap();
        let rules = RuleSet::new().scenario("create", vec![Rule::new(["a", "b"], "required")]);
        let errors = v.validate(&rules, &Record::new(), "create").unwrap();

        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, ["a", "b"]);
    }

    #[test]
    fn rules_run_in_list_order_and_accumulate() {
        let v = Validator::new().language("en-US").unwrap();
        let rules = RuleSet::new().scenario("create", vec![
            Rule::new("age", "integer").max(150),
            Rule::new("age", "number").sign(1),
            Rule::new("name", "string"),
        ]);
        let record = Record::new().set("age", -3).set("name", 7);

        let errors = v.validate(&rules, &record, "create").unwrap();
        let constraints: Vec<_> = errors.iter().map(|e| e.constraint.as_str()).collect();
        assert_eq!(constraints, ["numberPositive", "string"]);
    }

    #[test]
    fn passing_record_returns_an_empty_list() {
        let v = Validator::new();
        let rules = RuleSet::new().scenario("create", vec![
            Rule::new("age", "integer").min(0).max(150),
        ]);
        let record = Record::new().set("age", 28);
        let errors = v.validate(&rules, &record, "create").unwrap();
        assert!(errors.is_empty());
    }

    #[test]
    fn aliases_resolve_to_their_checkers() {
        let v = Validator::new().language("en-US").unwrap();
        let rules = RuleSet::new().scenario("create", vec![
            Rule::new("a", "int"),
            Rule::new("b", "float"),
            Rule::new("c", "bool"),
            Rule::new("d", "phone"),
        ]);
        let record = Record::new()
            .set("a", 1)
            .set("b", 1.5)
            .set("c", "t")
            .set("d", "13800138000");
        assert!(v.validate(&rules, &record, "create").unwrap().is_empty());
    }
}
