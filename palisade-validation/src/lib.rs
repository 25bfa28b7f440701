//! Scenario-aware record validation for Palisade
//!
//! Validates loosely-typed records (field name to dynamically-typed
//! value) against declarative rules grouped by scenario, producing a
//! list of localized field errors. The checkers are logical, not
//! strongly typed: `3`, `3.0` and `"3"` all satisfy an integer rule,
//! which is what JSON-decoded input needs.
//!
//! Failed checks come back as data; misconfigured rules (contradictory
//! bounds, unknown kinds, missing parameters) abort the call with a
//! [`ConfigError`] instead. A rule bug is never reported as a field
//! error.
//!
//! # Examples
//!
//! ```
//! use palisade_validation::{Record, Rule, RuleSet, Validator};
//!
//! let rules = RuleSet::new()
//!     .scenario("create", vec![
//!         Rule::new(["username", "password"], "required"),
//!         Rule::new("password", "string").min(6).max(18),
//!         Rule::new("age", "integer").sign(1).max(150),
//!         Rule::new("gender", "in").one_of(["male", "female"]),
//!     ])
//!     .scenario("get", vec![
//!         Rule::new("username", "required"),
//!     ]);
//!
//! let v = Validator::new().language("en-US").unwrap();
//! let record = Record::new()
//!     .set("username", "li")
//!     .set("password", "secret")
//!     .set("age", 151);
//!
//! let errors = v.validate(&rules, &record, "create").unwrap();
//! assert_eq!(errors.len(), 1);
//! assert_eq!(
//!     errors.iter().next().unwrap().message,
//!     "must be a positive integer with a maximum value of 150",
//! );
//! ```
//!
//! ## Custom checkers
//!
//! User checkers share the built-in contract and the active message
//! bundle, so extensions localize the same way:
//!
//! ```
//! use palisade_validation::{ErrorGenerator, FieldError, Record, Rule, Validator, Value};
//!
//! let mut v = Validator::new();
//! v.add_checker("uuid", |field: &str, _rule: &Rule, record: &Record, _messages: &ErrorGenerator<'_>| {
//!     match record.get(field) {
//!         None => Ok(None),
//!         Some(Value::Str(s)) if s.len() == 36 => Ok(None),
//!         _ => Ok(Some(FieldError::new(field, "must be a uuid"))),
//!     }
//! }).unwrap();
//! ```

mod checkers;
mod errors;
mod generator;
mod rule;
mod validator;
mod value;

pub use checkers::{CheckResult, CheckerFn};
pub use errors::{ConfigError, FieldError, FieldErrors};
pub use generator::ErrorGenerator;
pub use rule::{Bound, Rule, RuleSet, Target};
pub use validator::Validator;
pub use value::{Record, Value};

// The catalog types that appear in the facade's configuration surface.
pub use palisade_i18n::{Catalog, CatalogError, Locale, MessageBundle, MessageKey};
