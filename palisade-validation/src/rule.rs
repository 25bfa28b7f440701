//! Validation rules
//!
//! A [`Rule`] is one declarative directive: which field(s) to check, the
//! checker kind, and the kind-specific parameters. Rules are grouped into
//! scenarios by a [`RuleSet`]; order is significant both across rules and
//! across a rule's targets.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Field(s) a rule applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Target {
    /// A single field
    One(String),
    /// Multiple fields, checked in list order
    Many(Vec<String>),
}

impl From<&str> for Target {
    fn from(field: &str) -> Self {
        Self::One(field.to_string())
    }
}

impl From<String> for Target {
    fn from(field: String) -> Self {
        Self::One(field)
    }
}

impl From<Vec<String>> for Target {
    fn from(fields: Vec<String>) -> Self {
        Self::Many(fields)
    }
}

impl<const N: usize> From<[&str; N]> for Target {
    fn from(fields: [&str; N]) -> Self {
        Self::Many(fields.iter().map(|f| f.to_string()).collect())
    }
}

/// A numeric bound, integer or decimal.
///
/// String-length and integer rules require the integer form; decimal and
/// number rules accept either. Two bounds are equal only when both the
/// form and the value match, so `min: 10` and `max: 10.0` collapse to a
/// range message, not an equality message.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Bound {
    Int(i64),
    Float(f64),
}

impl Bound {
    /// The bound in the comparison domain.
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    /// The integer form, if this is an integer bound.
    pub fn as_int(self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(v),
            Self::Float(_) => None,
        }
    }
}

impl From<i32> for Bound {
    fn from(v: i32) -> Self {
        Self::Int(v.into())
    }
}

impl From<i64> for Bound {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<usize> for Bound {
    fn from(v: usize) -> Self {
        Self::Int(v as i64)
    }
}

impl From<f32> for Bound {
    fn from(v: f32) -> Self {
        Self::Float(v.into())
    }
}

impl From<f64> for Bound {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

/// One validation directive.
///
/// Construct with [`Rule::new`] and the builder setters; a rule is
/// immutable once handed to the validator.
///
/// ```
/// use palisade_validation::Rule;
///
/// let password = Rule::new("password", "string").min(6).max(18);
/// let ids = Rule::new(["user_id", "group_id"], "integer").sign(1).required(true);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Field(s) to check
    pub target: Target,
    /// Checker kind ("required", "integer", or a registered name)
    pub kind: String,
    /// Literal error message overriding every generated message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Whether an absent field is an error (default: absent fields pass)
    #[serde(default)]
    pub required: bool,
    /// Sign constraint for numeric kinds: 0 none, > 0 positive, < 0 negative
    #[serde(default)]
    pub sign: i64,
    /// Upper bound (value for numeric kinds, length for string)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<Bound>,
    /// Lower bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<Bound>,
    /// Allowed canonical values for the "in" kind
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub one_of: Vec<String>,
    /// Pattern source for the "regex" kind
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl Rule {
    /// Create a rule for a target and checker kind.
    pub fn new(target: impl Into<Target>, kind: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            kind: kind.into(),
            message: None,
            required: false,
            sign: 0,
            max: None,
            min: None,
            one_of: Vec::new(),
            pattern: None,
        }
    }

    /// Override every generated message for this rule with a literal.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Require the field to be present.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Constrain the sign: > 0 positive, < 0 negative, 0 no constraint.
    pub fn sign(mut self, sign: i64) -> Self {
        self.sign = sign;
        self
    }

    /// Set the upper bound.
    pub fn max(mut self, max: impl Into<Bound>) -> Self {
        self.max = Some(max.into());
        self
    }

    /// Set the lower bound.
    pub fn min(mut self, min: impl Into<Bound>) -> Self {
        self.min = Some(min.into());
        self
    }

    /// Set the allowed values for the "in" kind.
    pub fn one_of<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.one_of = values.into_iter().map(Into::into).collect();
        self
    }

    /// Set the pattern for the "regex" kind.
    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }
}

/// Rules grouped by scenario key.
///
/// ```
/// use palisade_validation::{Rule, RuleSet};
///
/// let rules = RuleSet::new()
///     .scenario("create", vec![
///         Rule::new(["username", "password"], "required"),
///         Rule::new("password", "string").min(6).max(18),
///     ])
///     .scenario("get", vec![
///         Rule::new("username", "required"),
///     ]);
/// assert!(rules.get("create").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    scenarios: HashMap<String, Vec<Rule>>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a scenario's rule list, builder style.
    pub fn scenario(mut self, key: impl Into<String>, rules: Vec<Rule>) -> Self {
        self.scenarios.insert(key.into(), rules);
        self
    }

    /// Get a scenario's rules.
    pub fn get(&self, key: &str) -> Option<&[Rule]> {
        self.scenarios.get(key).map(|rules| rules.as_slice())
    }

    /// Scenario keys.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.scenarios.keys()
    }
}
