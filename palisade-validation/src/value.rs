//! Record values
//!
//! A [`Record`] maps field names to dynamically-typed [`Value`]s. The
//! checkers are logical, not strongly typed: `3`, `3.0` and `"3"` all
//! satisfy an integer rule. The variant set is closed; each checker
//! pattern-matches it exhaustively, so the coercion rules for a given
//! rule kind live in that checker and nowhere else.

use std::collections::HashMap;

/// A dynamically-typed record value.
///
/// `Null` models a present-but-typeless entry (JSON `null`): the field
/// counts as present for the required checker and fails every typed
/// checker with that checker's type error.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Str(String),
    Bool(bool),
    Null,
}

impl From<i8> for Value {
    fn from(v: i8) -> Self {
        Self::I8(v)
    }
}

impl From<i16> for Value {
    fn from(v: i16) -> Self {
        Self::I16(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::I32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::I64(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::F32(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::F64(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&serde_json::Value> for Value {
    /// Convert a JSON value the way JSON-decoded input is expected to
    /// look: integral numbers become `I64`, other numbers `F64`; `null`,
    /// arrays and objects become `Null` (present but typeless).
    fn from(v: &serde_json::Value) -> Self {
        match v {
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::I64(i),
                None => Self::F64(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Self::Str(s.clone()),
            serde_json::Value::Bool(b) => Self::Bool(*b),
            _ => Self::Null,
        }
    }
}

/// A record under validation: field name to value.
///
/// Presence is key existence. A field holding an empty string or `Null`
/// is present; only a missing key is absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: HashMap<String, Value>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, builder style.
    ///
    /// ```
    /// use palisade_validation::Record;
    ///
    /// let record = Record::new().set("age", 28).set("name", "li");
    /// assert!(record.contains("age"));
    /// ```
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Insert a field.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Get a field's value.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Whether the field is present.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Build a record from a JSON object; returns `None` for any other
    /// JSON shape.
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        let object = value.as_object()?;
        Some(
            object
                .iter()
                .map(|(field, v)| (field.clone(), Value::from(v)))
                .collect(),
        )
    }
}

impl FromIterator<(String, Value)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl From<HashMap<String, Value>> for Record {
    fn from(fields: HashMap<String, Value>) -> Self {
        Self { fields }
    }
}
