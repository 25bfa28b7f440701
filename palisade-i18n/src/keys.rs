//! Message keys
//!
//! The closed set of message identifiers the validator can emit. Keeping
//! the set closed means a checker cannot reference a message the catalog
//! does not define; bundles loaded from JSON are checked against the same
//! set so a typo in a data file is an error, not a silent fallback.
//!
//! Each key has a stable string id used in JSON bundles and as the
//! `constraint` tag on field errors.

use crate::CatalogError;
use std::fmt;
use std::str::FromStr;

/// Numeric checker family, used to compose range/sign message keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericFamily {
    Integer,
    Decimal,
    Number,
}

/// Sign constraint context of a numeric rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignContext {
    /// No sign constraint
    Any,
    /// Value must be strictly positive
    Positive,
    /// Value must be strictly negative
    Negative,
}

impl SignContext {
    /// Classify a rule's `sign` field.
    pub fn from_sign(sign: i64) -> Self {
        match sign {
            s if s > 0 => Self::Positive,
            s if s < 0 => Self::Negative,
            _ => Self::Any,
        }
    }
}

/// Which bound(s) a range violation message reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeKind {
    Max,
    Min,
    Range,
}

/// Identifier of one message template in a bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Equal,
    Required,
    In,
    InType,
    String,
    StringLengthMax,
    StringLengthMin,
    StringLengthRange,
    StringLengthEqual,
    Integer,
    IntegerMax,
    IntegerMin,
    IntegerRange,
    IntegerPositive,
    IntegerPositiveMax,
    IntegerPositiveMin,
    IntegerPositiveRange,
    IntegerNegative,
    IntegerNegativeMax,
    IntegerNegativeMin,
    IntegerNegativeRange,
    Decimal,
    DecimalMax,
    DecimalMin,
    DecimalRange,
    DecimalPositive,
    DecimalPositiveMax,
    DecimalPositiveMin,
    DecimalPositiveRange,
    DecimalNegative,
    DecimalNegativeMax,
    DecimalNegativeMin,
    DecimalNegativeRange,
    Number,
    NumberMax,
    NumberMin,
    NumberRange,
    NumberPositive,
    NumberPositiveMax,
    NumberPositiveMin,
    NumberPositiveRange,
    NumberNegative,
    NumberNegativeMax,
    NumberNegativeMin,
    NumberNegativeRange,
    Boolean,
    Regex,
    Ip,
    Email,
    Tel,
    Mobile,
    Zipcode,
}

impl MessageKey {
    /// Every message key, in catalog order.
    pub const ALL: [MessageKey; 52] = [
        Self::Equal,
        Self::Required,
        Self::In,
        Self::InType,
        Self::String,
        Self::StringLengthMax,
        Self::StringLengthMin,
        Self::StringLengthRange,
        Self::StringLengthEqual,
        Self::Integer,
        Self::IntegerMax,
        Self::IntegerMin,
        Self::IntegerRange,
        Self::IntegerPositive,
        Self::IntegerPositiveMax,
        Self::IntegerPositiveMin,
        Self::IntegerPositiveRange,
        Self::IntegerNegative,
        Self::IntegerNegativeMax,
        Self::IntegerNegativeMin,
        Self::IntegerNegativeRange,
        Self::Decimal,
        Self::DecimalMax,
        Self::DecimalMin,
        Self::DecimalRange,
        Self::DecimalPositive,
        Self::DecimalPositiveMax,
        Self::DecimalPositiveMin,
        Self::DecimalPositiveRange,
        Self::DecimalNegative,
        Self::DecimalNegativeMax,
        Self::DecimalNegativeMin,
        Self::DecimalNegativeRange,
        Self::Number,
        Self::NumberMax,
        Self::NumberMin,
        Self::NumberRange,
        Self::NumberPositive,
        Self::NumberPositiveMax,
        Self::NumberPositiveMin,
        Self::NumberPositiveRange,
        Self::NumberNegative,
        Self::NumberNegativeMax,
        Self::NumberNegativeMin,
        Self::NumberNegativeRange,
        Self::Boolean,
        Self::Regex,
        Self::Ip,
        Self::Email,
        Self::Tel,
        Self::Mobile,
        Self::Zipcode,
    ];

    /// The stable string id of this key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Required => "required",
            Self::In => "in",
            Self::InType => "inValid",
            Self::String => "string",
            Self::StringLengthMax => "stringLengthMax",
            Self::StringLengthMin => "stringLengthMin",
            Self::StringLengthRange => "stringLengthRange",
            Self::StringLengthEqual => "stringLengthEqual",
            Self::Integer => "integer",
            Self::IntegerMax => "integerMax",
            Self::IntegerMin => "integerMin",
            Self::IntegerRange => "integerRange",
            Self::IntegerPositive => "integerPositive",
            Self::IntegerPositiveMax => "integerPositiveMax",
            Self::IntegerPositiveMin => "integerPositiveMin",
            Self::IntegerPositiveRange => "integerPositiveRange",
            Self::IntegerNegative => "integerNegative",
            Self::IntegerNegativeMax => "integerNegativeMax",
            Self::IntegerNegativeMin => "integerNegativeMin",
            Self::IntegerNegativeRange => "integerNegativeRange",
            Self::Decimal => "decimal",
            Self::DecimalMax => "decimalMax",
            Self::DecimalMin => "decimalMin",
            Self::DecimalRange => "decimalRange",
            Self::DecimalPositive => "decimalPositive",
            Self::DecimalPositiveMax => "decimalPositiveMax",
            Self::DecimalPositiveMin => "decimalPositiveMin",
            Self::DecimalPositiveRange => "decimalPositiveRange",
            Self::DecimalNegative => "decimalNegative",
            Self::DecimalNegativeMax => "decimalNegativeMax",
            Self::DecimalNegativeMin => "decimalNegativeMin",
            Self::DecimalNegativeRange => "decimalNegativeRange",
            Self::Number => "number",
            Self::NumberMax => "numberMax",
            Self::NumberMin => "numberMin",
            Self::NumberRange => "numberRange",
            Self::NumberPositive => "numberPositive",
            Self::NumberPositiveMax => "numberPositiveMax",
            Self::NumberPositiveMin => "numberPositiveMin",
            Self::NumberPositiveRange => "numberPositiveRange",
            Self::NumberNegative => "numberNegative",
            Self::NumberNegativeMax => "numberNegativeMax",
            Self::NumberNegativeMin => "numberNegativeMin",
            Self::NumberNegativeRange => "numberNegativeRange",
            Self::Boolean => "boolean",
            Self::Regex => "regex",
            Self::Ip => "ip",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Mobile => "mobile",
            Self::Zipcode => "zipcode",
        }
    }

    /// Type-mismatch key for a numeric family ("must be an integer", ...).
    pub fn type_error(family: NumericFamily) -> Self {
        match family {
            NumericFamily::Integer => Self::Integer,
            NumericFamily::Decimal => Self::Decimal,
            NumericFamily::Number => Self::Number,
        }
    }

    /// Sign-violation key for a numeric family.
    pub fn sign_error(family: NumericFamily, positive: bool) -> Self {
        match (family, positive) {
            (NumericFamily::Integer, true) => Self::IntegerPositive,
            (NumericFamily::Integer, false) => Self::IntegerNegative,
            (NumericFamily::Decimal, true) => Self::DecimalPositive,
            (NumericFamily::Decimal, false) => Self::DecimalNegative,
            (NumericFamily::Number, true) => Self::NumberPositive,
            (NumericFamily::Number, false) => Self::NumberNegative,
        }
    }

    /// Range-violation key for a numeric family under a sign context.
    pub fn range_error(family: NumericFamily, sign: SignContext, kind: RangeKind) -> Self {
        match family {
            NumericFamily::Integer => match (sign, kind) {
                (SignContext::Any, RangeKind::Max) => Self::IntegerMax,
                (SignContext::Any, RangeKind::Min) => Self::IntegerMin,
                (SignContext::Any, RangeKind::Range) => Self::IntegerRange,
                (SignContext::Positive, RangeKind::Max) => Self::IntegerPositiveMax,
                (SignContext::Positive, RangeKind::Min) => Self::IntegerPositiveMin,
                (SignContext::Positive, RangeKind::Range) => Self::IntegerPositiveRange,
                (SignContext::Negative, RangeKind::Max) => Self::IntegerNegativeMax,
                (SignContext::Negative, RangeKind::Min) => Self::IntegerNegativeMin,
                (SignContext::Negative, RangeKind::Range) => Self::IntegerNegativeRange,
            },
            NumericFamily::Decimal => match (sign, kind) {
                (SignContext::Any, RangeKind::Max) => Self::DecimalMax,
                (SignContext::Any, RangeKind::Min) => Self::DecimalMin,
                (SignContext::Any, RangeKind::Range) => Self::DecimalRange,
                (SignContext::Positive, RangeKind::Max) => Self::DecimalPositiveMax,
                (SignContext::Positive, RangeKind::Min) => Self::DecimalPositiveMin,
                (SignContext::Positive, RangeKind::Range) => Self::DecimalPositiveRange,
                (SignContext::Negative, RangeKind::Max) => Self::DecimalNegativeMax,
                (SignContext::Negative, RangeKind::Min) => Self::DecimalNegativeMin,
                (SignContext::Negative, RangeKind::Range) => Self::DecimalNegativeRange,
            },
            NumericFamily::Number => match (sign, kind) {
                (SignContext::Any, RangeKind::Max) => Self::NumberMax,
                (SignContext::Any, RangeKind::Min) => Self::NumberMin,
                (SignContext::Any, RangeKind::Range) => Self::NumberRange,
                (SignContext::Positive, RangeKind::Max) => Self::NumberPositiveMax,
                (SignContext::Positive, RangeKind::Min) => Self::NumberPositiveMin,
                (SignContext::Positive, RangeKind::Range) => Self::NumberPositiveRange,
                (SignContext::Negative, RangeKind::Max) => Self::NumberNegativeMax,
                (SignContext::Negative, RangeKind::Min) => Self::NumberNegativeMin,
                (SignContext::Negative, RangeKind::Range) => Self::NumberNegativeRange,
            },
        }
    }
}

impl FromStr for MessageKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownKey(s.to_string()))
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
