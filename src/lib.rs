// Palisade - scenario-aware, internationalizable record validation
//
// This crate re-exports the Palisade workspace members: the validation
// engine and the localized message catalog it renders errors from.

// Re-export the validation engine
pub use palisade_validation::*;

// Re-export the message catalog
pub use palisade_i18n;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Bound,
        CheckResult,
        ConfigError,
        ErrorGenerator,
        FieldError,
        FieldErrors,
        Locale,
        MessageBundle,
        MessageKey,
        Record,
        Rule,
        RuleSet,
        Target,
        Validator,
        Value,
    };
}
