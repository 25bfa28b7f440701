//! Message catalog for the Palisade validator
//!
//! Holds the localized error-message templates the validator renders when a
//! field fails a check. The catalog is a read-only table once configured:
//! a [`Catalog`] maps locale tags to [`MessageBundle`]s, and a bundle maps
//! each [`MessageKey`] to a template string.
//!
//! Templates contain a `{label}` token, replaced with the field name, and
//! positional `{}` placeholders filled left-to-right with the values the
//! checker supplies (bounds, enum lists).
//!
//! # Examples
//!
//! ```
//! use palisade_i18n::{Catalog, Locale, MessageKey, format};
//!
//! let catalog = Catalog::builtin();
//! let bundle = catalog.bundle(&Locale::en_us()).unwrap();
//!
//! let template = bundle.get(MessageKey::IntegerMax).unwrap();
//! let message = format::render(template, "age", &[&150]);
//! assert_eq!(message, "must be an integer with a maximum value of 150");
//! ```
//!
//! Embedders can add languages at runtime from JSON:
//!
//! ```
//! use palisade_i18n::{Catalog, Locale, MessageBundle, MessageKey};
//!
//! let json = r#"{ "required": "ne peut pas être vide" }"#;
//! let bundle = MessageBundle::from_json(json).unwrap();
//!
//! let mut catalog = Catalog::builtin();
//! catalog.add_bundle(&Locale::new("fr", None::<&str>), bundle);
//! assert!(catalog.bundle(&Locale::new("fr", Some("FR"))).is_some());
//! ```

pub mod catalog;
mod error;
pub mod format;
mod keys;
mod locale;

pub use catalog::{Catalog, MessageBundle};
pub use error::CatalogError;
pub use keys::{MessageKey, NumericFamily, RangeKind, SignContext};
pub use locale::Locale;

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;
