//! Locale representation
//!
//! A locale is a language code plus an optional region, parsed from tags
//! like `en-US`, `zh_CN` or `fr`. Separator and case are normalized, so
//! `ZH_CN` and `zh-cn` name the same locale.

use crate::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A locale (language + optional region).
///
/// # Examples
///
/// ```
/// use palisade_i18n::Locale;
/// use std::str::FromStr;
///
/// let en = Locale::new("en", None::<&str>);
/// let en_us = Locale::new("en", Some("US"));
/// let zh_cn = Locale::from_str("ZH_CN").unwrap();
/// assert_eq!(zh_cn.tag(), "zh-CN");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    /// Language code (ISO 639-1, e.g., "en", "zh")
    pub language: String,
    /// Optional region code (ISO 3166-1, e.g., "US", "CN")
    pub region: Option<String>,
}

impl Locale {
    /// Create a new locale.
    pub fn new(language: impl Into<String>, region: Option<impl Into<String>>) -> Self {
        Self {
            language: language.into().to_lowercase(),
            region: region.map(|r| r.into().to_uppercase()),
        }
    }

    /// Parse from a tag such as `en-US` or `zh_CN`.
    pub fn parse(tag: &str) -> Result<Self> {
        let parts: Vec<&str> = tag.split(['-', '_']).collect();

        if parts.is_empty() || parts[0].is_empty() {
            return Err(CatalogError::InvalidLocale(tag.to_string()));
        }

        let language = parts[0].to_lowercase();
        if language.len() < 2 || language.len() > 3 || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(CatalogError::InvalidLocale(tag.to_string()));
        }

        let mut region = None;
        for part in parts.iter().skip(1) {
            if part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()) {
                region = Some(part.to_uppercase());
            } else if !part.is_empty() {
                return Err(CatalogError::InvalidLocale(tag.to_string()));
            }
        }

        Ok(Self { language, region })
    }

    /// Get the normalized tag (e.g., "en-US").
    pub fn tag(&self) -> String {
        let mut tag = self.language.clone();
        if let Some(ref region) = self.region {
            tag.push('-');
            tag.push_str(region);
        }
        tag
    }

    /// Get a language-only locale (strips the region).
    pub fn language_only(&self) -> Self {
        Self {
            language: self.language.clone(),
            region: None,
        }
    }

    /// English
    pub fn en() -> Self {
        Self::new("en", None::<&str>)
    }

    /// English (United States)
    pub fn en_us() -> Self {
        Self::new("en", Some("US"))
    }

    /// Chinese (Simplified, China)
    pub fn zh_cn() -> Self {
        Self::new("zh", Some("CN"))
    }
}

impl FromStr for Locale {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_normalizes_case_and_separator() {
        assert_eq!(Locale::parse("ZH_CN").unwrap(), Locale::zh_cn());
        assert_eq!(Locale::parse("zh-cn").unwrap(), Locale::zh_cn());
        assert_eq!(Locale::parse("en-US").unwrap(), Locale::en_us());
    }

    #[test]
    fn parse_language_only() {
        let locale = Locale::parse("en").unwrap();
        assert_eq!(locale, Locale::en());
        assert_eq!(locale.tag(), "en");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Locale::parse("").is_err());
        assert!(Locale::parse("e").is_err());
        assert!(Locale::parse("en-USA!").is_err());
        assert!(Locale::parse("123").is_err());
    }

    #[test]
    fn language_only_strips_region() {
        assert_eq!(Locale::en_us().language_only(), Locale::en());
    }

    #[test]
    fn tag_round_trips() {
        for tag in ["en", "en-US", "zh-CN"] {
            assert_eq!(Locale::parse(tag).unwrap().tag(), tag);
        }
    }
}
