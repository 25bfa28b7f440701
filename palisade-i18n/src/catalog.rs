//! Message bundles and the catalog
//!
//! A [`MessageBundle`] maps message keys to templates for one locale; the
//! [`Catalog`] collects bundles by locale tag, falling back to the
//! language-only bundle when a regional one is missing. Bundles for
//! `en-US` and `zh-CN` are built in.

use crate::{CatalogError, Locale, MessageKey, Result};
use log::debug;
use std::collections::HashMap;

/// Message templates for a single locale.
#[derive(Debug, Clone, Default)]
pub struct MessageBundle {
    messages: HashMap<MessageKey, String>,
}

impl MessageBundle {
    /// Create an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a JSON object of key id to template.
    ///
    /// Unknown key ids and non-string templates are errors; a partial
    /// bundle (a subset of keys) is fine and falls back to
    /// "unknown error" at render time for the missing ones.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: HashMap<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut bundle = Self::new();

        for (id, value) in data {
            let key: MessageKey = id.parse()?;
            match value {
                serde_json::Value::String(template) => {
                    bundle.add(key, template);
                }
                other => {
                    return Err(CatalogError::ParseError(format!(
                        "template for '{id}' must be a string, got {other}"
                    )));
                }
            }
        }

        Ok(bundle)
    }

    /// Add or replace a template.
    pub fn add(&mut self, key: MessageKey, template: impl Into<String>) {
        self.messages.insert(key, template.into());
    }

    /// Get a template.
    pub fn get(&self, key: MessageKey) -> Option<&str> {
        self.messages.get(&key).map(|s| s.as_str())
    }

    /// Check whether the bundle defines a key.
    pub fn has(&self, key: MessageKey) -> bool {
        self.messages.contains_key(&key)
    }

    /// Number of templates in the bundle.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the bundle is empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl FromIterator<(MessageKey, &'static str)> for MessageBundle {
    fn from_iter<I: IntoIterator<Item = (MessageKey, &'static str)>>(iter: I) -> Self {
        let mut bundle = Self::new();
        for (key, template) in iter {
            bundle.add(key, template);
        }
        bundle
    }
}

/// Collection of message bundles keyed by locale tag.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    bundles: HashMap<String, MessageBundle>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog holding the built-in `en-US` and `zh-CN` bundles.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.add_bundle(&Locale::en_us(), en_us());
        catalog.add_bundle(&Locale::zh_cn(), zh_cn());
        catalog
    }

    /// Register a bundle for a locale, replacing any existing one.
    pub fn add_bundle(&mut self, locale: &Locale, bundle: MessageBundle) {
        debug!("registering message bundle for {} ({} templates)", locale, bundle.len());
        self.bundles.insert(locale.tag(), bundle);
    }

    /// Get the bundle for a locale, trying the exact tag first and the
    /// language-only tag second.
    pub fn bundle(&self, locale: &Locale) -> Option<&MessageBundle> {
        if let Some(bundle) = self.bundles.get(&locale.tag()) {
            return Some(bundle);
        }
        if locale.region.is_some() {
            return self.bundles.get(&locale.language_only().tag());
        }
        None
    }

    /// Whether the catalog can serve a locale.
    pub fn supports(&self, locale: &Locale) -> bool {
        self.bundle(locale).is_some()
    }
}

/// Built-in English (US) templates.
pub fn en_us() -> MessageBundle {
    use MessageKey::*;
    MessageBundle::from_iter([
        (Equal, "must be equal to {}"),
        (Required, "can not be empty"),
        (In, "must be in {}"),
        (InType, "must be one of string, number, boolean"),
        (String, "must be a string"),
        (StringLengthMax, "{label}'s maximum length is {}"),
        (StringLengthMin, "{label}'s minimum length is {}"),
        (StringLengthRange, "{label}'s length is {} to {}"),
        (StringLengthEqual, "{label}'s length must be equal to {}"),
        (Integer, "must be an integer"),
        (IntegerMax, "must be an integer with a maximum value of {}"),
        (IntegerMin, "must be an integer with a minimum value of {}"),
        (IntegerRange, "must be an integer of {} to {}"),
        (IntegerPositive, "must be a positive integer"),
        (IntegerPositiveMax, "must be a positive integer with a maximum value of {}"),
        (IntegerPositiveMin, "must be a positive integer with a minimum value of {}"),
        (IntegerPositiveRange, "must be a positive integer of {} to {}"),
        (IntegerNegative, "must be a negative integer"),
        (IntegerNegativeMax, "must be a negative integer with a maximum value of {}"),
        (IntegerNegativeMin, "must be a negative integer with a minimum value of {}"),
        (IntegerNegativeRange, "must be a negative integer of {} to {}"),
        (Decimal, "must be a decimal"),
        (DecimalMax, "must be a decimal with a maximum value of {}"),
        (DecimalMin, "must be a decimal with a minimum value of {}"),
        (DecimalRange, "must be a decimal of {} to {}"),
        (DecimalPositive, "must be a positive decimal"),
        (DecimalPositiveMax, "must be a positive decimal with a maximum value of {}"),
        (DecimalPositiveMin, "must be a positive decimal with a minimum value of {}"),
        (DecimalPositiveRange, "must be a positive decimal of {} to {}"),
        (DecimalNegative, "must be a negative decimal"),
        (DecimalNegativeMax, "must be a negative decimal with a maximum value of {}"),
        (DecimalNegativeMin, "must be a negative decimal with a minimum value of {}"),
        (DecimalNegativeRange, "must be a negative decimal of {} to {}"),
        (Number, "must be a number"),
        (NumberMax, "must be a number with a maximum value of {}"),
        (NumberMin, "must be a number with a minimum value of {}"),
        (NumberRange, "must be a number of {} to {}"),
        (NumberPositive, "must be a positive number"),
        (NumberPositiveMax, "must be a positive number with a maximum value of {}"),
        (NumberPositiveMin, "must be a positive number with a minimum value of {}"),
        (NumberPositiveRange, "must be a positive number of {} to {}"),
        (NumberNegative, "must be a negative number"),
        (NumberNegativeMax, "must be a negative number with a maximum value of {}"),
        (NumberNegativeMin, "must be a negative number with a minimum value of {}"),
        (NumberNegativeRange, "must be a negative number of {} to {}"),
        (Boolean, "must be a boolean or string"),
        (Regex, "must be in a valid format"),
        (Ip, "must be a valid ip address"),
        (Email, "must be a valid email address"),
        (Tel, "must be a valid telephone number"),
        (Mobile, "must be a valid telephone or mobile phone number"),
        (Zipcode, "must be a valid zipcode"),
    ])
}

/// Built-in Chinese (Simplified) templates.
pub fn zh_cn() -> MessageBundle {
    use MessageKey::*;
    MessageBundle::from_iter([
        (Equal, "{label} 必须是 {}"),
        (Required, "{label} 不能为空"),
        (In, "{label} 只能是 {} 中的一个"),
        (InType, "{label} 必须是字符串、数字、布尔值中的一种"),
        (String, "{label} 必须是字符串"),
        (StringLengthMax, "{label} 长度不能超过 {}"),
        (StringLengthMin, "{label} 长度不能小于 {}"),
        (StringLengthRange, "{label} 长度必须在 {} 到 {} 之间"),
        (StringLengthEqual, "{label} 长度必须是 {}"),
        (Integer, "{label} 必须是整数"),
        (IntegerMax, "{label} 必须是不大于 {} 的整数"),
        (IntegerMin, "{label} 必须是不小于 {} 的整数"),
        (IntegerRange, "{label} 必须是介于 {} 到 {} 的整数"),
        (IntegerPositive, "{label} 必须是正整数"),
        (IntegerPositiveMax, "{label} 必须是不大于 {} 的正整数"),
        (IntegerPositiveMin, "{label} 必须是不小于 {} 的正整数"),
        (IntegerPositiveRange, "{label} 必须是介于 {} 到 {} 的正整数"),
        (IntegerNegative, "{label} 必须是负整数"),
        (IntegerNegativeMax, "{label} 必须是不大于 {} 的负整数"),
        (IntegerNegativeMin, "{label} 必须是不小于 {} 的负整数"),
        (IntegerNegativeRange, "{label} 必须是介于 {} 到 {} 的负整数"),
        (Decimal, "{label} 必须是小数"),
        (DecimalMax, "{label} 必须是不大于 {} 的小数"),
        (DecimalMin, "{label} 必须是不小于 {} 的小数"),
        (DecimalRange, "{label} 必须是介于 {} 到 {} 的小数"),
        (DecimalPositive, "{label} 必须是正小数"),
        (DecimalPositiveMax, "{label} 必须是不大于 {} 的正小数"),
        (DecimalPositiveMin, "{label} 必须是不小于 {} 的正小数"),
        (DecimalPositiveRange, "{label} 必须是介于 {} 到 {} 的正小数"),
        (DecimalNegative, "{label} 必须是负小数"),
        (DecimalNegativeMax, "{label} 必须是不大于 {} 的负小数"),
        (DecimalNegativeMin, "{label} 必须是不小于 {} 的负小数"),
        (DecimalNegativeRange, "{label} 必须是介于 {} 到 {} 的负小数"),
        (Number, "{label} 必须是数字"),
        (NumberMax, "{label} 必须是不大于 {} 的数"),
        (NumberMin, "{label} 必须是不小于 {} 的数"),
        (NumberRange, "{label} 必须是介于 {} 到 {} 的数"),
        (NumberPositive, "{label} 必须是正数"),
        (NumberPositiveMax, "{label} 必须是不大于 {} 的正数"),
        (NumberPositiveMin, "{label} 必须是不小于 {} 的正数"),
        (NumberPositiveRange, "{label} 必须是介于 {} 到 {} 的正数"),
        (NumberNegative, "{label} 必须是负数"),
        (NumberNegativeMax, "{label} 必须是不大于 {} 的负数"),
        (NumberNegativeMin, "{label} 必须是不小于 {} 的负数"),
        (NumberNegativeRange, "{label} 必须是介于 {} 到 {} 的负数"),
        (Boolean, "{label} 必须是布尔值或布尔字符串"),
        (Regex, "{label} 格式不正确"),
        (Ip, "无效的 ip"),
        (Email, "无效的 email"),
        (Tel, "无效的座机号"),
        (Mobile, "无效的手机号"),
        (Zipcode, "无效的邮编"),
    ])
}
