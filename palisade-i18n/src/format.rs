//! Template rendering
//!
//! A template contains a `{label}` token, replaced with the field name, and
//! positional `{}` placeholders filled left-to-right from the supplied
//! values. Placeholders without a value are left in place; surplus values
//! are ignored.

use std::fmt;

/// Token replaced with the field label.
pub const LABEL: &str = "{label}";

/// Positional value placeholder.
pub const VALUE: &str = "{}";

/// Render a template with a field label and positional values.
///
/// # Examples
///
/// ```
/// use palisade_i18n::format::render;
///
/// let message = render("{label}'s length is {} to {}", "password", &[&6, &18]);
/// assert_eq!(message, "password's length is 6 to 18");
/// ```
pub fn render(template: &str, label: &str, args: &[&dyn fmt::Display]) -> String {
    let mut out = template.replace(LABEL, label);
    for arg in args {
        match out.find(VALUE) {
            Some(at) => out.replace_range(at..at + VALUE.len(), &arg.to_string()),
            None => break,
        }
    }
    out
}
