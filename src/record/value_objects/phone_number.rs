//! Phone number value object.
//!
//! Directory phone values mix digits with whatever separators the person or
//! the registrar typed (`607+555-1212`, `607-555*1212`, `(607) 555 1212`).
//! Normalization keeps the digits, in order, and nothing else.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Strip everything but ASCII digits from a phone string.
///
/// Returns `None` when the input has no digits at all. No length or format
/// validation is performed.
///
/// ```rust
/// use directory_record::record::value_objects::normalize_phone;
///
/// assert_eq!(normalize_phone("607+555-1212").as_deref(), Some("6075551212"));
/// assert_eq!(normalize_phone("ext. n/a"), None);
/// ```
pub fn normalize_phone(raw: &str) -> Option<String> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() { None } else { Some(digits) }
}

/// A digits-only phone number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Normalize a raw phone string; see [`normalize_phone`].
    pub fn normalize(raw: &str) -> Option<Self> {
        normalize_phone(raw).map(Self)
    }

    /// Get the digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of digits.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed number; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume into the digit string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for PhoneNumber {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PhoneNumber {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
