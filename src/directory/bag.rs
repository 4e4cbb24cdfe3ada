//! Raw attribute bags as returned by a directory search.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The multi-valued attributes of one matched directory entry.
///
/// Attribute keys are case-insensitive; they are folded to ASCII lowercase on
/// insertion and lookup. Values keep the order the directory returned them in.
///
/// ```rust
/// use directory_record::directory::RawAttributeBag;
///
/// let bag = RawAttributeBag::new()
///     .with("givenName", ["John"])
///     .with("sn", ["Doe"]);
///
/// assert_eq!(bag.first("GIVENNAME"), Some("John"));
/// assert_eq!(bag.get("mobile"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, Vec<String>>",
    into = "BTreeMap<String, Vec<String>>"
)]
pub struct RawAttributeBag {
    attributes: BTreeMap<String, Vec<String>>,
}

impl RawAttributeBag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the values of an attribute, replacing any previous values.
    pub fn insert<K, I, V>(&mut self, key: K, values: I)
    where
        K: AsRef<str>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.attributes.insert(
            key.as_ref().to_ascii_lowercase(),
            values.into_iter().map(Into::into).collect(),
        );
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with<K, I, V>(mut self, key: K, values: I) -> Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.insert(key, values);
        self
    }

    /// All values of an attribute.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.attributes
            .get(&key.to_ascii_lowercase())
            .map(Vec::as_slice)
    }

    /// First value of an attribute, if the attribute has any values.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Whether the attribute is present, even with no values.
    pub fn contains_key(&self, key: &str) -> bool {
        self.attributes.contains_key(&key.to_ascii_lowercase())
    }

    /// Remove an attribute, returning its values.
    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.attributes.remove(&key.to_ascii_lowercase())
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether the bag has no attributes.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Iterate attributes in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.attributes
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }
}

impl From<BTreeMap<String, Vec<String>>> for RawAttributeBag {
    fn from(map: BTreeMap<String, Vec<String>>) -> Self {
        map.into_iter().collect()
    }
}

impl From<RawAttributeBag> for BTreeMap<String, Vec<String>> {
    fn from(bag: RawAttributeBag) -> Self {
        bag.attributes
    }
}

impl<K, V> FromIterator<(K, Vec<V>)> for RawAttributeBag
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, Vec<V>)>>(iter: T) -> Self {
        let mut bag = RawAttributeBag::new();
        for (key, values) in iter {
            bag.insert(key, values);
        }
        bag
    }
}
