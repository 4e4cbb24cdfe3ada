//! Search requests handed to a directory collaborator.

use crate::directory::DirectoryConfig;
use crate::error::{DirectoryError, DirectoryResult};
use std::fmt;

/// A single-entry directory search.
///
/// Person lookups address the entry directly by DN and search it with base
/// scope, so a backend returns at most one attribute bag.
///
/// ```rust
/// use directory_record::directory::{DirectoryConfig, SearchRequest};
///
/// let request = SearchRequest::for_identifier(&DirectoryConfig::default(), "jd1").unwrap();
/// assert_eq!(request.dn(), "uid=jd1,ou=People,o=Cornell University,c=US");
/// assert_eq!(request.to_string(), "uid=jd1,ou=People,o=Cornell University,c=US base (objectClass=*)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    identifier: String,
    dn: String,
    filter: String,
}

impl SearchRequest {
    /// Build the base-scope search for a person identifier.
    pub fn for_identifier(config: &DirectoryConfig, identifier: &str) -> DirectoryResult<Self> {
        let trimmed = identifier.trim();
        if trimmed.is_empty() {
            return Err(DirectoryError::invalid_identifier(identifier));
        }

        let dn = format!(
            "{}={},{}",
            config.dn_attribute,
            escape_dn_value(trimmed),
            config.people_base()
        );

        Ok(Self {
            identifier: trimmed.to_string(),
            dn,
            filter: "(objectClass=*)".to_string(),
        })
    }

    /// The identifier the request was built for.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The distinguished name searched.
    pub fn dn(&self) -> &str {
        &self.dn
    }

    /// Search filter.
    pub fn filter(&self) -> &str {
        &self.filter
    }
}

impl fmt::Display for SearchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} base {}", self.dn, self.filter)
    }
}

/// Escape an attribute value for use in a DN (RFC 4514, section 2.4).
pub fn escape_dn_value(value: &str) -> String {
    let last = value.chars().count().saturating_sub(1);
    let mut escaped = String::with_capacity(value.len());

    for (i, c) in value.chars().enumerate() {
        match c {
            ',' | '+' | '"' | '\\' | '<' | '>' | ';' | '=' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '#' if i == 0 => escaped.push_str("\\#"),
            ' ' if i == 0 || i == last => escaped.push_str("\\ "),
            '\0' => escaped.push_str("\\00"),
            _ => escaped.push(c),
        }
    }

    escaped
}
