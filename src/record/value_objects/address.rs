//! Address value objects for directory person entries.
//!
//! Directory entries carry addresses as single free-text strings. Postal
//! addresses ("1 Main St., Apt 1, Ithaca, NY, 14850") are split into
//! components with a best-effort heuristic; campus addresses are a single
//! location string and are only trimmed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A postal address parsed from comma-delimited free text.
///
/// The parser knows nothing about real state abbreviations. It looks for
/// the rightmost token shaped like a two-letter state code and reads the
/// city before it and the zip after it, so callers should treat the result
/// as best-effort.
///
/// ## Examples
///
/// ```rust
/// use directory_record::record::value_objects::PostalAddress;
///
/// let address = PostalAddress::parse("1 Main St., Apt 1, Ithaca, NY, 14850").unwrap();
/// assert_eq!(address.street(), "1 Main St., Apt 1");
/// assert_eq!(address.city(), "Ithaca");
/// assert_eq!(address.state(), "NY");
/// assert_eq!(address.zip(), Some("14850"));
///
/// assert!(PostalAddress::parse("Day Hall, Ithaca").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

impl PostalAddress {
    /// Parse a free-text postal address.
    ///
    /// Returns `None` when no token looks like a state code, or when fewer
    /// than two tokens precede it (no room for both a street and a city).
    /// Tokens after the zip are ignored, and an empty token in the zip
    /// position leaves the zip absent.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }

        let tokens: Vec<&str> = raw.split(',').map(str::trim).collect();

        // Rightmost match wins over an early two-letter street abbreviation.
        let state_index = tokens.iter().rposition(|token| is_state_code(token))?;
        if state_index < 2 {
            return None;
        }

        Some(Self {
            street: tokens[..state_index - 1].join(", "),
            city: tokens[state_index - 1].to_string(),
            state: tokens[state_index].to_string(),
            zip: tokens
                .get(state_index + 1)
                .filter(|zip| !zip.is_empty())
                .map(|zip| zip.to_string()),
        })
    }

    /// Get the street portion, possibly spanning several comma tokens.
    pub fn street(&self) -> &str {
        &self.street
    }

    /// Get the city.
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Get the two-letter state token.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Get the zip code, if one followed the state.
    pub fn zip(&self) -> Option<&str> {
        self.zip.as_deref()
    }
}

impl fmt::Display for PostalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.street, self.city, self.state)?;
        if let Some(zip) = &self.zip {
            write!(f, ", {}", zip)?;
        }
        Ok(())
    }
}

/// Exactly two ASCII letters.
fn is_state_code(token: &str) -> bool {
    token.len() == 2 && token.bytes().all(|b| b.is_ascii_alphabetic())
}

/// An on-campus location such as "-100 Day Hall".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampusAddress {
    pub street: String,
    pub on_campus: bool,
}

impl CampusAddress {
    /// Build from the raw directory value, trimming surrounding whitespace.
    ///
    /// Campus values are not comma-parsed.
    pub fn from_raw(raw: &str) -> Self {
        Self {
            street: raw.trim().to_string(),
            on_campus: true,
        }
    }

    /// Get the campus location.
    pub fn street(&self) -> &str {
        &self.street
    }
}

impl fmt::Display for CampusAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (on campus)", self.street)
    }
}

/// An address as reported on a person record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Address {
    Campus(CampusAddress),
    Postal(PostalAddress),
}

impl Address {
    /// Street portion, present for both kinds.
    pub fn street(&self) -> &str {
        match self {
            Address::Campus(campus) => campus.street(),
            Address::Postal(postal) => postal.street(),
        }
    }

    /// Whether this is an on-campus location.
    pub fn is_on_campus(&self) -> bool {
        matches!(self, Address::Campus(_))
    }

    /// Postal components, when this is a postal address.
    pub fn as_postal(&self) -> Option<&PostalAddress> {
        match self {
            Address::Postal(postal) => Some(postal),
            Address::Campus(_) => None,
        }
    }

    /// City, for postal addresses.
    pub fn city(&self) -> Option<&str> {
        self.as_postal().map(PostalAddress::city)
    }

    /// State, for postal addresses.
    pub fn state(&self) -> Option<&str> {
        self.as_postal().map(PostalAddress::state)
    }

    /// Zip code, for postal addresses that have one.
    pub fn zip(&self) -> Option<&str> {
        self.as_postal().and_then(PostalAddress::zip)
    }
}

impl From<PostalAddress> for Address {
    fn from(postal: PostalAddress) -> Self {
        Address::Postal(postal)
    }
}

impl From<CampusAddress> for Address {
    fn from(campus: CampusAddress) -> Self {
        Address::Campus(campus)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Address::Campus(campus) => campus.fmt(f),
            Address::Postal(postal) => postal.fmt(f),
        }
    }
}
