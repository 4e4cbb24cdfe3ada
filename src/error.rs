//! Error types for directory record operations.
//!
//! Normalization itself never fails: missing or malformed directory data
//! degrades to an absent value or [`AffiliationStatus::Unknown`]. The errors
//! here cover the edges of the crate, namely talking to a directory
//! collaborator and parsing canonical names supplied by callers.
//!
//! [`AffiliationStatus::Unknown`]: crate::record::value_objects::AffiliationStatus::Unknown

/// Main error type for directory lookups.
///
/// Produced by [`PersonLookup`](crate::lookup::PersonLookup) and the
/// in-memory directory. A lookup that simply finds no entry is not an error;
/// it is reported as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// The identifier cannot be turned into a directory search
    #[error("Invalid directory identifier: '{identifier}'")]
    InvalidIdentifier { identifier: String },

    /// Connection parameters are unusable
    #[error("Directory configuration error: {message}")]
    Configuration { message: String },

    /// The directory collaborator failed while searching
    #[error("Directory lookup for '{identifier}' failed: {source}")]
    Lookup {
        identifier: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The directory did not answer in time
    #[error("Directory unavailable: {message}")]
    Unavailable { message: String },
}

impl DirectoryError {
    /// Create an invalid identifier error.
    pub fn invalid_identifier(identifier: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            identifier: identifier.into(),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Wrap a collaborator failure for the given identifier.
    pub fn lookup<E>(identifier: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Lookup {
            identifier: identifier.into(),
            source: Box::new(source),
        }
    }

    /// Create an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Errors raised when caller-supplied canonical values cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Not one of the canonical affiliation status names
    #[error("Unknown affiliation status '{value}'")]
    UnknownStatus { value: String },

    /// Not one of the canonical field names
    #[error("Unknown canonical field '{value}'")]
    UnknownField { value: String },
}

/// Result type for directory operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Result type for parsing canonical values.
pub type ValidationResult<T> = Result<T, ValidationError>;
