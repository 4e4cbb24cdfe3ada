//! Connection parameters for a directory collaborator.
//!
//! The crate does not open connections itself. `DirectoryConfig` is the
//! value a directory backend is handed so that search requests and
//! connections agree on host, search base and naming attribute.

use crate::error::{DirectoryError, DirectoryResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Directory connection and naming configuration.
///
/// Defaults point at the public university directory:
///
/// ```rust
/// use directory_record::directory::DirectoryConfig;
///
/// let config = DirectoryConfig::default();
/// assert_eq!(config.host, "directory.cornell.edu");
/// assert_eq!(config.port, 389);
/// assert_eq!(config.people_base(), "ou=People,o=Cornell University,c=US");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Directory server host name.
    pub host: String,

    /// Directory server port.
    pub port: u16,

    /// Search base for the whole directory.
    pub base: String,

    /// RDN of the subtree holding person entries, relative to `base`.
    pub people_prefix: String,

    /// Attribute that names a person entry within the people subtree.
    pub dn_attribute: String,

    /// Upper bound for a single search. Lookups that take longer report the
    /// directory as unavailable.
    #[serde(with = "duration_secs")]
    pub timeout: Duration,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            host: "directory.cornell.edu".to_string(),
            port: 389,
            base: "o=Cornell University,c=US".to_string(),
            people_prefix: "ou=People".to_string(),
            dn_attribute: "uid".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl DirectoryConfig {
    /// Replace the host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Replace the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Replace the search base.
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    /// Replace the search timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The base DN under which person entries live.
    pub fn people_base(&self) -> String {
        if self.people_prefix.is_empty() {
            self.base.clone()
        } else {
            format!("{},{}", self.people_prefix, self.base)
        }
    }

    /// `host:port`, for backends that need a socket address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Check that the parameters can address a directory at all.
    pub fn validate(&self) -> DirectoryResult<()> {
        if self.host.trim().is_empty() {
            return Err(DirectoryError::configuration("host cannot be empty"));
        }
        if self.port == 0 {
            return Err(DirectoryError::configuration("port must be non-zero"));
        }
        if self.base.trim().is_empty() {
            return Err(DirectoryError::configuration("search base cannot be empty"));
        }
        if self.dn_attribute.trim().is_empty() {
            return Err(DirectoryError::configuration("dn attribute cannot be empty"));
        }
        if self.timeout.is_zero() {
            return Err(DirectoryError::configuration("timeout must be non-zero"));
        }
        Ok(())
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}
