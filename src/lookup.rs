//! Person lookups against a directory collaborator.
//!
//! `PersonLookup` ties a [`DirectoryProvider`] to the normalization core. It
//! holds the provider and its configuration explicitly; there is no
//! process-wide connection.

use crate::directory::{DirectoryConfig, DirectoryProvider, SearchRequest};
use crate::error::{DirectoryError, DirectoryResult};
use crate::record::Record;
use log::{debug, info, warn};

/// Looks up people by identifier and returns normalized records.
///
/// # Example
///
/// ```rust
/// use directory_record::{AffiliationStatus, PersonLookup, RawAttributeBag};
/// use directory_record::directory::{DirectoryConfig, InMemoryDirectory};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = DirectoryConfig::default();
/// let directory = InMemoryDirectory::new();
/// directory
///     .insert_person(&config, "jd1", RawAttributeBag::new().with("cornelledutype", ["alumni"]))
///     .await;
///
/// let lookup = PersonLookup::new(directory, config)?;
/// let record = lookup.find("jd1").await?.expect("entry exists");
/// assert_eq!(record.status(), AffiliationStatus::Alumni);
/// assert!(lookup.find("nobody").await?.is_none());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PersonLookup<D: DirectoryProvider> {
    provider: D,
    config: DirectoryConfig,
}

impl<D: DirectoryProvider> PersonLookup<D> {
    /// Create a lookup over the given provider.
    ///
    /// Fails if the configuration cannot address a directory.
    pub fn new(provider: D, config: DirectoryConfig) -> DirectoryResult<Self> {
        config.validate()?;
        Ok(Self { provider, config })
    }

    /// The configuration requests are built from.
    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    /// The underlying directory provider.
    pub fn provider(&self) -> &D {
        &self.provider
    }

    /// Look up one person.
    ///
    /// Returns `Ok(None)` when no entry matches. Provider failures are
    /// reported as [`DirectoryError::Lookup`]. A provider that does not
    /// answer within the configured timeout is reported as
    /// [`DirectoryError::Unavailable`].
    pub async fn find(&self, identifier: &str) -> DirectoryResult<Option<Record>> {
        let request = SearchRequest::for_identifier(&self.config, identifier)?;
        debug!("Searching directory: {}", request);

        let timeout = self.config.timeout;
        let Ok(outcome) = tokio::time::timeout(timeout, self.provider.lookup(&request)).await
        else {
            warn!(
                "Directory lookup for '{}' timed out after {:?}",
                request.identifier(),
                timeout
            );
            return Err(DirectoryError::unavailable(format!(
                "no answer for '{}' within {:?}",
                request.identifier(),
                timeout
            )));
        };

        match outcome {
            Ok(Some(bag)) => {
                info!(
                    "Directory entry found for '{}' ({} attributes)",
                    request.identifier(),
                    bag.len()
                );
                Ok(Some(Record::from_raw_attributes(bag)))
            }
            Ok(None) => {
                debug!("No directory entry for '{}'", request.identifier());
                Ok(None)
            }
            Err(e) => {
                warn!("Directory lookup for '{}' failed: {}", request.identifier(), e);
                Err(DirectoryError::lookup(request.identifier(), e))
            }
        }
    }

    /// Look up several people in order, keeping each outcome separate.
    pub async fn find_many<I, S>(
        &self,
        identifiers: I,
    ) -> Vec<(String, DirectoryResult<Option<Record>>)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut results = Vec::new();
        for identifier in identifiers {
            let identifier = identifier.as_ref();
            let outcome = self.find(identifier).await;
            results.push((identifier.to_string(), outcome));
        }
        results
    }
}
