//! In-memory directory implementation.
//!
//! Holds attribute bags keyed by DN behind an async `RwLock`. It is meant for
//! tests, development and offline fixtures, and behaves like a directory
//! answering base-scope searches: a request either names a stored DN or
//! matches nothing.
//!
//! # Example Usage
//!
//! ```rust
//! use directory_record::directory::{DirectoryConfig, InMemoryDirectory, RawAttributeBag};
//!
//! # async fn example() {
//! let config = DirectoryConfig::default();
//! let directory = InMemoryDirectory::new();
//!
//! directory
//!     .insert_person(&config, "jd1", RawAttributeBag::new().with("givenName", ["John"]))
//!     .await;
//! assert_eq!(directory.len().await, 1);
//! # }
//! ```

use crate::directory::{
    DirectoryConfig, DirectoryProvider, RawAttributeBag, SearchRequest, escape_dn_value,
};
use crate::error::DirectoryError;
use log::{debug, trace};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Thread-safe in-memory directory.
///
/// DNs are compared case-insensitively. Clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    // normalized dn -> attributes
    entries: Arc<RwLock<HashMap<String, RawAttributeBag>>>,
}

impl InMemoryDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an entry under an explicit DN, replacing any previous entry.
    pub async fn insert_entry(&self, dn: &str, bag: RawAttributeBag) -> Option<RawAttributeBag> {
        trace!("Storing directory entry {}", dn);
        self.entries.write().await.insert(normalize_dn(dn), bag)
    }

    /// Store a person entry under the DN `config` assigns to `identifier`.
    pub async fn insert_person(
        &self,
        config: &DirectoryConfig,
        identifier: &str,
        bag: RawAttributeBag,
    ) -> Option<RawAttributeBag> {
        let dn = format!(
            "{}={},{}",
            config.dn_attribute,
            escape_dn_value(identifier.trim()),
            config.people_base()
        );
        self.insert_entry(&dn, bag).await
    }

    /// Remove an entry by DN.
    pub async fn remove(&self, dn: &str) -> Option<RawAttributeBag> {
        self.entries.write().await.remove(&normalize_dn(dn))
    }

    /// Number of stored entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether no entries are stored.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Remove all entries.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

impl DirectoryProvider for InMemoryDirectory {
    type Error = DirectoryError;

    async fn lookup(
        &self,
        request: &SearchRequest,
    ) -> Result<Option<RawAttributeBag>, Self::Error> {
        let entries = self.entries.read().await;
        let found = entries.get(&normalize_dn(request.dn())).cloned();
        debug!(
            "In-memory lookup of {} {}",
            request.dn(),
            if found.is_some() { "matched" } else { "found nothing" }
        );
        Ok(found)
    }
}

fn normalize_dn(dn: &str) -> String {
    dn.trim().to_ascii_lowercase()
}
