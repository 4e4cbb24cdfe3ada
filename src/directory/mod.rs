//! Directory collaborator abstraction.
//!
//! The directory service (wire protocol, connection setup, search execution)
//! lives outside this crate. This module defines the narrow interface the
//! normalization core needs from it: run a single-entry search and hand back
//! the raw attribute bag of the matched entry.
//!
//! # Architecture
//!
//! The directory layer is responsible for:
//! - Connecting to the directory using a [`DirectoryConfig`]
//! - Executing a [`SearchRequest`]
//! - Returning the raw, multi-valued attributes of at most one entry
//!
//! The directory layer is NOT responsible for:
//! - Mapping raw attribute names to canonical fields
//! - Classifying, parsing or normalizing attribute values
//! - Caching or pooling connections
//!
//! # Example Usage
//!
//! ```rust
//! use directory_record::directory::{
//!     DirectoryConfig, DirectoryProvider, InMemoryDirectory, RawAttributeBag, SearchRequest,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DirectoryConfig::default();
//! let directory = InMemoryDirectory::new();
//! directory
//!     .insert_person(&config, "jd1", RawAttributeBag::new().with("sn", ["Doe"]))
//!     .await;
//!
//! let request = SearchRequest::for_identifier(&config, "jd1")?;
//! let bag = directory.lookup(&request).await?;
//! assert_eq!(bag.unwrap().first("sn"), Some("Doe"));
//! # Ok(())
//! # }
//! ```

pub mod bag;
pub mod config;
pub mod in_memory;
pub mod search;

pub use bag::RawAttributeBag;
pub use config::DirectoryConfig;
pub use in_memory::InMemoryDirectory;
pub use search::{SearchRequest, escape_dn_value};

use std::future::Future;

/// A directory service that can look up a single entry.
///
/// # Behavior
///
/// - `Ok(Some(bag))` - exactly one entry matched
/// - `Ok(None)` - no entry matched; not an error
/// - `Err(_)` - the search itself failed (network, protocol, timeout)
///
/// Implementations own their connection state. Nothing in this crate keeps
/// connections in global scope; callers pass a provider to
/// [`PersonLookup`](crate::lookup::PersonLookup) explicitly.
pub trait DirectoryProvider: Send + Sync {
    /// The error type returned by lookups.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Run a search and return the raw attributes of the matched entry.
    fn lookup(
        &self,
        request: &SearchRequest,
    ) -> impl Future<Output = Result<Option<RawAttributeBag>, Self::Error>> + Send;
}
