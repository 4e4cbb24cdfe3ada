//! Directory person record normalization for Rust.
//!
//! Turns the raw, multi-valued attribute bag of a directory entry into a
//! typed person profile: name parts, institutional affiliation status,
//! postal and campus addresses, and digits-only phone numbers.
//!
//! # Core Components
//!
//! - [`Record`] - Normalized snapshot of one directory entry
//! - [`AttributeMap`] - Raw attribute key to canonical field bindings
//! - [`PostalAddress::parse`] and [`normalize_phone`] - Standalone normalizers
//! - [`DirectoryProvider`] - Trait for plugging in a directory backend
//! - [`PersonLookup`] - Runs lookups through a provider and builds records
//!
//! # Quick Start
//!
//! ```rust
//! use directory_record::{AffiliationStatus, RawAttributeBag, Record};
//!
//! let bag = RawAttributeBag::new()
//!     .with("cornelledutype", ["academic"])
//!     .with("cornelleduwrkngtitle1", ["Professor"])
//!     .with("cornelleducampusaddress", ["-100 Day Hall     "])
//!     .with("cornelleducampusphone", ["607+555-1212"]);
//!
//! let record = Record::from_raw_attributes(bag);
//! assert_eq!(record.status(), AffiliationStatus::Faculty);
//! assert_eq!(record.campus_address().map(|a| a.street()), Some("-100 Day Hall"));
//! assert_eq!(record.campus_phone().map(|p| p.as_str()), Some("6075551212"));
//! ```
//!
//! Normalization never fails. Missing or unusable directory data shows up as
//! `None` or [`AffiliationStatus::Unknown`]; only talking to a directory can
//! produce a [`DirectoryError`].

pub mod attribute_map;
pub mod directory;
pub mod error;
pub mod lookup;
pub mod record;

// Re-export commonly used types for convenience
pub use attribute_map::{AttributeMap, CanonicalField};
pub use directory::{DirectoryConfig, DirectoryProvider, RawAttributeBag};
pub use error::{DirectoryError, DirectoryResult, ValidationError};
pub use lookup::PersonLookup;
pub use record::{
    Address, AffiliationStatus, CampusAddress, PhoneNumber, PostalAddress, Profile, Record,
    normalize_phone,
};
