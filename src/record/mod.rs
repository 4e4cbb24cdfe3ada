//! Person records normalized from directory entries.
//!
//! # Key Components
//!
//! * [`Record`] - immutable snapshot of one directory lookup with derived fields
//! * [`Profile`] - borrowed, serializable view of a record
//! * [`value_objects`] - status, address and phone number normalization

pub mod core;
pub mod value_objects;

pub use self::core::{Profile, Record};
pub use value_objects::{
    Address, AffiliationStatus, CampusAddress, PhoneNumber, PostalAddress, StatusInputs,
    normalize_phone,
};
