//! Value objects derived from canonical directory fields.
//!
//! Each value object wraps one normalization step. All of them are
//! immutable and none of their constructors fail: input that cannot be
//! normalized produces `None` or [`AffiliationStatus::Unknown`] rather than
//! an error.
//!
//! ## Usage Pattern
//!
//! ```rust
//! use directory_record::record::value_objects::{PhoneNumber, PostalAddress};
//!
//! let phone = PhoneNumber::normalize("607-555 1212").unwrap();
//! assert_eq!(phone.as_str(), "6075551212");
//!
//! let home = PostalAddress::parse("1 Broadway, New York, NY, 00000").unwrap();
//! assert_eq!(home.city(), "New York");
//! ```

mod address;
mod phone_number;
mod status;

pub use address::{Address, CampusAddress, PostalAddress};
pub use phone_number::{PhoneNumber, normalize_phone};
pub use status::{AffiliationStatus, StatusInputs};
