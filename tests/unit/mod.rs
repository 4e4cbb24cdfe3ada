//! Unit tests for directory record components
//!
//! - [`record`] - Record construction against the shared person fixtures
//! - [`normalizers`] - Property tests for the address and phone normalizers
//! - [`status`] - The affiliation classification table

pub mod normalizers;
pub mod status;
