//! Mapping between raw directory attribute keys and canonical fields.
//!
//! Directory entries name their attributes after the directory's own schema
//! (`cornelledutype`, `sn`, `homepostaladdress`, ...). Everything downstream
//! works with [`CanonicalField`] instead, so the binding between the two
//! lives in exactly one static table.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Normalized field identifiers, independent of directory attribute naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalField {
    Status,
    StatusTitle1,
    StatusTitle2,
    College,
    CampusAddress,
    LocalAddress,
    HomeAddress,
    CampusPhone,
    LocalPhone,
    HomePhone,
    MobilePhone,
    FirstName,
    MiddleName,
    LastName,
}

impl CanonicalField {
    /// Every canonical field, in table order.
    pub const ALL: [CanonicalField; 14] = [
        CanonicalField::Status,
        CanonicalField::StatusTitle1,
        CanonicalField::StatusTitle2,
        CanonicalField::College,
        CanonicalField::CampusAddress,
        CanonicalField::LocalAddress,
        CanonicalField::HomeAddress,
        CanonicalField::CampusPhone,
        CanonicalField::LocalPhone,
        CanonicalField::HomePhone,
        CanonicalField::MobilePhone,
        CanonicalField::FirstName,
        CanonicalField::MiddleName,
        CanonicalField::LastName,
    ];

    /// The snake_case name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalField::Status => "status",
            CanonicalField::StatusTitle1 => "status_title1",
            CanonicalField::StatusTitle2 => "status_title2",
            CanonicalField::College => "college",
            CanonicalField::CampusAddress => "campus_address",
            CanonicalField::LocalAddress => "local_address",
            CanonicalField::HomeAddress => "home_address",
            CanonicalField::CampusPhone => "campus_phone",
            CanonicalField::LocalPhone => "local_phone",
            CanonicalField::HomePhone => "home_phone",
            CanonicalField::MobilePhone => "mobile_phone",
            CanonicalField::FirstName => "first_name",
            CanonicalField::MiddleName => "middle_name",
            CanonicalField::LastName => "last_name",
        }
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CanonicalField {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        CanonicalField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ValidationError::UnknownField {
                value: s.to_string(),
            })
    }
}

/// Raw key -> canonical field. Raw keys are stored lowercase.
static BINDINGS: [(&str, CanonicalField); 14] = [
    ("cornelledutype", CanonicalField::Status),
    ("cornelleduwrkngtitle1", CanonicalField::StatusTitle1),
    ("cornelleduwrkngtitle2", CanonicalField::StatusTitle2),
    ("cornelleduacadcollege", CanonicalField::College),
    ("cornelleducampusaddress", CanonicalField::CampusAddress),
    ("cornelledulocaladdress", CanonicalField::LocalAddress),
    ("homepostaladdress", CanonicalField::HomeAddress),
    ("cornelleducampusphone", CanonicalField::CampusPhone),
    ("cornelledulocalphone", CanonicalField::LocalPhone),
    ("homephone", CanonicalField::HomePhone),
    ("mobile", CanonicalField::MobilePhone),
    ("givenname", CanonicalField::FirstName),
    ("cornelledumiddlename", CanonicalField::MiddleName),
    ("sn", CanonicalField::LastName),
];

/// The process-wide attribute binding table.
///
/// Stateless; all lookups go against a static table, so there is nothing to
/// construct or share.
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeMap;

impl AttributeMap {
    /// Canonical field for a raw directory key, matched case-insensitively.
    ///
    /// Unrecognized keys return `None`; they are not errors.
    pub fn canonical_field(raw_key: &str) -> Option<CanonicalField> {
        BINDINGS
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(raw_key))
            .map(|(_, field)| *field)
    }

    /// Raw directory key bound to a canonical field.
    pub fn raw_key(field: CanonicalField) -> &'static str {
        BINDINGS
            .iter()
            .find(|(_, bound)| *bound == field)
            .map(|(key, _)| *key)
            // every variant has a binding; see test_every_field_is_bound
            .unwrap_or_else(|| field.as_str())
    }

    /// All bindings in declaration order.
    pub fn entries() -> impl Iterator<Item = (&'static str, CanonicalField)> {
        BINDINGS.iter().copied()
    }
}
