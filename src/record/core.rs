//! Person record built from one directory entry.

use crate::attribute_map::{AttributeMap, CanonicalField};
use crate::directory::RawAttributeBag;
use crate::record::value_objects::{
    Address, AffiliationStatus, CampusAddress, PhoneNumber, PostalAddress, StatusInputs,
};
use log::trace;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// A normalized snapshot of one directory lookup.
///
/// Construction applies the [`AttributeMap`] once and derives every
/// computed field up front. A `Record` never changes afterwards, so every
/// accessor returns the same value on every call and the type can be shared
/// across threads without locking.
///
/// ## Examples
///
/// ```rust
/// use directory_record::{AffiliationStatus, RawAttributeBag, Record};
///
/// let bag = RawAttributeBag::new()
///     .with("cornelledutype", ["student"])
///     .with("cornelleduacadcollege", ["EN"])
///     .with("givenName", ["John"])
///     .with("homePostalAddress", ["1 Broadway, New York, NY, 00000"])
///     .with("mobile", ["607 555 1212"]);
///
/// let record = Record::from_raw_attributes(bag);
/// assert_eq!(record.first_name(), Some("John"));
/// assert_eq!(record.status(), AffiliationStatus::Undergrad);
/// assert_eq!(record.home_address().and_then(|a| a.city()), Some("New York"));
/// assert_eq!(record.mobile_phone().map(|p| p.as_str()), Some("6075551212"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: BTreeMap<CanonicalField, String>,
    status: AffiliationStatus,
    campus_address: Option<Address>,
    local_address: Option<Address>,
    home_address: Option<Address>,
    campus_phone: Option<PhoneNumber>,
    local_phone: Option<PhoneNumber>,
    home_phone: Option<PhoneNumber>,
    mobile_phone: Option<PhoneNumber>,
}

impl Record {
    /// Build a record from the raw attributes of one directory entry.
    ///
    /// For every mapped attribute, the first value is stored under its
    /// canonical field verbatim. Attributes with no values, or whose first
    /// value is the empty string, leave the field absent. Unmapped attributes
    /// are ignored.
    pub fn from_raw_attributes(bag: RawAttributeBag) -> Self {
        let mut fields = BTreeMap::new();
        for (raw_key, field) in AttributeMap::entries() {
            if let Some(value) = bag.first(raw_key).filter(|v| !v.is_empty()) {
                fields.insert(field, value.to_string());
            }
        }
        trace!(
            "Mapped {} of {} directory attributes to canonical fields",
            fields.len(),
            bag.len()
        );
        Self::from_fields(fields)
    }

    /// Build a record from canonical field values directly.
    pub fn from_fields(fields: BTreeMap<CanonicalField, String>) -> Self {
        let get = |field: CanonicalField| fields.get(&field).map(String::as_str);

        let status = AffiliationStatus::classify(&StatusInputs {
            status: get(CanonicalField::Status),
            title1: get(CanonicalField::StatusTitle1),
            title2: get(CanonicalField::StatusTitle2),
            college: get(CanonicalField::College),
        });

        let campus_address = get(CanonicalField::CampusAddress)
            .map(CampusAddress::from_raw)
            .map(Address::from);
        let postal = |field: CanonicalField| {
            get(field)
                .and_then(PostalAddress::parse)
                .map(Address::from)
        };
        let local_address = postal(CanonicalField::LocalAddress);
        let home_address = postal(CanonicalField::HomeAddress);

        let phone = |field: CanonicalField| get(field).and_then(PhoneNumber::normalize);
        let campus_phone = phone(CanonicalField::CampusPhone);
        let local_phone = phone(CanonicalField::LocalPhone);
        let home_phone = phone(CanonicalField::HomePhone);
        let mobile_phone = phone(CanonicalField::MobilePhone);

        Self {
            status,
            campus_address,
            local_address,
            home_address,
            campus_phone,
            local_phone,
            home_phone,
            mobile_phone,
            fields,
        }
    }

    /// Raw value stored under a canonical field.
    pub fn field(&self, field: CanonicalField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// All stored canonical fields and their raw values.
    pub fn attributes(&self) -> impl Iterator<Item = (CanonicalField, &str)> {
        self.fields
            .iter()
            .map(|(field, value)| (*field, value.as_str()))
    }

    /// Get the first name, verbatim.
    pub fn first_name(&self) -> Option<&str> {
        self.field(CanonicalField::FirstName)
    }

    /// Get the middle name, verbatim.
    pub fn middle_name(&self) -> Option<&str> {
        self.field(CanonicalField::MiddleName)
    }

    /// Get the last name, verbatim.
    pub fn last_name(&self) -> Option<&str> {
        self.field(CanonicalField::LastName)
    }

    /// Name parts that are present, joined with single spaces.
    pub fn display_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name(), self.middle_name(), self.last_name()]
            .into_iter()
            .flatten()
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    /// Affiliation status with the institution.
    ///
    /// `Unknown` both when the entry has no affiliation type and when the
    /// type is not recognized; see [`has_status_data`](Self::has_status_data).
    pub fn status(&self) -> AffiliationStatus {
        self.status
    }

    /// Whether the entry carried an affiliation type at all.
    pub fn has_status_data(&self) -> bool {
        self.fields.contains_key(&CanonicalField::Status)
    }

    /// Working titles that are present, in order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        [CanonicalField::StatusTitle1, CanonicalField::StatusTitle2]
            .into_iter()
            .filter_map(|field| self.field(field))
    }

    /// Academic college code.
    pub fn college(&self) -> Option<&str> {
        self.field(CanonicalField::College)
    }

    /// On-campus location, trimmed but not comma-parsed.
    pub fn campus_address(&self) -> Option<&Address> {
        self.campus_address.as_ref()
    }

    /// Local-area postal address.
    pub fn local_address(&self) -> Option<&Address> {
        self.local_address.as_ref()
    }

    /// Home postal address.
    pub fn home_address(&self) -> Option<&Address> {
        self.home_address.as_ref()
    }

    pub fn campus_phone(&self) -> Option<&PhoneNumber> {
        self.campus_phone.as_ref()
    }

    pub fn local_phone(&self) -> Option<&PhoneNumber> {
        self.local_phone.as_ref()
    }

    pub fn home_phone(&self) -> Option<&PhoneNumber> {
        self.home_phone.as_ref()
    }

    pub fn mobile_phone(&self) -> Option<&PhoneNumber> {
        self.mobile_phone.as_ref()
    }

    /// Borrowed view of the normalized profile, suitable for serialization.
    pub fn profile(&self) -> Profile<'_> {
        Profile {
            first_name: self.first_name(),
            middle_name: self.middle_name(),
            last_name: self.last_name(),
            status: self.status,
            campus_address: self.campus_address(),
            local_address: self.local_address(),
            home_address: self.home_address(),
            campus_phone: self.campus_phone(),
            local_phone: self.local_phone(),
            home_phone: self.home_phone(),
            mobile_phone: self.mobile_phone(),
        }
    }

    /// The normalized profile as JSON.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self.profile())
    }
}

impl From<RawAttributeBag> for Record {
    fn from(bag: RawAttributeBag) -> Self {
        Record::from_raw_attributes(bag)
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.profile().serialize(serializer)
    }
}

/// The normalized fields of a [`Record`]. Absent values are omitted when
/// serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<&'a str>,
    pub status: AffiliationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campus_address: Option<&'a Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_address: Option<&'a Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_address: Option<&'a Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campus_phone: Option<&'a PhoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_phone: Option<&'a PhoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_phone: Option<&'a PhoneNumber>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<&'a PhoneNumber>,
}
