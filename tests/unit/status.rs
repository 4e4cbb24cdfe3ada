//! Affiliation status classification through full records.

use crate::common::mock_person;
use directory_record::{AffiliationStatus, Record};

/// (type, college, title1, title2, expected)
const SCENARIOS: [(&str, Option<&str>, Option<&str>, Option<&str>, AffiliationStatus); 9] = [
    ("staff", None, None, None, AffiliationStatus::Staff),
    ("academic", None, Some("Professor"), None, AffiliationStatus::Faculty),
    ("academic", None, None, Some("Prof Asst"), AffiliationStatus::Faculty),
    ("academic", None, Some("Librarian"), None, AffiliationStatus::Staff),
    ("student", Some("AS"), None, None, AffiliationStatus::Undergrad),
    ("student", Some("GR"), None, None, AffiliationStatus::Grad),
    ("alumni", None, None, None, AffiliationStatus::Alumni),
    ("temp", None, None, None, AffiliationStatus::Temporary),
    ("blah", None, None, None, AffiliationStatus::Unknown),
];

#[test]
fn test_status_of_several_types() {
    for (kind, college, title1, title2, expected) in SCENARIOS {
        let mut bag = mock_person();
        bag.insert("cornelledutype", [kind]);
        bag.insert("cornelleduacadcollege", college);
        bag.insert("cornelleduwrkngtitle1", title1);
        bag.insert("cornelleduwrkngtitle2", title2);

        let record = Record::from_raw_attributes(bag);
        assert_eq!(record.status(), expected, "type {}", kind);
    }
}

#[test]
fn test_missing_type_yields_unknown() {
    let mut bag = mock_person();
    bag.remove("cornelledutype");
    let record = Record::from_raw_attributes(bag);

    assert_eq!(record.status(), AffiliationStatus::Unknown);
    assert!(!record.has_status_data());
}

#[test]
fn test_empty_type_counts_as_missing() {
    let mut bag = mock_person();
    bag.insert("cornelledutype", Vec::<String>::new());
    assert!(!Record::from_raw_attributes(bag).has_status_data());
}
