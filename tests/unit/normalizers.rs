//! Property-based tests for the address and phone normalizers.
//!
//! Uses proptest to check invariants that hold for arbitrary directory
//! input, not just the hand-picked examples in the unit tests.

use directory_record::{PostalAddress, normalize_phone};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_phone_keeps_only_digits_in_order(raw in ".{0,40}") {
        let expected: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        match normalize_phone(&raw) {
            Some(digits) => {
                prop_assert!(digits.chars().all(|c| c.is_ascii_digit()));
                prop_assert_eq!(digits, expected);
            }
            None => prop_assert!(expected.is_empty()),
        }
    }

    #[test]
    fn test_phone_ignores_separators(
        groups in prop::collection::vec("[0-9]{1,4}", 1..5),
        separator in "[ +*()-]{1,2}"
    ) {
        let raw = groups.join(&separator);
        prop_assert_eq!(normalize_phone(&raw), Some(groups.concat()));
    }

    #[test]
    fn test_address_parse_never_panics(raw in ".{0,80}") {
        if let Some(address) = PostalAddress::parse(&raw) {
            prop_assert_eq!(address.state().len(), 2);
            prop_assert!(address.state().bytes().all(|b| b.is_ascii_alphabetic()));
            prop_assert_ne!(address.zip(), Some(""));
        }
    }

    #[test]
    fn test_address_components_are_recovered(
        street in "[0-9]{1,4} [A-Z][a-z]{3,10} (St|Ave|Rd)\\.?",
        city in "[A-Z][a-z]{3,12}",
        state in "[A-Z]{2}",
        zip in "[0-9]{5}"
    ) {
        let raw = format!("{}, {}, {}, {}", street, city, state, zip);
        let address = PostalAddress::parse(&raw).expect("well-formed address parses");

        prop_assert_eq!(address.street(), street.as_str());
        prop_assert_eq!(address.city(), city.as_str());
        prop_assert_eq!(address.state(), state.as_str());
        prop_assert_eq!(address.zip(), Some(zip.as_str()));
    }
}
