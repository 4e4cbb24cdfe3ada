//! Test fixtures for directory entries.
//!
//! Fixture files live under `tests/fixtures/` and are parsed once per test
//! binary.

use directory_record::RawAttributeBag;
use serde::Deserialize;
use serde_json::Value;
use std::sync::OnceLock;

/// A directory entry together with the profile it should normalize to.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonFixture {
    pub uid: String,
    pub attributes: RawAttributeBag,
    pub expected: Value,
}

static PEOPLE: OnceLock<Vec<PersonFixture>> = OnceLock::new();

/// Load a JSON fixture from the fixtures directory.
pub fn load_fixture(path: &str) -> Value {
    let fixture_path = format!("tests/fixtures/{}", path);
    let content = std::fs::read_to_string(&fixture_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", fixture_path));

    serde_json::from_str(&content)
        .unwrap_or_else(|_| panic!("Failed to parse JSON fixture: {}", fixture_path))
}

/// All person fixtures.
pub fn people() -> &'static [PersonFixture] {
    PEOPLE.get_or_init(|| {
        serde_json::from_value(load_fixture("directory/people.json"))
            .expect("people fixture matches PersonFixture")
    })
}

/// One person fixture by uid.
pub fn person(uid: &str) -> &'static PersonFixture {
    people()
        .iter()
        .find(|p| p.uid == uid)
        .unwrap_or_else(|| panic!("No person fixture with uid {}", uid))
}
