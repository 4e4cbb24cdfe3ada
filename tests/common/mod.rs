//! Common test utilities for directory record tests.

use directory_record::RawAttributeBag;
use directory_record::directory::{DirectoryConfig, InMemoryDirectory};

pub mod fixtures;

/// Install a logger once so `RUST_LOG=debug cargo test` shows lookup logs.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The standard staff member most tests start from.
pub fn mock_person() -> RawAttributeBag {
    RawAttributeBag::new()
        .with("cornelledutype", ["staff"])
        .with("cornelleduacadcollege", ["AS"])
        .with("cornelleducampusaddress", ["-100 Day Hall     "])
        .with("cornelledulocaladdress", ["1 Main St., Apt. 1, Ithaca, NY, 14850"])
        .with("homepostaladdress", ["1 Broadway, New York, NY, 00000"])
        .with("givenname", ["John"])
        .with("cornelledumiddlename", ["A"])
        .with("sn", ["Doe"])
        .with("cornelleducampusphone", ["607+555-1212"])
        .with("homephone", ["607-555*1212"])
        .with("cornelledulocalphone", ["607-555 1212"])
        .with("mobile", ["607 555 1212"])
}

/// `mock_person` with the given attributes replaced.
pub fn mock_person_with<'a>(
    overrides: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> RawAttributeBag {
    let mut bag = mock_person();
    for (key, value) in overrides {
        bag.insert(key, [value]);
    }
    bag
}

/// An in-memory directory preloaded with every person fixture.
pub async fn fixture_directory(config: &DirectoryConfig) -> InMemoryDirectory {
    let directory = InMemoryDirectory::new();
    for person in fixtures::people() {
        directory
            .insert_person(config, &person.uid, person.attributes.clone())
            .await;
    }
    directory
}
