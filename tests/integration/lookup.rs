//! End-to-end person lookups against the in-memory directory and a
//! misbehaving provider.

use crate::common::fixtures::{people, person};
use crate::common::{fixture_directory, init_logging};
use directory_record::directory::{InMemoryDirectory, SearchRequest};
use directory_record::{
    AffiliationStatus, DirectoryConfig, DirectoryError, DirectoryProvider, PersonLookup,
    RawAttributeBag,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Provider that times out on every search and counts the attempts.
#[derive(Default)]
struct TimingOutDirectory {
    calls: AtomicUsize,
}

impl DirectoryProvider for TimingOutDirectory {
    type Error = std::io::Error;

    async fn lookup(
        &self,
        _request: &SearchRequest,
    ) -> Result<Option<RawAttributeBag>, Self::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(std::io::Error::new(
            std::io::ErrorKind::TimedOut,
            "search exceeded time limit",
        ))
    }
}

#[tokio::test]
async fn test_lookup_every_fixture() {
    init_logging();
    let config = DirectoryConfig::default();
    let lookup = PersonLookup::new(fixture_directory(&config).await, config).unwrap();

    for fixture in people() {
        let record = lookup
            .find(&fixture.uid)
            .await
            .unwrap()
            .unwrap_or_else(|| panic!("{} should be found", fixture.uid));
        assert_eq!(record.to_json().unwrap(), fixture.expected, "{}", fixture.uid);
    }
}

#[tokio::test]
async fn test_lookup_unknown_uid() {
    init_logging();
    let config = DirectoryConfig::default();
    let lookup = PersonLookup::new(fixture_directory(&config).await, config).unwrap();

    assert!(lookup.find("nobody").await.unwrap().is_none());
}

#[tokio::test]
async fn test_lookup_under_custom_base() {
    let config = DirectoryConfig::default()
        .with_host("localhost")
        .with_port(3389)
        .with_base("dc=example,dc=edu")
        .with_timeout(Duration::from_secs(2));

    let directory = InMemoryDirectory::new();
    directory
        .insert_entry(
            "uid=mp42,ou=People,dc=example,dc=edu",
            person("mp42").attributes.clone(),
        )
        .await;

    let lookup = PersonLookup::new(directory, config).unwrap();
    let record = lookup.find("mp42").await.unwrap().unwrap();
    assert_eq!(record.status(), AffiliationStatus::Faculty);

    // Same uid under the default base is a different entry.
    let default_lookup =
        PersonLookup::new(lookup.provider().clone(), DirectoryConfig::default()).unwrap();
    assert!(default_lookup.find("mp42").await.unwrap().is_none());
}

#[tokio::test]
async fn test_provider_errors_surface_as_lookup_errors() {
    init_logging();
    let lookup =
        PersonLookup::new(TimingOutDirectory::default(), DirectoryConfig::default()).unwrap();

    let err = lookup.find("jad1").await.unwrap_err();
    assert!(matches!(
        err,
        DirectoryError::Lookup { ref identifier, .. } if identifier == "jad1"
    ));
    assert!(err.to_string().contains("search exceeded time limit"));

    // No request reaches the provider for an unusable identifier.
    assert!(lookup.find("").await.is_err());
    assert_eq!(lookup.provider().calls.load(Ordering::SeqCst), 1);
}

/// Provider that never answers.
struct SilentDirectory;

impl DirectoryProvider for SilentDirectory {
    type Error = std::io::Error;

    async fn lookup(
        &self,
        _request: &SearchRequest,
    ) -> Result<Option<RawAttributeBag>, Self::Error> {
        std::future::pending().await
    }
}

#[tokio::test]
async fn test_unanswered_lookups_report_unavailable() {
    init_logging();
    let config = DirectoryConfig::default().with_timeout(Duration::from_millis(25));
    let lookup = PersonLookup::new(SilentDirectory, config).unwrap();

    let results = lookup.find_many(["jad1", "mp42"]).await;
    assert_eq!(results.len(), 2);
    for (uid, outcome) in results {
        let err = outcome.unwrap_err();
        assert!(matches!(err, DirectoryError::Unavailable { .. }), "{}", uid);
        assert!(err.to_string().contains(&uid));
    }
}

#[tokio::test]
async fn test_concurrent_lookups_share_one_provider() {
    let config = DirectoryConfig::default();
    let lookup = Arc::new(PersonLookup::new(fixture_directory(&config).await, config).unwrap());

    let tasks = ["jad1", "mp42", "ks77", "ghost", "nobody"].map(|uid| {
        let lookup = Arc::clone(&lookup);
        tokio::spawn(async move { (uid, lookup.find(uid).await) })
    });

    let results = futures::future::join_all(tasks).await;
    for joined in results {
        let (uid, outcome) = joined.unwrap();
        let record = outcome.unwrap();
        assert_eq!(record.is_some(), uid != "nobody", "{}", uid);
    }
}

#[tokio::test]
async fn test_find_many_reports_each_identifier() {
    let config = DirectoryConfig::default();
    let lookup = PersonLookup::new(fixture_directory(&config).await, config).unwrap();

    let results = lookup.find_many(vec!["ks77", "nobody", "ghost"]).await;
    let statuses: Vec<_> = results
        .iter()
        .map(|(uid, outcome)| {
            let status = outcome
                .as_ref()
                .unwrap()
                .as_ref()
                .map(|record| record.status());
            (uid.as_str(), status)
        })
        .collect();

    assert_eq!(
        statuses,
        vec![
            ("ks77", Some(AffiliationStatus::Grad)),
            ("nobody", None),
            ("ghost", Some(AffiliationStatus::Unknown)),
        ]
    );
}

proptest::proptest! {
    #[test]
    fn test_unregistered_identifiers_never_match(uid in "[a-z]{2,3}[0-9]{1,4}") {
        proptest::prop_assume!(people().iter().all(|p| p.uid != uid));

        tokio_test::block_on(async {
            let config = DirectoryConfig::default();
            let lookup = PersonLookup::new(fixture_directory(&config).await, config).unwrap();
            proptest::prop_assert!(lookup.find(&uid).await.unwrap().is_none());
            Ok(())
        })?;
    }
}
