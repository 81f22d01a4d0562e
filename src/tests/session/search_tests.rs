use super::*;
use crate::fixtures::{card, entry, Fail, FakeBackend};
use crate::session::display::MSG_ALREADY_OWNED;

fn backend() -> FakeBackend {
    let backend = FakeBackend::with_cards(vec![card(1, "Bulbasaur", 45, 49)]);
    *backend.catalog.borrow_mut() = vec![
        entry(1, "bulbasaur"),
        entry(25, "pikachu"),
        entry(133, "eevee"),
    ];
    backend
}

#[test]
fn parse_distinguishes_numbers_and_names() {
    assert_eq!(CatalogQuery::parse(" 25 ").unwrap(), CatalogQuery::Id(25));
    assert_eq!(
        CatalogQuery::parse("PiKaChu").unwrap(),
        CatalogQuery::Name("pikachu".to_string())
    );
    assert!(matches!(
        CatalogQuery::parse("   "),
        Err(SessionError::EmptyQuery)
    ));
    assert!(matches!(
        CatalogQuery::parse("99999999999999999999999"),
        Err(SessionError::Invalid(_))
    ));
}

#[test]
fn empty_query_makes_no_call() {
    let backend = backend();
    let mut flow = SearchFlow::default();
    assert!(flow.search(&backend, "").is_err());
    assert_eq!(backend.calls.get(), 0);
    assert!(flow.display().error.is_some());
}

#[test]
fn search_by_name_stages_entry() {
    let backend = backend();
    let mut flow = SearchFlow::default();
    let found = flow.search(&backend, "Eevee").expect("search");
    assert_eq!(found.id, 133);
    assert_eq!(flow.staged().map(|e| e.id), Some(133));
}

#[test]
fn not_found_message_depends_on_query_shape() {
    let backend = backend();
    let mut flow = SearchFlow::default();

    assert!(flow.search(&backend, "999").is_err());
    let by_id = flow.display().error.clone();
    assert!(flow.search(&backend, "missingno").is_err());
    let by_name = flow.display().error.clone();

    assert!(by_id.is_some());
    assert_ne!(by_id, by_name);
    assert!(flow.staged().is_none());
}

#[test]
fn add_clears_staging_and_reports() {
    let backend = backend();
    let mut flow = SearchFlow::default();
    flow.search(&backend, "25").expect("search");

    let added = flow.add(&backend).expect("add");
    assert_eq!(added.poke_api_id, 25);
    assert!(flow.staged().is_none());
    assert!(flow.query().is_empty());
    assert_eq!(
        flow.display().notice.as_deref(),
        Some("pikachu was added to your collection!")
    );
    assert_eq!(backend.cards.borrow().len(), 2);
}

#[test]
fn adding_an_owned_entry_is_a_distinct_error() {
    let backend = backend();
    let mut flow = SearchFlow::default();
    flow.search(&backend, "bulbasaur").expect("search");

    let err = flow.add(&backend).unwrap_err();
    assert!(err.remote().is_some_and(|e| e.is_conflict()));
    assert!(flow.display().is_conflict());
    assert_eq!(flow.display().error.as_deref(), Some(MSG_ALREADY_OWNED));
    assert_eq!(flow.staged().map(|e| e.id), Some(1));
    assert_eq!(backend.cards.borrow().len(), 1);
}

#[test]
fn network_failure_on_add_keeps_entry_staged() {
    let backend = backend();
    let mut flow = SearchFlow::default();
    flow.search(&backend, "eevee").expect("search");

    backend.fail_next(Fail::Unavailable);
    assert!(flow.add(&backend).is_err());
    assert!(!flow.display().is_conflict());
    assert!(flow.staged().is_some());
    assert_eq!(backend.cards.borrow().len(), 1);
}

#[test]
fn add_without_staged_entry_is_refused() {
    let backend = backend();
    let mut flow = SearchFlow::default();
    assert!(matches!(flow.add(&backend), Err(SessionError::NothingStaged)));
    assert_eq!(backend.calls.get(), 0);
}

#[test]
fn random_ids_stay_in_range() {
    for _ in 0..200 {
        let id = SearchFlow::random_catalog_id().unwrap();
        assert!((1..=RANDOM_CATALOG_MAX).contains(&id));
    }
}
