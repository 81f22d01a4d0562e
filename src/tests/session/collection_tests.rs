use super::*;
use crate::fixtures::{card, favorite, typed, Fail, FakeBackend};
use crate::view::{SortDirection, SortKey};

fn five() -> Vec<Card> {
    vec![
        card(1, "Bulbasaur", 45, 49),
        card(2, "Ivysaur", 60, 62),
        card(3, "Venusaur", 80, 82),
        card(4, "Charmander", 39, 52),
        card(5, "Charmeleon", 58, 64),
    ]
}

fn loaded(backend: &FakeBackend) -> CollectionSession {
    let mut session = CollectionSession::new(20);
    session.load(backend).expect("load");
    session
}

#[test]
fn load_populates_items_view_and_stats() {
    let backend = FakeBackend::with_cards(five());
    let session = loaded(&backend);

    assert!(session.is_loaded());
    assert_eq!(session.total_count(), 5);
    assert_eq!(session.view().len(), 5);
    assert_eq!(session.stats().total, 5);
    assert!(!session.display().loading);
    assert!(!session.in_flight().is_busy());
}

#[test]
fn failed_load_keeps_previous_items_and_reports() {
    let backend = FakeBackend::with_cards(five());
    let mut session = loaded(&backend);

    backend.fail_next(Fail::Unavailable);
    let err = session.load(&backend).unwrap_err();
    assert!(err.remote().is_some());
    assert_eq!(session.items().len(), 5);
    assert!(session.display().error.is_some());
    assert!(!session.display().loading);
}

#[test]
fn toggle_favorite_swaps_in_server_copy() {
    let mut cards = five();
    cards.push(card(7, "Squirtle", 44, 48));
    let backend = FakeBackend::with_cards(cards);
    let mut session = loaded(&backend);

    let updated = session.toggle_favorite(&backend, 7).expect("toggle");
    assert!(updated.is_favorite);
    assert!(session.find(7).is_some_and(|c| c.is_favorite));
    assert_eq!(session.stats().favorites, 1);

    let others_changed = session
        .items()
        .iter()
        .filter(|c| c.id != 7)
        .any(|c| c.is_favorite);
    assert!(!others_changed);
}

#[test]
fn delete_removes_card_and_decrements_total() {
    let backend = FakeBackend::with_cards(five());
    let mut session = loaded(&backend);

    session
        .delete(&backend, 3, Confirmation::Confirmed)
        .expect("delete");

    assert!(session.find(3).is_none());
    assert_eq!(session.items().len(), 4);
    assert_eq!(session.total_count(), 4);
    assert!(session.view().iter().all(|c| c.id != 3));
    assert!(session.display().notice.as_deref().is_some_and(|n| n.contains("Venusaur")));
}

#[test]
fn failed_delete_leaves_state_untouched() {
    let backend = FakeBackend::with_cards(five());
    let mut session = loaded(&backend);

    backend.fail_next(Fail::Unavailable);
    assert!(session.delete(&backend, 3, Confirmation::Confirmed).is_err());
    assert_eq!(session.items().len(), 5);
    assert_eq!(session.total_count(), 5);
    assert!(session.find(3).is_some());
}

#[test]
fn declined_delete_never_reaches_the_backend() {
    let backend = FakeBackend::with_cards(five());
    let mut session = loaded(&backend);
    let calls = backend.calls.get();

    let err = session
        .delete(&backend, 3, Confirmation::Declined)
        .unwrap_err();
    assert!(matches!(err, SessionError::NotConfirmed));
    assert_eq!(backend.calls.get(), calls);
    assert_eq!(session.items().len(), 5);
}

#[test]
fn second_operation_while_pending_is_refused() {
    let backend = FakeBackend::with_cards(five());
    let mut session = loaded(&backend);

    session.begin(PendingOp::Delete(3)).expect("begin");
    let calls = backend.calls.get();
    let err = session
        .delete(&backend, 3, Confirmation::Confirmed)
        .unwrap_err();
    assert!(err.is_busy());
    assert_eq!(backend.calls.get(), calls);

    session.complete_delete(3, Ok(())).expect("complete");
    assert!(session.find(3).is_none());
    assert!(!session.in_flight().is_busy());
}

#[test]
fn criteria_changes_rederive_view_and_reset_page() {
    let cards: Vec<Card> = (1..=30)
        .map(|i| {
            let c = card(i, &format!("mon{:02}", i), i * 2, 10);
            if i % 3 == 0 { typed(c, &["fire"]) } else { c }
        })
        .collect();
    let mut session = CollectionSession::with_items(cards, 10);
    assert!(session.next_page());
    assert_eq!(session.pager().page(), 1);

    session.update_criteria(|c| {
        c.category = Some("fire".to_string());
        c.sort_key = SortKey::Hp;
        c.direction = SortDirection::Desc;
    });
    assert_eq!(session.pager().page(), 0);
    assert_eq!(session.view().len(), 10);
    assert_eq!(session.view()[0].id, 30);
    assert_eq!(session.stats().total, 10);

    session.reset_filters();
    assert_eq!(session.view().len(), 30);
}

#[test]
fn absorbed_card_joins_the_view() {
    let mut session = CollectionSession::with_items(five(), 20);
    session.absorb_added(favorite(card(9, "Pikachu", 35, 55)));
    assert_eq!(session.total_count(), 6);
    assert_eq!(session.stats().favorites, 1);
    assert!(session.view().iter().any(|c| c.id == 9));
}

#[test]
fn page_clamps_after_shrinking() {
    let cards: Vec<Card> = (1..=11).map(|i| card(i, "x", 1, 1)).collect();
    let mut session = CollectionSession::with_items(cards, 5);
    assert!(session.go_to_page(2));
    session.forget(11);
    let page = session.current_page();
    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 2);
}
