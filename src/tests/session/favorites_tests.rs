use super::*;
use crate::fixtures::{card, favorite, Fail, FakeBackend};

fn backend() -> FakeBackend {
    FakeBackend::with_cards(vec![
        favorite(card(1, "Pikachu", 35, 55)),
        card(2, "Eevee", 55, 55),
        favorite(card(3, "Snorlax", 160, 110)),
    ])
}

#[test]
fn load_only_lists_favorites() {
    let backend = backend();
    let mut list = FavoritesList::default();
    list.load(&backend).expect("load");
    let ids: Vec<i64> = list.cards().iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn unfavoriting_drops_the_card() {
    let backend = backend();
    let mut list = FavoritesList::default();
    list.load(&backend).expect("load");

    let updated = list.toggle(&backend, 1).expect("toggle");
    assert!(!updated.is_favorite);
    assert!(list.cards().iter().all(|c| c.id != 1));
}

#[test]
fn reconcile_adds_new_favorites_from_other_screens() {
    let mut list = FavoritesList::default();
    list.reconcile(favorite(card(2, "Eevee", 55, 55)));
    assert_eq!(list.cards().len(), 1);
    list.reconcile(card(2, "Eevee", 55, 55));
    assert!(list.cards().is_empty());
}

#[test]
fn failed_delete_keeps_card() {
    let backend = backend();
    let mut list = FavoritesList::default();
    list.load(&backend).expect("load");

    backend.fail_next(Fail::NotFound);
    let err = list
        .delete(&backend, 3, Confirmation::Confirmed)
        .unwrap_err();
    assert!(err.remote().is_some_and(|e| e.is_not_found()));
    assert_eq!(list.cards().len(), 2);
    assert!(list.display().error.is_some());
}
