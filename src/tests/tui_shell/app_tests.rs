use super::*;
use crate::fixtures::{Fail, FakeBackend, card, entry, favorite, typed};
use crate::model::TradeRequest;
use crate::remote::TradeBackend;
use crate::session::MSG_ALREADY_OWNED;

fn backend() -> FakeBackend {
    let b = FakeBackend::with_cards(vec![
        typed(card(1, "bulbasaur", 45, 49), &["grass", "poison"]),
        typed(card(2, "charmander", 39, 52), &["fire"]),
        favorite(typed(card(3, "squirtle", 44, 48), &["water"])),
    ]);
    b.catalog.borrow_mut().push(entry(25, "pikachu"));
    b.catalog.borrow_mut().push(entry(1, "bulbasaur"));
    b
}

fn started(b: &FakeBackend) -> App {
    let mut app = App::new(2, "http://localhost:8080/api");
    app.start(b);
    app
}

#[test]
fn start_loads_first_page() {
    let b = backend();
    let app = started(&b);
    assert_eq!(app.page.content.len(), 2);
    assert_eq!(app.page.total_pages, 2);
    assert_eq!(app.collection.stats().total, 3);
    assert!(!app.status.error);
}

#[test]
fn filter_commands_reset_to_first_page() {
    let b = backend();
    let mut app = started(&b);
    app.next_page();
    assert_eq!(app.page.page, 1);

    app.run_line(&b, "type fire");
    assert_eq!(app.page.page, 0);
    let names: Vec<&str> = app.page.content.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["charmander"]);
    assert!(app.status.lines[0].starts_with("1 of 3 cards"));

    app.run_line(&b, "reset");
    app.run_line(&b, "sort hp desc");
    let names: Vec<&str> = app.page.content.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["bulbasaur", "squirtle"]);
}

#[test]
fn enter_on_a_row_toggles_favorite_everywhere() {
    let b = backend();
    let mut app = started(&b);
    app.apply(&b, TuiCommand::Show(UiMode::Favorites));
    assert_eq!(app.favorites.cards().len(), 1);

    app.mode = UiMode::Collection;
    app.selected = 0;
    app.default_action(&b);
    assert!(app.collection.find(1).is_some_and(|c| c.is_favorite));
    assert_eq!(app.favorites.cards().len(), 2);
    assert_eq!(app.status.lines, vec!["bulbasaur is now a favorite".to_string()]);
}

#[test]
fn delete_waits_for_confirmation() {
    let b = backend();
    let mut app = started(&b);

    app.run_line(&b, "delete 2");
    assert!(matches!(app.modal, Some(Modal::ConfirmDelete { id: 2, .. })));
    app.confirm(&b, Confirmation::Declined);
    assert!(app.modal.is_none());
    assert_eq!(app.collection.total_count(), 3);

    app.run_line(&b, "delete 2");
    app.confirm(&b, Confirmation::Confirmed);
    assert_eq!(app.collection.total_count(), 2);
    assert!(app.collection.find(2).is_none());
    assert_eq!(b.cards.borrow().len(), 2);
}

#[test]
fn failed_delete_keeps_the_card_and_shows_the_error() {
    let b = backend();
    let mut app = started(&b);
    app.run_line(&b, "delete 3");
    b.fail_next(Fail::Unavailable);
    app.confirm(&b, Confirmation::Confirmed);
    assert!(app.status.error);
    assert!(app.collection.find(3).is_some());
}

#[test]
fn find_then_add_updates_the_collection() {
    let b = backend();
    let mut app = started(&b);

    app.run_line(&b, "find Pikachu");
    assert_eq!(app.mode, UiMode::Search);
    assert_eq!(app.search.staged().map(|e| e.id), Some(25));

    app.default_action(&b);
    assert_eq!(app.collection.total_count(), 4);
    assert_eq!(app.status.lines, vec!["pikachu was added to your collection!".to_string()]);

    app.run_line(&b, "find 1");
    app.run_line(&b, "add");
    assert!(app.status.error);
    assert_eq!(app.status.lines, vec![MSG_ALREADY_OWNED.to_string()]);
    assert_eq!(app.collection.total_count(), 4);
}

#[test]
fn accepting_a_trade_reloads_the_collection() {
    let b = backend();
    let mut app = started(&b);
    b.create_trade(&TradeRequest {
        to_user_id: 2,
        offered_pokemon_ids: vec![9],
        requested_pokemon_ids: vec![],
    })
    .unwrap();

    app.run_line(&b, "trades");
    assert_eq!(app.trades.pending().len(), 1);
    assert_eq!(app.status.lines, vec!["1 pending".to_string()]);

    let loads_before = b.calls.get();
    app.run_line(&b, "accept 1");
    assert!(app.trades.pending().is_empty());
    assert!(b.calls.get() > loads_before + 1);
    assert!(!app.status.error);
}

#[test]
fn failed_reload_after_accept_shows_on_the_status_line() {
    let b = backend();
    let mut app = started(&b);
    b.create_trade(&TradeRequest {
        to_user_id: 2,
        offered_pokemon_ids: vec![9],
        requested_pokemon_ids: vec![],
    })
    .unwrap();
    app.run_line(&b, "trades");

    b.collection_down.set(true);
    app.run_line(&b, "accept 1");
    assert!(app.trades.pending().is_empty());
    assert!(app.status.error);
    let shown = app.collection.display().error.clone().unwrap();
    assert!(app.status.lines.contains(&shown));
    assert_eq!(app.status.lines.len(), 2);
}

#[test]
fn unknown_commands_report_without_side_effects() {
    let b = backend();
    let mut app = started(&b);
    let calls = b.calls.get();
    app.run_line(&b, "teleport home");
    assert!(app.status.error);
    assert_eq!(b.calls.get(), calls);

    app.run_line(&b, "page 9");
    assert!(app.status.error);
    assert_eq!(app.page.page, 0);
}

#[test]
fn quit_command_sets_flag() {
    let b = backend();
    let mut app = started(&b);
    app.run_line(&b, "quit");
    assert!(app.quit);
}

#[test]
fn wish_toggles_the_staged_entry_without_touching_the_collection() {
    let b = backend();
    let mut app = started(&b);
    app.run_line(&b, "wish");
    assert!(app.status.error);

    app.run_line(&b, "find pikachu");
    let calls = b.calls.get();
    app.run_line(&b, "wish");
    app.run_line(&b, "wish 133");
    app.run_line(&b, "wish 133");
    assert_eq!(b.calls.get(), calls);
    assert_eq!(app.wishlist.ids(), &[25]);
    assert_eq!(app.collection.total_count(), 3);

    app.run_line(&b, "wishlist");
    assert_eq!(app.status.lines, vec!["wishlist: #25".to_string()]);
}
