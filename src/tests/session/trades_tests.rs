use super::*;
use crate::fixtures::{Fail, FakeBackend};

fn request() -> TradeRequest {
    TradeRequest {
        to_user_id: 2,
        offered_pokemon_ids: vec![1],
        requested_pokemon_ids: vec![10],
    }
}

#[test]
fn create_reloads_the_list() {
    let backend = FakeBackend::default();
    let mut board = TradeBoard::default();

    let trade = board.create(&backend, &request()).expect("create");
    assert_eq!(trade.status, TradeStatus::Pending);
    assert_eq!(backend.trade_fetches.get(), 1);
    assert_eq!(board.trades().len(), 1);
    assert_eq!(board.pending().len(), 1);
}

#[test]
fn invalid_requests_are_rejected_locally() {
    let backend = FakeBackend::default();
    let mut board = TradeBoard::default();

    let mut req = request();
    req.to_user_id = 0;
    assert!(matches!(board.create(&backend, &req), Err(SessionError::Invalid(_))));

    let mut req = request();
    req.offered_pokemon_ids.clear();
    req.requested_pokemon_ids.clear();
    assert!(board.create(&backend, &req).is_err());
    assert_eq!(backend.calls.get(), 0);
}

#[test]
fn accept_settles_and_refreshes() {
    let backend = FakeBackend::default();
    let mut board = TradeBoard::default();
    let trade = board.create(&backend, &request()).expect("create");

    let settled = board.accept(&backend, trade.id).expect("accept");
    assert_eq!(settled.status, TradeStatus::Completed);
    assert!(board.pending().is_empty());
    assert_eq!(backend.trade_fetches.get(), 2);
    assert_eq!(
        board.display().notice.as_deref(),
        Some("trade 1 is now completed")
    );
}

#[test]
fn failed_mutation_skips_reload() {
    let backend = FakeBackend::default();
    let mut board = TradeBoard::default();
    let trade = board.create(&backend, &request()).expect("create");

    backend.fail_next(Fail::NotFound);
    assert!(board.reject(&backend, trade.id).is_err());
    assert_eq!(backend.trade_fetches.get(), 1);
    assert_eq!(board.pending().len(), 1);
    assert!(board.display().error.is_some());
}

#[test]
fn cancel_marks_cancelled() {
    let backend = FakeBackend::default();
    let mut board = TradeBoard::default();
    let trade = board.create(&backend, &request()).expect("create");
    let cancelled = board.cancel(&backend, trade.id).expect("cancel");
    assert_eq!(cancelled.status, TradeStatus::Cancelled);
}
