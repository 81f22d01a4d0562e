use super::*;
use crate::fixtures::{Fail, FakeBackend};

#[test]
fn generation_bounds_are_checked_before_calling() {
    let backend = FakeBackend::default();
    let mut panel = AdminPanel::default();

    assert!(panel.load_generation(&backend, 0).is_err());
    assert!(panel.load_generation(&backend, MAX_GENERATION + 1).is_err());
    assert_eq!(backend.calls.get(), 0);

    let loaded = panel.load_generation(&backend, 1).expect("load");
    assert_eq!(loaded.success, 151);
}

#[test]
fn successful_load_refreshes_stats() {
    let backend = FakeBackend::default();
    let mut panel = AdminPanel::default();

    panel.load_range(&backend, 1, 10).expect("load");
    assert_eq!(panel.last_result().map(|r| r.total), Some(10));
    assert_eq!(backend.stats_fetches.get(), 1);
    assert!(panel.stats().is_some());
    assert!(!panel.is_busy());
}

#[test]
fn inverted_range_is_invalid() {
    let backend = FakeBackend::default();
    let mut panel = AdminPanel::default();
    assert!(matches!(
        panel.load_range(&backend, 10, 1),
        Err(SessionError::Invalid(_))
    ));
}

#[test]
fn load_all_needs_confirmation() {
    let backend = FakeBackend::default();
    let mut panel = AdminPanel::default();
    assert!(matches!(
        panel.load_all(&backend, Confirmation::Declined),
        Err(SessionError::NotConfirmed)
    ));
    assert!(panel.load_all(&backend, Confirmation::Confirmed).is_ok());
}

#[test]
fn failed_load_clears_last_result() {
    let backend = FakeBackend::default();
    let mut panel = AdminPanel::default();
    panel.load_generation(&backend, 2).expect("load");

    backend.fail_next(Fail::Unavailable);
    assert!(panel.load_generation(&backend, 3).is_err());
    assert!(panel.last_result().is_none());
    assert!(panel.display().error.is_some());
    assert_eq!(backend.stats_fetches.get(), 1);
}
