use super::*;

#[test]
fn add_ignores_duplicates_and_keeps_order() {
    let mut w = Wishlist::default();
    assert!(w.add(25));
    assert!(w.add(133));
    assert!(!w.add(25));
    assert_eq!(w.ids(), &[25, 133]);
}

#[test]
fn remove_drops_every_trace() {
    let mut w = Wishlist::default();
    w.add(25);
    w.add(1);
    assert!(w.remove(25));
    assert!(!w.remove(25));
    assert!(!w.contains(25));
    assert_eq!(w.ids(), &[1]);
}

#[test]
fn toggle_flips_membership() {
    let mut w = Wishlist::default();
    assert!(w.toggle(7));
    assert!(w.contains(7));
    assert!(!w.toggle(7));
    assert!(w.ids().is_empty());
}
