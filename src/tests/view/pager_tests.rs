use super::*;

#[test]
fn empty_list_has_no_pages() {
    let mut pager = Pager::new(20);
    let page = pager.window::<u32>(&[]);
    assert!(page.content.is_empty());
    assert_eq!(page.total_pages, 0);
    assert!(page.first && page.last);
}

#[test]
fn window_reports_totals_and_edges() {
    let items: Vec<u32> = (0..45).collect();
    let mut pager = Pager::new(20);

    let first = pager.window(&items);
    assert_eq!(first.content.len(), 20);
    assert_eq!(first.total_elements, 45);
    assert_eq!(first.total_pages, 3);
    assert!(first.first);
    assert!(!first.last);

    assert!(pager.next(items.len()));
    assert!(pager.next(items.len()));
    assert!(!pager.next(items.len()));

    let last = pager.window(&items);
    assert_eq!(last.page, 2);
    assert_eq!(last.content, (40..45).collect::<Vec<_>>());
    assert!(last.last);
}

#[test]
fn go_to_ignores_out_of_range_pages() {
    let items: Vec<u32> = (0..10).collect();
    let mut pager = Pager::new(5);
    assert!(!pager.go_to(2, items.len()));
    assert_eq!(pager.page(), 0);
    assert!(pager.go_to(1, items.len()));
    assert!(pager.prev(items.len()));
    assert!(!pager.prev(items.len()));
}

#[test]
fn shrinking_list_clamps_current_page() {
    let mut pager = Pager::new(5);
    let items: Vec<u32> = (0..12).collect();
    assert!(pager.go_to(2, items.len()));

    let page = pager.window(&items[..6]);
    assert_eq!(page.page, 1);
    assert_eq!(page.content, vec![5]);
}

#[test]
fn zero_page_size_is_treated_as_one() {
    let mut pager = Pager::new(0);
    assert_eq!(pager.page_size(), 1);
    pager.set_page_size(0);
    assert_eq!(pager.total_pages(3), 3);
}
