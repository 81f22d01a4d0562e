use super::*;
use crate::fixtures::{card, favorite, typed};
use crate::model::Rarity;
use crate::view::{SortDirection, SortKey};

fn ids(cards: &[Card]) -> Vec<i64> {
    cards.iter().map(|c| c.id).collect()
}

fn sample() -> Vec<Card> {
    vec![
        typed(card(1, "Bulbasaur", 45, 49), &["grass", "poison"]),
        typed(card(4, "Charmander", 39, 52), &["fire"]),
        typed(card(7, "Squirtle", 44, 48), &["water"]),
        typed(card(25, "Pikachu", 35, 55), &["electric"]),
        typed(card(6, "Charizard", 78, 84), &["fire", "flying"]),
    ]
}

#[test]
fn empty_criteria_keeps_every_item() {
    let items = sample();
    let out = apply(&items, &FilterCriteria::default());
    assert_eq!(out.len(), items.len());
}

#[test]
fn empty_source_gives_empty_result() {
    let out = apply(&[], &FilterCriteria::default().with_search("pika"));
    assert!(out.is_empty());
}

#[test]
fn search_is_case_insensitive_substring_on_name() {
    let out = apply(&sample(), &FilterCriteria::default().with_search("  CHAR "));
    assert_eq!(ids(&out), vec![4, 6]);
}

#[test]
fn category_filter_only_returns_matching_items() {
    let out = apply(&sample(), &FilterCriteria::default().with_category("FIRE"));
    assert!(!out.is_empty());
    assert!(out.iter().all(|c| c.has_type("fire")));
    assert_eq!(ids(&out), vec![4, 6]);
}

#[test]
fn category_filter_folds_case_like_the_name_filter() {
    let cards = vec![
        typed(card(1, "flabébé", 44, 38), &["Fée"]),
        typed(card(2, "ÉVOLI", 55, 55), &["normal"]),
    ];
    let by_type = apply(&cards, &FilterCriteria::default().with_category("FÉE"));
    assert_eq!(ids(&by_type), vec![1]);

    let by_name = apply(&cards, &FilterCriteria::default().with_search("évoli"));
    assert_eq!(ids(&by_name), vec![2]);
}

#[test]
fn blank_category_matches_everything() {
    let out = apply(&sample(), &FilterCriteria::default().with_category("  "));
    assert_eq!(out.len(), 5);
}

#[test]
fn rarity_and_favorite_filters_narrow_the_set() {
    let mut items = sample();
    items[1].rarity = Rarity::Rare;
    items[4] = favorite(items[4].clone());
    items[4].rarity = Rarity::Rare;

    let rare = apply(&items, &FilterCriteria::default().with_rarity(Some(Rarity::Rare)));
    assert_eq!(ids(&rare), vec![4, 6]);

    let favs = apply(&items, &FilterCriteria::default().favorites_only(true));
    assert_eq!(ids(&favs), vec![6]);
}

#[test]
fn source_is_not_mutated() {
    let items = sample();
    let before = items.clone();
    let _ = apply(
        &items,
        &FilterCriteria::default().sorted_by(SortKey::Name, SortDirection::Desc),
    );
    assert_eq!(items, before);
}

#[test]
fn hp_sort_orders_both_directions() {
    let items = vec![card(1, "first", 50, 60), card(2, "second", 80, 40)];

    let asc = apply(
        &items,
        &FilterCriteria::default().sorted_by(SortKey::Hp, SortDirection::Asc),
    );
    assert_eq!(ids(&asc), vec![1, 2]);

    let desc = apply(
        &items,
        &FilterCriteria::default().sorted_by(SortKey::Hp, SortDirection::Desc),
    );
    assert_eq!(ids(&desc), vec![2, 1]);
}

#[test]
fn sort_is_stable_for_equal_keys_in_both_directions() {
    let items = vec![
        card(10, "a", 50, 1),
        card(11, "b", 70, 1),
        card(12, "c", 50, 1),
        card(13, "d", 50, 1),
    ];

    let asc = apply(
        &items,
        &FilterCriteria::default().sorted_by(SortKey::Hp, SortDirection::Asc),
    );
    assert_eq!(ids(&asc), vec![10, 12, 13, 11]);

    let desc = apply(
        &items,
        &FilterCriteria::default().sorted_by(SortKey::Hp, SortDirection::Desc),
    );
    assert_eq!(ids(&desc), vec![11, 10, 12, 13]);
}

#[test]
fn reversing_direction_reverses_distinct_keys() {
    let items = sample();
    for key in [SortKey::Number, SortKey::Name, SortKey::Hp, SortKey::Attack] {
        let asc = apply(
            &items,
            &FilterCriteria::default().sorted_by(key, SortDirection::Asc),
        );
        let mut desc = apply(
            &items,
            &FilterCriteria::default().sorted_by(key, SortDirection::Desc),
        );
        desc.reverse();
        assert_eq!(ids(&asc), ids(&desc), "key {}", key);
    }
}

#[test]
fn name_sort_ignores_case() {
    let items = vec![
        card(1, "zubat", 40, 45),
        card(2, "Abra", 25, 20),
        card(3, "mew", 100, 100),
    ];
    let out = apply(
        &items,
        &FilterCriteria::default().sorted_by(SortKey::Name, SortDirection::Asc),
    );
    assert_eq!(ids(&out), vec![2, 3, 1]);
}
