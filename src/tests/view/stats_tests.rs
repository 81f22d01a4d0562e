use super::*;
use crate::fixtures::{card, favorite, typed};

#[test]
fn empty_set_yields_zeroes() {
    let stats = CollectionStats::compute(&[]);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.avg_hp, 0);
    assert_eq!(stats.avg_attack, 0);
    assert!(stats.strongest.is_none());
    assert!(stats.top_categories.is_empty());
}

#[test]
fn averages_round_to_nearest() {
    let cards = vec![card(1, "a", 50, 60), card(2, "b", 81, 41)];
    let stats = CollectionStats::compute(&cards);
    assert_eq!(stats.total, 2);
    // 65.5 -> 66, 50.5 -> 51
    assert_eq!(stats.avg_hp, 66);
    assert_eq!(stats.avg_attack, 51);
}

#[test]
fn favorites_are_counted() {
    let cards = vec![favorite(card(1, "a", 1, 1)), card(2, "b", 1, 1)];
    assert_eq!(CollectionStats::compute(&cards).favorites, 1);
}

#[test]
fn strongest_prefers_first_on_ties() {
    let cards = vec![
        card(1, "a", 50, 50),
        card(2, "b", 60, 40),
        card(3, "c", 10, 10),
    ];
    let stats = CollectionStats::compute(&cards);
    assert_eq!(stats.strongest.map(|c| c.id), Some(1));
}

#[test]
fn top_categories_rank_by_count_then_first_seen() {
    let cards = vec![
        typed(card(1, "a", 1, 1), &["water"]),
        typed(card(2, "b", 1, 1), &["fire", "flying"]),
        typed(card(3, "c", 1, 1), &["grass"]),
        typed(card(4, "d", 1, 1), &["fire"]),
        typed(card(5, "e", 1, 1), &["bug"]),
        typed(card(6, "f", 1, 1), &["ice"]),
        typed(card(7, "g", 1, 1), &["rock"]),
    ];
    let top = CollectionStats::compute(&cards).top_categories;
    let names: Vec<&str> = top.iter().map(|c| c.category.as_str()).collect();
    assert_eq!(names, vec!["fire", "water", "flying", "grass", "bug"]);
    assert_eq!(top[0].count, 2);
}

#[test]
fn top_categories_fold_case_and_keep_first_spelling() {
    let cards = vec![
        typed(card(1, "a", 1, 1), &["Fire"]),
        typed(card(2, "b", 1, 1), &["fire"]),
        typed(card(3, "c", 1, 1), &["water"]),
    ];
    let top = CollectionStats::compute(&cards).top_categories;
    assert_eq!(
        top,
        vec![
            CategoryCount {
                category: "Fire".to_string(),
                count: 2
            },
            CategoryCount {
                category: "water".to_string(),
                count: 1
            },
        ]
    );
}

#[test]
fn extreme_stats_do_not_overflow() {
    let mut huge = card(1, "a", i64::MAX, i64::MAX);
    huge.defense = i64::MAX;
    huge.speed = i64::MAX;
    let cards = vec![huge, card(2, "b", i64::MAX, 10)];
    let stats = CollectionStats::compute(&cards);
    assert_eq!(stats.strongest.as_ref().map(|c| c.id), Some(1));
    assert_eq!(stats.strongest.map(|c| c.total_stats()), Some(i64::MAX));
    assert!(stats.avg_hp > 0);
}
