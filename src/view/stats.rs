use serde::Serialize;

use crate::model::{Card, same_folded};

/// How many categories the stats panel ranks.
pub const TOP_CATEGORIES: usize = 5;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Aggregates shown next to the collection. A pure function of the displayed
/// set; recompute it whenever that set changes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CollectionStats {
    pub total: usize,
    pub favorites: usize,
    pub avg_hp: i64,
    pub avg_attack: i64,
    pub strongest: Option<Card>,
    pub top_categories: Vec<CategoryCount>,
}

impl CollectionStats {
    pub fn compute(cards: &[Card]) -> Self {
        if cards.is_empty() {
            return Self::default();
        }

        let total = cards.len();
        let favorites = cards.iter().filter(|c| c.is_favorite).count();
        let avg_hp = rounded_mean(cards.iter().map(|c| c.hp), total);
        let avg_attack = rounded_mean(cards.iter().map(|c| c.attack), total);

        // `>` keeps the earliest card on ties.
        let mut strongest = &cards[0];
        for card in &cards[1..] {
            if card.total_stats() > strongest.total_stats() {
                strongest = card;
            }
        }

        Self {
            total,
            favorites,
            avg_hp,
            avg_attack,
            strongest: Some(strongest.clone()),
            top_categories: top_categories(cards, TOP_CATEGORIES),
        }
    }
}

fn rounded_mean(values: impl Iterator<Item = i64>, count: usize) -> i64 {
    if count == 0 {
        return 0;
    }
    let sum: i128 = values.map(i128::from).sum();
    (sum as f64 / count as f64).round() as i64
}

fn top_categories(cards: &[Card], limit: usize) -> Vec<CategoryCount> {
    // Vec rather than a map so first-seen order survives for tie-breaking.
    let mut counts: Vec<CategoryCount> = Vec::new();
    for category in cards.iter().flat_map(|c| c.types.iter()) {
        match counts.iter_mut().find(|c| same_folded(&c.category, category)) {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                category: category.clone(),
                count: 1,
            }),
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

#[cfg(test)]
#[path = "../tests/view/stats_tests.rs"]
mod tests;
