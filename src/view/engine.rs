use crate::model::Card;

use super::FilterCriteria;

/// Derives the ordered subset of `items` selected by `criteria`.
///
/// The input is left untouched. Sorting is stable in both directions: the
/// direction flips the comparison, so equal keys keep their input order.
pub fn apply(items: &[Card], criteria: &FilterCriteria) -> Vec<Card> {
    let term = criteria.search_term.trim().to_lowercase();
    let category = criteria
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());

    let mut out: Vec<Card> = items
        .iter()
        .filter(|c| term.is_empty() || c.name.to_lowercase().contains(&term))
        .filter(|c| category.is_none_or(|cat| c.has_type(cat)))
        .filter(|c| criteria.rarity.is_none_or(|r| c.rarity == r))
        .filter(|c| !criteria.favorites_only || c.is_favorite)
        .cloned()
        .collect();

    let key = criteria.sort_key;
    let direction = criteria.direction;
    out.sort_by(|a, b| direction.apply(key.compare(a, b)));
    out
}

#[cfg(test)]
#[path = "../tests/view/engine_tests.rs"]
mod tests;
