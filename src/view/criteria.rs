use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::model::{Card, Rarity};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCriteriaError {
    #[error("unknown sort key '{0}' (expected one of: pokeApiId, name, hp, attack, defense, speed)")]
    UnknownSortKey(String),

    #[error("unknown sort direction '{0}' (expected asc or desc)")]
    UnknownDirection(String),
}

/// Attributes the collection can be ordered by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortKey {
    #[default]
    Number,
    Name,
    Hp,
    Attack,
    Defense,
    Speed,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Number,
        SortKey::Name,
        SortKey::Hp,
        SortKey::Attack,
        SortKey::Defense,
        SortKey::Speed,
    ];

    /// Field name understood by the backend's `sortBy` parameter.
    pub fn wire_name(self) -> &'static str {
        match self {
            SortKey::Number => "pokeApiId",
            SortKey::Name => "name",
            SortKey::Hp => "hp",
            SortKey::Attack => "attack",
            SortKey::Defense => "defense",
            SortKey::Speed => "speed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Number => "number",
            SortKey::Name => "name",
            SortKey::Hp => "hp",
            SortKey::Attack => "attack",
            SortKey::Defense => "defense",
            SortKey::Speed => "speed",
        }
    }

    /// Ascending comparison of two cards on this key.
    pub fn compare(self, a: &Card, b: &Card) -> Ordering {
        match self {
            SortKey::Number => a.poke_api_id.cmp(&b.poke_api_id),
            SortKey::Name => cmp_ignore_case(&a.name, &b.name),
            SortKey::Hp => a.hp.cmp(&b.hp),
            SortKey::Attack => a.attack.cmp(&b.attack),
            SortKey::Defense => a.defense.cmp(&b.defense),
            SortKey::Speed => a.speed.cmp(&b.speed),
        }
    }
}

fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortKey {
    type Err = ParseCriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        if key.eq_ignore_ascii_case("number") || key == "#" {
            return Ok(SortKey::Number);
        }
        SortKey::ALL
            .into_iter()
            .find(|k| k.wire_name().eq_ignore_ascii_case(key))
            .ok_or_else(|| ParseCriteriaError::UnknownSortKey(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = ParseCriteriaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            _ => Err(ParseCriteriaError::UnknownDirection(s.to_string())),
        }
    }
}

/// What the filter bar currently asks for. Lives for one view session only.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_term: String,
    pub category: Option<String>,
    pub rarity: Option<Rarity>,
    pub favorites_only: bool,
    pub sort_key: SortKey,
    pub direction: SortDirection,
}

impl FilterCriteria {
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        let category = category.into();
        self.category = if category.trim().is_empty() {
            None
        } else {
            Some(category)
        };
        self
    }

    pub fn with_rarity(mut self, rarity: Option<Rarity>) -> Self {
        self.rarity = rarity;
        self
    }

    pub fn favorites_only(mut self, on: bool) -> Self {
        self.favorites_only = on;
        self
    }

    pub fn sorted_by(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.sort_key = key;
        self.direction = direction;
        self
    }

    pub fn toggle_direction(&mut self) {
        self.direction = self.direction.reversed();
    }

    pub fn reset(&mut self) {
        *self = FilterCriteria::default();
    }

    /// True when no filter narrows the set (ordering may still apply).
    pub fn is_unfiltered(&self) -> bool {
        self.search_term.trim().is_empty()
            && self
                .category
                .as_deref()
                .is_none_or(|c| c.trim().is_empty())
            && self.rarity.is_none()
            && !self.favorites_only
    }

    pub fn summary(&self) -> String {
        let mut bits = Vec::new();
        if !self.search_term.trim().is_empty() {
            bits.push(format!("search={}", self.search_term.trim()));
        }
        if let Some(c) = self.category.as_deref().filter(|c| !c.trim().is_empty()) {
            bits.push(format!("type={}", c));
        }
        if let Some(r) = self.rarity {
            bits.push(format!("rarity={}", r));
        }
        if self.favorites_only {
            bits.push("favorites".to_string());
        }
        bits.push(format!("sort={} {}", self.sort_key, self.direction));
        bits.join(" ")
    }
}
