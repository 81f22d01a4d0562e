use std::fmt;

use serde::{Deserialize, Serialize};

/// A card owned by the current user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: i64,
    pub poke_api_id: i64,
    pub name: String,
    pub hp: i64,
    pub attack: i64,
    pub defense: i64,
    pub speed: i64,

    #[serde(default)]
    pub generation: i64,

    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub types: Vec<String>,

    pub rarity: Rarity,

    #[serde(default)]
    pub is_favorite: bool,

    pub added_at: String,
}

impl Card {
    /// Sum of the four battle stats used to rank cards against each other.
    pub fn total_stats(&self) -> i64 {
        self.hp
            .saturating_add(self.attack)
            .saturating_add(self.defense)
            .saturating_add(self.speed)
    }

    pub fn has_type(&self, category: &str) -> bool {
        self.types.iter().any(|t| same_folded(t, category))
    }
}

/// Case-insensitive equality under the same Unicode lowercasing the name
/// filter uses.
pub fn same_folded(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 4] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Legendary,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Uncommon => "uncommon",
            Rarity::Rare => "rare",
            Rarity::Legendary => "legendary",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Rarity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rarity::ALL
            .into_iter()
            .find(|r| r.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown rarity '{}' (expected common, uncommon, rare or legendary)", s)
            })
    }
}
