use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadResult {
    pub success: u32,
    pub skipped: u32,
    pub errors: u32,
    pub total: u32,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_cards: u64,
    pub max_pokemon_id: i64,
    pub coverage: String,
}
