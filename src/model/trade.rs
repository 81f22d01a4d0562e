use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Card, User};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: i64,
    pub from_user: User,
    pub to_user: User,

    #[serde(default)]
    pub offered_pokemons: Vec<Card>,

    #[serde(default)]
    pub requested_pokemons: Vec<Card>,

    pub status: TradeStatus,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeStatus {
    Pending,
    Accepted,
    Rejected,
    Cancelled,
    Completed,
}

impl TradeStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            TradeStatus::Pending => "pending",
            TradeStatus::Accepted => "accepted",
            TradeStatus::Rejected => "rejected",
            TradeStatus::Cancelled => "cancelled",
            TradeStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for TradeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRequest {
    pub to_user_id: i64,
    pub offered_pokemon_ids: Vec<i64>,
    pub requested_pokemon_ids: Vec<i64>,
}
