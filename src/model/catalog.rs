use serde::{Deserialize, Serialize};

/// Read-only snapshot of a Pokémon from the external catalog.
///
/// Entries are not part of the collection until added through
/// `RemoteClient::add_to_collection`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    #[serde(alias = "pokeApiId")]
    pub id: i64,
    pub name: String,

    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub types: Vec<String>,

    #[serde(default)]
    pub generation: i64,

    pub hp: i64,
    pub attack: i64,
    pub defense: i64,
    pub speed: i64,
}
