//! Lookups against the external Pokémon catalog and adding entries to the
//! collection.

use crate::model::{Card, CatalogEntry};

use super::{RemoteClient, RemoteError};

impl RemoteClient {
    pub fn search_catalog_by_id(&self, catalog_id: i64) -> Result<CatalogEntry, RemoteError> {
        self.send_json(
            self.client
                .get(self.url(&format!("/pokeapi/pokemon/{}", catalog_id))),
            "search catalog by id",
        )
    }

    pub fn search_catalog_by_name(&self, name: &str) -> Result<CatalogEntry, RemoteError> {
        self.send_json(
            self.client
                .get(self.url("/pokeapi/pokemon/search"))
                .query(&[("name", name)]),
            "search catalog by name",
        )
    }

    /// Adds a catalog entry to the collection. Returns `RemoteError::Conflict`
    /// when the entry is already owned.
    pub fn add_to_collection(&self, catalog_id: i64) -> Result<Card, RemoteError> {
        self.send_json(
            self.client
                .post(self.url(&format!("/pokeapi/pokemon/{}/add", catalog_id)))
                .json(&serde_json::json!({})),
            "add to collection",
        )
    }
}
