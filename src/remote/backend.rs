//! Seams between the sessions and the network.
//!
//! Sessions only see these traits, so their reconciliation logic can be
//! exercised against an in-memory backend.

use crate::model::{AdminStats, Card, CatalogEntry, LoadResult, Trade, TradeRequest};

use super::{RemoteClient, RemoteError};

pub trait CardBackend {
    fn fetch_collection(&self) -> Result<Vec<Card>, RemoteError>;
    fn delete_card(&self, id: i64) -> Result<(), RemoteError>;
    fn toggle_favorite(&self, id: i64) -> Result<Card, RemoteError>;
    fn fetch_favorites(&self) -> Result<Vec<Card>, RemoteError>;
}

pub trait CatalogBackend {
    fn lookup_by_id(&self, catalog_id: i64) -> Result<CatalogEntry, RemoteError>;
    fn lookup_by_name(&self, name: &str) -> Result<CatalogEntry, RemoteError>;
    fn add_to_collection(&self, catalog_id: i64) -> Result<Card, RemoteError>;
}

pub trait TradeBackend {
    fn fetch_trades(&self) -> Result<Vec<Trade>, RemoteError>;
    fn create_trade(&self, req: &TradeRequest) -> Result<Trade, RemoteError>;
    fn accept_trade(&self, id: i64) -> Result<Trade, RemoteError>;
    fn reject_trade(&self, id: i64) -> Result<Trade, RemoteError>;
    fn cancel_trade(&self, id: i64) -> Result<Trade, RemoteError>;
}

pub trait AdminBackend {
    fn fetch_stats(&self) -> Result<AdminStats, RemoteError>;
    fn load_generation(&self, generation: u32) -> Result<LoadResult, RemoteError>;
    fn load_range(&self, from: i64, to: i64) -> Result<LoadResult, RemoteError>;
    fn load_all(&self) -> Result<LoadResult, RemoteError>;
}

impl CardBackend for RemoteClient {
    fn fetch_collection(&self) -> Result<Vec<Card>, RemoteError> {
        self.list_all_cards()
    }

    fn delete_card(&self, id: i64) -> Result<(), RemoteError> {
        RemoteClient::delete_card(self, id)
    }

    fn toggle_favorite(&self, id: i64) -> Result<Card, RemoteError> {
        RemoteClient::toggle_favorite(self, id)
    }

    fn fetch_favorites(&self) -> Result<Vec<Card>, RemoteError> {
        self.list_favorites()
    }
}

impl CatalogBackend for RemoteClient {
    fn lookup_by_id(&self, catalog_id: i64) -> Result<CatalogEntry, RemoteError> {
        self.search_catalog_by_id(catalog_id)
    }

    fn lookup_by_name(&self, name: &str) -> Result<CatalogEntry, RemoteError> {
        self.search_catalog_by_name(name)
    }

    fn add_to_collection(&self, catalog_id: i64) -> Result<Card, RemoteError> {
        RemoteClient::add_to_collection(self, catalog_id)
    }
}

impl TradeBackend for RemoteClient {
    fn fetch_trades(&self) -> Result<Vec<Trade>, RemoteError> {
        self.list_trades()
    }

    fn create_trade(&self, req: &TradeRequest) -> Result<Trade, RemoteError> {
        RemoteClient::create_trade(self, req)
    }

    fn accept_trade(&self, id: i64) -> Result<Trade, RemoteError> {
        RemoteClient::accept_trade(self, id)
    }

    fn reject_trade(&self, id: i64) -> Result<Trade, RemoteError> {
        RemoteClient::reject_trade(self, id)
    }

    fn cancel_trade(&self, id: i64) -> Result<Trade, RemoteError> {
        RemoteClient::cancel_trade(self, id)
    }
}

impl AdminBackend for RemoteClient {
    fn fetch_stats(&self) -> Result<AdminStats, RemoteError> {
        self.admin_stats()
    }

    fn load_generation(&self, generation: u32) -> Result<LoadResult, RemoteError> {
        RemoteClient::load_generation(self, generation)
    }

    fn load_range(&self, from: i64, to: i64) -> Result<LoadResult, RemoteError> {
        RemoteClient::load_range(self, from, to)
    }

    fn load_all(&self) -> Result<LoadResult, RemoteError> {
        RemoteClient::load_all(self)
    }
}
