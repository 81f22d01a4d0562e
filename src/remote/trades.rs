use crate::model::{Trade, TradeRequest};

use super::{RemoteClient, RemoteError};

impl RemoteClient {
    pub fn list_trades(&self) -> Result<Vec<Trade>, RemoteError> {
        self.send_json(self.client.get(self.url("/trades")), "list trades")
    }

    pub fn create_trade(&self, req: &TradeRequest) -> Result<Trade, RemoteError> {
        self.send_json(
            self.client.post(self.url("/trades")).json(req),
            "create trade",
        )
    }

    pub fn accept_trade(&self, id: i64) -> Result<Trade, RemoteError> {
        self.send_json(
            self.client
                .patch(self.url(&format!("/trades/{}/accept", id)))
                .json(&serde_json::json!({})),
            "accept trade",
        )
    }

    pub fn reject_trade(&self, id: i64) -> Result<Trade, RemoteError> {
        self.send_json(
            self.client
                .patch(self.url(&format!("/trades/{}/reject", id)))
                .json(&serde_json::json!({})),
            "reject trade",
        )
    }

    pub fn cancel_trade(&self, id: i64) -> Result<Trade, RemoteError> {
        self.send_json(
            self.client.delete(self.url(&format!("/trades/{}", id))),
            "cancel trade",
        )
    }
}
