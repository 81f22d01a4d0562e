//! Catalog loading endpoints (admin only).

use crate::model::{AdminStats, LoadResult};

use super::{RemoteClient, RemoteError};

impl RemoteClient {
    pub fn admin_stats(&self) -> Result<AdminStats, RemoteError> {
        self.send_json(self.client.get(self.url("/admin/stats")), "admin stats")
    }

    pub fn load_generation(&self, generation: u32) -> Result<LoadResult, RemoteError> {
        self.send_json(
            self.client
                .post(self.url(&format!("/admin/load-generation/{}", generation))),
            "load generation",
        )
    }

    pub fn load_range(&self, from: i64, to: i64) -> Result<LoadResult, RemoteError> {
        self.send_json(
            self.client
                .post(self.url("/admin/load-range"))
                .query(&[("from", from), ("to", to)]),
            "load range",
        )
    }

    pub fn load_all(&self) -> Result<LoadResult, RemoteError> {
        self.send_json(self.client.post(self.url("/admin/load-all")), "load all")
    }
}
