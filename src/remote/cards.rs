//! Owned-card operations: list, get, delete, favorite.

use crate::model::{Card, Page, PageRequest};

use super::{RemoteClient, RemoteError};

/// Page size used when walking the whole collection.
const FETCH_ALL_PAGE_SIZE: u32 = 100;

impl RemoteClient {
    pub fn list_cards(&self, req: &PageRequest) -> Result<Page<Card>, RemoteError> {
        let query = [
            ("page", req.page.to_string()),
            ("size", req.size.max(1).to_string()),
            ("sortBy", req.sort_param().to_string()),
            ("sortDir", req.direction.as_str().to_string()),
        ];
        self.send_json(
            self.client.get(self.url("/cards")).query(&query),
            "list cards",
        )
    }

    /// Walks every page of the collection in backend order.
    pub fn list_all_cards(&self) -> Result<Vec<Card>, RemoteError> {
        let mut req = PageRequest {
            size: FETCH_ALL_PAGE_SIZE,
            ..PageRequest::default()
        };
        let mut out = Vec::new();
        loop {
            let page = self.list_cards(&req)?;
            let done = page.last || page.content.is_empty() || req.page + 1 >= page.total_pages;
            out.extend(page.content);
            if done {
                break;
            }
            req.page += 1;
        }
        tracing::debug!(count = out.len(), "fetched collection");
        Ok(out)
    }

    pub fn get_card(&self, id: i64) -> Result<Card, RemoteError> {
        self.send_json(self.client.get(self.url(&format!("/cards/{}", id))), "get card")
    }

    pub fn delete_card(&self, id: i64) -> Result<(), RemoteError> {
        let _ = self.send(
            self.client.delete(self.url(&format!("/cards/{}", id))),
            "delete card",
        )?;
        Ok(())
    }

    /// Flips the favorite flag server-side and returns the updated card.
    pub fn toggle_favorite(&self, id: i64) -> Result<Card, RemoteError> {
        self.send_json(
            self.client
                .patch(self.url(&format!("/cards/{}/favorite", id)))
                .json(&serde_json::json!({})),
            "toggle favorite",
        )
    }

    pub fn list_favorites(&self) -> Result<Vec<Card>, RemoteError> {
        self.send_json(self.client.get(self.url("/cards/favorites")), "list favorites")
    }
}
