/// Catalog numbers the user wants but does not own yet. Lives only as long
/// as the session that holds it.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Wishlist {
    ids: Vec<i64>,
}

impl Wishlist {
    /// Insertion order.
    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    pub fn contains(&self, catalog_id: i64) -> bool {
        self.ids.contains(&catalog_id)
    }

    /// Returns false when the number was already listed.
    pub fn add(&mut self, catalog_id: i64) -> bool {
        if self.contains(catalog_id) {
            return false;
        }
        self.ids.push(catalog_id);
        true
    }

    pub fn remove(&mut self, catalog_id: i64) -> bool {
        let before = self.ids.len();
        self.ids.retain(|id| *id != catalog_id);
        self.ids.len() != before
    }

    /// Flips membership and reports whether the number is now listed.
    pub fn toggle(&mut self, catalog_id: i64) -> bool {
        if self.remove(catalog_id) {
            false
        } else {
            self.ids.push(catalog_id);
            true
        }
    }
}

#[cfg(test)]
#[path = "../tests/session/wishlist_tests.rs"]
mod tests;
