use crate::model::{Card, DEFAULT_PAGE_SIZE, Page};
use crate::remote::{CardBackend, RemoteError};
use crate::view::{self, CollectionStats, FilterCriteria, Pager};

use super::{Confirmation, DisplayState, InFlight, PendingOp, SessionError};

const NOT_FOUND_COLLECTION: &str = "Could not load the collection. Please try again.";
const NOT_FOUND_CARD: &str = "That card is no longer in your collection.";

/// State behind the collection screen.
///
/// Holds the full owned set as last confirmed by the server, plus everything
/// derived from it: the filtered/sorted view, the current page and the stats
/// panel. Derived state is recomputed whenever the owned set or the criteria
/// change, so readers never see a stale view.
#[derive(Debug)]
pub struct CollectionSession {
    items: Vec<Card>,
    total_count: u64,
    criteria: FilterCriteria,
    pager: Pager,
    view: Vec<Card>,
    stats: CollectionStats,
    display: DisplayState,
    in_flight: InFlight,
    loaded: bool,
}

impl Default for CollectionSession {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl CollectionSession {
    pub fn new(page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            total_count: 0,
            criteria: FilterCriteria::default(),
            pager: Pager::new(page_size),
            view: Vec::new(),
            stats: CollectionStats::default(),
            display: DisplayState::default(),
            in_flight: InFlight::default(),
            loaded: false,
        }
    }

    /// Session seeded with an already fetched collection.
    pub fn with_items(items: Vec<Card>, page_size: u32) -> Self {
        let mut session = Self::new(page_size);
        session.replace_items(items);
        session
    }

    pub fn items(&self) -> &[Card] {
        &self.items
    }

    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// The filtered and sorted cards, across all pages.
    pub fn view(&self) -> &[Card] {
        &self.view
    }

    pub fn stats(&self) -> &CollectionStats {
        &self.stats
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn in_flight(&self) -> &InFlight {
        &self.in_flight
    }

    pub fn find(&self, id: i64) -> Option<&Card> {
        self.items.iter().find(|c| c.id == id)
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.pager.reset();
        self.refresh_view();
    }

    pub fn update_criteria(&mut self, f: impl FnOnce(&mut FilterCriteria)) {
        f(&mut self.criteria);
        self.pager.reset();
        self.refresh_view();
    }

    pub fn reset_filters(&mut self) {
        self.update_criteria(FilterCriteria::reset);
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn set_page_size(&mut self, size: u32) {
        self.pager.set_page_size(size);
    }

    pub fn current_page(&mut self) -> Page<Card> {
        self.pager.window(&self.view)
    }

    pub fn next_page(&mut self) -> bool {
        self.pager.next(self.view.len())
    }

    pub fn prev_page(&mut self) -> bool {
        self.pager.prev(self.view.len())
    }

    pub fn go_to_page(&mut self, page: u32) -> bool {
        self.pager.go_to(page, self.view.len())
    }

    /// Marks `op` as in flight. Event-driven callers pair this with the
    /// matching `complete_*` once the network result arrives.
    pub fn begin(&mut self, op: PendingOp) -> Result<(), SessionError> {
        self.in_flight.begin(op)?;
        self.display.start();
        Ok(())
    }

    pub fn load<B: CardBackend>(&mut self, backend: &B) -> Result<(), SessionError> {
        self.begin(PendingOp::Load)?;
        let result = backend.fetch_collection();
        self.complete_load(result)
    }

    pub fn complete_load(&mut self, result: Result<Vec<Card>, RemoteError>) -> Result<(), SessionError> {
        self.in_flight.finish();
        match result {
            Ok(items) => {
                tracing::info!(count = items.len(), "collection loaded");
                self.replace_items(items);
                self.display.succeed(None);
                Ok(())
            }
            Err(err) => {
                self.display.fail(&err, NOT_FOUND_COLLECTION);
                Err(err.into())
            }
        }
    }

    /// Deletes a card remotely and, only once the server agrees, drops it from
    /// every local list.
    pub fn delete<B: CardBackend>(
        &mut self,
        backend: &B,
        id: i64,
        confirm: Confirmation,
    ) -> Result<(), SessionError> {
        confirm.require()?;
        self.begin(PendingOp::Delete(id))?;
        let result = backend.delete_card(id);
        self.complete_delete(id, result)
    }

    pub fn complete_delete(&mut self, id: i64, result: Result<(), RemoteError>) -> Result<(), SessionError> {
        self.in_flight.finish();
        match result {
            Ok(()) => {
                let name = self.forget(id).map(|c| c.name);
                tracing::info!(id, "card deleted");
                self.display
                    .succeed(name.map(|n| format!("{} was removed from your collection", n)));
                Ok(())
            }
            Err(err) => {
                self.display.fail(&err, NOT_FOUND_CARD);
                Err(err.into())
            }
        }
    }

    /// Flips the favorite flag remotely and swaps in the server's copy.
    pub fn toggle_favorite<B: CardBackend>(&mut self, backend: &B, id: i64) -> Result<Card, SessionError> {
        self.begin(PendingOp::ToggleFavorite(id))?;
        let result = backend.toggle_favorite(id);
        self.complete_toggle(result)
    }

    pub fn complete_toggle(&mut self, result: Result<Card, RemoteError>) -> Result<Card, SessionError> {
        self.in_flight.finish();
        match result {
            Ok(updated) => {
                tracing::info!(id = updated.id, favorite = updated.is_favorite, "favorite toggled");
                self.replace(updated.clone());
                self.display.succeed(None);
                Ok(updated)
            }
            Err(err) => {
                self.display.fail(&err, NOT_FOUND_CARD);
                Err(err.into())
            }
        }
    }

    /// Inserts a card the server just created (for example after an add from
    /// the search flow). A card already held under the same id is replaced.
    pub fn absorb_added(&mut self, card: Card) {
        if self.items.iter().any(|c| c.id == card.id) {
            self.replace(card);
            return;
        }
        self.items.push(card);
        self.total_count += 1;
        self.refresh_view();
    }

    /// Drops a card from the local lists without a remote call. Used when
    /// another screen already deleted it remotely.
    pub fn forget(&mut self, id: i64) -> Option<Card> {
        let idx = self.items.iter().position(|c| c.id == id)?;
        let removed = self.items.remove(idx);
        self.total_count = self.total_count.saturating_sub(1);
        self.refresh_view();
        Some(removed)
    }

    fn replace(&mut self, updated: Card) {
        if let Some(slot) = self.items.iter_mut().find(|c| c.id == updated.id) {
            *slot = updated;
            self.refresh_view();
        }
    }

    fn replace_items(&mut self, items: Vec<Card>) {
        self.total_count = items.len() as u64;
        self.items = items;
        self.loaded = true;
        self.refresh_view();
    }

    fn refresh_view(&mut self) {
        self.view = view::apply(&self.items, &self.criteria);
        self.pager.clamp(self.view.len());
        self.stats = CollectionStats::compute(&self.view);
    }
}

#[cfg(test)]
#[path = "../tests/session/collection_tests.rs"]
mod tests;
