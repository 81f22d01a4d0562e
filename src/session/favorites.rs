use crate::model::Card;
use crate::remote::CardBackend;

use super::{Confirmation, DisplayState, InFlight, PendingOp, SessionError};

const NOT_FOUND_FAVORITE: &str = "That card is no longer in your collection.";

/// The favorites screen: only cards currently flagged as favorite.
#[derive(Debug, Default)]
pub struct FavoritesList {
    cards: Vec<Card>,
    display: DisplayState,
    in_flight: InFlight,
}

impl FavoritesList {
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn load<B: CardBackend>(&mut self, backend: &B) -> Result<(), SessionError> {
        self.in_flight.begin(PendingOp::Load)?;
        self.display.start();
        let result = backend.fetch_favorites();
        self.in_flight.finish();
        match result {
            Ok(cards) => {
                self.cards = cards;
                self.display.succeed(None);
                Ok(())
            }
            Err(err) => {
                self.display
                    .fail(&err, "Could not load your favorites. Please try again.");
                Err(err.into())
            }
        }
    }

    /// Un-favoriting from this screen drops the card from the list once the
    /// server returns it with the flag cleared.
    pub fn toggle<B: CardBackend>(&mut self, backend: &B, id: i64) -> Result<Card, SessionError> {
        self.in_flight.begin(PendingOp::ToggleFavorite(id))?;
        self.display.start();
        let result = backend.toggle_favorite(id);
        self.in_flight.finish();
        match result {
            Ok(updated) => {
                self.reconcile(updated.clone());
                self.display.succeed(None);
                Ok(updated)
            }
            Err(err) => {
                self.display.fail(&err, NOT_FOUND_FAVORITE);
                Err(err.into())
            }
        }
    }

    pub fn delete<B: CardBackend>(
        &mut self,
        backend: &B,
        id: i64,
        confirm: Confirmation,
    ) -> Result<(), SessionError> {
        confirm.require()?;
        self.in_flight.begin(PendingOp::Delete(id))?;
        self.display.start();
        let result = backend.delete_card(id);
        self.in_flight.finish();
        match result {
            Ok(()) => {
                self.forget(id);
                self.display.succeed(None);
                Ok(())
            }
            Err(err) => {
                self.display.fail(&err, NOT_FOUND_FAVORITE);
                Err(err.into())
            }
        }
    }

    /// Applies a server-confirmed card state coming from any screen.
    pub fn reconcile(&mut self, updated: Card) {
        if !updated.is_favorite {
            self.forget(updated.id);
            return;
        }
        match self.cards.iter_mut().find(|c| c.id == updated.id) {
            Some(slot) => *slot = updated,
            None => self.cards.push(updated),
        }
    }

    pub fn forget(&mut self, id: i64) -> bool {
        let before = self.cards.len();
        self.cards.retain(|c| c.id != id);
        self.cards.len() != before
    }
}

#[cfg(test)]
#[path = "../tests/session/favorites_tests.rs"]
mod tests;
