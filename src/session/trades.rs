use crate::model::{Trade, TradeRequest, TradeStatus};
use crate::remote::{RemoteError, TradeBackend};

use super::{DisplayState, InFlight, PendingOp, SessionError};

const NOT_FOUND_TRADE: &str = "That trade no longer exists.";

/// Trade screen. Every mutation is followed by a reload so the list always
/// reflects the server's settlement.
#[derive(Debug, Default)]
pub struct TradeBoard {
    trades: Vec<Trade>,
    display: DisplayState,
    in_flight: InFlight,
}

impl TradeBoard {
    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    pub fn pending(&self) -> Vec<&Trade> {
        self.trades
            .iter()
            .filter(|t| t.status == TradeStatus::Pending)
            .collect()
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn load<B: TradeBackend>(&mut self, backend: &B) -> Result<(), SessionError> {
        self.in_flight.begin(PendingOp::Load)?;
        self.display.start();
        let result = backend.fetch_trades();
        self.in_flight.finish();
        match result {
            Ok(trades) => {
                self.trades = trades;
                self.display.succeed(None);
                Ok(())
            }
            Err(err) => {
                self.display
                    .fail(&err, "Could not load your trades. Please try again.");
                Err(err.into())
            }
        }
    }

    pub fn create<B: TradeBackend>(&mut self, backend: &B, req: &TradeRequest) -> Result<Trade, SessionError> {
        if req.to_user_id <= 0 {
            return Err(SessionError::Invalid("choose who to trade with".to_string()));
        }
        if req.offered_pokemon_ids.is_empty() && req.requested_pokemon_ids.is_empty() {
            return Err(SessionError::Invalid(
                "a trade must offer or request at least one card".to_string(),
            ));
        }
        self.mutate(backend, PendingOp::CreateTrade, |b| b.create_trade(req))
    }

    pub fn accept<B: TradeBackend>(&mut self, backend: &B, id: i64) -> Result<Trade, SessionError> {
        self.mutate(backend, PendingOp::Trade("accepting", id), |b| b.accept_trade(id))
    }

    pub fn reject<B: TradeBackend>(&mut self, backend: &B, id: i64) -> Result<Trade, SessionError> {
        self.mutate(backend, PendingOp::Trade("rejecting", id), |b| b.reject_trade(id))
    }

    pub fn cancel<B: TradeBackend>(&mut self, backend: &B, id: i64) -> Result<Trade, SessionError> {
        self.mutate(backend, PendingOp::Trade("cancelling", id), |b| b.cancel_trade(id))
    }

    fn mutate<B: TradeBackend>(
        &mut self,
        backend: &B,
        op: PendingOp,
        call: impl FnOnce(&B) -> Result<Trade, RemoteError>,
    ) -> Result<Trade, SessionError> {
        self.in_flight.begin(op)?;
        self.display.start();
        let result = call(backend);
        self.in_flight.finish();

        let trade = match result {
            Ok(trade) => trade,
            Err(err) => {
                self.display.fail(&err, NOT_FOUND_TRADE);
                return Err(err.into());
            }
        };
        tracing::info!(id = trade.id, status = %trade.status, "trade updated");

        // The mutation already succeeded; a failed refresh only shows up as
        // the screen's error line.
        if let Err(err) = self.load(backend) {
            tracing::warn!(error = %err, "trade list refresh failed");
        } else {
            self.display
                .succeed(Some(format!("trade {} is now {}", trade.id, trade.status)));
        }
        Ok(trade)
    }
}

#[cfg(test)]
#[path = "../tests/session/trades_tests.rs"]
mod tests;
