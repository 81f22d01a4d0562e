use crate::model::{AdminStats, LoadResult};
use crate::remote::{AdminBackend, RemoteError};

use super::{Confirmation, DisplayState, InFlight, PendingOp, SessionError};

/// Highest generation the catalog loader accepts.
pub const MAX_GENERATION: u32 = 9;

/// Catalog loading screen. Loads can take minutes server-side, so only one
/// runs at a time.
#[derive(Debug, Default)]
pub struct AdminPanel {
    stats: Option<AdminStats>,
    last_result: Option<LoadResult>,
    display: DisplayState,
    in_flight: InFlight,
}

impl AdminPanel {
    pub fn stats(&self) -> Option<&AdminStats> {
        self.stats.as_ref()
    }

    pub fn last_result(&self) -> Option<&LoadResult> {
        self.last_result.as_ref()
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_busy()
    }

    /// Stats failures are logged but do not replace the screen's error line.
    pub fn refresh_stats<B: AdminBackend>(&mut self, backend: &B) -> Result<&AdminStats, SessionError> {
        match backend.fetch_stats() {
            Ok(stats) => Ok(self.stats.insert(stats)),
            Err(err) => {
                tracing::warn!(error = %err, "admin stats unavailable");
                Err(err.into())
            }
        }
    }

    pub fn load_generation<B: AdminBackend>(
        &mut self,
        backend: &B,
        generation: u32,
    ) -> Result<LoadResult, SessionError> {
        if !(1..=MAX_GENERATION).contains(&generation) {
            return Err(SessionError::Invalid(format!(
                "generation must be between 1 and {}",
                MAX_GENERATION
            )));
        }
        self.run_load(
            backend,
            PendingOp::AdminLoad(format!("generation {}", generation)),
            |b| b.load_generation(generation),
        )
    }

    pub fn load_range<B: AdminBackend>(&mut self, backend: &B, from: i64, to: i64) -> Result<LoadResult, SessionError> {
        if from < 1 || to < from {
            return Err(SessionError::Invalid(format!(
                "invalid range {}..{} (need 1 <= from <= to)",
                from, to
            )));
        }
        self.run_load(
            backend,
            PendingOp::AdminLoad(format!("#{} to #{}", from, to)),
            |b| b.load_range(from, to),
        )
    }

    pub fn load_all<B: AdminBackend>(&mut self, backend: &B, confirm: Confirmation) -> Result<LoadResult, SessionError> {
        confirm.require()?;
        self.run_load(backend, PendingOp::AdminLoad("all".to_string()), |b| {
            b.load_all()
        })
    }

    fn run_load<B: AdminBackend>(
        &mut self,
        backend: &B,
        op: PendingOp,
        call: impl FnOnce(&B) -> Result<LoadResult, RemoteError>,
    ) -> Result<LoadResult, SessionError> {
        self.in_flight.begin(op)?;
        self.display.start();
        self.last_result = None;
        let result = call(backend);
        self.in_flight.finish();

        match result {
            Ok(loaded) => {
                tracing::info!(success = loaded.success, skipped = loaded.skipped, errors = loaded.errors, "catalog load finished");
                self.display.succeed(Some(loaded.message.clone()));
                self.last_result = Some(loaded.clone());
                let _ = self.refresh_stats(backend);
                Ok(loaded)
            }
            Err(err) => {
                self.display.fail(&err, "Loader endpoint not found.");
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/session/admin_tests.rs"]
mod tests;
