use crate::model::{Card, CatalogEntry};
use crate::remote::{CatalogBackend, RemoteError};

use super::{DisplayState, InFlight, PendingOp, SessionError};

/// Upper bound for `random` picks (the first generation).
pub const RANDOM_CATALOG_MAX: i64 = 151;

const NOT_FOUND_BY_ID: &str = "No Pokémon found with that number.";
const NOT_FOUND_BY_NAME: &str = "No Pokémon found with that name.";
const NOT_FOUND_ADD: &str = "That Pokémon is not in the catalog.";

/// A parsed search box entry: all digits means a catalog number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogQuery {
    Id(i64),
    Name(String),
}

impl CatalogQuery {
    pub fn parse(raw: &str) -> Result<Self, SessionError> {
        let query = raw.trim().to_lowercase();
        if query.is_empty() {
            return Err(SessionError::EmptyQuery);
        }
        if query.chars().all(|c| c.is_ascii_digit()) {
            return query
                .parse::<i64>()
                .map(CatalogQuery::Id)
                .map_err(|_| SessionError::Invalid(format!("'{}' is not a valid number", query)));
        }
        Ok(CatalogQuery::Name(query))
    }
}

/// Search screen: look an entry up, keep it staged, optionally add it.
#[derive(Debug, Default)]
pub struct SearchFlow {
    query: String,
    staged: Option<CatalogEntry>,
    display: DisplayState,
    in_flight: InFlight,
}

impl SearchFlow {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn staged(&self) -> Option<&CatalogEntry> {
        self.staged.as_ref()
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn search<B: CatalogBackend>(&mut self, backend: &B, raw: &str) -> Result<CatalogEntry, SessionError> {
        let query = match CatalogQuery::parse(raw) {
            Ok(q) => q,
            Err(err) => {
                self.display.fail_with(err.to_string());
                return Err(err);
            }
        };

        self.in_flight.begin(PendingOp::Search(raw.trim().to_string()))?;
        self.query = raw.trim().to_string();
        self.staged = None;
        self.display.start();

        let (result, not_found) = match &query {
            CatalogQuery::Id(id) => (backend.lookup_by_id(*id), NOT_FOUND_BY_ID),
            CatalogQuery::Name(name) => (backend.lookup_by_name(name), NOT_FOUND_BY_NAME),
        };
        self.in_flight.finish();

        match result {
            Ok(entry) => {
                tracing::debug!(id = entry.id, name = %entry.name, "catalog entry staged");
                self.staged = Some(entry.clone());
                self.display.succeed(None);
                Ok(entry)
            }
            Err(err) => {
                self.display.fail(&err, not_found);
                Err(err.into())
            }
        }
    }

    /// Adds the staged entry to the collection. On success the staging area
    /// and query are cleared; on failure (including "already owned") the
    /// entry stays staged and nothing else changes.
    pub fn add<B: CatalogBackend>(&mut self, backend: &B) -> Result<Card, SessionError> {
        let Some(entry) = self.staged.as_ref() else {
            self.display.fail_with(SessionError::NothingStaged.to_string());
            return Err(SessionError::NothingStaged);
        };
        let catalog_id = entry.id;

        self.in_flight.begin(PendingOp::Add(catalog_id))?;
        self.display.start();
        let result = backend.add_to_collection(catalog_id);
        self.complete_add(result)
    }

    pub fn complete_add(&mut self, result: Result<Card, RemoteError>) -> Result<Card, SessionError> {
        self.in_flight.finish();
        match result {
            Ok(card) => {
                tracing::info!(id = card.id, name = %card.name, "added to collection");
                self.display
                    .succeed(Some(format!("{} was added to your collection!", card.name)));
                self.staged = None;
                self.query.clear();
                Ok(card)
            }
            Err(err) => {
                self.display.fail(&err, NOT_FOUND_ADD);
                Err(err.into())
            }
        }
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.staged = None;
        self.display.clear();
    }

    /// Random catalog number in `1..=RANDOM_CATALOG_MAX`.
    pub fn random_catalog_id() -> Result<i64, SessionError> {
        let mut bytes = [0u8; 8];
        getrandom::getrandom(&mut bytes)
            .map_err(|e| SessionError::Invalid(format!("getrandom: {:?}", e)))?;
        let n = u64::from_le_bytes(bytes);
        Ok((n % RANDOM_CATALOG_MAX as u64) as i64 + 1)
    }
}

#[cfg(test)]
#[path = "../tests/session/search_tests.rs"]
mod tests;
