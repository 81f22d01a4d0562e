//! Client library for a personal Pokémon card collection backend.
//!
//! - [`model`]: wire records (cards, catalog entries, pages, trades, users).
//! - [`view`]: client-side filter/sort/paginate engine and stats.
//! - [`remote`]: blocking HTTP client, one call per backend capability.
//! - [`session`]: per-screen state that reconciles after confirmed changes.

pub mod logging;
pub mod model;
pub mod remote;
pub mod session;
pub mod store;
pub mod tui;
pub mod view;

mod tui_shell;

#[cfg(test)]
#[path = "tests/fixtures.rs"]
pub(crate) mod fixtures;
