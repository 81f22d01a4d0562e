#![allow(clippy::result_large_err)]

use std::collections::{BTreeSet, HashMap};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Extension, Query, State};
use axum::http::{StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post};
use axum::{Json, Router, extract::Path};
use clap::Parser;
use tokio::sync::RwLock;

use pokedeck::model::{
    AdminStats, AuthResponse, Card, CatalogEntry, LoadResult, Page, Rarity, Trade, TradeRequest,
    TradeStatus, User, UserStats,
};

#[path = "pokedeck_server/types.rs"]
mod types;
use self::types::*;
#[path = "pokedeck_server/seed.rs"]
mod seed;
use self::seed::*;
#[path = "pokedeck_server/http_error.rs"]
mod http_error;
use self::http_error::*;
#[path = "pokedeck_server/handlers_identity.rs"]
mod handlers_identity;
use self::handlers_identity::*;
#[path = "pokedeck_server/handlers_cards.rs"]
mod handlers_cards;
use self::handlers_cards::*;
#[path = "pokedeck_server/handlers_catalog.rs"]
mod handlers_catalog;
use self::handlers_catalog::*;
#[path = "pokedeck_server/handlers_trades.rs"]
mod handlers_trades;
use self::handlers_trades::*;
#[path = "pokedeck_server/handlers_admin.rs"]
mod handlers_admin;
use self::handlers_admin::*;
#[path = "pokedeck_server/routes.rs"]
mod routes;
use self::routes::*;
#[path = "pokedeck_server/runtime.rs"]
mod runtime;

#[tokio::main]
async fn main() {
    if let Err(err) = runtime::run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
