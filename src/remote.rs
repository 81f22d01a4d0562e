//! Blocking HTTP client for the collection backend.
//!
//! One method per backend capability. Calls are issued in sequence by the
//! caller and never retried; failures come back as [`RemoteError`].

use std::time::Duration;

use crate::model::ClientConfig;

mod admin;
mod backend;
mod cards;
mod catalog;
mod error;
mod http_client;
mod identity;
mod trades;

pub use self::backend::{AdminBackend, CardBackend, CatalogBackend, TradeBackend};
pub use self::error::{ErrorKind, RemoteError};

pub struct RemoteClient {
    base_url: String,
    token: Option<String>,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(config: &ClientConfig) -> Result<Self, RemoteError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(RemoteError::InvalidBaseUrl(config.base_url.clone()));
        }

        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("pokedeck/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()
            .map_err(|source| RemoteError::Transport {
                label: "build http client",
                source,
            })?;

        Ok(Self {
            base_url,
            token: config.token.clone(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub fn set_token(&mut self, token: Option<String>) {
        self.token = token;
    }
}
