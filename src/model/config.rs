use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_PAGE_SIZE: u32 = 20;

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    // Bearer token returned by `login`/`register`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Rows per page in the collection view.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Per-request timeout applied by the HTTP client.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            page_size: default_page_size(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClientConfig {
    /// Applies `POKEDECK_URL` / `POKEDECK_TOKEN` on top of the stored values.
    pub fn with_env_overrides(mut self) -> Self {
        self.apply_overrides(
            std::env::var("POKEDECK_URL").ok(),
            std::env::var("POKEDECK_TOKEN").ok(),
        );
        self
    }

    pub fn apply_overrides(&mut self, base_url: Option<String>, token: Option<String>) {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            self.token = Some(token.trim().to_string());
        }
    }
}
