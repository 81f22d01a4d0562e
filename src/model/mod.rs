mod admin;
mod card;
mod catalog;
mod config;
mod page;
mod trade;
mod user;

pub use self::admin::{AdminStats, LoadResult};
pub use self::card::{Card, Rarity, same_folded};
pub use self::catalog::CatalogEntry;
pub use self::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
pub use self::page::{Page, PageRequest};
pub use self::trade::{Trade, TradeRequest, TradeStatus};
pub use self::user::{AuthResponse, Badge, LoginRequest, RegisterRequest, User, UserStats};
