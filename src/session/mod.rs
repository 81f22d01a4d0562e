//! View-state owners. Each session holds the state one screen needs, issues
//! remote calls through the backend traits, and reconciles local state only
//! after the server confirms a change.

mod admin;
mod collection;
mod display;
mod favorites;
mod search;
mod trades;
mod wishlist;

pub use self::admin::{AdminPanel, MAX_GENERATION};
pub use self::collection::CollectionSession;
pub use self::display::{
    Confirmation, DisplayState, InFlight, MSG_ALREADY_OWNED, MSG_NETWORK, MSG_UNAUTHORIZED,
    PendingOp, SessionError, user_message,
};
pub use self::favorites::FavoritesList;
pub use self::search::{CatalogQuery, RANDOM_CATALOG_MAX, SearchFlow};
pub use self::trades::TradeBoard;
pub use self::wishlist::Wishlist;
