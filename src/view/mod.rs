//! Client-side derivation of what the collection screen shows: filtering,
//! sorting, paging and the stats panel.

mod criteria;
mod engine;
mod pager;
mod stats;

pub use self::criteria::{FilterCriteria, ParseCriteriaError, SortDirection, SortKey};
pub use self::engine::apply;
pub use self::pager::Pager;
pub use self::stats::{CategoryCount, CollectionStats, TOP_CATEGORIES};
