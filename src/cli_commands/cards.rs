use clap::{Args, Subcommand};

use pokedeck::model::Rarity;
use pokedeck::view::{SortDirection, SortKey};

/// Client-side filters shared by `cards list` and `stats`.
#[derive(Args, Clone, Default)]
pub(crate) struct FilterArgs {
    /// Case-insensitive name substring
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Only cards of this type (e.g. fire)
    #[arg(long = "type", value_name = "TYPE")]
    pub(crate) category: Option<String>,
    /// Only cards of this rarity
    #[arg(long)]
    pub(crate) rarity: Option<Rarity>,
    /// Only favorites
    #[arg(long)]
    pub(crate) favorites: bool,
}

#[derive(Subcommand)]
pub(crate) enum CardsCommands {
    /// List the collection (filtered, sorted and paged locally)
    List {
        #[command(flatten)]
        filter: FilterArgs,
        /// Sort key: number|name|hp|attack|defense|speed
        #[arg(long, default_value = "number")]
        sort: SortKey,
        /// Sort descending
        #[arg(long)]
        desc: bool,
        /// Page to show (1-based)
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Rows per page (defaults to the configured page size)
        #[arg(long)]
        size: Option<u32>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Fetch one page as served by the backend
    Page {
        /// Page to fetch (1-based)
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long)]
        size: Option<u32>,
        /// Server sort field (defaults to date added)
        #[arg(long)]
        sort_by: Option<SortKey>,
        #[arg(long, default_value = "desc")]
        dir: SortDirection,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one card
    Show {
        id: i64,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a card from the collection
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Toggle the favorite flag on a card
    Favorite {
        id: i64,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// List favorite cards
    Favorites {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args)]
pub(crate) struct StatsArgs {
    #[command(flatten)]
    pub(crate) filter: FilterArgs,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}
