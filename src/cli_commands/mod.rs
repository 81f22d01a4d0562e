use clap::Subcommand;

pub(crate) mod admin;
pub(crate) mod cards;
pub(crate) mod catalog;
pub(crate) mod identity;
pub(crate) mod trades;

pub(crate) use self::admin::AdminCommands;
pub(crate) use self::cards::CardsCommands;
pub(crate) use self::identity::ConfigCommands;
pub(crate) use self::trades::TradesCommands;

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Browse and manage the cards you own
    Cards {
        #[command(subcommand)]
        command: CardsCommands,
    },

    /// Show collection statistics (respects the same filters as `cards list`)
    Stats(cards::StatsArgs),

    /// Look a Pokémon up in the catalog by name or number
    Search(catalog::SearchArgs),

    /// Add a catalog entry to your collection
    Add(catalog::AddArgs),

    /// Pick a random first-generation Pokémon
    Random(catalog::RandomArgs),

    /// List and respond to trades
    Trades {
        #[command(subcommand)]
        command: TradesCommands,
    },

    /// Show the collector leaderboard
    Leaderboard(identity::LeaderboardArgs),

    /// Catalog loading (admin)
    Admin {
        #[command(subcommand)]
        command: AdminCommands,
    },

    /// Log in and store the returned token
    Login(identity::LoginArgs),

    /// Create an account and store the returned token
    Register(identity::RegisterArgs),

    /// Forget the stored token
    Logout,

    /// Show the logged-in user
    Whoami(identity::WhoamiArgs),

    /// Show or edit the client configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}
