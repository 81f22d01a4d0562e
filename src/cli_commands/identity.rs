use clap::{Args, Subcommand};

#[derive(Args)]
pub(crate) struct LoginArgs {
    #[arg(long)]
    pub(crate) email: String,
    #[arg(long)]
    pub(crate) password: String,
}

#[derive(Args)]
pub(crate) struct RegisterArgs {
    #[arg(long)]
    pub(crate) username: String,
    #[arg(long)]
    pub(crate) email: String,
    #[arg(long)]
    pub(crate) password: String,
}

#[derive(Args)]
pub(crate) struct WhoamiArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct LeaderboardArgs {
    /// Show at most this many collectors
    #[arg(long, default_value_t = 10)]
    pub(crate) limit: usize,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Subcommand)]
pub(crate) enum ConfigCommands {
    /// Print the effective configuration
    Show {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Update stored settings
    Set {
        /// Backend base URL
        #[arg(long)]
        base_url: Option<String>,
        /// Rows per page in the collection view
        #[arg(long)]
        page_size: Option<u32>,
        /// Request timeout in seconds
        #[arg(long)]
        timeout: Option<u64>,
    },
}
