use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum TradesCommands {
    /// List your trades
    List {
        /// Only pending trades
        #[arg(long)]
        pending: bool,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Propose a trade
    Create {
        /// User id of the other collector
        #[arg(long)]
        to: i64,
        /// Card ids you offer (comma separated)
        #[arg(long, value_delimiter = ',')]
        offer: Vec<i64>,
        /// Card ids you want in return (comma separated)
        #[arg(long = "request", value_delimiter = ',')]
        request: Vec<i64>,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Accept a pending trade
    Accept { id: i64 },

    /// Reject a pending trade
    Reject { id: i64 },

    /// Cancel a trade you proposed
    Cancel { id: i64 },
}
