use clap::Subcommand;

#[derive(Subcommand)]
pub(crate) enum AdminCommands {
    /// Show catalog coverage
    Stats {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Load one generation into the catalog (1-9)
    LoadGeneration { generation: u32 },

    /// Load a range of catalog numbers
    LoadRange { from: i64, to: i64 },

    /// Load every known Pokémon (slow)
    LoadAll {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}
