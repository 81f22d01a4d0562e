use clap::Args;

#[derive(Args)]
pub(crate) struct SearchArgs {
    /// Pokémon name or catalog number
    pub(crate) query: String,
    /// Add the result to the collection
    #[arg(long)]
    pub(crate) add: bool,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct AddArgs {
    pub(crate) catalog_id: i64,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct RandomArgs {
    /// Add the result to the collection
    #[arg(long)]
    pub(crate) add: bool,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}
