use anyhow::{Context, Result};
use clap::Parser;

use pokedeck::model::ClientConfig;
use pokedeck::remote::RemoteClient;
use pokedeck::store::ConfigStore;

use crate::Commands;

#[derive(Parser)]
#[command(name = "pokedeck")]
#[command(about = "Pokémon card collection client", long_about = None)]
pub(crate) struct Cli {
    /// Backend base URL (overrides POKEDECK_URL and the config file)
    #[arg(long, global = true, value_name = "URL")]
    url: Option<String>,

    /// Bearer token (overrides POKEDECK_TOKEN and the config file)
    #[arg(long, global = true, value_name = "TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Connection overrides given on the command line.
pub(crate) struct Globals {
    pub(crate) url: Option<String>,
    pub(crate) token: Option<String>,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    let globals = Globals {
        url: cli.url,
        token: cli.token,
    };

    match cli.command {
        None => {
            let store = ConfigStore::discover()?;
            let config = load_config(&store, &globals)?;
            pokedeck::tui::run(store, config)?;
        }
        Some(command) => {
            pokedeck::logging::init_stderr("warn");
            crate::cli_exec::handle_command(command, &globals)?
        }
    }

    Ok(())
}

/// Stored config with env and flag overrides applied (flags win).
pub(crate) fn load_config(store: &ConfigStore, globals: &Globals) -> Result<ClientConfig> {
    let mut cfg = store.read_config()?.with_env_overrides();
    cfg.apply_overrides(globals.url.clone(), globals.token.clone());
    Ok(cfg)
}

pub(crate) fn connect(cfg: &ClientConfig) -> Result<RemoteClient> {
    RemoteClient::new(cfg).context("configure backend client")
}

pub(crate) fn require_token(cfg: &ClientConfig) -> Result<()> {
    cfg.token
        .as_ref()
        .map(|_| ())
        .context("not logged in (run `pokedeck login --email ... --password ...`)")
}
