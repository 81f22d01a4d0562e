use anyhow::{Context, Result};

use pokedeck::model::ClientConfig;
use pokedeck::remote::RemoteClient;
use pokedeck::store::ConfigStore;

use crate::{
    AdminCommands, CardsCommands, Commands, ConfigCommands, Globals, TradesCommands, connect,
    load_config, require_token,
};

mod admin;
mod cards;
mod catalog;
mod dispatch;
mod identity;
mod render;
mod trades;
mod context;

pub(super) fn handle_command(command: Commands, globals: &Globals) -> Result<()> {
    dispatch::handle_command(command, globals)
}
