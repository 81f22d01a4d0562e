use anyhow::Result;

use crate::model::ClientConfig;

mod app;
mod commands;
mod event_loop;
mod input;
mod render;
mod runtime;

// Core TUI types, reachable from submodules via `super::...`.
use app::{App, Backend, UiMode};
use commands::{COMMANDS, TuiCommand};

pub(crate) fn run(config: ClientConfig) -> Result<()> {
    runtime::run(config)
}
