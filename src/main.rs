mod cli_commands;
mod cli_exec;
mod cli_runtime;

pub(crate) use cli_commands::*;
pub(crate) use cli_runtime::{Globals, connect, load_config, require_token};

fn main() {
    if let Err(err) = cli_runtime::run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
