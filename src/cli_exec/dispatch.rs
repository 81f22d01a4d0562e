use super::admin::handle_admin_command;
use super::cards::{handle_cards_command, handle_stats_command};
use super::catalog::{handle_add_command, handle_random_command, handle_search_command};
use super::identity::{
    handle_config_command, handle_leaderboard_command, handle_login_command,
    handle_logout_command, handle_register_command, handle_whoami_command,
};
use super::trades::handle_trades_command;
use super::context::{with_auth, with_ctx};
use super::*;

pub(super) fn handle_command(command: Commands, globals: &Globals) -> Result<()> {
    match command {
        Commands::Cards { command } => with_auth(globals, |ctx| handle_cards_command(ctx, command))?,
        Commands::Stats(args) => {
            with_auth(globals, |ctx| handle_stats_command(ctx, args.filter, args.json))?
        }
        Commands::Search(args) => with_auth(globals, |ctx| {
            handle_search_command(ctx, &args.query, args.add, args.json)
        })?,
        Commands::Add(args) => {
            with_auth(globals, |ctx| handle_add_command(ctx, args.catalog_id, args.json))?
        }
        Commands::Random(args) => {
            with_auth(globals, |ctx| handle_random_command(ctx, args.add, args.json))?
        }
        Commands::Trades { command } => {
            with_auth(globals, |ctx| handle_trades_command(ctx, command))?
        }
        Commands::Leaderboard(args) => with_ctx(globals, |ctx| {
            handle_leaderboard_command(ctx, args.limit, args.json)
        })?,
        Commands::Admin { command } => with_auth(globals, |ctx| handle_admin_command(ctx, command))?,
        Commands::Login(args) => with_ctx(globals, |ctx| {
            handle_login_command(ctx, &args.email, &args.password)
        })?,
        Commands::Register(args) => with_ctx(globals, |ctx| {
            handle_register_command(ctx, args.username, args.email, args.password)
        })?,
        Commands::Logout => handle_logout_command()?,
        Commands::Whoami(args) => with_auth(globals, |ctx| handle_whoami_command(ctx, args.json))?,
        Commands::Config { command } => handle_config_command(globals, command)?,
    }

    Ok(())
}
