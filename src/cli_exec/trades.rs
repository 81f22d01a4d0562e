use pokedeck::model::TradeRequest;
use pokedeck::session::TradeBoard;

use super::render::{print_json, session_failure, trade_line};
use super::context::Ctx;
use super::*;

pub(super) fn handle_trades_command(ctx: &Ctx, command: TradesCommands) -> Result<()> {
    let mut board = TradeBoard::default();

    match command {
        TradesCommands::List { pending, json } => {
            board
                .load(&ctx.client)
                .map_err(|e| session_failure(e, board.display()))?;
            let trades = if pending {
                board.pending()
            } else {
                board.trades().iter().collect()
            };
            if json {
                print_json(&trades, "trades")?;
            } else if trades.is_empty() {
                println!("No trades");
            } else {
                for t in trades {
                    println!("{}", trade_line(t));
                }
            }
        }
        TradesCommands::Create {
            to,
            offer,
            request,
            json,
        } => {
            let req = TradeRequest {
                to_user_id: to,
                offered_pokemon_ids: offer,
                requested_pokemon_ids: request,
            };
            let trade = board
                .create(&ctx.client, &req)
                .map_err(|e| session_failure(e, board.display()))?;
            if json {
                print_json(&trade, "trade")?;
            } else {
                println!("Proposed trade {}", trade.id);
                println!("{}", trade_line(&trade));
            }
        }
        TradesCommands::Accept { id } => {
            let trade = board
                .accept(&ctx.client, id)
                .map_err(|e| session_failure(e, board.display()))?;
            println!("Trade {} is now {}", trade.id, trade.status);
        }
        TradesCommands::Reject { id } => {
            let trade = board
                .reject(&ctx.client, id)
                .map_err(|e| session_failure(e, board.display()))?;
            println!("Trade {} is now {}", trade.id, trade.status);
        }
        TradesCommands::Cancel { id } => {
            let trade = board
                .cancel(&ctx.client, id)
                .map_err(|e| session_failure(e, board.display()))?;
            println!("Trade {} is now {}", trade.id, trade.status);
        }
    }

    Ok(())
}
