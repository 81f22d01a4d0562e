use pokedeck::session::AdminPanel;

use super::render::{print_json, print_load, session_failure};
use super::context::{Ctx, confirm};
use super::*;

pub(super) fn handle_admin_command(ctx: &Ctx, command: AdminCommands) -> Result<()> {
    let mut panel = AdminPanel::default();

    let result = match command {
        AdminCommands::Stats { json } => {
            let stats = panel
                .refresh_stats(&ctx.client)
                .context("fetch admin stats")?;
            if json {
                print_json(stats, "admin stats")?;
            } else {
                println!("cards in catalog: {}", stats.total_cards);
                println!("highest number: {}", stats.max_pokemon_id);
                println!("coverage: {}", stats.coverage);
            }
            return Ok(());
        }
        AdminCommands::LoadGeneration { generation } => {
            panel.load_generation(&ctx.client, generation)
        }
        AdminCommands::LoadRange { from, to } => panel.load_range(&ctx.client, from, to),
        AdminCommands::LoadAll { yes } => {
            let answer = confirm("Load every Pokémon into the catalog? This can take minutes.", yes)?;
            panel.load_all(&ctx.client, answer)
        }
    };

    let loaded = result.map_err(|e| session_failure(e, panel.display()))?;
    print_load(&loaded);
    if let Some(stats) = panel.stats() {
        println!("coverage now: {}", stats.coverage);
    }
    Ok(())
}
