use pokedeck::session::SearchFlow;

use super::render::{print_card, print_entry, print_json, session_failure};
use super::context::Ctx;
use super::*;

fn search_and_maybe_add(ctx: &Ctx, query: &str, add: bool, json: bool) -> Result<()> {
    let mut flow = SearchFlow::default();
    let entry = flow
        .search(&ctx.client, query)
        .map_err(|e| session_failure(e, flow.display()))?;

    if !add {
        if json {
            print_json(&entry, "catalog entry")?;
        } else {
            print_entry(&entry);
        }
        return Ok(());
    }

    let card = flow
        .add(&ctx.client)
        .map_err(|e| session_failure(e, flow.display()))?;
    if json {
        print_json(&card, "card")?;
    } else {
        if let Some(notice) = &flow.display().notice {
            println!("{}", notice);
        }
        print_card(&card);
    }
    Ok(())
}

pub(super) fn handle_search_command(ctx: &Ctx, query: &str, add: bool, json: bool) -> Result<()> {
    search_and_maybe_add(ctx, query, add, json)
}

pub(super) fn handle_add_command(ctx: &Ctx, catalog_id: i64, json: bool) -> Result<()> {
    if catalog_id <= 0 {
        anyhow::bail!("catalog numbers start at 1");
    }
    search_and_maybe_add(ctx, &catalog_id.to_string(), true, json)
}

pub(super) fn handle_random_command(ctx: &Ctx, add: bool, json: bool) -> Result<()> {
    let id = SearchFlow::random_catalog_id().context("pick random catalog number")?;
    search_and_maybe_add(ctx, &id.to_string(), add, json)
}
