use pokedeck::model::PageRequest;
use pokedeck::session::{CollectionSession, FavoritesList};
use pokedeck::view::{FilterCriteria, SortDirection};

use crate::cli_commands::cards::FilterArgs;

use super::render::{card_line, print_card, print_json, print_page, print_stats, session_failure};
use super::context::{Ctx, confirm};
use super::*;

fn criteria(filter: FilterArgs) -> FilterCriteria {
    FilterCriteria::default()
        .with_search(filter.search.unwrap_or_default())
        .with_category(filter.category.unwrap_or_default())
        .with_rarity(filter.rarity)
        .favorites_only(filter.favorites)
}

fn load_session(ctx: &Ctx, page_size: u32) -> Result<CollectionSession> {
    let mut session = CollectionSession::new(page_size);
    session
        .load(&ctx.client)
        .map_err(|e| session_failure(e, session.display()))?;
    Ok(session)
}

pub(super) fn handle_cards_command(ctx: &Ctx, command: CardsCommands) -> Result<()> {
    match command {
        CardsCommands::List {
            filter,
            sort,
            desc,
            page,
            size,
            json,
        } => {
            let direction = if desc {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            };
            let mut session = load_session(ctx, size.unwrap_or(ctx.config.page_size))?;
            session.set_criteria(criteria(filter).sorted_by(sort, direction));
            let wanted = page.max(1) - 1;
            if wanted > 0 && !session.go_to_page(wanted) {
                anyhow::bail!(
                    "page {} out of range ({} pages)",
                    page,
                    session.pager().total_pages(session.view().len())
                );
            }
            let window = session.current_page();
            if json {
                print_json(&window, "cards page")?;
            } else {
                print_page(&window);
            }
        }
        CardsCommands::Page {
            page,
            size,
            sort_by,
            dir,
            json,
        } => {
            let req = PageRequest {
                page: page.max(1) - 1,
                size: size.unwrap_or(ctx.config.page_size).max(1),
                sort_by,
                direction: dir,
            };
            let window = ctx.client.list_cards(&req).context("list cards")?;
            if json {
                print_json(&window, "cards page")?;
            } else {
                print_page(&window);
            }
        }
        CardsCommands::Show { id, json } => {
            let card = ctx
                .client
                .get_card(id)
                .with_context(|| format!("get card {}", id))?;
            if json {
                print_json(&card, "card")?;
            } else {
                print_card(&card);
            }
        }
        CardsCommands::Delete { id, yes } => {
            let mut session = load_session(ctx, ctx.config.page_size)?;
            let name = session
                .find(id)
                .map(|c| c.name.clone())
                .with_context(|| format!("card {} is not in your collection", id))?;
            let answer = confirm(&format!("Delete {} (card {})?", name, id), yes)?;
            session
                .delete(&ctx.client, id, answer)
                .map_err(|e| session_failure(e, session.display()))?;
            if let Some(notice) = &session.display().notice {
                println!("{}", notice);
            }
        }
        CardsCommands::Favorite { id, json } => {
            let card = ctx
                .client
                .toggle_favorite(id)
                .with_context(|| format!("toggle favorite on card {}", id))?;
            if json {
                print_json(&card, "card")?;
            } else if card.is_favorite {
                println!("{} is now a favorite", card.name);
            } else {
                println!("{} is no longer a favorite", card.name);
            }
        }
        CardsCommands::Favorites { json } => {
            let mut list = FavoritesList::default();
            list.load(&ctx.client)
                .map_err(|e| session_failure(e, list.display()))?;
            if json {
                print_json(list.cards(), "favorites")?;
            } else if list.cards().is_empty() {
                println!("No favorites yet");
            } else {
                for card in list.cards() {
                    println!("{}", card_line(card));
                }
            }
        }
    }

    Ok(())
}

pub(super) fn handle_stats_command(ctx: &Ctx, filter: FilterArgs, json: bool) -> Result<()> {
    let mut session = load_session(ctx, ctx.config.page_size)?;
    session.set_criteria(criteria(filter));
    if json {
        print_json(session.stats(), "stats")?;
    } else {
        print_stats(session.stats());
    }
    Ok(())
}
