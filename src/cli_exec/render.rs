use serde::Serialize;

use pokedeck::model::{Card, CatalogEntry, LoadResult, Page, Trade, User};
use pokedeck::session::{DisplayState, SessionError};
use pokedeck::view::CollectionStats;

use super::*;

pub(super) fn print_json<T: Serialize + ?Sized>(value: &T, what: &str) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).with_context(|| format!("serialize {} json", what))?
    );
    Ok(())
}

/// Wraps a failed session call with the message the session chose to show.
pub(super) fn session_failure(err: SessionError, display: &DisplayState) -> anyhow::Error {
    match display.error.clone() {
        Some(message) if err.remote().is_some() => anyhow::Error::new(err).context(message),
        _ => anyhow::Error::new(err),
    }
}

pub(super) fn card_line(card: &Card) -> String {
    let fav = if card.is_favorite { " *" } else { "" };
    format!(
        "{:>5}  #{:<4} {:<14} hp {:>3}  atk {:>3}  {:<16} {}{}",
        card.id,
        card.poke_api_id,
        card.name,
        card.hp,
        card.attack,
        card.types.join("/"),
        card.rarity,
        fav
    )
}

pub(super) fn print_card(card: &Card) {
    println!("id: {}", card.id);
    println!("number: {}", card.poke_api_id);
    println!("name: {}", card.name);
    println!("types: {}", card.types.join(", "));
    println!("rarity: {}", card.rarity);
    println!(
        "stats: hp={} attack={} defense={} speed={} total={}",
        card.hp,
        card.attack,
        card.defense,
        card.speed,
        card.total_stats()
    );
    println!("generation: {}", card.generation);
    println!("favorite: {}", card.is_favorite);
    println!("added_at: {}", card.added_at);
}

pub(super) fn print_entry(entry: &CatalogEntry) {
    println!("#{} {}", entry.id, entry.name);
    println!("types: {}", entry.types.join(", "));
    println!(
        "stats: hp={} attack={} defense={} speed={}",
        entry.hp, entry.attack, entry.defense, entry.speed
    );
    if entry.generation > 0 {
        println!("generation: {}", entry.generation);
    }
}

pub(super) fn print_page(page: &Page<Card>) {
    if page.content.is_empty() {
        println!("No cards");
        return;
    }
    for card in &page.content {
        println!("{}", card_line(card));
    }
    println!(
        "page {}/{} ({} cards)",
        page.page + 1,
        page.total_pages.max(1),
        page.total_elements
    );
}

pub(super) fn print_stats(stats: &CollectionStats) {
    println!("cards: {}", stats.total);
    println!("favorites: {}", stats.favorites);
    println!("avg hp: {}", stats.avg_hp);
    println!("avg attack: {}", stats.avg_attack);
    match &stats.strongest {
        Some(card) => println!("strongest: {} ({})", card.name, card.total_stats()),
        None => println!("strongest: -"),
    }
    if !stats.top_categories.is_empty() {
        let top = stats
            .top_categories
            .iter()
            .map(|c| format!("{} {}", c.category, c.count))
            .collect::<Vec<_>>()
            .join(", ");
        println!("top types: {}", top);
    }
}

fn names(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "nothing".to_string();
    }
    cards
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub(super) fn trade_line(trade: &Trade) -> String {
    format!(
        "{:>4} {:<9} {} -> {}: {} for {}",
        trade.id,
        trade.status,
        trade.from_user.username,
        trade.to_user.username,
        names(&trade.offered_pokemons),
        names(&trade.requested_pokemons)
    )
}

pub(super) fn leader_line(user: &User) -> String {
    format!(
        "{:>3}. {:<16} {:>4} cards  {:>5.1}%",
        user.stats.rank,
        user.username,
        user.stats.total_pokemons,
        user.stats.completion_percentage
    )
}

pub(super) fn print_load(result: &LoadResult) {
    println!("{}", result.message);
    println!(
        "loaded={} skipped={} errors={} total={}",
        result.success, result.skipped, result.errors, result.total
    );
}
