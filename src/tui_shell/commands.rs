use crate::model::Rarity;
use crate::view::{SortDirection, SortKey};

use super::UiMode;

#[derive(Clone, Copy, Debug)]
pub(super) struct CommandDef {
    pub(super) name: &'static str,
    pub(super) usage: &'static str,
    pub(super) help: &'static str,
}

pub(super) const COMMANDS: &[CommandDef] = &[
    CommandDef { name: "filter", usage: "filter [text]", help: "Filter the collection by name" },
    CommandDef { name: "type", usage: "type [category]", help: "Only cards of one type" },
    CommandDef { name: "rarity", usage: "rarity [rarity]", help: "Only cards of one rarity" },
    CommandDef { name: "favs", usage: "favs", help: "Toggle favorites-only" },
    CommandDef { name: "sort", usage: "sort <key> [asc|desc]", help: "Sort by number, name, hp, attack, defense or speed" },
    CommandDef { name: "reverse", usage: "reverse", help: "Flip the sort direction" },
    CommandDef { name: "reset", usage: "reset", help: "Clear every filter" },
    CommandDef { name: "page", usage: "page <n>", help: "Jump to page n" },
    CommandDef { name: "fav", usage: "fav <id>", help: "Toggle favorite on a card" },
    CommandDef { name: "delete", usage: "delete <id>", help: "Remove a card (asks first)" },
    CommandDef { name: "find", usage: "find <name|number>", help: "Look up the catalog" },
    CommandDef { name: "add", usage: "add", help: "Add the staged catalog entry" },
    CommandDef { name: "random", usage: "random", help: "Look up a random catalog entry" },
    CommandDef { name: "wish", usage: "wish [number]", help: "Toggle a catalog number on the wishlist" },
    CommandDef { name: "wishlist", usage: "wishlist", help: "List wished catalog numbers" },
    CommandDef { name: "collection", usage: "collection", help: "Show the collection" },
    CommandDef { name: "favorites", usage: "favorites", help: "Show favorites" },
    CommandDef { name: "trades", usage: "trades", help: "Show trades" },
    CommandDef { name: "accept", usage: "accept <trade>", help: "Accept a pending trade" },
    CommandDef { name: "reject", usage: "reject <trade>", help: "Reject a pending trade" },
    CommandDef { name: "cancel", usage: "cancel <trade>", help: "Cancel a trade you sent" },
    CommandDef { name: "reload", usage: "reload", help: "Fetch the current screen again" },
    CommandDef { name: "help", usage: "help", help: "List commands" },
    CommandDef { name: "quit", usage: "quit", help: "Leave" },
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) enum TuiCommand {
    Filter(String),
    Category(Option<String>),
    Rarity(Option<Rarity>),
    FavoritesOnly,
    Sort(SortKey, Option<SortDirection>),
    Reverse,
    Reset,
    Page(u32),
    Favorite(i64),
    Delete(i64),
    Find(String),
    Add,
    Random,
    Wish(Option<i64>),
    Wishlist,
    Show(UiMode),
    Accept(i64),
    Reject(i64),
    Cancel(i64),
    Reload,
    Help,
    Quit,
}

fn parse_id(what: &str, raw: &str) -> Result<i64, String> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| format!("expected a {} id, got '{}'", what, raw.trim()))
}

/// Parses one command line. A leading `/` is accepted and ignored.
pub(super) fn parse(line: &str) -> Result<TuiCommand, String> {
    let line = line.trim().trim_start_matches('/').trim_start();
    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };
    let optional = |s: &str| (!s.is_empty()).then(|| s.to_string());

    let cmd = match name.to_ascii_lowercase().as_str() {
        "filter" | "f" => TuiCommand::Filter(rest.to_string()),
        "type" => TuiCommand::Category(optional(rest)),
        "rarity" => match optional(rest) {
            None => TuiCommand::Rarity(None),
            Some(r) => TuiCommand::Rarity(Some(r.parse::<Rarity>()?)),
        },
        "favs" => TuiCommand::FavoritesOnly,
        "sort" => {
            let mut parts = rest.split_whitespace();
            let key = parts
                .next()
                .ok_or_else(|| "usage: sort <key> [asc|desc]".to_string())?
                .parse::<SortKey>()
                .map_err(|e| e.to_string())?;
            let direction = parts
                .next()
                .map(|d| d.parse::<SortDirection>().map_err(|e| e.to_string()))
                .transpose()?;
            TuiCommand::Sort(key, direction)
        }
        "reverse" => TuiCommand::Reverse,
        "reset" => TuiCommand::Reset,
        "page" => {
            let n = rest
                .parse::<u32>()
                .ok()
                .filter(|n| *n >= 1)
                .ok_or_else(|| format!("expected a page number, got '{}'", rest))?;
            TuiCommand::Page(n)
        }
        "fav" => TuiCommand::Favorite(parse_id("card", rest)?),
        "delete" | "rm" => TuiCommand::Delete(parse_id("card", rest)?),
        "find" | "search" => TuiCommand::Find(rest.to_string()),
        "add" => TuiCommand::Add,
        "random" => TuiCommand::Random,
        "wish" => match optional(rest) {
            None => TuiCommand::Wish(None),
            Some(n) => TuiCommand::Wish(Some(parse_id("catalog", &n)?)),
        },
        "wishlist" => TuiCommand::Wishlist,
        "collection" | "c" => TuiCommand::Show(UiMode::Collection),
        "favorites" => TuiCommand::Show(UiMode::Favorites),
        "trades" | "t" => TuiCommand::Show(UiMode::Trades),
        "accept" => TuiCommand::Accept(parse_id("trade", rest)?),
        "reject" => TuiCommand::Reject(parse_id("trade", rest)?),
        "cancel" => TuiCommand::Cancel(parse_id("trade", rest)?),
        "reload" | "r" => TuiCommand::Reload,
        "help" | "?" => TuiCommand::Help,
        "quit" | "q" | "exit" => TuiCommand::Quit,
        "" => return Err("type a command (help lists them)".to_string()),
        other => return Err(format!("unknown command '{}' (help lists them)", other)),
    };
    Ok(cmd)
}

/// Commands whose name starts with what has been typed so far.
pub(super) fn completions(prefix: &str) -> Vec<&'static CommandDef> {
    let prefix = prefix.trim_start_matches('/').trim().to_ascii_lowercase();
    if prefix.is_empty() || prefix.contains(char::is_whitespace) {
        return Vec::new();
    }
    COMMANDS
        .iter()
        .filter(|c| c.name.starts_with(&prefix))
        .collect()
}

#[cfg(test)]
#[path = "../tests/tui_shell/commands_tests.rs"]
mod tests;
