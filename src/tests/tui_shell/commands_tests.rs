use super::*;

#[test]
fn parses_filter_and_sort_commands() {
    assert_eq!(parse("filter char").unwrap(), TuiCommand::Filter("char".to_string()));
    assert_eq!(parse("/type fire").unwrap(), TuiCommand::Category(Some("fire".to_string())));
    assert_eq!(parse("type").unwrap(), TuiCommand::Category(None));
    assert_eq!(parse("rarity RARE").unwrap(), TuiCommand::Rarity(Some(Rarity::Rare)));
    assert_eq!(
        parse("sort hp desc").unwrap(),
        TuiCommand::Sort(SortKey::Hp, Some(SortDirection::Desc))
    );
    assert_eq!(parse("sort name").unwrap(), TuiCommand::Sort(SortKey::Name, None));
    assert_eq!(parse("page 2").unwrap(), TuiCommand::Page(2));
    assert_eq!(parse("trades").unwrap(), TuiCommand::Show(UiMode::Trades));
}

#[test]
fn rejects_bad_arguments() {
    assert!(parse("sort weight").unwrap_err().contains("weight"));
    assert!(parse("sort").is_err());
    assert!(parse("page 0").is_err());
    assert!(parse("delete abc").unwrap_err().contains("card id"));
    assert!(parse("accept -1").unwrap_err().contains("trade id"));
    assert!(parse("rarity shiny").is_err());
    assert!(parse("teleport").unwrap_err().contains("unknown command"));
    assert!(parse("   ").is_err());
}

#[test]
fn completes_command_prefixes() {
    let names: Vec<&str> = completions("fa").iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["favs", "fav", "favorites"]);
    assert!(completions("").is_empty());
    assert!(completions("sort hp").is_empty());
}

#[test]
fn parses_wishlist_commands() {
    assert_eq!(parse("wish").unwrap(), TuiCommand::Wish(None));
    assert_eq!(parse("wish 133").unwrap(), TuiCommand::Wish(Some(133)));
    assert!(parse("wish zero").unwrap_err().contains("catalog id"));
    assert_eq!(parse("wishlist").unwrap(), TuiCommand::Wishlist);
    let names: Vec<&str> = completions("wi").iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["wish", "wishlist"]);
}
