use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

use crate::model::{Card, Rarity, Trade, TradeStatus};
use crate::view::CollectionStats;

use super::commands::completions;
use super::{App, UiMode};

fn rarity_color(rarity: Rarity) -> Color {
    match rarity {
        Rarity::Common => Color::Gray,
        Rarity::Uncommon => Color::Green,
        Rarity::Rare => Color::Blue,
        Rarity::Legendary => Color::Magenta,
    }
}

fn card_item(card: &Card) -> ListItem<'static> {
    let star = if card.is_favorite { "★ " } else { "  " };
    ListItem::new(Line::from(vec![
        Span::styled(star, Style::default().fg(Color::Yellow)),
        Span::raw(format!("{:>5}  #{:<4} {:<14}", card.id, card.poke_api_id, card.name)),
        Span::styled(
            format!("{:<10}", card.rarity.as_str()),
            Style::default().fg(rarity_color(card.rarity)),
        ),
        Span::raw(format!(
            "hp {:>3}  atk {:>3}  def {:>3}  spd {:>3}  ",
            card.hp, card.attack, card.defense, card.speed
        )),
        Span::styled(card.types.join("/"), Style::default().fg(Color::Cyan)),
    ]))
}

fn trade_item(trade: &Trade) -> ListItem<'static> {
    let names = |cards: &[Card]| {
        if cards.is_empty() {
            "-".to_string()
        } else {
            cards.iter().map(|c| c.name.as_str()).collect::<Vec<_>>().join(", ")
        }
    };
    let status_style = match trade.status {
        TradeStatus::Pending => Style::default().fg(Color::Yellow),
        TradeStatus::Completed | TradeStatus::Accepted => Style::default().fg(Color::Green),
        TradeStatus::Rejected | TradeStatus::Cancelled => Style::default().fg(Color::DarkGray),
    };
    ListItem::new(Line::from(vec![
        Span::raw(format!("{:>4}  ", trade.id)),
        Span::styled(format!("{:<10}", trade.status.as_str()), status_style),
        Span::raw(format!(
            "{} -> {}  offers [{}]  wants [{}]",
            trade.from_user.username,
            trade.to_user.username,
            names(&trade.offered_pokemons),
            names(&trade.requested_pokemons)
        )),
    ]))
}

fn stats_lines(stats: &CollectionStats) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::Gray);
    let mut lines = vec![
        Line::from(vec![Span::styled("cards      ", label), Span::raw(stats.total.to_string())]),
        Line::from(vec![
            Span::styled("favorites  ", label),
            Span::raw(stats.favorites.to_string()),
        ]),
        Line::from(vec![Span::styled("avg hp     ", label), Span::raw(stats.avg_hp.to_string())]),
        Line::from(vec![
            Span::styled("avg attack ", label),
            Span::raw(stats.avg_attack.to_string()),
        ]),
    ];
    if let Some(card) = &stats.strongest {
        lines.push(Line::from(vec![
            Span::styled("strongest  ", label),
            Span::raw(format!("{} ({})", card.name, card.total_stats())),
        ]));
    }
    if !stats.top_categories.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("top types", label)));
        for c in &stats.top_categories {
            lines.push(Line::from(format!("  {:<10} {}", c.category, c.count)));
        }
    }
    lines
}

fn render_list(frame: &mut Frame, area: Rect, title: String, items: Vec<ListItem<'static>>, selected: usize) {
    let empty = items.is_empty();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ListState::default();
    if !empty {
        state.select(Some(selected));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_collection(frame: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(28)])
        .split(area);

    let page = &app.page;
    let title = if page.total_pages == 0 {
        if app.collection.is_loaded() && app.collection.items().is_empty() {
            "Collection (empty: try find <name>)".to_string()
        } else {
            "Collection (no matches)".to_string()
        }
    } else {
        format!(
            "Collection  page {}/{}  {} shown of {}",
            page.page + 1,
            page.total_pages,
            page.total_elements,
            app.collection.total_count()
        )
    };
    let items = page.content.iter().map(card_item).collect();
    render_list(frame, cols[0], title, items, app.selected);

    let side = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(5)])
        .split(cols[1]);
    frame.render_widget(
        Paragraph::new(stats_lines(app.collection.stats()))
            .block(Block::default().borders(Borders::ALL).title("Stats")),
        side[0],
    );
    frame.render_widget(
        Paragraph::new(app.collection.criteria().summary())
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Filters")),
        side[1],
    );
}

fn render_search(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();
    match app.search.staged() {
        Some(entry) => {
            lines.push(Line::from(Span::styled(
                format!("#{} {}", entry.id, entry.name),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(format!(
                "generation {}  types {}",
                entry.generation,
                entry.types.join("/")
            )));
            lines.push(Line::from(format!(
                "hp {}  attack {}  defense {}  speed {}",
                entry.hp, entry.attack, entry.defense, entry.speed
            )));
            if app.wishlist.contains(entry.id) {
                lines.push(Line::from(Span::styled(
                    "on your wishlist",
                    Style::default().fg(Color::Magenta),
                )));
            }
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "enter or `add` puts it in your collection, `wish` keeps it for later",
                Style::default().fg(Color::Gray),
            )));
        }
        None => lines.push(Line::from(Span::styled(
            "find <name|number> looks up the catalog; random picks one",
            Style::default().fg(Color::Gray),
        ))),
    }
    let title = if app.search.query().is_empty() {
        "Catalog search".to_string()
    } else {
        format!("Catalog search: {}", app.search.query())
    };
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(title)),
        area,
    );
}

fn render_modal(frame: &mut Frame, area: Rect, prompt: String) {
    let width = (prompt.chars().count() as u16 + 4).min(area.width);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height / 2).saturating_sub(1),
        width,
        height: 3,
    };
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(prompt).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title("Confirm"),
        ),
        popup,
    );
}

pub(super) fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_height = (app.status.lines.len() as u16 + 1).min(area.height / 2).max(2);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(status_height),
            Constraint::Length(3),
        ])
        .split(area);

    // Header
    let busy = app.collection.in_flight().current().map(|op| op.to_string());
    let mut spans = vec![
        Span::styled(" Pokédeck ", Style::default().fg(Color::Black).bg(Color::Yellow)),
        Span::raw("  "),
        Span::styled(app.mode.title(), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(app.base_url.as_str(), Style::default().fg(Color::Gray)),
    ];
    if let Some(op) = busy {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(op, Style::default().fg(Color::Yellow)));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM)),
        chunks[0],
    );

    match app.mode {
        UiMode::Collection => render_collection(frame, chunks[1], app),
        UiMode::Favorites => {
            let items = app.favorites.cards().iter().map(card_item).collect();
            let title = format!("Favorites ({})", app.favorites.cards().len());
            render_list(frame, chunks[1], title, items, app.selected);
        }
        UiMode::Trades => {
            let items = app.trades.trades().iter().map(trade_item).collect();
            let title = format!("Trades ({} pending)", app.trades.pending().len());
            render_list(frame, chunks[1], title, items, app.selected);
        }
        UiMode::Search => render_search(frame, chunks[1], app),
    }

    let style = if app.status.error {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::White)
    };
    let lines: Vec<Line> = app
        .status
        .lines
        .iter()
        .map(|l| Line::from(Span::styled(l.as_str(), style)))
        .collect();
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::TOP)),
        chunks[2],
    );

    // Input, with matching command names in the title.
    let hint = completions(&app.input.buf)
        .iter()
        .map(|c| c.usage)
        .collect::<Vec<_>>()
        .join("  ");
    let title = if hint.is_empty() {
        "enter: favorite  del: remove  ←/→: page  esc: back  q: quit".to_string()
    } else {
        hint
    };
    frame.render_widget(
        Paragraph::new(format!("> {}", app.input.buf))
            .block(Block::default().borders(Borders::ALL).title(title)),
        chunks[3],
    );
    if app.modal.is_none() {
        let x = chunks[3].x + 3 + app.input.cursor as u16;
        frame.set_cursor_position((x.min(chunks[3].right().saturating_sub(2)), chunks[3].y + 1));
    }

    if let Some(modal) = &app.modal {
        render_modal(frame, area, modal.prompt());
    }
}
