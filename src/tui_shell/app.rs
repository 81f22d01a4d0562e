use crate::model::{Card, Page};
use crate::remote::{CardBackend, CatalogBackend, TradeBackend};
use crate::session::{
    CollectionSession, Confirmation, DisplayState, FavoritesList, SearchFlow, SessionError,
    TradeBoard, Wishlist,
};

use super::input::Input;
use super::{COMMANDS, TuiCommand, commands};

/// Everything the shell talks to. `RemoteClient` in the binary, an in-memory
/// fake in tests.
pub(super) trait Backend: CardBackend + CatalogBackend + TradeBackend {}

impl<T: CardBackend + CatalogBackend + TradeBackend> Backend for T {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum UiMode {
    Collection,
    Favorites,
    Search,
    Trades,
}

impl UiMode {
    pub(super) fn title(self) -> &'static str {
        match self {
            UiMode::Collection => "Collection",
            UiMode::Favorites => "Favorites",
            UiMode::Search => "Catalog search",
            UiMode::Trades => "Trades",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) enum Modal {
    ConfirmDelete { id: i64, name: String },
}

impl Modal {
    pub(super) fn prompt(&self) -> String {
        match self {
            Modal::ConfirmDelete { id, name } => {
                format!("Remove {} (card {}) from your collection? [y/N]", name, id)
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(super) struct StatusLine {
    pub(super) lines: Vec<String>,
    pub(super) error: bool,
}

impl StatusLine {
    fn info(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            error: false,
        }
    }

    fn error(line: impl Into<String>) -> Self {
        Self {
            lines: vec![line.into()],
            error: true,
        }
    }

    /// Status after a session call: the session's own message when it set
    /// one, else the error itself.
    fn from_outcome<T>(res: &Result<T, SessionError>, display: &DisplayState, ok: &str) -> Self {
        match res {
            Ok(_) => Self::info(display.notice.clone().unwrap_or_else(|| ok.to_string())),
            Err(err) if err.is_busy() => Self::error(err.to_string()),
            Err(err) => Self::error(display.error.clone().unwrap_or_else(|| err.to_string())),
        }
    }
}

pub(super) struct App {
    pub(super) mode: UiMode,
    pub(super) collection: CollectionSession,
    pub(super) favorites: FavoritesList,
    pub(super) search: SearchFlow,
    pub(super) trades: TradeBoard,
    pub(super) wishlist: Wishlist,
    pub(super) page: Page<Card>,
    pub(super) selected: usize,
    pub(super) input: Input,
    pub(super) modal: Option<Modal>,
    pub(super) status: StatusLine,
    pub(super) base_url: String,
    pub(super) quit: bool,
}

impl App {
    pub(super) fn new(page_size: u32, base_url: &str) -> Self {
        Self {
            mode: UiMode::Collection,
            collection: CollectionSession::new(page_size),
            favorites: FavoritesList::default(),
            search: SearchFlow::default(),
            trades: TradeBoard::default(),
            wishlist: Wishlist::default(),
            page: Page::empty(page_size),
            selected: 0,
            input: Input::default(),
            modal: None,
            status: StatusLine::info("type help for commands"),
            base_url: base_url.to_string(),
            quit: false,
        }
    }

    /// Rows the list in the current mode shows.
    pub(super) fn row_count(&self) -> usize {
        match self.mode {
            UiMode::Collection => self.page.content.len(),
            UiMode::Favorites => self.favorites.cards().len(),
            UiMode::Trades => self.trades.trades().len(),
            UiMode::Search => 0,
        }
    }

    pub(super) fn selected_card(&self) -> Option<&Card> {
        match self.mode {
            UiMode::Collection => self.page.content.get(self.selected),
            UiMode::Favorites => self.favorites.cards().get(self.selected),
            _ => None,
        }
    }

    pub(super) fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub(super) fn move_down(&mut self) {
        if self.selected + 1 < self.row_count() {
            self.selected += 1;
        }
    }

    /// Recomputes the visible page after anything that touched the
    /// collection or its criteria.
    fn refresh_page(&mut self) {
        self.page = self.collection.current_page();
        self.selected = self.selected.min(self.row_count().saturating_sub(1));
    }

    pub(super) fn start<B: Backend>(&mut self, backend: &B) {
        let res = self.collection.load(backend);
        self.status = StatusLine::from_outcome(&res, self.collection.display(), "collection loaded");
        self.refresh_page();
    }

    pub(super) fn next_page(&mut self) {
        if self.collection.next_page() {
            self.refresh_page();
        }
    }

    pub(super) fn prev_page(&mut self) {
        if self.collection.prev_page() {
            self.refresh_page();
        }
    }

    pub(super) fn run_line<B: Backend>(&mut self, backend: &B, line: &str) {
        match commands::parse(line) {
            Ok(cmd) => self.apply(backend, cmd),
            Err(msg) => self.status = StatusLine::error(msg),
        }
    }

    /// Enter on an empty line: favorite the highlighted card, or add the
    /// staged catalog entry on the search screen.
    pub(super) fn default_action<B: Backend>(&mut self, backend: &B) {
        match self.mode {
            UiMode::Search => self.apply(backend, TuiCommand::Add),
            _ => {
                if let Some(id) = self.selected_card().map(|c| c.id) {
                    self.apply(backend, TuiCommand::Favorite(id));
                }
            }
        }
    }

    /// Opens the delete prompt for the highlighted card.
    pub(super) fn request_delete_selected(&mut self) {
        if let Some(card) = self.selected_card() {
            self.modal = Some(Modal::ConfirmDelete {
                id: card.id,
                name: card.name.clone(),
            });
        }
    }

    pub(super) fn apply<B: Backend>(&mut self, backend: &B, cmd: TuiCommand) {
        match cmd {
            TuiCommand::Filter(term) => {
                self.collection.update_criteria(|c| c.search_term = term);
                self.after_criteria_change();
            }
            TuiCommand::Category(category) => {
                self.collection.update_criteria(|c| c.category = category);
                self.after_criteria_change();
            }
            TuiCommand::Rarity(rarity) => {
                self.collection.update_criteria(|c| c.rarity = rarity);
                self.after_criteria_change();
            }
            TuiCommand::FavoritesOnly => {
                self.collection
                    .update_criteria(|c| c.favorites_only = !c.favorites_only);
                self.after_criteria_change();
            }
            TuiCommand::Sort(key, direction) => {
                self.collection.update_criteria(|c| {
                    c.sort_key = key;
                    if let Some(d) = direction {
                        c.direction = d;
                    }
                });
                self.after_criteria_change();
            }
            TuiCommand::Reverse => {
                self.collection.update_criteria(|c| c.toggle_direction());
                self.after_criteria_change();
            }
            TuiCommand::Reset => {
                self.collection.reset_filters();
                self.after_criteria_change();
            }
            TuiCommand::Page(n) => {
                self.mode = UiMode::Collection;
                if self.collection.go_to_page(n - 1) {
                    self.selected = 0;
                    self.refresh_page();
                } else {
                    self.status = StatusLine::error(format!("there is no page {}", n));
                }
            }
            TuiCommand::Favorite(id) => self.toggle_favorite(backend, id),
            TuiCommand::Delete(id) => match self.collection.find(id) {
                Some(card) => {
                    self.modal = Some(Modal::ConfirmDelete {
                        id,
                        name: card.name.clone(),
                    })
                }
                None => self.status = StatusLine::error(format!("card {} is not in the collection", id)),
            },
            TuiCommand::Find(query) => {
                self.mode = UiMode::Search;
                let res = self.search.search(backend, &query);
                self.status = StatusLine::from_outcome(&res, self.search.display(), "enter or add to keep it");
            }
            TuiCommand::Random => match SearchFlow::random_catalog_id() {
                Ok(id) => self.apply(backend, TuiCommand::Find(id.to_string())),
                Err(err) => self.status = StatusLine::error(err.to_string()),
            },
            TuiCommand::Add => {
                let res = self.search.add(backend);
                self.status = StatusLine::from_outcome(&res, self.search.display(), "added");
                if let Ok(card) = res {
                    self.collection.absorb_added(card);
                    self.refresh_page();
                }
            }
            TuiCommand::Wish(id) => match id.or_else(|| self.search.staged().map(|e| e.id)) {
                Some(id) => {
                    let listed = self.wishlist.toggle(id);
                    self.status = StatusLine::info(if listed {
                        format!("#{} is on your wishlist", id)
                    } else {
                        format!("#{} is off your wishlist", id)
                    });
                }
                None => self.status = StatusLine::error("find an entry first, or give a catalog number"),
            },
            TuiCommand::Wishlist => {
                self.status = if self.wishlist.ids().is_empty() {
                    StatusLine::info("your wishlist is empty")
                } else {
                    let ids: Vec<String> = self.wishlist.ids().iter().map(|id| format!("#{}", id)).collect();
                    StatusLine::info(format!("wishlist: {}", ids.join(", ")))
                };
            }
            TuiCommand::Show(mode) => self.show(backend, mode),
            TuiCommand::Accept(id) => {
                let res = self.trades.accept(backend, id);
                self.status = StatusLine::from_outcome(&res, self.trades.display(), "trade accepted");
                if res.is_ok() {
                    // Cards changed hands; the owned set is stale.
                    let reload = self.collection.load(backend);
                    if reload.is_err() {
                        let failed = StatusLine::from_outcome(&reload, self.collection.display(), "");
                        self.status.lines.extend(failed.lines);
                        self.status.error = true;
                    }
                    self.refresh_page();
                }
            }
            TuiCommand::Reject(id) => {
                let res = self.trades.reject(backend, id);
                self.status = StatusLine::from_outcome(&res, self.trades.display(), "trade rejected");
            }
            TuiCommand::Cancel(id) => {
                let res = self.trades.cancel(backend, id);
                self.status = StatusLine::from_outcome(&res, self.trades.display(), "trade cancelled");
            }
            TuiCommand::Reload => self.show(backend, self.mode),
            TuiCommand::Help => {
                self.status = StatusLine {
                    lines: COMMANDS
                        .iter()
                        .map(|c| format!("{:<22} {}", c.usage, c.help))
                        .collect(),
                    error: false,
                }
            }
            TuiCommand::Quit => self.quit = true,
        }
    }

    fn after_criteria_change(&mut self) {
        self.mode = UiMode::Collection;
        self.selected = 0;
        self.refresh_page();
        self.status = StatusLine::info(format!(
            "{} of {} cards  {}",
            self.collection.view().len(),
            self.collection.items().len(),
            self.collection.criteria().summary()
        ));
    }

    fn show<B: Backend>(&mut self, backend: &B, mode: UiMode) {
        self.mode = mode;
        self.selected = 0;
        match mode {
            UiMode::Collection => {
                let res = self.collection.load(backend);
                self.status = StatusLine::from_outcome(&res, self.collection.display(), "collection loaded");
                self.refresh_page();
            }
            UiMode::Favorites => {
                let res = self.favorites.load(backend);
                self.status = StatusLine::from_outcome(&res, self.favorites.display(), "favorites loaded");
            }
            UiMode::Trades => {
                let res = self.trades.load(backend);
                let pending = self.trades.pending().len();
                self.status = StatusLine::from_outcome(
                    &res,
                    self.trades.display(),
                    &format!("{} pending", pending),
                );
            }
            UiMode::Search => {}
        }
    }

    fn toggle_favorite<B: Backend>(&mut self, backend: &B, id: i64) {
        let res = self.collection.toggle_favorite(backend, id);
        let updated = match res {
            Ok(updated) => updated,
            Err(err) => {
                self.status = StatusLine::from_outcome::<()>(&Err(err), self.collection.display(), "");
                return;
            }
        };
        self.status = StatusLine::info(if updated.is_favorite {
            format!("{} is now a favorite", updated.name)
        } else {
            format!("{} is no longer a favorite", updated.name)
        });
        self.favorites.reconcile(updated);
        self.refresh_page();
    }

    /// Resolves the open delete prompt.
    pub(super) fn confirm<B: Backend>(&mut self, backend: &B, answer: Confirmation) {
        let Some(Modal::ConfirmDelete { id, .. }) = self.modal.take() else {
            return;
        };
        if answer == Confirmation::Declined {
            self.status = StatusLine::info("kept");
            return;
        }
        let res = self.collection.delete(backend, id, answer);
        self.status = StatusLine::from_outcome(&res, self.collection.display(), "removed");
        if res.is_ok() {
            self.favorites.forget(id);
            self.refresh_page();
        }
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;
