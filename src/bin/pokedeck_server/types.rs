use super::*;

/// Authenticated caller, attached to the request by `require_bearer`.
#[derive(Clone, Debug)]
pub(crate) struct Subject {
    pub(crate) user_id: i64,
    pub(crate) username: String,
    pub(crate) admin: bool,
}

#[derive(Clone, Debug)]
pub(crate) struct UserRecord {
    pub(crate) id: i64,
    pub(crate) username: String,
    pub(crate) email: String,
    pub(crate) password_hash: String,
    pub(crate) admin: bool,
    pub(crate) created_at: String,
}

/// A card plus the user who owns it. The wire `Card` has no owner field.
#[derive(Clone, Debug)]
pub(crate) struct OwnedCard {
    pub(crate) owner: i64,
    pub(crate) card: Card,
}

#[derive(Clone, Debug)]
pub(crate) struct TradeRecord {
    pub(crate) id: i64,
    pub(crate) from_user: i64,
    pub(crate) to_user: i64,
    pub(crate) offered: Vec<Card>,
    pub(crate) requested: Vec<Card>,
    pub(crate) status: TradeStatus,
    pub(crate) created_at: String,
    pub(crate) updated_at: String,
}

#[derive(Debug, Default)]
pub(crate) struct Db {
    pub(crate) users: HashMap<i64, UserRecord>,
    // token hash -> user id
    pub(crate) tokens: HashMap<String, i64>,
    pub(crate) cards: Vec<OwnedCard>,
    pub(crate) trades: Vec<TradeRecord>,
    // catalog numbers currently loaded
    pub(crate) loaded: BTreeSet<i64>,
    pub(crate) next_user_id: i64,
    pub(crate) next_card_id: i64,
    pub(crate) next_trade_id: i64,
}

impl Db {
    pub(crate) fn cards_of(&self, owner: i64) -> impl Iterator<Item = &Card> {
        self.cards
            .iter()
            .filter(move |c| c.owner == owner)
            .map(|c| &c.card)
    }

    pub(crate) fn owned_card_mut(&mut self, owner: i64, id: i64) -> Option<&mut Card> {
        self.cards
            .iter_mut()
            .find(|c| c.owner == owner && c.card.id == id)
            .map(|c| &mut c.card)
    }

    pub(crate) fn owns_catalog_entry(&self, owner: i64, catalog_id: i64) -> bool {
        self.cards_of(owner).any(|c| c.poke_api_id == catalog_id)
    }

    pub(crate) fn insert_card(&mut self, owner: i64, mut card: Card) -> Card {
        self.next_card_id += 1;
        card.id = self.next_card_id;
        self.cards.push(OwnedCard {
            owner,
            card: card.clone(),
        });
        card
    }

    pub(crate) fn user_by_email(&self, email: &str) -> Option<&UserRecord> {
        self.users
            .values()
            .find(|u| u.email.eq_ignore_ascii_case(email))
    }
}

pub(crate) struct AppState {
    /// Every entry the server knows; `Db::loaded` says which are searchable.
    pub(crate) dataset: Vec<CatalogEntry>,
    pub(crate) db: RwLock<Db>,
}

impl AppState {
    pub(crate) fn dataset_entry(&self, catalog_id: i64) -> Option<&CatalogEntry> {
        self.dataset.iter().find(|e| e.id == catalog_id)
    }
}
