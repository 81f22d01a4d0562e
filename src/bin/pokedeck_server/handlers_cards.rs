use std::cmp::Ordering;
use std::str::FromStr;

use pokedeck::view::{SortDirection, SortKey};

use super::*;

const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ListCardsQuery {
    #[serde(default)]
    page: u32,
    #[serde(default)]
    size: Option<u32>,
    #[serde(default)]
    sort_by: Option<String>,
    #[serde(default)]
    sort_dir: Option<String>,
}

/// `sortBy` value to a sort key; `addedAt` (the default) maps to `None`.
fn parse_sort_by(sort_by: Option<&str>) -> Result<Option<SortKey>> {
    match sort_by.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(None),
        Some(s) if s.eq_ignore_ascii_case("addedAt") => Ok(None),
        Some(s) => Ok(Some(SortKey::from_str(s)?)),
    }
}

fn compare_cards(key: Option<SortKey>, a: &Card, b: &Card) -> Ordering {
    match key {
        Some(key) => key.compare(a, b),
        None => a.added_at.cmp(&b.added_at).then(a.id.cmp(&b.id)),
    }
}

pub(super) async fn list_cards(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
    Query(q): Query<ListCardsQuery>,
) -> Result<Json<Page<Card>>, Response> {
    let key = parse_sort_by(q.sort_by.as_deref()).map_err(bad_request)?;
    let direction = match q.sort_dir.as_deref() {
        None => SortDirection::Desc,
        Some(d) => SortDirection::from_str(d).map_err(|e| bad_request(e.into()))?,
    };
    let size = q.size.unwrap_or(20).clamp(1, MAX_PAGE_SIZE);

    let db = state.db.read().await;
    let mut cards: Vec<Card> = db.cards_of(subject.user_id).cloned().collect();
    cards.sort_by(|a, b| direction.apply(compare_cards(key, a, b)));

    let total = cards.len();
    let total_pages = total.div_ceil(size as usize) as u32;
    let start = (q.page as usize).saturating_mul(size as usize).min(total);
    let end = (start + size as usize).min(total);

    Ok(Json(Page {
        content: cards[start..end].to_vec(),
        page: q.page,
        size,
        total_elements: total as u64,
        total_pages,
        first: q.page == 0,
        last: q.page.saturating_add(1) >= total_pages,
    }))
}

pub(super) async fn list_favorite_cards(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
) -> Json<Vec<Card>> {
    let db = state.db.read().await;
    let mut cards: Vec<Card> = db
        .cards_of(subject.user_id)
        .filter(|c| c.is_favorite)
        .cloned()
        .collect();
    cards.sort_by(|a, b| b.added_at.cmp(&a.added_at).then(b.id.cmp(&a.id)));
    Json(cards)
}

pub(super) async fn get_card(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
    Path(id): Path<i64>,
) -> Result<Json<Card>, Response> {
    let db = state.db.read().await;
    db.cards_of(subject.user_id)
        .find(|c| c.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("card"))
}

pub(super) async fn delete_card(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Response> {
    let mut db = state.db.write().await;
    let before = db.cards.len();
    db.cards
        .retain(|c| !(c.owner == subject.user_id && c.card.id == id));
    if db.cards.len() == before {
        return Err(not_found("card"));
    }
    tracing::info!(user = %subject.username, id, "card deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub(super) async fn toggle_favorite(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
    Path(id): Path<i64>,
) -> Result<Json<Card>, Response> {
    let mut db = state.db.write().await;
    let card = db
        .owned_card_mut(subject.user_id, id)
        .ok_or_else(|| not_found("card"))?;
    card.is_favorite = !card.is_favorite;
    Ok(Json(card.clone()))
}
