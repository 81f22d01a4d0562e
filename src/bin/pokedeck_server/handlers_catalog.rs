use super::*;

#[derive(Debug, serde::Deserialize)]
pub(super) struct CatalogSearchQuery {
    #[serde(default)]
    name: String,
}

pub(super) async fn catalog_by_id(
    State(state): State<Arc<AppState>>,
    Path(catalog_id): Path<i64>,
) -> Result<Json<CatalogEntry>, Response> {
    let db = state.db.read().await;
    if !db.loaded.contains(&catalog_id) {
        return Err(not_found("pokemon"));
    }
    state
        .dataset_entry(catalog_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("pokemon"))
}

pub(super) async fn catalog_search(
    State(state): State<Arc<AppState>>,
    Query(q): Query<CatalogSearchQuery>,
) -> Result<Json<CatalogEntry>, Response> {
    let name = q.name.trim().to_lowercase();
    if name.is_empty() {
        return Err(bad_request(anyhow::anyhow!("name is required")));
    }
    let db = state.db.read().await;
    state
        .dataset
        .iter()
        .find(|e| e.name == name && db.loaded.contains(&e.id))
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found("pokemon"))
}

pub(super) async fn catalog_add(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
    Path(catalog_id): Path<i64>,
) -> Result<(StatusCode, Json<Card>), Response> {
    let mut db = state.db.write().await;
    let entry = match state.dataset_entry(catalog_id) {
        Some(entry) if db.loaded.contains(&catalog_id) => entry,
        _ => return Err(not_found("pokemon")),
    };
    if db.owns_catalog_entry(subject.user_id, catalog_id) {
        return Err(conflict("Pokemon already in collection"));
    }
    let card = db.insert_card(subject.user_id, card_from_entry(entry, now_ts()));
    tracing::info!(user = %subject.username, card = card.id, name = %card.name, "card added");
    Ok((StatusCode::CREATED, Json(card)))
}
