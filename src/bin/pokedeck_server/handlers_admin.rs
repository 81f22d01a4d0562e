use super::*;

const MAX_GENERATION: i64 = 9;

fn require_admin(subject: &Subject) -> Result<(), Response> {
    if subject.admin {
        Ok(())
    } else {
        Err(forbidden())
    }
}

fn admin_stats_of(db: &Db) -> AdminStats {
    let loaded = db.loaded.len();
    AdminStats {
        total_cards: loaded as u64,
        max_pokemon_id: db.loaded.iter().next_back().copied().unwrap_or(0),
        coverage: format!("{:.1}%", loaded as f64 * 100.0 / NATIONAL_DEX as f64),
    }
}

/// Marks `ids` as loaded. Numbers the server has no data for count as errors.
fn load_ids(state: &AppState, db: &mut Db, ids: impl IntoIterator<Item = i64>, what: &str) -> LoadResult {
    let (mut success, mut skipped, mut errors, mut total) = (0, 0, 0, 0);
    for id in ids {
        total += 1;
        if state.dataset_entry(id).is_none() {
            errors += 1;
        } else if db.loaded.insert(id) {
            success += 1;
        } else {
            skipped += 1;
        }
    }
    tracing::info!(what, success, skipped, errors, "catalog load");
    LoadResult {
        success,
        skipped,
        errors,
        total,
        message: format!(
            "{}: {} loaded, {} already present, {} unavailable",
            what, success, skipped, errors
        ),
    }
}

pub(super) async fn admin_stats(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
) -> Result<Json<AdminStats>, Response> {
    require_admin(&subject)?;
    let db = state.db.read().await;
    Ok(Json(admin_stats_of(&db)))
}

pub(super) async fn load_generation(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
    Path(generation): Path<i64>,
) -> Result<Json<LoadResult>, Response> {
    require_admin(&subject)?;
    if !(1..=MAX_GENERATION).contains(&generation) {
        return Err(bad_request(anyhow::anyhow!(
            "generation must be between 1 and {}",
            MAX_GENERATION
        )));
    }
    let ids: Vec<i64> = state
        .dataset
        .iter()
        .filter(|e| e.generation == generation)
        .map(|e| e.id)
        .collect();
    let mut db = state.db.write().await;
    Ok(Json(load_ids(
        &state,
        &mut db,
        ids,
        &format!("generation {}", generation),
    )))
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct RangeQuery {
    from: i64,
    to: i64,
}

pub(super) async fn load_range(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
    Query(q): Query<RangeQuery>,
) -> Result<Json<LoadResult>, Response> {
    require_admin(&subject)?;
    if q.from < 1 || q.to < q.from || q.to > NATIONAL_DEX as i64 {
        return Err(bad_request(anyhow::anyhow!(
            "range must satisfy 1 <= from <= to <= {}",
            NATIONAL_DEX
        )));
    }
    let mut db = state.db.write().await;
    Ok(Json(load_ids(
        &state,
        &mut db,
        q.from..=q.to,
        &format!("#{} to #{}", q.from, q.to),
    )))
}

pub(super) async fn load_all(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
) -> Result<Json<LoadResult>, Response> {
    require_admin(&subject)?;
    let ids: Vec<i64> = state.dataset.iter().map(|e| e.id).collect();
    let mut db = state.db.write().await;
    Ok(Json(load_ids(&state, &mut db, ids, "all")))
}
