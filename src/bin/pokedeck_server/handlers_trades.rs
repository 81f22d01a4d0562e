use super::*;

fn trade_view(db: &Db, t: &TradeRecord) -> Option<Trade> {
    let from_user = db.users.get(&t.from_user)?;
    let to_user = db.users.get(&t.to_user)?;
    Some(Trade {
        id: t.id,
        from_user: user_view(db, from_user),
        to_user: user_view(db, to_user),
        offered_pokemons: t.offered.clone(),
        requested_pokemons: t.requested.clone(),
        status: t.status,
        created_at: t.created_at.clone(),
        updated_at: t.updated_at.clone(),
    })
}

fn trade_response(db: &Db, id: i64) -> Result<Json<Trade>, Response> {
    db.trades
        .iter()
        .find(|t| t.id == id)
        .and_then(|t| trade_view(db, t))
        .map(Json)
        .ok_or_else(|| internal_error(anyhow::anyhow!("trade {} vanished", id)))
}

/// Cards `owner` holds among `ids`, or an error naming the first missing one.
fn pick_cards(db: &Db, owner: i64, ids: &[i64]) -> Result<Vec<Card>> {
    ids.iter()
        .map(|id| {
            db.cards_of(owner)
                .find(|c| c.id == *id)
                .cloned()
                .with_context(|| format!("card {} is not owned by user {}", id, owner))
        })
        .collect()
}

pub(super) async fn list_trades(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
) -> Json<Vec<Trade>> {
    let db = state.db.read().await;
    let mut trades: Vec<Trade> = db
        .trades
        .iter()
        .filter(|t| t.from_user == subject.user_id || t.to_user == subject.user_id)
        .filter_map(|t| trade_view(&db, t))
        .collect();
    trades.sort_by(|a, b| b.id.cmp(&a.id));
    Json(trades)
}

pub(super) async fn create_trade(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
    Json(req): Json<TradeRequest>,
) -> Result<(StatusCode, Json<Trade>), Response> {
    if req.to_user_id == subject.user_id {
        return Err(bad_request(anyhow::anyhow!("cannot trade with yourself")));
    }
    if req.offered_pokemon_ids.is_empty() && req.requested_pokemon_ids.is_empty() {
        return Err(bad_request(anyhow::anyhow!("trade is empty")));
    }

    let mut db = state.db.write().await;
    if !db.users.contains_key(&req.to_user_id) {
        return Err(not_found("user"));
    }
    let offered =
        pick_cards(&db, subject.user_id, &req.offered_pokemon_ids).map_err(bad_request)?;
    let requested =
        pick_cards(&db, req.to_user_id, &req.requested_pokemon_ids).map_err(bad_request)?;

    db.next_trade_id += 1;
    let now = now_ts();
    let record = TradeRecord {
        id: db.next_trade_id,
        from_user: subject.user_id,
        to_user: req.to_user_id,
        offered,
        requested,
        status: TradeStatus::Pending,
        created_at: now.clone(),
        updated_at: now,
    };
    let id = record.id;
    db.trades.push(record);
    tracing::info!(id, from = %subject.username, to = req.to_user_id, "trade proposed");

    let Json(trade) = trade_response(&db, id)?;
    Ok((StatusCode::CREATED, Json(trade)))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Party {
    Sender,
    Recipient,
}

/// Locates a pending trade the subject may act on as `party`.
fn pending_trade_index(db: &Db, subject: &Subject, id: i64, party: Party) -> Result<usize, Response> {
    let Some(idx) = db.trades.iter().position(|t| t.id == id) else {
        return Err(not_found("trade"));
    };
    let t = &db.trades[idx];
    if t.from_user != subject.user_id && t.to_user != subject.user_id {
        return Err(not_found("trade"));
    }
    let allowed = match party {
        Party::Sender => t.from_user == subject.user_id,
        Party::Recipient => t.to_user == subject.user_id,
    };
    if !allowed {
        return Err(forbidden());
    }
    if t.status != TradeStatus::Pending {
        return Err(conflict(&format!("trade is already {}", t.status)));
    }
    Ok(idx)
}

fn settle(db: &mut Db, idx: usize, status: TradeStatus) {
    let t = &mut db.trades[idx];
    t.status = status;
    t.updated_at = now_ts();
}

pub(super) async fn accept_trade(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
    Path(id): Path<i64>,
) -> Result<Json<Trade>, Response> {
    let mut db = state.db.write().await;
    let idx = pending_trade_index(&db, &subject, id, Party::Recipient)?;
    let t = db.trades[idx].clone();

    let still_owned = t
        .offered
        .iter()
        .all(|c| db.cards_of(t.from_user).any(|o| o.id == c.id))
        && t
            .requested
            .iter()
            .all(|c| db.cards_of(t.to_user).any(|o| o.id == c.id));
    if !still_owned {
        return Err(conflict("cards in this trade changed hands"));
    }

    for owned in db.cards.iter_mut() {
        let moving_out = owned.owner == t.from_user && t.offered.iter().any(|c| c.id == owned.card.id);
        let moving_in = owned.owner == t.to_user && t.requested.iter().any(|c| c.id == owned.card.id);
        if moving_out {
            owned.owner = t.to_user;
            owned.card.is_favorite = false;
        } else if moving_in {
            owned.owner = t.from_user;
            owned.card.is_favorite = false;
        }
    }
    settle(&mut db, idx, TradeStatus::Completed);
    tracing::info!(id, by = %subject.username, "trade completed");
    trade_response(&db, id)
}

pub(super) async fn reject_trade(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
    Path(id): Path<i64>,
) -> Result<Json<Trade>, Response> {
    let mut db = state.db.write().await;
    let idx = pending_trade_index(&db, &subject, id, Party::Recipient)?;
    settle(&mut db, idx, TradeStatus::Rejected);
    tracing::info!(id, by = %subject.username, "trade rejected");
    trade_response(&db, id)
}

pub(super) async fn cancel_trade(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
    Path(id): Path<i64>,
) -> Result<Json<Trade>, Response> {
    let mut db = state.db.write().await;
    let idx = pending_trade_index(&db, &subject, id, Party::Sender)?;
    settle(&mut db, idx, TradeStatus::Cancelled);
    tracing::info!(id, by = %subject.username, "trade cancelled");
    trade_response(&db, id)
}
