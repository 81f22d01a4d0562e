use super::*;

pub(super) fn now_ts() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "<time>".to_string())
}

/// Passwords and bearer tokens are only ever stored hashed.
pub(super) fn hash_secret(secret: &str) -> String {
    blake3::hash(secret.as_bytes()).to_hex().to_string()
}

fn mint_token_secret() -> Result<String> {
    let mut bytes = [0u8; 32];
    getrandom::getrandom(&mut bytes).map_err(|e| anyhow::anyhow!("getrandom: {:?}", e))?;
    Ok(bytes.iter().map(|b| format!("{:02x}", b)).collect())
}

pub(super) async fn require_bearer(
    State(state): State<Arc<AppState>>,
    mut req: axum::extract::Request,
    next: Next,
) -> Response {
    let Some(value) = req.headers().get(header::AUTHORIZATION) else {
        return unauthorized();
    };
    let Ok(value) = value.to_str() else {
        return unauthorized();
    };
    let Some(token) = value.strip_prefix("Bearer ") else {
        return unauthorized();
    };

    let subject = {
        let db = state.db.read().await;
        let Some(user_id) = db.tokens.get(&hash_secret(token.trim())).copied() else {
            return unauthorized();
        };
        let Some(user) = db.users.get(&user_id) else {
            return unauthorized();
        };
        Subject {
            user_id: user.id,
            username: user.username.clone(),
            admin: user.admin,
        }
    };

    req.extensions_mut().insert(subject);
    next.run(req).await
}

pub(super) async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Per-user figures derived from the current database.
fn user_stats(db: &Db, user_id: i64) -> UserStats {
    let owned: Vec<&Card> = db.cards_of(user_id).collect();
    let distinct: BTreeSet<i64> = owned.iter().map(|c| c.poke_api_id).collect();
    let involved = db
        .trades
        .iter()
        .filter(|t| t.from_user == user_id || t.to_user == user_id);
    let (mut total, mut ok, mut failed) = (0, 0, 0);
    for t in involved {
        total += 1;
        match t.status {
            TradeStatus::Completed | TradeStatus::Accepted => ok += 1,
            TradeStatus::Rejected | TradeStatus::Cancelled => failed += 1,
            TradeStatus::Pending => {}
        }
    }
    let completion = distinct.len() as f64 * 100.0 / NATIONAL_DEX as f64;

    UserStats {
        total_pokemons: owned.len() as u64,
        total_trades: total,
        successful_trades: ok,
        failed_trades: failed,
        favorite_count: owned.iter().filter(|c| c.is_favorite).count() as u64,
        wishlist_count: 0,
        rank: rank_of(db, user_id),
        completion_percentage: (completion * 10.0).round() / 10.0,
    }
}

/// Users ordered by collection size, ties broken by id.
fn ranking(db: &Db) -> Vec<i64> {
    let mut ids: Vec<(i64, usize)> = db
        .users
        .keys()
        .map(|id| (*id, db.cards_of(*id).count()))
        .collect();
    ids.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ids.into_iter().map(|(id, _)| id).collect()
}

fn rank_of(db: &Db, user_id: i64) -> u32 {
    ranking(db)
        .iter()
        .position(|id| *id == user_id)
        .map(|p| p as u32 + 1)
        .unwrap_or(0)
}

pub(super) fn user_view(db: &Db, user: &UserRecord) -> User {
    User {
        id: user.id,
        username: user.username.clone(),
        email: user.email.clone(),
        avatar: String::new(),
        badges: Vec::new(),
        stats: user_stats(db, user.id),
        created_at: user.created_at.clone(),
    }
}

fn issue_token(db: &mut Db, user_id: i64) -> Result<String, Response> {
    let secret = mint_token_secret().map_err(internal_error)?;
    db.tokens.insert(hash_secret(&secret), user_id);
    Ok(secret)
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct LoginPayload {
    email: String,
    password: String,
}

pub(super) async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<AuthResponse>, Response> {
    let mut db = state.db.write().await;
    let Some(user) = db.user_by_email(payload.email.trim()).cloned() else {
        return Err(unauthorized());
    };
    if user.password_hash != hash_secret(&payload.password) {
        return Err(unauthorized());
    }
    let token = issue_token(&mut db, user.id)?;
    tracing::info!(user = %user.username, "login");
    Ok(Json(AuthResponse {
        token,
        user: user_view(&db, &user),
    }))
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct RegisterPayload {
    username: String,
    email: String,
    password: String,
}

pub(super) async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterPayload>,
) -> Result<(StatusCode, Json<AuthResponse>), Response> {
    let username = payload.username.trim().to_string();
    let email = payload.email.trim().to_string();
    if username.is_empty() || !email.contains('@') {
        return Err(bad_request(anyhow::anyhow!(
            "username and a valid email are required"
        )));
    }
    if payload.password.len() < 4 {
        return Err(bad_request(anyhow::anyhow!(
            "password must be at least 4 characters"
        )));
    }

    let mut db = state.db.write().await;
    if db.user_by_email(&email).is_some()
        || db
            .users
            .values()
            .any(|u| u.username.eq_ignore_ascii_case(&username))
    {
        return Err(conflict("username or email already registered"));
    }

    db.next_user_id += 1;
    let user = UserRecord {
        id: db.next_user_id,
        username,
        email,
        password_hash: hash_secret(&payload.password),
        admin: false,
        created_at: now_ts(),
    };
    db.users.insert(user.id, user.clone());
    let token = issue_token(&mut db, user.id)?;
    tracing::info!(user = %user.username, "registered");
    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user_view(&db, &user),
        }),
    ))
}

pub(super) async fn me(
    State(state): State<Arc<AppState>>,
    Extension(subject): Extension<Subject>,
) -> Result<Json<User>, Response> {
    let db = state.db.read().await;
    let user = db.users.get(&subject.user_id).ok_or_else(unauthorized)?;
    Ok(Json(user_view(&db, user)))
}

pub(super) async fn leaderboard(State(state): State<Arc<AppState>>) -> Json<Vec<User>> {
    let db = state.db.read().await;
    let users = ranking(&db)
        .into_iter()
        .filter_map(|id| db.users.get(&id))
        .map(|u| user_view(&db, u))
        .collect();
    Json(users)
}
