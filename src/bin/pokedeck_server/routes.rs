//! Route table for the development server.

use super::*;

fn authed_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/auth/me", get(me))
        .route("/api/cards", get(list_cards))
        .route("/api/cards/favorites", get(list_favorite_cards))
        .route("/api/cards/:id", get(get_card).delete(delete_card))
        .route("/api/cards/:id/favorite", patch(toggle_favorite))
        .route("/api/pokeapi/pokemon/search", get(catalog_search))
        .route("/api/pokeapi/pokemon/:id", get(catalog_by_id))
        .route("/api/pokeapi/pokemon/:id/add", post(catalog_add))
        .route("/api/trades", get(list_trades).post(create_trade))
        .route("/api/trades/:id", axum::routing::delete(cancel_trade))
        .route("/api/trades/:id/accept", patch(accept_trade))
        .route("/api/trades/:id/reject", patch(reject_trade))
        .route("/api/admin/stats", get(admin_stats))
        .route("/api/admin/load-generation/:generation", post(load_generation))
        .route("/api/admin/load-range", post(load_range))
        .route("/api/admin/load-all", post(load_all))
}

pub(super) fn build_router(state: Arc<AppState>) -> Router {
    let authed = authed_routes().layer(middleware::from_fn_with_state(
        state.clone(),
        require_bearer,
    ));

    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/auth/login", post(login))
        .route("/api/auth/register", post(register))
        .route("/api/users/leaderboard", get(leaderboard))
        .merge(authed)
        .with_state(state)
}
