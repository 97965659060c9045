use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/ticks/add", post(handlers::add_tick_form))
        .route("/api/ticks", get(handlers::list_ticks).post(handlers::add_tick))
        .route("/api/disciplines", get(handlers::get_disciplines))
        .route("/api/activity", get(handlers::get_activity))
        .with_state(state)
}
