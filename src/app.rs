use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/rollover", post(handlers::rollover_form))
        .route("/api/session", get(handlers::get_session))
        .route("/api/history", get(handlers::get_history))
        .route("/api/food", post(handlers::select_food))
        .route("/api/food/remove", post(handlers::remove_food))
        .route("/api/rollover", post(handlers::rollover))
        .with_state(state)
}
