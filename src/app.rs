use crate::handlers;
use crate::state::AppState;
use axum::{routing::{delete, get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/entries", post(handlers::submit_form))
        .route("/entries/:id/delete", post(handlers::delete_form))
        .route("/api/log", get(handlers::get_log))
        .route("/api/entries", post(handlers::submit_entry))
        .route("/api/entries/:id", delete(handlers::delete_entry))
        .with_state(state)
}
