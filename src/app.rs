use crate::handlers;
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/view/:mode", post(handlers::switch_view))
        .route("/api/plan", get(handlers::get_plan))
        .route("/api/today", get(handlers::get_today))
        .route("/api/toggle", post(handlers::toggle_task))
        .route("/api/notes", post(handlers::set_notes))
        .route("/api/view", post(handlers::set_view))
        .with_state(state)
}
