use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/check", post(handlers::check))
        .route("/api/chart", get(handlers::chart_frame))
        .route("/api/points", get(handlers::get_points))
        .fallback(get(handlers::index))
        .with_state(state)
}
