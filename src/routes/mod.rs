pub mod auth;
pub mod calendar;
pub mod history;
pub mod home;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::index))
        .route("/checkins", post(home::submit))
        .route("/history", get(history::page))
        .route("/calendar", get(calendar::page))
        .merge(auth::router())
        .with_state(state)
}
