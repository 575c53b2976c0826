use axum::routing::{get, post};
use axum::Router;

use crate::auth::handlers;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth", get(handlers::auth_page))
        .route("/auth/signin", post(handlers::signin))
        .route("/auth/signup", post(handlers::signup))
        .route("/auth/signout", post(handlers::signout))
}
