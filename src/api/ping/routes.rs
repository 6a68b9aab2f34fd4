// Ping route definitions

use axum::{routing::get, Router};

use crate::config::state::AppState;
use super::handler;

/// Creates router with the ping endpoint
pub fn ping_routes() -> Router<AppState> {
    Router::new()
        .route("/ping", get(handler::ping_handler))
}
