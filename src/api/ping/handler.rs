// Ping controller: delegates straight to the injected service

use axum::{extract::State, http::StatusCode};
use tracing::{debug, instrument};

use crate::config::state::AppState;

/// GET /ping -> 200 "pong" as text/plain
#[instrument(skip(state))]
pub async fn ping_handler(State(state): State<AppState>) -> (StatusCode, &'static str) {
    let pong: &'static str = state.ping_service.get_pong();
    debug!("Ping endpoint answered with {pong}");

    (StatusCode::OK, pong)
}
