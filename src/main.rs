// Start of file: src/main.rs

use ping_service::config::state::AppState;
use ping_service::core::{logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let state: AppState = AppState::from_env()?;

    server::run(state).await
}

// End of file: src/main.rs
