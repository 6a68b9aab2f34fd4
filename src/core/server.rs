// Application server configuration and setup

use std::time::Duration;
use axum::{
    Router,
    middleware::from_fn,
    extract::DefaultBodyLimit,
    error_handling::HandleErrorLayer,
    serve,
};
use tower::{ServiceBuilder, timeout::TimeoutLayer};
use tokio::{signal, net::TcpListener};
use listenfd::ListenFd;
use anyhow::Result;
use tracing::{debug, info};

use crate::api::ping::ping_routes;
use crate::config::environment::EnvironmentVariables;
use crate::config::state::AppState;
use crate::utils::{
    error_handler::handle_global_error,
    request_logger::request_logger,
};

/// Creates the application router with all middleware layers
pub fn create_app(state: AppState) -> Router {
    let env: &EnvironmentVariables = &state.environment;

    let router: Router<AppState> = Router::new()
        // Add new routes here
        .merge(ping_routes());

    apply_global_layers(router, env).with_state(state)
}

/// Wraps a router in the shared stack: logging, error mapping, timeout, body limit
pub fn apply_global_layers<S>(router: Router<S>, env: &EnvironmentVariables) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(
        ServiceBuilder::new()
            .layer(from_fn(request_logger))
            .layer(HandleErrorLayer::new(handle_global_error))
            .layer(TimeoutLayer::new(Duration::from_secs(env.default_timeout_seconds)))
            .layer(DefaultBodyLimit::max(env.max_request_body_size)),
    )
}

/// Sets up the TCP listener from environment or binds to new address
pub async fn setup_listener(env: &EnvironmentVariables) -> Result<TcpListener> {
    let mut listenfd: ListenFd = ListenFd::from_env();

    let listener: TcpListener = match listenfd.take_tcp_listener(0)? {
        Some(std_listener) => {
            std_listener.set_nonblocking(true)?;
            TcpListener::from_std(std_listener)?
        }
        None => TcpListener::bind(env.bind_address()).await?,
    };

    Ok(listener)
}

/// Binds the listener and serves until a shutdown signal arrives
pub async fn run(state: AppState) -> Result<()> {
    if !state.environment.is_production() {
        debug!("Loaded environment configuration: {:#?}", state.environment);
    }

    let listener: TcpListener = setup_listener(&state.environment).await?;

    info!(
        environment = %state.environment.environment,
        "Server listening on: {}://{}",
        state.environment.protocol,
        listener.local_addr()?
    );

    serve(listener, create_app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Handles graceful shutdown signals (Ctrl+C and TERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Terminate signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Shutting down via Ctrl+C"),
        _ = terminate => info!("Shutting down via TERM signal"),
    }
}
