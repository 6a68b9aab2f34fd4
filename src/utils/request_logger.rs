// Start of file: /src/utils/request_logger.rs

use std::time::{Duration, Instant};
use std::convert::Infallible;
use axum::{
    body::Body,
    http::{Method, Request},
    middleware::Next,
    response::Response,
};
use tracing::info;

/// Logs one line per completed request; the response passes through untouched.
pub async fn request_logger(
    req: Request<Body>,
    next: Next,
) -> Result<Response, Infallible> {
    let start: Instant = Instant::now();
    let method: Method = req.method().clone();
    let path: String = req.uri().path().to_owned();

    // Pass the request down the chain
    let response: Response = next.run(req).await;
    let elapsed: Duration = start.elapsed();

    info!(
        %method,
        %path,
        status = response.status().as_u16(),
        ?elapsed,
        "Request completed"
    );

    Ok(response)
}


// End of file: /src/utils/request_logger.rs
