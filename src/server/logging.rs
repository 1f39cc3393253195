use axum::{extract::Request, middleware::Next, response::Response};
use log::info;
use std::time::Instant;

/// Request logging middleware
pub async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    let start = Instant::now();

    let response = next.run(req).await;

    info!(
        "{} {} -> {} in {}ms",
        method,
        uri,
        response.status(),
        start.elapsed().as_millis()
    );

    response
}
