use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;

use crate::constants::API_PREFIX;

/// Only API calls are logged; health probes and docs stay quiet.
fn should_log_request(path: &str) -> bool {
    path == API_PREFIX || path.starts_with(&format!("{}/", API_PREFIX))
}

/// Log `METHOD path status in Nms` for every API request.
pub async fn request_log_middleware(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = Instant::now();

    let response = next.run(req).await;

    if should_log_request(&path) {
        let duration_ms = start.elapsed().as_millis() as u64;
        let status = response.status().as_u16();
        tracing::info!(
            method = %method,
            path = %path,
            status,
            duration_ms,
            "{} {} {} in {}ms",
            method,
            path,
            status,
            duration_ms
        );
    }

    response
}
