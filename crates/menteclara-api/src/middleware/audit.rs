use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Request logging middleware.
///
/// Emits one structured event per request. Store mutations carry their own
/// audit events with the acting account.
pub async fn audit_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    if response.status().is_server_error() {
        tracing::error!(method = %method, path = %path, status, elapsed_ms, "api_request");
    } else {
        tracing::info!(method = %method, path = %path, status, elapsed_ms, "api_request");
    }

    response
}
