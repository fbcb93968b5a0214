use std::time::Instant;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

/// The wizard session a request path addresses, if any.
pub fn session_id(path: &str) -> Option<Uuid> {
    let mut segments = path.trim_start_matches('/').split('/');
    match (segments.next(), segments.next()) {
        (Some("wizards"), Some(id)) => id.parse().ok(),
        _ => None,
    }
}

/// One structured event per request, tagged with the wizard session when
/// the path names one.
pub async fn access_log(req: Request, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let session = session_id(&path);

    let response = next.run(req).await;

    let status = response.status().as_u16();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    match session {
        Some(session) => tracing::info!(%method, %path, status, elapsed_ms, %session, "wizard_request"),
        None => tracing::info!(%method, %path, status, elapsed_ms, "api_request"),
    }

    response
}
