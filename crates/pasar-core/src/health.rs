use axum::http::StatusCode;

/// Liveness probe, mounted at `GET /healthz`.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Readiness probe, mounted at `GET /readyz`. Services with real warm-up
/// should mount their own handler instead.
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
