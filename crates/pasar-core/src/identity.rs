//! Gateway-injected identity header extractor.

use axum::extract::FromRequestParts;
use http::StatusCode;
use http::request::Parts;
use uuid::Uuid;

/// Caller identity injected by the gateway via the `x-pasar-user-id` header.
///
/// Returns 401 if the header is absent or cannot be parsed as UUID, so
/// anonymous callers never reach a handler body. Whether the account still
/// exists, and what it may do, is resolved against the store by the caller
/// gate after extraction.
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
}

impl<S> FromRequestParts<S> for Identity
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    // axum-core 0.5 declares this as `fn -> impl Future + Send`, and an
    // `async fn` here trips E0195 under precise capturing. Read the header
    // synchronously and return a 'static async move block instead.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let user_id = parts
            .headers
            .get("x-pasar-user-id")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse::<Uuid>().ok());

        async move {
            let user_id = user_id.ok_or(StatusCode::UNAUTHORIZED)?;
            Ok(Self { user_id })
        }
    }
}
