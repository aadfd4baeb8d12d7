//! Static-token authorization gate.

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use customers_core::auth::authorize;

use crate::error::AppResult;
use crate::state::AppState;

/// Compare the `Authorization` header against `config.auth_token`.
///
/// Installed with `axum::middleware::from_fn_with_state` ahead of routing, so
/// a rejected request never reaches an extractor, handler or the pool.
pub async fn require_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> AppResult<Response> {
    let provided = request
        .headers()
        .get(AUTHORIZATION)
        .map(HeaderValue::as_bytes);

    if let Err(err) = authorize(provided, &state.config.auth_token) {
        tracing::warn!(
            method = %request.method(),
            uri = %request.uri(),
            "Rejected request with missing or invalid Authorization header"
        );
        return Err(err.into());
    }

    Ok(next.run(request).await)
}
