use crate::app::state::AppState;
use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

pub const AUTH_FAILED_BODY: &str = "Authentication failed";

/// Rejects any request whose `Authorization` header is not exactly the shared secret.
pub async fn require_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let expected = state.config.authorization_token.as_bytes();
    let provided = request.headers().get(AUTHORIZATION).map(|v| v.as_bytes());

    if provided != Some(expected) {
        tracing::warn!("Rejected {} {}", request.method(), request.uri().path());
        return (StatusCode::UNAUTHORIZED, AUTH_FAILED_BODY).into_response();
    }

    next.run(request).await
}
