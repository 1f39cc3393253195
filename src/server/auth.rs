use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use log::warn;
use serde_json::json;
use std::sync::Arc;

use super::AppState;

/// Reject requests whose `Authorization` header is not `Bearer <secret>`.
///
/// Disabled when no secret is configured.
pub async fn require_bearer(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    if let Some(secret) = &state.api_secret_key {
        let expected = format!("Bearer {}", secret);
        let provided = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok());

        if provided != Some(expected.as_str()) {
            warn!("Rejected unauthenticated request to {}", req.uri());
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "success": false,
                    "message": "authentication failed"
                })),
            )
                .into_response();
        }
    }

    next.run(req).await
}
