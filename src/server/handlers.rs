use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Form, Json,
};
use log::warn;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use super::AppState;
use crate::error::INVALID_INPUT_MESSAGE;
use crate::model::SummaryResponse;

#[derive(Debug, Deserialize)]
pub struct SummarizePayload {
    #[serde(default)]
    pub url: String,
}

impl IntoResponse for SummaryResponse {
    fn into_response(self) -> Response {
        let status = match self {
            SummaryResponse::Summary { .. } => StatusCode::OK,
            SummaryResponse::Error { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

pub async fn summarize_json(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SummarizePayload>, JsonRejection>,
) -> SummaryResponse {
    match payload {
        Ok(Json(payload)) => state.summarizer.respond(&payload.url).await,
        Err(rejection) => {
            warn!("Unreadable summarize request: {}", rejection);
            SummaryResponse::Error {
                error: INVALID_INPUT_MESSAGE.to_string(),
            }
        }
    }
}

pub async fn summarize_form(
    State(state): State<Arc<AppState>>,
    payload: Result<Form<SummarizePayload>, FormRejection>,
) -> SummaryResponse {
    match payload {
        Ok(Form(payload)) => state.summarizer.respond(&payload.url).await,
        Err(rejection) => {
            warn!("Unreadable summarize form: {}", rejection);
            SummaryResponse::Error {
                error: INVALID_INPUT_MESSAGE.to_string(),
            }
        }
    }
}

pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
