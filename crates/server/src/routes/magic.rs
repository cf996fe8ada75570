use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    response::Json,
    routing::post,
};
use chrono::Utc;
use db::models::generation_log::{CreateGenerationLog, GenerationLog, GenerationResult};
use generator::{GenerationRequest, Technology};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{AppState, error::ApiError};

/// Body of `POST /api/magic`. Older clients send `frontend`/`ui` instead of
/// `technology`.
#[derive(Debug, Default, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MagicRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub technology: Option<String>,
    #[serde(default)]
    pub frontend: Option<String>,
    #[serde(default)]
    pub ui: Option<String>,
    #[serde(default)]
    pub current_code: Option<String>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct MagicResponse {
    pub response: String,
    pub code_id: String,
    pub improved: Option<bool>,
    pub valid: bool,
}

pub fn router() -> Router<AppState> {
    Router::new().route("/magic", post(generate))
}

async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<MagicRequest>, JsonRejection>,
) -> Result<Json<MagicResponse>, ApiError> {
    let Json(payload) = payload?;
    let text = payload
        .text
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| ApiError::BadRequest("No prompt given".to_string()))?
        .to_string();

    let technology = Technology::resolve(
        payload.technology.as_deref(),
        payload.frontend.as_deref(),
        payload.ui.as_deref(),
    );

    let pool = &state.db().pool;
    let log = match GenerationLog::create(
        pool,
        &CreateGenerationLog {
            technology: technology.to_string(),
            prompt: text.clone(),
        },
    )
    .await
    {
        Ok(log) => Some(log),
        Err(err) => {
            tracing::warn!(error = %err, "Failed to create generation log");
            None
        }
    };

    let generation = state
        .generator()
        .generate(&GenerationRequest {
            text,
            technology,
            current_code: payload.current_code,
        })
        .await?;

    if let Some(log) = &log
        && let Err(err) = GenerationLog::record_result(
            pool,
            log.id,
            &GenerationResult {
                generated_code: generation.code.clone(),
                improved: generation.improved,
                valid: generation.valid,
            },
        )
        .await
    {
        tracing::warn!(code_id = %log.id, error = %err, "Failed to record generation result");
    }

    let code_id = log
        .map(|log| log.id.to_string())
        .unwrap_or_else(placeholder_id);

    tracing::info!(
        code_id = %code_id,
        technology = %technology,
        valid = generation.valid,
        improved = ?generation.improved,
        "Component generated"
    );

    Ok(Json(MagicResponse {
        response: generation.code,
        code_id,
        improved: generation.improved,
        valid: generation.valid,
    }))
}

/// Identifier handed out when the log row could not be written.
fn placeholder_id() -> String {
    format!("local-{}", Utc::now().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_id_is_timestamp_based() {
        let id = placeholder_id();
        let millis = id.strip_prefix("local-").unwrap();
        assert!(millis.parse::<i64>().unwrap() > 0);
    }

    #[test]
    fn request_accepts_camel_case_current_code() {
        let request: MagicRequest = serde_json::from_str(
            r#"{"text":"make it red","technology":"vue","currentCode":"<template></template>"}"#,
        )
        .unwrap();
        assert_eq!(request.current_code.as_deref(), Some("<template></template>"));
        assert_eq!(request.technology.as_deref(), Some("vue"));
    }
}
