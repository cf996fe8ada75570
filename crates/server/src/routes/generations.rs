use axum::{
    Router,
    extract::{Query, State},
    response::Json,
    routing::get,
};
use db::models::generation_log::GenerationLog;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{AppState, error::ApiError};

pub const FALLBACK_CODE: &str = "const MyComponent = () => <button>Hello from fallback!</button>; export default MyComponent;";

const DEFAULT_RECENT_LIMIT: u64 = 20;
const MAX_RECENT_LIMIT: u64 = 100;

#[derive(Debug, Deserialize)]
pub struct GenerationQuery {
    pub id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecentQuery {
    pub limit: Option<u64>,
}

/// What the share page needs to render a stored generation.
#[derive(Debug, Serialize, TS)]
#[ts(export)]
pub struct SharedGeneration {
    pub code: String,
    pub prompt: String,
    pub generated_id: String,
}

impl SharedGeneration {
    fn fallback() -> Self {
        Self {
            code: FALLBACK_CODE.to_string(),
            prompt: String::new(),
            generated_id: String::new(),
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/generations", get(get_generation))
        .route("/generations/recent", get(list_recent))
}

async fn get_generation(
    State(state): State<AppState>,
    Query(query): Query<GenerationQuery>,
) -> Result<Json<SharedGeneration>, ApiError> {
    let Some(share_id) = query.id.filter(|id| !id.trim().is_empty()) else {
        return Ok(Json(SharedGeneration::fallback()));
    };

    let Some(log) = GenerationLog::find_by_share_id(&state.db().pool, &share_id).await? else {
        tracing::debug!(share_id = %share_id, "Shared generation not found; serving fallback");
        return Ok(Json(SharedGeneration::fallback()));
    };

    Ok(Json(SharedGeneration {
        code: log
            .generated_code
            .unwrap_or_else(|| FALLBACK_CODE.to_string()),
        prompt: log.prompt,
        generated_id: log.id.to_string(),
    }))
}

async fn list_recent(
    State(state): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> Result<Json<Vec<GenerationLog>>, ApiError> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_RECENT_LIMIT)
        .clamp(1, MAX_RECENT_LIMIT);
    let logs = GenerationLog::find_recent(&state.db().pool, limit).await?;
    Ok(Json(logs))
}
