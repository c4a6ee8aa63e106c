use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use serde_json::{Value, json};

use super::{ApiError, ApiState};
use crate::{
    management::{self, TokenContext},
    types::{AlbumRecord, AlbumSubmission},
};

#[derive(Debug, Deserialize)]
pub struct ConditionParams {
    pub condition: String,
}

pub async fn get_collection(
    ctx: TokenContext,
    State(state): State<ApiState>,
) -> Json<Vec<AlbumRecord>> {
    Json(state.store.list(ctx.identity()).await)
}

pub async fn add_to_collection(
    ctx: TokenContext,
    State(state): State<ApiState>,
    Json(submission): Json<AlbumSubmission>,
) -> Result<Json<Value>, ApiError> {
    let outcome =
        management::add_album(&state.store, state.catalog.as_ref(), &ctx, submission).await?;

    Ok(Json(json!({
        "message": outcome.enrichment.message(),
        "total": outcome.total,
    })))
}

pub async fn delete_from_collection(
    ctx: TokenContext,
    State(state): State<ApiState>,
    Path(index): Path<i64>,
) -> Result<Json<Value>, ApiError> {
    let index =
        usize::try_from(index).map_err(|_| ApiError::NotFound("Index out of range".to_string()))?;
    let removed = state.store.remove_at(ctx.identity(), index).await?;

    Ok(Json(json!({ "message": "Removed", "removed": removed })))
}

pub async fn update_condition(
    ctx: TokenContext,
    State(state): State<ApiState>,
    Path(external_id): Path<String>,
    Query(params): Query<ConditionParams>,
) -> Result<Json<Value>, ApiError> {
    let album = state
        .store
        .update_condition(ctx.identity(), &external_id, &params.condition)
        .await?;

    Ok(Json(json!({ "message": "Condition updated", "album": album })))
}
