use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use super::{ApiError, ApiState};
use crate::{
    management::{self, TokenContext},
    types::SearchResult,
    utils, warning,
};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
}

pub async fn search(
    ctx: TokenContext,
    State(state): State<ApiState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<SearchResult>>, ApiError> {
    let results = management::search_albums(
        &state.store,
        Arc::clone(&state.catalog),
        &ctx,
        &params.query,
    )
    .await
    .map_err(|e| {
        warning!(
            "Search '{}' failed for {}. Err: {}",
            params.query,
            utils::redact_token(ctx.identity()),
            e
        );
        ApiError::from(e)
    })?;

    Ok(Json(results))
}
