use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use thiserror::Error;

use crate::{management::StoreError, spotify::CatalogError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized")]
    Unauthenticated,
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InvalidCondition(String),
    #[error("catalog responded with {status}")]
    Upstream { status: StatusCode, body: String },
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate => ApiError::Conflict(err.to_string()),
            StoreError::InvalidCondition(msg) => ApiError::InvalidCondition(msg),
            StoreError::IndexOutOfRange { .. } | StoreError::NotFound => {
                ApiError::NotFound(err.to_string())
            }
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Status { status, body } => ApiError::Upstream { status, body },
            CatalogError::Transport(_) | CatalogError::Decode(_) => {
                ApiError::Transport(err.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Unauthenticated => StatusCode::UNAUTHORIZED,
            ApiError::Conflict(_) | ApiError::InvalidCondition(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Transport(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Upstream { status, body } => {
                // forward the upstream JSON body untouched when there is one
                let content = serde_json::from_str::<Value>(body)
                    .unwrap_or_else(|_| json!({ "error": body }));
                return (*status, Json(content)).into_response();
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
