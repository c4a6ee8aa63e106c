//! # API Module
//!
//! HTTP handlers for the vinyl collection backend, built on
//! [Axum](https://docs.rs/axum).
//!
//! ## Endpoints
//!
//! ### Collection
//!
//! - [`get_collection`] - `GET /collection`
//! - [`add_to_collection`] - `POST /collection`, enriches the album from Spotify
//! - [`delete_from_collection`] - `DELETE /collection/{index}`
//! - [`update_condition`] - `PATCH /collection/{id}/condition?condition=<code>`
//!
//! ### Search
//!
//! - [`search`] - `GET /search?query=<text>`, annotated with collection membership
//!
//! ### Authentication
//!
//! - [`login`] - `GET /`, redirects to the Spotify authorize page
//! - [`callback`] - `GET /callback`, exchanges the code and hands the access
//!   token to the frontend
//!
//! ### Monitoring
//!
//! - [`health`] - `GET /health`
//! - [`ping`] - `GET /ping`
//!
//! ## Authentication
//!
//! Collection and search routes take a [`TokenContext`] extractor which reads
//! `Authorization: Bearer <token>` and rejects the request with `401` when it
//! is missing or malformed. The token is not validated locally; an invalid
//! token only shows up as a failed Spotify call.

mod callback;
mod collection;
mod error;
mod health;
mod search;

use std::sync::Arc;

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};

use crate::{management::CollectionStore, management::TokenContext, spotify::CatalogClient};

pub use callback::{callback, login};
pub use collection::{add_to_collection, delete_from_collection, get_collection, update_condition};
pub use error::ApiError;
pub use health::{health, ping};
pub use search::search;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct ApiState {
    pub store: Arc<CollectionStore>,
    pub catalog: Arc<dyn CatalogClient>,
}

impl ApiState {
    pub fn new(store: Arc<CollectionStore>, catalog: Arc<dyn CatalogClient>) -> Self {
        Self { store, catalog }
    }
}

impl<S> FromRequestParts<S> for TokenContext
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok());
        TokenContext::from_header(header).ok_or(ApiError::Unauthenticated)
    }
}
