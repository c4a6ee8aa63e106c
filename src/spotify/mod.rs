//! # Spotify Integration Module
//!
//! This module is the only place that talks to the Spotify Web API. It exposes
//! the [`CatalogClient`] trait, which the collection and search logic depend on,
//! and [`SpotifyClient`], the reqwest implementation used by the server.
//!
//! ## Architecture
//!
//! ```text
//! HTTP handlers (api)
//!          ↓
//! Management (enrichment, search annotation)
//!          ↓
//! CatalogClient trait ── SpotifyClient (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## API Coverage
//!
//! - `GET /search?type=album` - album search
//! - `GET /albums/{id}` - album detail
//! - `GET /albums/{id}/tracks` - track listing
//! - `POST /api/token` - authorization code exchange (see [`auth`])
//!
//! ## Error Types
//!
//! Catalog calls return [`CatalogError`], which separates an upstream non-200
//! answer (status and body kept so search can forward them) from transport and
//! decoding failures.
//!
//! ## Credentials
//!
//! Every call takes the caller's bearer token and forwards it verbatim. The
//! same token also keys the caller's collection; a real deployment should keep
//! session identity and upstream credential apart.

pub mod auth;
mod client;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::types::CatalogAlbum;

pub use client::SpotifyClient;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog responded with {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("catalog request failed: {0}")]
    Transport(String),
    #[error("catalog response could not be decoded: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            CatalogError::Decode(err.to_string())
        } else {
            CatalogError::Transport(err.to_string())
        }
    }
}

/// Settings for [`SpotifyClient`].
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: String,
    pub market: String,
    pub limit: u32,
    pub timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: crate::config::DEFAULT_SPOTIFY_API_URL.to_string(),
            market: crate::config::DEFAULT_SEARCH_MARKET.to_string(),
            limit: crate::config::DEFAULT_SEARCH_LIMIT,
            timeout: Duration::from_secs(crate::config::DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

/// Read access to the external album catalog.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Searches albums. The query is title-cased before it is sent.
    async fn search(&self, query: &str, credential: &str) -> Result<Vec<CatalogAlbum>, CatalogError>;

    /// Fetches the full album detail.
    async fn get_album(&self, id: &str, credential: &str) -> Result<CatalogAlbum, CatalogError>;

    /// Fetches the ordered track names of an album.
    async fn fetch_tracks(&self, id: &str, credential: &str) -> Result<Vec<String>, CatalogError>;

    /// Best-effort track listing: any failure yields an empty list.
    async fn get_tracks(&self, id: &str, credential: &str) -> Vec<String> {
        match self.fetch_tracks(id, credential).await {
            Ok(tracks) => tracks,
            Err(e) => {
                crate::warning!("Could not load tracks for album {}. Err: {}", id, e);
                Vec::new()
            }
        }
    }
}
