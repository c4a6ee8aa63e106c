use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use super::{CatalogClient, CatalogConfig, CatalogError};
use crate::{
    types::{CatalogAlbum, SearchResponse, SpotifyAlbum, Tracks},
    utils,
};

/// [`CatalogClient`] backed by the Spotify Web API.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    config: CatalogConfig,
}

impl SpotifyClient {
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(CatalogError::from)?;
        Ok(Self { http, config })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, CatalogError> {
        let mut url = Url::parse(&self.config.base_url)
            .map_err(|e| CatalogError::Transport(format!("invalid catalog url: {}", e)))?;
        url.path_segments_mut()
            .map_err(|_| CatalogError::Transport("catalog url cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
        credential: &str,
    ) -> Result<T, CatalogError> {
        let response = self
            .http
            .get(url)
            .query(query)
            .bearer_auth(credential)
            .send()
            .await?;

        let response = check_status(response).await?;
        Ok(response.json::<T>().await?)
    }
}

async fn check_status(response: Response) -> Result<Response, CatalogError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    // body is best effort, the status alone is enough to report the failure
    let body = response.text().await.unwrap_or_default();
    Err(CatalogError::Status { status, body })
}

#[async_trait]
impl CatalogClient for SpotifyClient {
    async fn search(&self, query: &str, credential: &str) -> Result<Vec<CatalogAlbum>, CatalogError> {
        let url = self.endpoint(&["search"])?;
        let params = [
            ("q", utils::title_case(query)),
            ("type", "album".to_string()),
            ("limit", self.config.limit.to_string()),
            ("market", self.config.market.clone()),
        ];

        let res: SearchResponse = self.get_json(url, &params, credential).await?;
        Ok(res
            .albums
            .map(|page| page.items)
            .unwrap_or_default()
            .into_iter()
            .map(CatalogAlbum::from)
            .collect())
    }

    async fn get_album(&self, id: &str, credential: &str) -> Result<CatalogAlbum, CatalogError> {
        let url = self.endpoint(&["albums", id])?;
        let album: SpotifyAlbum = self.get_json(url, &[], credential).await?;
        Ok(album.into())
    }

    async fn fetch_tracks(&self, id: &str, credential: &str) -> Result<Vec<String>, CatalogError> {
        let url = self.endpoint(&["albums", id, "tracks"])?;
        let tracks: Tracks = self.get_json(url, &[], credential).await?;
        Ok(tracks.items.into_iter().map(|t| t.name).collect())
    }
}
