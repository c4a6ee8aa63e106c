#![allow(dead_code)]

use std::{collections::HashMap, sync::Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;
use vinylcrate::{
    spotify::{CatalogClient, CatalogError},
    types::{AlbumSubmission, CatalogAlbum},
};

#[derive(Debug, Clone)]
pub enum Failure {
    Status(u16, String),
    Transport,
    Decode,
}

impl Failure {
    fn to_error(&self) -> CatalogError {
        match self {
            Failure::Status(code, body) => CatalogError::Status {
                status: StatusCode::from_u16(*code).unwrap(),
                body: body.clone(),
            },
            Failure::Transport => CatalogError::Transport("connection refused".to_string()),
            Failure::Decode => CatalogError::Decode("expected value at line 1".to_string()),
        }
    }
}

/// In-memory catalog that records every call it receives.
#[derive(Default)]
pub struct FakeCatalog {
    pub albums: HashMap<String, CatalogAlbum>,
    pub tracks: HashMap<String, Vec<String>>,
    pub search_results: Vec<CatalogAlbum>,
    pub album_failure: Option<Failure>,
    pub search_failure: Option<Failure>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn with_album(mut self, album: CatalogAlbum, tracks: &[&str]) -> Self {
        let id = album.id.clone().unwrap();
        self.tracks
            .insert(id.clone(), tracks.iter().map(|t| t.to_string()).collect());
        self.albums.insert(id, album);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl CatalogClient for FakeCatalog {
    async fn search(&self, query: &str, _credential: &str) -> Result<Vec<CatalogAlbum>, CatalogError> {
        self.record(format!("search:{}", query));
        if let Some(failure) = &self.search_failure {
            return Err(failure.to_error());
        }
        Ok(self.search_results.clone())
    }

    async fn get_album(&self, id: &str, _credential: &str) -> Result<CatalogAlbum, CatalogError> {
        self.record(format!("album:{}", id));
        if let Some(failure) = &self.album_failure {
            return Err(failure.to_error());
        }
        self.albums.get(id).cloned().ok_or(CatalogError::Status {
            status: StatusCode::NOT_FOUND,
            body: r#"{"error":{"status":404,"message":"Non existing id"}}"#.to_string(),
        })
    }

    async fn fetch_tracks(&self, id: &str, _credential: &str) -> Result<Vec<String>, CatalogError> {
        self.record(format!("tracks:{}", id));
        self.tracks.get(id).cloned().ok_or(CatalogError::Status {
            status: StatusCode::NOT_FOUND,
            body: String::new(),
        })
    }
}

pub fn catalog_album(id: Option<&str>, name: &str, url: &str) -> CatalogAlbum {
    CatalogAlbum {
        name: name.to_string(),
        artist: "Catalog Artist".to_string(),
        release_date: "1973-03-01".to_string(),
        cover_url: Some("https://i.scdn.co/image/cover".to_string()),
        spotify_url: url.to_string(),
        album_type: "album".to_string(),
        total_tracks: 2,
        id: id.map(|i| i.to_string()),
        genres: vec!["progressive rock".to_string()],
        label: "Harvest".to_string(),
        popularity: 81,
    }
}

pub fn submission(id: Option<&str>, name: &str, url: &str) -> AlbumSubmission {
    AlbumSubmission {
        name: name.to_string(),
        artist: "Submitted Artist".to_string(),
        release_date: "1973".to_string(),
        cover_url: None,
        spotify_url: url.to_string(),
        album_type: "album".to_string(),
        total_tracks: 0,
        external_id: id.map(|i| i.to_string()),
        tracks: Vec::new(),
        genres: Vec::new(),
        label: String::new(),
        popularity: 0,
        condition: None,
    }
}
