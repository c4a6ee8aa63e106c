use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

pub const DEFAULT_ALBUM_TYPE: &str = "album";

/// Physical media grade, from Mint down to Poor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Condition {
    #[default]
    #[serde(rename = "M")]
    Mint,
    #[serde(rename = "NM")]
    NearMint,
    #[serde(rename = "EX")]
    Excellent,
    #[serde(rename = "VG+")]
    VeryGoodPlus,
    #[serde(rename = "VG")]
    VeryGood,
    #[serde(rename = "G")]
    Good,
    #[serde(rename = "F")]
    Fair,
    #[serde(rename = "P")]
    Poor,
}

impl Condition {
    pub const ALL: [Condition; 8] = [
        Condition::Mint,
        Condition::NearMint,
        Condition::Excellent,
        Condition::VeryGoodPlus,
        Condition::VeryGood,
        Condition::Good,
        Condition::Fair,
        Condition::Poor,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Condition::Mint => "M",
            Condition::NearMint => "NM",
            Condition::Excellent => "EX",
            Condition::VeryGoodPlus => "VG+",
            Condition::VeryGood => "VG",
            Condition::Good => "G",
            Condition::Fair => "F",
            Condition::Poor => "P",
        }
    }

    /// Parses a submitted grade, coercing anything outside the vocabulary to Mint.
    pub fn or_default(raw: Option<&str>) -> Condition {
        raw.and_then(|c| c.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Condition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::ALL
            .into_iter()
            .find(|c| c.code() == s)
            .ok_or_else(|| {
                format!(
                    "invalid condition '{}'. Expected one of: {}",
                    s,
                    Condition::ALL.map(|c| c.code()).join(", ")
                )
            })
    }
}

fn default_album_type() -> String {
    DEFAULT_ALBUM_TYPE.to_string()
}

/// An album saved in a user's collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumRecord {
    pub name: String,
    pub artist: String,
    pub release_date: String,
    #[serde(default)]
    pub cover_url: Option<String>,
    pub spotify_url: String,
    #[serde(default = "default_album_type")]
    pub album_type: String,
    #[serde(default)]
    pub total_tracks: u32,
    #[serde(rename = "id", alias = "external_id", default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub tracks: Vec<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub popularity: u8,
    #[serde(default)]
    pub condition: Condition,
}

/// Body of `POST /collection`.
///
/// Mirrors [`AlbumRecord`] but keeps the grade as raw text so an unknown code
/// can be coerced instead of rejecting the whole submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumSubmission {
    pub name: String,
    pub artist: String,
    pub release_date: String,
    #[serde(default)]
    pub cover_url: Option<String>,
    pub spotify_url: String,
    #[serde(default = "default_album_type")]
    pub album_type: String,
    #[serde(default)]
    pub total_tracks: u32,
    #[serde(rename = "id", alias = "external_id", default)]
    pub external_id: Option<String>,
    #[serde(default)]
    pub tracks: Vec<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub popularity: u8,
    #[serde(default)]
    pub condition: Option<String>,
}

impl AlbumSubmission {
    /// Blank ids are stored as no id.
    pub fn into_record(self, condition: Condition) -> AlbumRecord {
        AlbumRecord {
            name: self.name,
            artist: self.artist,
            release_date: self.release_date,
            cover_url: self.cover_url,
            spotify_url: self.spotify_url,
            album_type: self.album_type,
            total_tracks: self.total_tracks,
            external_id: self.external_id.filter(|id| !id.trim().is_empty()),
            tracks: self.tracks,
            genres: self.genres,
            label: self.label,
            popularity: self.popularity.min(100),
            condition,
        }
    }
}

/// Album as reported by the catalog, flattened from the Spotify object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogAlbum {
    pub name: String,
    pub artist: String,
    pub release_date: String,
    pub cover_url: Option<String>,
    pub spotify_url: String,
    pub album_type: String,
    pub total_tracks: u32,
    pub id: Option<String>,
    pub genres: Vec<String>,
    pub label: String,
    pub popularity: u8,
}

impl CatalogAlbum {
    pub fn into_record(self, tracks: Vec<String>, condition: Condition) -> AlbumRecord {
        AlbumRecord {
            name: self.name,
            artist: self.artist,
            release_date: self.release_date,
            cover_url: self.cover_url,
            spotify_url: self.spotify_url,
            album_type: self.album_type,
            total_tracks: self.total_tracks,
            external_id: self.id,
            tracks,
            genres: self.genres,
            label: self.label,
            popularity: self.popularity,
            condition,
        }
    }
}

impl From<SpotifyAlbum> for CatalogAlbum {
    fn from(album: SpotifyAlbum) -> Self {
        CatalogAlbum {
            name: album.name,
            artist: album
                .artists
                .into_iter()
                .next()
                .map(|a| a.name)
                .unwrap_or_default(),
            release_date: album.release_date,
            cover_url: album.images.into_iter().next().map(|i| i.url),
            spotify_url: album.external_urls.spotify.unwrap_or_default(),
            album_type: album.album_type.unwrap_or_else(default_album_type),
            total_tracks: album.total_tracks,
            id: album.id,
            genres: album.genres,
            label: album.label.unwrap_or_default(),
            popularity: album.popularity.min(100) as u8,
        }
    }
}

/// A search hit annotated with its track listing and collection membership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(flatten)]
    pub album: CatalogAlbum,
    pub tracks: Vec<String>,
    pub in_collection: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyAlbum {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub artists: Vec<AlbumArtist>,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub album_type: Option<String>,
    #[serde(default)]
    pub total_tracks: u32,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub popularity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumArtist {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalUrls {
    #[serde(default)]
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub albums: Option<AlbumPage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumPage {
    #[serde(default)]
    pub items: Vec<SpotifyAlbum>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tracks {
    #[serde(default)]
    pub items: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}
