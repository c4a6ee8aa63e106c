//! Configuration management for the vinyl collection backend.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Every accessor falls back to a sensible default
//! except the OAuth client credentials, which are only needed by the login flow
//! and are reported as missing when that flow is used.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf, time::Duration};

use crate::spotify::CatalogConfig;

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8000";
pub const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SPOTIFY_SCOPE: &str = "user-read-private";
pub const DEFAULT_SEARCH_MARKET: &str = "AF";
pub const DEFAULT_SEARCH_LIMIT: u32 = 20;
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Loads environment variables from `.env` files.
///
/// A `.env` in the working directory is loaded first, then the one in the
/// platform-specific local data directory under `vinylcrate/.env`. Variables
/// already present in the environment are never overwritten, so the earlier
/// source wins. Missing files are not an error.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/vinylcrate/.env`
/// - macOS: `~/Library/Application Support/vinylcrate/.env`
/// - Windows: `%LOCALAPPDATA%/vinylcrate/.env`
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or if an existing
/// `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let local = PathBuf::from(".env");
    if local.is_file() {
        dotenv::from_path(&local).map_err(|e| e.to_string())?;
    }

    let path = data_env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

fn data_env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("vinylcrate/.env");
    path
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn required(key: &str) -> Result<String, String> {
    env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| format!("{} must be set", key))
}

/// Returns the address the HTTP server binds to, e.g. `127.0.0.1:8000`.
pub fn server_addr() -> String {
    var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Returns the frontend origin used for CORS and the post-login redirect.
pub fn frontend_url() -> String {
    var_or("FRONTEND_URL", DEFAULT_FRONTEND_URL)
}

/// Returns the Spotify OAuth client ID.
///
/// # Errors
///
/// Fails if `SPOTIFY_CLIENT_ID` is unset or empty.
pub fn spotify_client_id() -> Result<String, String> {
    required("SPOTIFY_CLIENT_ID")
}

/// Returns the Spotify OAuth client secret.
///
/// The client secret should be kept confidential and never exposed in logs.
///
/// # Errors
///
/// Fails if `SPOTIFY_CLIENT_SECRET` is unset or empty.
pub fn spotify_client_secret() -> Result<String, String> {
    required("SPOTIFY_CLIENT_SECRET")
}

/// Returns the OAuth redirect URI registered with Spotify.
///
/// # Errors
///
/// Fails if `SPOTIFY_REDIRECT_URI` is unset or empty.
pub fn spotify_redirect_uri() -> Result<String, String> {
    required("SPOTIFY_REDIRECT_URI")
}

/// Returns the scope requested during login.
pub fn spotify_scope() -> String {
    var_or("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SPOTIFY_SCOPE)
}

/// Returns the Spotify OAuth authorization URL.
pub fn spotify_apiauth_url() -> String {
    var_or("SPOTIFY_API_AUTH_URL", DEFAULT_SPOTIFY_AUTH_URL)
}

/// Returns the Spotify Web API base URL.
pub fn spotify_apiurl() -> String {
    var_or("SPOTIFY_API_URL", DEFAULT_SPOTIFY_API_URL)
}

/// Returns the Spotify OAuth token exchange URL.
pub fn spotify_apitoken_url() -> String {
    var_or("SPOTIFY_API_TOKEN_URL", DEFAULT_SPOTIFY_TOKEN_URL)
}

/// Returns the market sent with every search request.
pub fn search_market() -> String {
    var_or("SPOTIFY_SEARCH_MARKET", DEFAULT_SEARCH_MARKET)
}

/// Returns the number of search results requested from Spotify.
///
/// Unparseable values fall back to the default.
pub fn search_limit() -> u32 {
    env::var("SPOTIFY_SEARCH_LIMIT")
        .ok()
        .and_then(|v| v.trim().parse::<u32>().ok())
        .unwrap_or(DEFAULT_SEARCH_LIMIT)
}

/// Returns the timeout applied to each outbound catalog request.
pub fn http_timeout() -> Duration {
    let secs = env::var("SPOTIFY_HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);
    Duration::from_secs(secs)
}

/// Collects the catalog client settings from the environment.
pub fn catalog_config() -> CatalogConfig {
    CatalogConfig {
        base_url: spotify_apiurl(),
        market: search_market(),
        limit: search_limit(),
        timeout: http_timeout(),
    }
}
