use std::collections::HashMap;

use axum::{
    extract::Query,
    response::{Html, IntoResponse, Redirect, Response},
};
use reqwest::Url;

use super::ApiError;
use crate::{config, info, spotify::auth, warning};

/// Redirects the browser to the Spotify authorize page.
pub async fn login() -> Result<Redirect, ApiError> {
    let url = auth::authorize_url().map_err(ApiError::Internal)?;
    info!("Redirecting to Spotify login");
    Ok(Redirect::temporary(url.as_str()))
}

/// Completes the login: exchanges the code and sends the access token to the
/// frontend in the query string.
pub async fn callback(Query(params): Query<HashMap<String, String>>) -> Response {
    let Some(code) = params.get("code").filter(|c| !c.is_empty()) else {
        return Html("<h1>Authorization failed</h1>").into_response();
    };

    let token = match auth::exchange_code(code).await {
        Ok(token) => token,
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            return Html("<h1>Failed to get token</h1>").into_response();
        }
    };

    match frontend_callback_url(&config::frontend_url(), &token.access_token) {
        Ok(url) => Redirect::temporary(url.as_str()).into_response(),
        Err(e) => ApiError::Internal(e).into_response(),
    }
}

fn frontend_callback_url(frontend: &str, access_token: &str) -> Result<Url, String> {
    let base = format!("{}/callback", frontend.trim_end_matches('/'));
    Url::parse_with_params(&base, &[("access_token", access_token)]).map_err(|e| e.to_string())
}
