use reqwest::{Client, Url};

use crate::{config, types::Token};

/// Builds the Spotify authorize URL the login route redirects to.
///
/// # Errors
///
/// Fails if the client ID or redirect URI is not configured, or if the
/// configured authorize URL is not a valid URL.
pub fn authorize_url() -> Result<Url, String> {
    let client_id = config::spotify_client_id()?;
    let redirect_uri = config::spotify_redirect_uri()?;
    let scope = config::spotify_scope();

    Url::parse_with_params(
        &config::spotify_apiauth_url(),
        &[
            ("client_id", client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", redirect_uri.as_str()),
            ("scope", scope.as_str()),
        ],
    )
    .map_err(|e| e.to_string())
}

/// Exchanges an authorization code for an access token.
///
/// Uses the client secret flow: the secret is sent in the form body along
/// with the code and the registered redirect URI.
///
/// # Errors
///
/// Fails when credentials are missing, the request cannot be sent, Spotify
/// answers with a non-success status or the body has no access token.
pub async fn exchange_code(code: &str) -> Result<Token, String> {
    let client_id = config::spotify_client_id()?;
    let client_secret = config::spotify_client_secret()?;
    let redirect_uri = config::spotify_redirect_uri()?;

    let client = Client::new();
    let res = client
        .post(config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri.as_str()),
            ("client_id", client_id.as_str()),
            ("client_secret", client_secret.as_str()),
        ])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !res.status().is_success() {
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        return Err(format!("token endpoint responded with {}: {}", status, body));
    }

    res.json::<Token>().await.map_err(|e| e.to_string())
}
