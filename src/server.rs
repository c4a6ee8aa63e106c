use std::{net::SocketAddr, str::FromStr, sync::Arc};

use axum::{
    Router,
    http::{
        HeaderValue, Method,
        header::{AUTHORIZATION, CONTENT_TYPE},
    },
    routing::{delete, get, patch},
};
use tower_http::cors::CorsLayer;

use crate::{
    Res,
    api::{self, ApiState},
    config, success,
    management::CollectionStore,
    spotify::SpotifyClient,
};

/// Builds the router with every route; CORS is added by the caller.
pub fn app(state: ApiState) -> Router {
    Router::new()
        .route("/", get(api::login))
        .route("/callback", get(api::callback))
        .route("/health", get(api::health))
        .route("/ping", get(api::ping))
        .route("/search", get(api::search))
        .route(
            "/collection",
            get(api::get_collection).post(api::add_to_collection),
        )
        .route("/collection/{index}", delete(api::delete_from_collection))
        .route(
            "/collection/{external_id}/condition",
            patch(api::update_condition),
        )
        .with_state(state)
}

/// Allows the frontend origin to call the API with a bearer token.
pub fn cors_layer(frontend_url: &str) -> Result<CorsLayer, String> {
    let origin = HeaderValue::from_str(frontend_url.trim_end_matches('/'))
        .map_err(|e| format!("invalid frontend url '{}': {}", frontend_url, e))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]))
}

/// Creates the store and catalog client, then serves until the process stops.
pub async fn start_api_server(addr: &str) -> Res<()> {
    let addr = SocketAddr::from_str(addr)
        .map_err(|e| format!("Failed to parse server address '{}': {}", addr, e))?;

    let catalog = SpotifyClient::new(config::catalog_config())?;
    let state = ApiState::new(Arc::new(CollectionStore::new()), Arc::new(catalog));
    let app = app(state).layer(cors_layer(&config::frontend_url())?);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    success!("Listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
