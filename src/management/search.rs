use std::sync::Arc;

use tokio::task::JoinSet;

use super::{CollectionStore, TokenContext, collection::is_same_album};
use crate::{
    spotify::{CatalogClient, CatalogError},
    types::{CatalogAlbum, SearchResult},
};

/// Searches the catalog and annotates every hit with its track listing and
/// whether the caller already has it.
///
/// Track listings are fetched concurrently and independently: a failed
/// listing only leaves that one result without tracks. A failed search is
/// returned as is since there is nothing to annotate.
pub async fn search_albums(
    store: &CollectionStore,
    catalog: Arc<dyn CatalogClient>,
    ctx: &TokenContext,
    query: &str,
) -> Result<Vec<SearchResult>, CatalogError> {
    let albums = catalog.search(query, ctx.credential()).await?;
    let mut tracks = fetch_all_tracks(&catalog, ctx, &albums).await;
    let collection = store.list(ctx.identity()).await;

    let results = albums
        .into_iter()
        .enumerate()
        .map(|(i, album)| {
            let in_collection = collection
                .iter()
                .any(|r| is_same_album(r, album.id.as_deref(), &album.spotify_url));
            SearchResult {
                tracks: std::mem::take(&mut tracks[i]),
                in_collection,
                album,
            }
        })
        .collect();

    Ok(results)
}

async fn fetch_all_tracks(
    catalog: &Arc<dyn CatalogClient>,
    ctx: &TokenContext,
    albums: &[CatalogAlbum],
) -> Vec<Vec<String>> {
    let mut tracks = vec![Vec::new(); albums.len()];
    let mut set = JoinSet::new();

    for (i, album) in albums.iter().enumerate() {
        let Some(id) = album.id.clone() else {
            continue;
        };
        let catalog = Arc::clone(catalog);
        let credential = ctx.credential().to_string();
        set.spawn(async move { (i, catalog.get_tracks(&id, &credential).await) });
    }

    while let Some(joined) = set.join_next().await {
        // a panicked task just leaves its result without tracks
        if let Ok((i, listing)) = joined {
            tracks[i] = listing;
        }
    }
    tracks
}
