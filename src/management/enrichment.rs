use super::{CollectionStore, StoreError, TokenContext};
use crate::{
    info,
    spotify::{CatalogClient, CatalogError},
    types::{AlbumRecord, AlbumSubmission, Condition},
    utils, warning,
};

/// How complete the stored album is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enrichment {
    /// Catalog detail and track listing were merged in.
    Full,
    /// No catalog id could be determined, the submission was stored as is.
    Basic,
    /// The catalog rejected the lookup or could not be reached.
    BasicApiError,
    /// The catalog answered with something that could not be understood.
    BasicErrorOccurred,
}

impl Enrichment {
    pub fn message(&self) -> &'static str {
        match self {
            Enrichment::Full => "Album added to collection with full details",
            Enrichment::Basic => "Album added to collection (basic info)",
            Enrichment::BasicApiError => "Album added to collection (basic info - API error)",
            Enrichment::BasicErrorOccurred => {
                "Album added to collection (basic info - error occurred)"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddOutcome {
    pub enrichment: Enrichment,
    pub total: usize,
    pub album: AlbumRecord,
}

/// Adds a submitted album to the caller's collection.
///
/// Duplicates (same id or url) are rejected before any catalog call. When an
/// album id is known, either submitted or taken from the tail of the Spotify
/// url, the album detail and tracks are fetched and merged in. A failed
/// lookup never fails the add: the submission is stored as is and the
/// outcome says so.
pub async fn add_album(
    store: &CollectionStore,
    catalog: &dyn CatalogClient,
    ctx: &TokenContext,
    submission: AlbumSubmission,
) -> Result<AddOutcome, StoreError> {
    let album_id = submission
        .external_id
        .clone()
        .filter(|id| !id.trim().is_empty())
        .or_else(|| utils::album_id_from_url(&submission.spotify_url));

    if store
        .exists_duplicate(ctx.identity(), album_id.as_deref(), &submission.spotify_url)
        .await
    {
        return Err(StoreError::Duplicate);
    }

    let condition = Condition::or_default(submission.condition.as_deref());

    let (record, enrichment) = match album_id {
        None => (submission.into_record(condition), Enrichment::Basic),
        Some(id) => {
            let enriched = enrich(catalog, ctx, &id, &submission, condition).await;
            match enriched {
                Ok(record) => (record, Enrichment::Full),
                Err(e) => {
                    warning!("Album {} stored with basic info. Err: {}", id, e);
                    let enrichment = match e {
                        CatalogError::Decode(_) => Enrichment::BasicErrorOccurred,
                        _ => Enrichment::BasicApiError,
                    };
                    (submission.into_record(condition), enrichment)
                }
            }
        }
    };

    let album = record.clone();
    let total = store.insert_unique(ctx.identity(), record).await?;
    info!("Added '{}' by {} ({} in collection)", album.name, album.artist, total);

    Ok(AddOutcome {
        enrichment,
        total,
        album,
    })
}

async fn enrich(
    catalog: &dyn CatalogClient,
    ctx: &TokenContext,
    id: &str,
    submission: &AlbumSubmission,
    condition: Condition,
) -> Result<AlbumRecord, CatalogError> {
    let mut album = catalog.get_album(id, ctx.credential()).await?;
    let tracks = catalog.get_tracks(id, ctx.credential()).await;

    if album.id.is_none() {
        album.id = Some(id.to_string());
    }
    if album.spotify_url.is_empty() {
        album.spotify_url = submission.spotify_url.clone();
    }
    Ok(album.into_record(tracks, condition))
}
