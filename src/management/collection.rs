use std::{collections::HashMap, sync::Arc};

use thiserror::Error;
use tokio::sync::{Mutex, RwLock};

use crate::types::{AlbumRecord, Condition};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Index out of range")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("{0}")]
    InvalidCondition(String),
    #[error("Album not found in collection")]
    NotFound,
    #[error("Album already in collection")]
    Duplicate,
}

type Collection = Arc<Mutex<Vec<AlbumRecord>>>;

/// In-memory albums per identity, kept in insertion order.
///
/// Each identity has its own lock, held for the duration of every operation
/// on that identity. Operations on different identities never contend beyond
/// the short map lookup.
#[derive(Debug, Default)]
pub struct CollectionStore {
    collections: RwLock<HashMap<String, Collection>>,
}

/// True if `record` is the album identified by `external_id` or `url`.
///
/// An empty url never matches.
pub(crate) fn is_same_album(record: &AlbumRecord, external_id: Option<&str>, url: &str) -> bool {
    let same_id = match (external_id, record.external_id.as_deref()) {
        (Some(id), Some(stored)) => id == stored,
        _ => false,
    };
    same_id || (!url.is_empty() && record.spotify_url == url)
}

impl CollectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn existing(&self, identity: &str) -> Option<Collection> {
        self.collections.read().await.get(identity).cloned()
    }

    async fn entry(&self, identity: &str) -> Collection {
        if let Some(collection) = self.existing(identity).await {
            return collection;
        }

        let mut collections = self.collections.write().await;
        Arc::clone(
            collections
                .entry(identity.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(Vec::new()))),
        )
    }

    pub async fn list(&self, identity: &str) -> Vec<AlbumRecord> {
        match self.existing(identity).await {
            Some(collection) => collection.lock().await.clone(),
            None => Vec::new(),
        }
    }

    pub async fn len(&self, identity: &str) -> usize {
        match self.existing(identity).await {
            Some(collection) => collection.lock().await.len(),
            None => 0,
        }
    }

    /// Appends without any duplicate check and returns the new count.
    pub async fn append(&self, identity: &str, record: AlbumRecord) -> usize {
        let collection = self.entry(identity).await;
        let mut albums = collection.lock().await;
        albums.push(record);
        albums.len()
    }

    pub async fn exists_duplicate(
        &self,
        identity: &str,
        external_id: Option<&str>,
        url: &str,
    ) -> bool {
        match self.existing(identity).await {
            Some(collection) => collection
                .lock()
                .await
                .iter()
                .any(|r| is_same_album(r, external_id, url)),
            None => false,
        }
    }

    /// Appends `record` unless a stored album shares its id or url.
    ///
    /// The check and the append happen under the same lock, so two concurrent
    /// inserts of one album cannot both succeed.
    pub async fn insert_unique(
        &self,
        identity: &str,
        record: AlbumRecord,
    ) -> Result<usize, StoreError> {
        let collection = self.entry(identity).await;
        let mut albums = collection.lock().await;
        let duplicate = albums
            .iter()
            .any(|r| is_same_album(r, record.external_id.as_deref(), &record.spotify_url));
        if duplicate {
            return Err(StoreError::Duplicate);
        }

        albums.push(record);
        Ok(albums.len())
    }

    pub async fn remove_at(&self, identity: &str, index: usize) -> Result<AlbumRecord, StoreError> {
        let Some(collection) = self.existing(identity).await else {
            return Err(StoreError::IndexOutOfRange { index, len: 0 });
        };

        let mut albums = collection.lock().await;
        if index >= albums.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: albums.len(),
            });
        }
        Ok(albums.remove(index))
    }

    /// Sets the grade of the first album with `external_id` and returns the
    /// updated record.
    pub async fn update_condition(
        &self,
        identity: &str,
        external_id: &str,
        new_condition: &str,
    ) -> Result<AlbumRecord, StoreError> {
        let condition: Condition = new_condition
            .parse()
            .map_err(StoreError::InvalidCondition)?;

        let collection = self.existing(identity).await.ok_or(StoreError::NotFound)?;
        let mut albums = collection.lock().await;
        let album = albums
            .iter_mut()
            .find(|r| r.external_id.as_deref() == Some(external_id))
            .ok_or(StoreError::NotFound)?;

        album.condition = condition;
        Ok(album.clone())
    }
}
