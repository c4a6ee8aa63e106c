mod common;

use common::{FakeCatalog, Failure, catalog_album, submission};
use vinylcrate::{
    management::{CollectionStore, Enrichment, StoreError, TokenContext, add_album},
    types::Condition,
};

const URL: &str = "https://open.spotify.com/album/4LH4d3cOWNNsVw41Gqt2kv";
const ID: &str = "4LH4d3cOWNNsVw41Gqt2kv";

fn ctx(token: &str) -> TokenContext {
    TokenContext::new(token)
}

#[tokio::test]
async fn test_add_with_full_details() {
    let store = CollectionStore::new();
    let catalog = FakeCatalog::default().with_album(
        catalog_album(Some(ID), "The Dark Side of the Moon", URL),
        &["Speak to Me", "Breathe"],
    );

    let mut sub = submission(Some(ID), "dsotm", URL);
    sub.condition = Some("EX".to_string());

    let outcome = add_album(&store, &catalog, &ctx("tok"), sub).await.unwrap();
    assert_eq!(outcome.enrichment, Enrichment::Full);
    assert_eq!(outcome.total, 1);

    let stored = &store.list("tok").await[0];
    assert_eq!(stored.name, "The Dark Side of the Moon");
    assert_eq!(stored.artist, "Catalog Artist");
    assert_eq!(stored.tracks, vec!["Speak to Me", "Breathe"]);
    assert_eq!(stored.label, "Harvest");
    assert_eq!(stored.popularity, 81);
    assert_eq!(stored.genres, vec!["progressive rock"]);
    assert_eq!(stored.external_id.as_deref(), Some(ID));
    assert_eq!(stored.condition, Condition::Excellent);
    assert_eq!(catalog.calls(), vec![format!("album:{}", ID), format!("tracks:{}", ID)]);
}

#[tokio::test]
async fn test_add_derives_id_from_url() {
    let store = CollectionStore::new();
    let catalog = FakeCatalog::default().with_album(catalog_album(Some(ID), "Full", URL), &[]);

    let outcome = add_album(&store, &catalog, &ctx("tok"), submission(None, "basic", URL))
        .await
        .unwrap();
    assert_eq!(outcome.enrichment, Enrichment::Full);
    assert_eq!(outcome.album.name, "Full");
    assert_eq!(catalog.calls()[0], format!("album:{}", ID));
}

#[tokio::test]
async fn test_add_without_id_stores_submission() {
    let store = CollectionStore::new();
    let catalog = FakeCatalog::default();

    let sub = submission(None, "Bootleg", "not-a-url");
    let expected = sub.clone().into_record(Condition::Mint);

    let outcome = add_album(&store, &catalog, &ctx("tok"), sub).await.unwrap();
    assert_eq!(outcome.enrichment, Enrichment::Basic);
    assert_eq!(outcome.total, 1);
    assert_eq!(store.list("tok").await, vec![expected]);
    assert!(catalog.calls().is_empty());
}

#[tokio::test]
async fn test_add_coerces_invalid_condition() {
    let store = CollectionStore::new();
    let catalog = FakeCatalog::default();

    let mut sub = submission(None, "Bootleg", "not-a-url");
    sub.condition = Some("XX".to_string());

    add_album(&store, &catalog, &ctx("tok"), sub).await.unwrap();
    assert_eq!(store.list("tok").await[0].condition, Condition::Mint);
}

#[tokio::test]
async fn test_add_falls_back_on_catalog_status() {
    let store = CollectionStore::new();
    store
        .append("tok", submission(Some("OTHER"), "Other", "u0").into_record(Condition::Mint))
        .await;
    let catalog = FakeCatalog {
        album_failure: Some(Failure::Status(429, "rate limited".to_string())),
        ..FakeCatalog::default()
    };

    let sub = submission(Some(ID), "Submitted", URL);
    let expected = sub.clone().into_record(Condition::Mint);

    let outcome = add_album(&store, &catalog, &ctx("tok"), sub).await.unwrap();
    assert_eq!(outcome.enrichment, Enrichment::BasicApiError);
    assert_eq!(outcome.total, 2);
    assert_eq!(store.list("tok").await[1], expected);
    // no track lookup after a failed album lookup
    assert_eq!(catalog.calls(), vec![format!("album:{}", ID)]);
}

#[tokio::test]
async fn test_add_falls_back_on_transport_error() {
    let store = CollectionStore::new();
    let catalog = FakeCatalog {
        album_failure: Some(Failure::Transport),
        ..FakeCatalog::default()
    };

    let outcome = add_album(&store, &catalog, &ctx("tok"), submission(Some(ID), "S", URL))
        .await
        .unwrap();
    assert_eq!(outcome.enrichment, Enrichment::BasicApiError);
    assert_eq!(outcome.album.name, "S");
}

#[tokio::test]
async fn test_add_falls_back_on_malformed_body() {
    let store = CollectionStore::new();
    let catalog = FakeCatalog {
        album_failure: Some(Failure::Decode),
        ..FakeCatalog::default()
    };

    let outcome = add_album(&store, &catalog, &ctx("tok"), submission(Some(ID), "S", URL))
        .await
        .unwrap();
    assert_eq!(outcome.enrichment, Enrichment::BasicErrorOccurred);
    assert_eq!(
        outcome.enrichment.message(),
        "Album added to collection (basic info - error occurred)"
    );
}

#[tokio::test]
async fn test_add_keeps_album_when_tracks_fail() {
    let store = CollectionStore::new();
    let mut catalog = FakeCatalog::default().with_album(catalog_album(Some(ID), "Full", URL), &[]);
    catalog.tracks.clear();

    let outcome = add_album(&store, &catalog, &ctx("tok"), submission(Some(ID), "S", URL))
        .await
        .unwrap();
    assert_eq!(outcome.enrichment, Enrichment::Full);
    assert_eq!(outcome.album.name, "Full");
    assert!(outcome.album.tracks.is_empty());
}

#[tokio::test]
async fn test_add_duplicate_is_conflict() {
    let store = CollectionStore::new();
    let catalog = FakeCatalog::default();

    add_album(&store, &catalog, &ctx("tok"), submission(Some("A1"), "X", "u1"))
        .await
        .unwrap();

    let by_id = add_album(&store, &catalog, &ctx("tok"), submission(Some("A1"), "X", "u2")).await;
    assert_eq!(by_id, Err(StoreError::Duplicate));

    let by_url = add_album(&store, &catalog, &ctx("tok"), submission(None, "X", "u1")).await;
    assert_eq!(by_url, Err(StoreError::Duplicate));

    assert_eq!(store.len("tok").await, 1);
    // only the first add reached the catalog
    assert_eq!(catalog.calls(), vec!["album:A1".to_string()]);
}

#[tokio::test]
async fn test_add_duplicate_by_canonical_url_after_enrichment() {
    let store = CollectionStore::new();
    let catalog = FakeCatalog::default().with_album(catalog_album(Some(ID), "Full", URL), &[]);

    add_album(&store, &catalog, &ctx("tok"), submission(Some(ID), "S", "share-link"))
        .await
        .unwrap();

    let again = add_album(&store, &catalog, &ctx("tok"), submission(None, "S", URL)).await;
    assert_eq!(again, Err(StoreError::Duplicate));
}

#[tokio::test]
async fn test_collections_are_isolated() {
    let store = CollectionStore::new();
    let catalog = FakeCatalog::default().with_album(catalog_album(Some("A1"), "X", "u1"), &[]);

    let outcome = add_album(&store, &catalog, &ctx("tok1"), submission(Some("A1"), "X", "u1"))
        .await
        .unwrap();
    assert_eq!(outcome.total, 1);
    assert!(store.list("tok2").await.is_empty());

    let outcome = add_album(&store, &catalog, &ctx("tok2"), submission(Some("A1"), "X", "u1"))
        .await
        .unwrap();
    assert_eq!(outcome.total, 1);
}

#[tokio::test]
async fn test_add_with_blank_ids_keeps_distinct_albums() {
    let store = CollectionStore::new();
    let catalog = FakeCatalog::default();

    let first = add_album(&store, &catalog, &ctx("tok"), submission(Some(""), "First", "bootleg-1"))
        .await
        .unwrap();
    assert_eq!(first.enrichment, Enrichment::Basic);
    assert_eq!(first.album.external_id, None);

    let second = add_album(&store, &catalog, &ctx("tok"), submission(Some("  "), "Second", "bootleg-2"))
        .await
        .unwrap();
    assert_eq!(second.total, 2);
    assert_eq!(second.album.external_id, None);
    assert!(catalog.calls().is_empty());
}
