//! `FileCatalogSource` 集成测试（读取 tests/fixtures/catalog）

mod common;

use common::{fixture_dir, fixture_source};
use tilegrid_provider::{CatalogSource, FileCatalogSource, ProviderError, RowDescriptor};

#[tokio::test]
async fn listing_preserves_container_order() {
    let source = fixture_source();
    let rows = require_ok!(source.fetch_collection_listing().await);

    let titles: Vec<Option<&str>> = rows.iter().map(RowDescriptor::title).collect();
    assert_eq!(
        titles,
        vec![
            Some("New to Disney+"),
            Some("Trending"),
            Some("Because You Watched The Mandalorian"),
            None,
        ]
    );
    assert!(!rows[0].is_deferred());
    assert!(rows[1..].iter().all(RowDescriptor::is_deferred));
}

#[tokio::test]
async fn inline_items_use_first_available_id_and_title() {
    let rows = require_ok!(fixture_source().fetch_collection_listing().await);
    let RowDescriptor::Inline { items, .. } = &rows[0] else {
        panic!("first row should be inline");
    };

    let ids: Vec<_> = items.iter().map(|i| i.ref_id.as_deref()).collect();
    assert_eq!(
        ids,
        vec![Some("3jLIGMDYINqD"), Some("prog-luca"), Some("coll-pixar")]
    );
    let titles: Vec<_> = items.iter().map(|i| i.title.as_deref()).collect();
    assert_eq!(titles, vec![Some("The Mandalorian"), Some("Luca"), Some("Pixar")]);

    assert_eq!(
        items[2].image_url.as_deref(),
        Some("https://prod-ripcut-delivery.example/pixar.jpeg")
    );
    assert!(items[2].rating.is_none());
}

#[tokio::test]
async fn deferred_row_carries_type_hint() {
    let rows = require_ok!(fixture_source().fetch_collection_listing().await);
    let RowDescriptor::Deferred {
        ref_id, ref_type, ..
    } = &rows[2]
    else {
        panic!("third row should be deferred");
    };
    assert_eq!(ref_id, "25b87551-fd1e-4e5a-a4f0-1f5c4ea5ba1a");
    assert_eq!(ref_type.as_deref(), Some("BecauseYouSet"));
}

#[tokio::test]
async fn row_content_is_keyed_by_collection_type() {
    let source = fixture_source();
    let content = require_ok!(
        source
            .fetch_row_content("bd1bfb9a-bbf7-43a0-ac5e-3e3889d7224d")
            .await
    );
    assert_eq!(content.collection_names(), vec!["CuratedSet"]);
    let items = require_some!(content.collection("CuratedSet"));
    assert_eq!(items.len(), 2);
    assert_eq!(items[1].title.as_deref(), Some("Soul"));
}

#[tokio::test]
async fn hinted_collection_may_be_absent() {
    // BecauseYouSet 行的内容只有 CuratedSet，回退由 core 处理
    let content = require_ok!(
        fixture_source()
            .fetch_row_content("25b87551-fd1e-4e5a-a4f0-1f5c4ea5ba1a")
            .await
    );
    assert!(content.collection("BecauseYouSet").is_none());
    assert!(content.collection("CuratedSet").is_some());
}

#[tokio::test]
async fn missing_set_is_not_found() {
    let err = fixture_source()
        .fetch_row_content("missing-set-0000")
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::NotFound { ref ref_id, .. } if ref_id == "missing-set-0000"));
    assert!(err.is_expected());
}

#[tokio::test]
async fn missing_root_is_io_error() {
    let source = FileCatalogSource::new(fixture_dir().join("does-not-exist"));
    let err = source.fetch_collection_listing().await.unwrap_err();
    assert!(matches!(err, ProviderError::Io { .. }));
    assert_eq!(source.id(), "file");
}
