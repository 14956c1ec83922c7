//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tilegrid_core::{
    CollectionPreference, LazyRowLoader, LoadReport, NavigationSession, VisibilityPublisher,
};
use tilegrid_provider::{CatalogSource, ProviderError, RowContent, RowDescriptor, TileRecord};

/// 固定内容的数据源
pub struct StaticSource {
    pub sets: HashMap<String, RowContent>,
    pub fetches: AtomicUsize,
}

impl StaticSource {
    pub fn new(sets: impl IntoIterator<Item = (&'static str, RowContent)>) -> Self {
        Self {
            sets: sets
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
            fetches: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl CatalogSource for StaticSource {
    fn id(&self) -> &'static str {
        "static"
    }

    async fn fetch_collection_listing(&self) -> tilegrid_provider::Result<Vec<RowDescriptor>> {
        Ok(Vec::new())
    }

    async fn fetch_row_content(&self, ref_id: &str) -> tilegrid_provider::Result<RowContent> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.sets
            .get(ref_id)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound {
                provider: "static".to_string(),
                ref_id: ref_id.to_string(),
            })
    }
}

pub fn titled(title: &str) -> TileRecord {
    TileRecord {
        title: Some(title.to_string()),
        ..TileRecord::default()
    }
}

pub fn curated(titles: &[&str]) -> RowContent {
    RowContent {
        collections: HashMap::from([(
            "CuratedSet".to_string(),
            titles.iter().map(|t| titled(t)).collect(),
        )]),
    }
}

/// 构建会话，返回会话与可见性发布器
pub fn session(
    listing: Vec<RowDescriptor>,
    source: Arc<StaticSource>,
) -> (NavigationSession, VisibilityPublisher) {
    let loader = LazyRowLoader::new(source, CollectionPreference::default());
    let mut publisher = VisibilityPublisher::new();
    let session = NavigationSession::build(listing, loader, |row| Box::new(publisher.register(row)));
    (session, publisher)
}

/// 应用加载器事件直到有行结算
pub async fn next_report(session: &mut NavigationSession) -> Option<LoadReport> {
    let wait = async {
        loop {
            let event = session.next_loader_event().await?;
            if let Some(report) = session.handle_loader_event(event) {
                return Some(report);
            }
        }
    };
    tokio::time::timeout(Duration::from_secs(2), wait)
        .await
        .ok()
        .flatten()
}
