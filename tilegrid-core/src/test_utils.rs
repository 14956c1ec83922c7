//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tilegrid_provider::{CatalogSource, ProviderError, RowContent, RowDescriptor, TileRecord};
use tokio::sync::{RwLock, Semaphore};

use crate::types::Tile;

// ===== MockCatalogSource =====

/// 脚本化的数据源
///
/// 每个 `ref_id` 预设一个结果；`gated()` 后所有获取会挂起，直到 `release()`。
pub struct MockCatalogSource {
    listing: Vec<RowDescriptor>,
    responses: RwLock<HashMap<String, Result<RowContent, ProviderError>>>,
    calls: RwLock<HashMap<String, usize>>,
    gate: Option<Arc<Semaphore>>,
}

impl MockCatalogSource {
    pub fn new() -> Self {
        Self {
            listing: Vec::new(),
            responses: RwLock::new(HashMap::new()),
            calls: RwLock::new(HashMap::new()),
            gate: None,
        }
    }

    pub fn with_listing(mut self, listing: Vec<RowDescriptor>) -> Self {
        self.listing = listing;
        self
    }

    pub fn with_content(mut self, ref_id: &str, content: RowContent) -> Self {
        self.responses
            .get_mut()
            .insert(ref_id.to_string(), Ok(content));
        self
    }

    pub fn with_error(mut self, ref_id: &str, error: ProviderError) -> Self {
        self.responses
            .get_mut()
            .insert(ref_id.to_string(), Err(error));
        self
    }

    /// 获取在 `release()` 之前一直挂起
    pub fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Semaphore::new(0)));
        self
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            // 许可在获取结束时归还，一个即可放行所有挂起的获取
            gate.add_permits(1);
        }
    }

    pub async fn fetch_count(&self, ref_id: &str) -> usize {
        self.calls.read().await.get(ref_id).copied().unwrap_or(0)
    }
}

#[async_trait]
impl CatalogSource for MockCatalogSource {
    fn id(&self) -> &'static str {
        "mock"
    }

    async fn fetch_collection_listing(&self) -> tilegrid_provider::Result<Vec<RowDescriptor>> {
        Ok(self.listing.clone())
    }

    async fn fetch_row_content(&self, ref_id: &str) -> tilegrid_provider::Result<RowContent> {
        *self
            .calls
            .write()
            .await
            .entry(ref_id.to_string())
            .or_default() += 1;

        if let Some(gate) = &self.gate {
            let _permit = gate.acquire().await;
        }

        self.responses
            .read()
            .await
            .get(ref_id)
            .cloned()
            .unwrap_or_else(|| {
                Err(ProviderError::NotFound {
                    provider: "mock".to_string(),
                    ref_id: ref_id.to_string(),
                })
            })
    }
}

// ===== 工厂方法 =====

pub fn record(title: &str) -> TileRecord {
    TileRecord {
        ref_id: Some(format!("id-{title}")),
        title: Some(title.to_string()),
        ..TileRecord::default()
    }
}

pub fn records(count: usize) -> Vec<TileRecord> {
    (0..count).map(|i| record(&format!("tile-{i}"))).collect()
}

pub fn tiles(count: usize) -> Vec<Tile> {
    Tile::from_records(records(count))
}

pub fn content_with(collections: &[(&str, usize)]) -> RowContent {
    RowContent {
        collections: collections
            .iter()
            .map(|(name, count)| ((*name).to_string(), records(*count)))
            .collect(),
    }
}

pub fn inline_row(title: &str, count: usize) -> RowDescriptor {
    RowDescriptor::Inline {
        title: Some(title.to_string()),
        items: records(count),
    }
}

pub fn deferred_row(title: &str, ref_id: &str) -> RowDescriptor {
    RowDescriptor::Deferred {
        title: Some(title.to_string()),
        ref_id: ref_id.to_string(),
        ref_type: Some("CuratedSet".to_string()),
    }
}
