//! 目录服务
//!
//! 持有数据源，异步获取首页行列表，并为导航会话创建行加载器。

use std::sync::Arc;

use tokio::sync::mpsc;

use tilegrid_core::{CatalogSource, CollectionPreference, LazyRowLoader};
use tilegrid_provider::{FileCatalogSource, HttpCatalogSource, ProviderError, RowDescriptor};

use super::config_service::{AppConfig, SourceConfig};

/// 首页请求结果
pub type ListingResult = Result<Vec<RowDescriptor>, ProviderError>;

pub struct CatalogService {
    source: Arc<dyn CatalogSource>,
    preference: CollectionPreference,
    label: String,
    tx: mpsc::UnboundedSender<ListingResult>,
    rx: mpsc::UnboundedReceiver<ListingResult>,
}

impl CatalogService {
    /// 按配置创建数据源
    pub fn new(config: &AppConfig) -> Result<Self, ProviderError> {
        let (source, label): (Arc<dyn CatalogSource>, String) = match &config.source {
            SourceConfig::Http { base_url } => {
                let source = HttpCatalogSource::new(base_url.as_str())?;
                (Arc::new(source), base_url.clone())
            }
            SourceConfig::File { dir } => (
                Arc::new(FileCatalogSource::new(dir.clone())),
                dir.display().to_string(),
            ),
        };
        Ok(Self::with_source(
            source,
            config.fallback_collections.clone(),
            label,
        ))
    }

    pub fn with_source(
        source: Arc<dyn CatalogSource>,
        preference: CollectionPreference,
        label: impl Into<String>,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            source,
            preference,
            label: label.into(),
            tx,
            rx,
        }
    }

    /// 标题栏显示的数据源位置
    pub fn label(&self) -> &str {
        &self.label
    }

    /// 后台获取首页，结果经 `try_recv_listing` 取回
    ///
    /// 必须在 tokio 运行时内调用。
    pub fn request_listing(&self) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = source.fetch_collection_listing().await;
            match &result {
                Ok(rows) => tracing::info!("[{}] Listing loaded: {} rows", source.id(), rows.len()),
                Err(e) if e.is_expected() => tracing::warn!("Listing failed: {e}"),
                Err(e) => tracing::error!("Listing failed: {e}"),
            }
            // 接收端已经关闭说明应用正在退出
            let _ = tx.send(result);
        });
    }

    /// 非阻塞地取一条首页结果
    pub fn try_recv_listing(&mut self) -> Option<ListingResult> {
        self.rx.try_recv().ok()
    }

    /// 为新的导航会话创建加载器
    pub fn loader(&self) -> LazyRowLoader {
        LazyRowLoader::new(Arc::clone(&self.source), self.preference.clone())
    }
}
