use async_trait::async_trait;

use crate::error::Result;
use crate::types::{RowContent, RowDescriptor};

/// 目录数据源 Trait
///
/// 平台实现:
/// - `HttpCatalogSource`: 远程静态 CDN（`home.json` + `sets/{refId}.json`）
/// - `FileCatalogSource`: 本地目录（离线模式、测试夹具）
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// 数据源标识（用于日志前缀与错误上下文）
    fn id(&self) -> &'static str;

    /// 获取首页行列表
    ///
    /// 每个顶层容器对应一个 `RowDescriptor`，顺序即为行顺序。
    async fn fetch_collection_listing(&self) -> Result<Vec<RowDescriptor>>;

    /// 获取延迟行的内容
    ///
    /// # Arguments
    /// * `ref_id` - 行描述中携带的不透明引用 ID
    ///
    /// # Returns
    /// * 集合类型名 → 瓦片记录列表 的映射
    async fn fetch_row_content(&self, ref_id: &str) -> Result<RowContent>;
}
